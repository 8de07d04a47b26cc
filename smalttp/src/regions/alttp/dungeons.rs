use smalttp_game::{Capability::*, Game, Item, LocationKind::*, Requirement};

use super::from_light_world;
use crate::regions::{and, can, item, or};
use crate::world::{LocationDef, RegionLogic, RegionRequirements};

pub struct EasternPalace;
pub struct DesertPalace;
pub struct TowerOfHera;
pub struct PalaceOfDarkness;

const EASTERN_LOCATIONS: &[LocationDef] = &[
    LocationDef::new("Eastern Palace - Cannonball Chest", Chest, Item::ThreeBombs),
    LocationDef::new("Eastern Palace - Map Chest", Chest, Item::TwentyRupees),
    LocationDef::new("Eastern Palace - Compass Chest", Chest, Item::PieceOfHeart),
    LocationDef::new("Eastern Palace - Big Chest", BigChest, Item::Bow),
    LocationDef::new("Eastern Palace - Big Key Chest", Chest, Item::PieceOfHeart),
    LocationDef::new("Eastern Palace - Prize", Event, Item::PendantOfCourage),
];

impl RegionLogic for EasternPalace {
    fn name(&self) -> &'static str {
        "Eastern Palace"
    }

    fn game(&self) -> Game {
        Game::LinkToThePast
    }

    fn locations(&self) -> &'static [LocationDef] {
        EASTERN_LOCATIONS
    }

    fn init_no_glitches(&self, r: &mut RegionRequirements) {
        let entry = from_light_world(r, Requirement::Free);
        r.set_entry(entry);
        r.set_location("Eastern Palace - Big Key Chest", can(CanLightTorches));
        r.set_location(
            "Eastern Palace - Prize",
            and([item(Item::Bow), can(CanLightTorches)]),
        );
    }
}

const DESERT_LOCATIONS: &[LocationDef] = &[
    LocationDef::new(
        "Desert Palace - Big Chest",
        BigChest,
        Item::ProgressiveGlove,
    ),
    LocationDef::new("Desert Palace - Map Chest", Chest, Item::TenArrows),
    LocationDef::new("Desert Palace - Torch", Standing, Item::HeartContainer),
    LocationDef::new("Desert Palace - Compass Chest", Chest, Item::PieceOfHeart),
    LocationDef::new("Desert Palace - Prize", Event, Item::PendantOfPower),
];

impl RegionLogic for DesertPalace {
    fn name(&self) -> &'static str {
        "Desert Palace"
    }

    fn game(&self) -> Game {
        Game::LinkToThePast
    }

    fn locations(&self) -> &'static [LocationDef] {
        DESERT_LOCATIONS
    }

    fn init_no_glitches(&self, r: &mut RegionRequirements) {
        let entry = or([
            item(Item::BookOfMudora),
            and([
                item(Item::Flute),
                can(CanLiftHeavy),
                item(Item::MagicMirror),
            ]),
        ]);
        let entry = from_light_world(r, entry);
        r.set_entry(entry);
        r.set_location("Desert Palace - Torch", item(Item::PegasusBoots));
        r.set_location(
            "Desert Palace - Prize",
            and([
                can(CanLiftLight),
                can(CanLightTorches),
                can(CanKillMostThings),
            ]),
        );
    }

    fn init_overworld_glitches(&self, r: &mut RegionRequirements) {
        self.init_no_glitches(r);
        let entry = or([
            item(Item::BookOfMudora),
            and([
                item(Item::Flute),
                can(CanLiftHeavy),
                item(Item::MagicMirror),
            ]),
            and([item(Item::PegasusBoots), item(Item::MagicMirror)]),
        ]);
        let entry = from_light_world(r, entry);
        r.set_entry(entry);
    }
}

const HERA_LOCATIONS: &[LocationDef] = &[
    LocationDef::new(
        "Tower of Hera - Basement Cage",
        Standing,
        Item::PieceOfHeart,
    ),
    LocationDef::new("Tower of Hera - Map Chest", Chest, Item::TenArrows),
    LocationDef::new("Tower of Hera - Big Chest", BigChest, Item::MoonPearl),
    LocationDef::new("Tower of Hera - Prize", Event, Item::PendantOfWisdom),
];

impl RegionLogic for TowerOfHera {
    fn name(&self) -> &'static str {
        "Tower of Hera"
    }

    fn game(&self) -> Game {
        Game::LinkToThePast
    }

    fn locations(&self) -> &'static [LocationDef] {
        HERA_LOCATIONS
    }

    fn init_no_glitches(&self, r: &mut RegionRequirements) {
        let death_mountain = r.region("Death Mountain");
        r.set_entry(and([
            death_mountain,
            or([
                item(Item::MagicMirror),
                and([item(Item::Hookshot), item(Item::Hammer)]),
            ]),
        ]));
        r.set_location("Tower of Hera - Prize", can(CanKillMostThings));
    }

    fn init_overworld_glitches(&self, r: &mut RegionRequirements) {
        self.init_no_glitches(r);
        let death_mountain = r.region("Death Mountain");
        r.set_entry(and([
            death_mountain,
            or([
                item(Item::MagicMirror),
                and([item(Item::Hookshot), item(Item::Hammer)]),
                item(Item::PegasusBoots),
            ]),
        ]));
    }
}

const DARKNESS_LOCATIONS: &[LocationDef] = &[
    LocationDef::new("Palace of Darkness - Shooter Room", Chest, Item::ThreeBombs),
    LocationDef::new("Palace of Darkness - Big Key Chest", Chest, Item::TenArrows),
    LocationDef::new(
        "Palace of Darkness - Dark Basement - Left",
        Chest,
        Item::Hookshot,
    ),
    LocationDef::new(
        "Palace of Darkness - Harmless Hellway",
        Chest,
        Item::HeartContainer,
    ),
    LocationDef::new("Palace of Darkness - Big Chest", BigChest, Item::Hammer),
    LocationDef::new("Palace of Darkness - Prize", Event, Item::Crystal),
];

impl RegionLogic for PalaceOfDarkness {
    fn name(&self) -> &'static str {
        "Palace of Darkness"
    }

    fn game(&self) -> Game {
        Game::LinkToThePast
    }

    fn locations(&self) -> &'static [LocationDef] {
        DARKNESS_LOCATIONS
    }

    fn init_no_glitches(&self, r: &mut RegionRequirements) {
        let dark_world = r.region("Dark World");
        r.set_entry(dark_world);
        r.set_location(
            "Palace of Darkness - Dark Basement - Left",
            item(Item::Lamp),
        );
        r.set_location("Palace of Darkness - Big Chest", item(Item::Lamp));
        r.set_location(
            "Palace of Darkness - Prize",
            and([item(Item::Hammer), item(Item::Bow), item(Item::Lamp)]),
        );
    }
}
