use smalttp_game::{Capability::*, Game, Item, LocationKind::*};

use super::tempered_sword;
use crate::regions::{and, can, item};
use crate::world::{LocationDef, RegionLogic, RegionRequirements};

pub struct GanonsTower;

const LOCATIONS: &[LocationDef] = &[
    LocationDef::new(
        "Ganon's Tower - Bob's Torch",
        Standing,
        Item::ProgressiveSword,
    ),
    LocationDef::new("Ganon's Tower - Hope Room - Left", Chest, Item::FireRod),
    LocationDef::new("Ganon's Tower - Tile Room", Chest, Item::ProgressiveGlove),
    LocationDef::new(
        "Ganon's Tower - Compass Room - Top Left",
        Chest,
        Item::ProgressiveArmor,
    ),
    LocationDef::new("Ganon's Tower - Moldorm Chest", Chest, Item::Flute),
    LocationDef::new("Ganon", Event, Item::Triforce),
];

impl RegionLogic for GanonsTower {
    fn name(&self) -> &'static str {
        "Ganon's Tower"
    }

    fn game(&self) -> Game {
        Game::LinkToThePast
    }

    fn locations(&self) -> &'static [LocationDef] {
        LOCATIONS
    }

    fn init_no_glitches(&self, r: &mut RegionRequirements) {
        let death_mountain = r.region("Death Mountain");
        let dark_world = r.region("Dark World");
        let tempered = tempered_sword(r.weapons);
        r.set_entry(and([item(Item::Crystal), death_mountain, dark_world]));
        r.set_location("Ganon's Tower - Bob's Torch", item(Item::PegasusBoots));
        r.set_location(
            "Ganon's Tower - Compass Room - Top Left",
            item(Item::FireRod),
        );
        r.set_location(
            "Ganon's Tower - Moldorm Chest",
            and([item(Item::Hookshot), item(Item::Bow)]),
        );
        r.set_location(
            "Ganon",
            and([item(Item::DefeatedAgahnim), tempered, can(CanLightTorches)]),
        );
    }
}
