use smalttp_game::{Capability::*, Game, Item, LocationKind::*};

use super::from_light_world;
use crate::regions::{and, can, item, or};
use crate::world::{LocationDef, RegionLogic, RegionRequirements};

pub struct DarkWorld;

const LOCATIONS: &[LocationDef] = &[
    LocationDef::new("Pyramid", Standing, Item::HeartContainer),
    LocationDef::new("Bumper Cave", Standing, Item::PieceOfHeart),
    LocationDef::new("Chest Game", Npc, Item::PieceOfHeart),
    LocationDef::new("Hammer Pegs", Chest, Item::HeartContainer),
    LocationDef::new("Purple Chest", Npc, Item::Bottle),
    LocationDef::new("Catfish", Npc, Item::TwentyRupees),
    LocationDef::new("Digging Game", Npc, Item::PieceOfHeart),
    LocationDef::new("Brewery", Chest, Item::TwentyRupees),
];

impl DarkWorld {
    fn init_locations(&self, r: &mut RegionRequirements) {
        r.set_location("Bumper Cave", can(CanLiftLight));
        r.set_location("Hammer Pegs", and([can(CanLiftHeavy), item(Item::Hammer)]));
        r.set_location("Purple Chest", can(CanLiftHeavy));
        r.set_location("Catfish", can(CanLiftLight));
    }
}

impl RegionLogic for DarkWorld {
    fn name(&self) -> &'static str {
        "Dark World"
    }

    fn game(&self) -> Game {
        Game::LinkToThePast
    }

    fn locations(&self) -> &'static [LocationDef] {
        LOCATIONS
    }

    fn init_no_glitches(&self, r: &mut RegionRequirements) {
        let entry = and([
            item(Item::MoonPearl),
            or([
                item(Item::DefeatedAgahnim),
                and([item(Item::Hammer), can(CanLiftLight)]),
                can(CanLiftHeavy),
            ]),
        ]);
        let entry = from_light_world(r, entry);
        r.set_entry(entry);
        self.init_locations(r);
    }

    fn init_overworld_glitches(&self, r: &mut RegionRequirements) {
        let death_mountain = r.region("Death Mountain");
        let entry = and([
            item(Item::MoonPearl),
            or([
                item(Item::DefeatedAgahnim),
                and([item(Item::Hammer), can(CanLiftLight)]),
                can(CanLiftHeavy),
                // Boots clip off the top of the mountain into the Dark World.
                and([item(Item::PegasusBoots), death_mountain]),
            ]),
        ]);
        let entry = from_light_world(r, entry);
        r.set_entry(entry);
        self.init_locations(r);
    }
}
