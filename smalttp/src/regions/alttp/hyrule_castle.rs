use smalttp_game::{Capability::*, Game, Item, LocationKind::*};

use super::{fighter_sword, from_light_world, master_sword};
use crate::regions::{and, can, item, or};
use crate::settings::State;
use crate::world::{LocationDef, RegionLogic, RegionRequirements};

pub struct HyruleCastle;
pub struct CastleTower;

const CASTLE_LOCATIONS: &[LocationDef] = &[
    LocationDef::new("Link's Uncle", Npc, Item::ProgressiveSword),
    LocationDef::new("Secret Passage", Chest, Item::TwentyRupees),
    LocationDef::new("Sanctuary", Chest, Item::HeartContainer),
    LocationDef::new("Hyrule Castle - Boomerang Chest", Chest, Item::Boomerang),
    LocationDef::new("Hyrule Castle - Map Chest", Chest, Item::TwentyRupees),
    LocationDef::new("Hyrule Castle - Zelda's Cell", Chest, Item::ThreeBombs),
    LocationDef::new("Sewers - Dark Cross", Chest, Item::TenArrows),
    LocationDef::new("Sewers - Secret Room - Left", Chest, Item::PieceOfHeart),
];

impl RegionLogic for HyruleCastle {
    fn name(&self) -> &'static str {
        "Hyrule Castle"
    }

    fn game(&self) -> Game {
        Game::LinkToThePast
    }

    fn locations(&self) -> &'static [LocationDef] {
        CASTLE_LOCATIONS
    }

    fn init_no_glitches(&self, r: &mut RegionRequirements) {
        if r.state == State::Standard {
            r.set_location("Hyrule Castle - Zelda's Cell", can(CanKillMostThings));
        }
        r.set_location("Sewers - Dark Cross", item(Item::Lamp));
        r.set_location(
            "Sewers - Secret Room - Left",
            or([item(Item::Lamp), can(CanLiftLight)]),
        );
    }
}

const TOWER_LOCATIONS: &[LocationDef] = &[
    LocationDef::new("Castle Tower - Room 03", Chest, Item::ThreeBombs),
    LocationDef::new("Castle Tower - Dark Maze", Chest, Item::TwentyRupees),
    LocationDef::new("Agahnim", Event, Item::DefeatedAgahnim),
];

impl RegionLogic for CastleTower {
    fn name(&self) -> &'static str {
        "Castle Tower"
    }

    fn game(&self) -> Game {
        Game::LinkToThePast
    }

    fn locations(&self) -> &'static [LocationDef] {
        TOWER_LOCATIONS
    }

    fn init_no_glitches(&self, r: &mut RegionRequirements) {
        // The barrier at the tower door yields to the Master Sword.
        let barrier = master_sword(r.weapons);
        let entry = from_light_world(r, barrier);
        r.set_entry(entry);
        let agahnim = and([item(Item::Lamp), fighter_sword(r.weapons)]);
        r.set_location("Castle Tower - Room 03", can(CanKillMostThings));
        r.set_location(
            "Castle Tower - Dark Maze",
            and([item(Item::Lamp), can(CanKillMostThings)]),
        );
        r.set_location("Agahnim", agahnim);
    }
}
