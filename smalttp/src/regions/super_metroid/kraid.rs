use smalttp_game::{Capability::*, Game, Item, LocationKind::*};

use crate::regions::{and, can, item};
use crate::world::{LocationDef, RegionLogic, RegionRequirements};

pub struct Kraid;

const LOCATIONS: &[LocationDef] = &[
    LocationDef::new("Energy Tank, Kraid", Hidden, Item::ETank),
    LocationDef::new("Varia Suit", Chozo, Item::Varia),
    LocationDef::new("Missile (Kraid)", Hidden, Item::Missile),
];

impl RegionLogic for Kraid {
    fn name(&self) -> &'static str {
        "Kraid's Lair"
    }

    fn game(&self) -> Game {
        Game::SuperMetroid
    }

    fn locations(&self) -> &'static [LocationDef] {
        LOCATIONS
    }

    fn init_no_glitches(&self, r: &mut RegionRequirements) {
        let red = r.region("Brinstar Red");
        r.set_entry(and([red, can(CanPassBombPassages), item(Item::Super)]));
        r.set_location("Missile (Kraid)", can(CanUsePowerBombs));
    }
}
