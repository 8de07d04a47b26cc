use smalttp_game::{Capability::*, Game, Item, LocationKind::*};

use crate::regions::{and, can, item, reserves};
use crate::settings::SmLogic;
use crate::world::{LocationDef, RegionLogic, RegionRequirements};

pub struct Tourian;

const LOCATIONS: &[LocationDef] =
    &[LocationDef::new("Mother Brain", Event, Item::DefeatedMotherBrain)];

impl RegionLogic for Tourian {
    fn name(&self) -> &'static str {
        "Tourian"
    }

    fn game(&self) -> Game {
        Game::SuperMetroid
    }

    fn locations(&self) -> &'static [LocationDef] {
        LOCATIONS
    }

    fn init_no_glitches(&self, r: &mut RegionRequirements) {
        // The statue room opens once all four bosses can be reached.
        let kraid = r.region("Kraid's Lair");
        let phantoon = r.region("Wrecked Ship");
        let draygon = r.region("Maridia");
        let ridley = r.region("Norfair Lower");
        r.set_entry(and([
            kraid,
            phantoon,
            draygon,
            ridley,
            can(CanUsePowerBombs),
            item(Item::Super),
            item(Item::Ice),
        ]));
        let energy = match r.sm_logic {
            SmLogic::Casual => reserves(3),
            SmLogic::Tournament => reserves(2),
        };
        r.set_location("Mother Brain", energy);
    }
}
