pub mod brinstar;
pub mod crateria;
pub mod kraid;
pub mod maridia;
pub mod norfair;
pub mod tourian;
pub mod wrecked_ship;

use smalttp_game::{Capability::*, Item, Requirement};

use super::{and, can, item, or, reserves};
use crate::settings::SmLogic;
use crate::world::RegionLogic;

pub fn regions() -> Vec<Box<dyn RegionLogic>> {
    vec![
        Box::new(crateria::Crateria),
        Box::new(brinstar::Green),
        Box::new(brinstar::Pink),
        Box::new(brinstar::Blue),
        Box::new(brinstar::Red),
        Box::new(kraid::Kraid),
        Box::new(norfair::Upper),
        Box::new(norfair::Lower),
        Box::new(wrecked_ship::WreckedShip),
        Box::new(maridia::Maridia),
        Box::new(tourian::Tourian),
    ]
}

/// Surviving superheated rooms: a suit, or enough tanks to tank the damage.
pub fn can_hell_run(sm_logic: SmLogic) -> Requirement {
    match sm_logic {
        SmLogic::Casual => item(Item::Varia),
        SmLogic::Tournament => or([item(Item::Varia), reserves(5)]),
    }
}

/// Moving freely underwater.
pub fn can_navigate_water(sm_logic: SmLogic) -> Requirement {
    match sm_logic {
        SmLogic::Casual => item(Item::Gravity),
        SmLogic::Tournament => or([
            item(Item::Gravity),
            and([
                item(Item::HiJump),
                or([item(Item::Ice), item(Item::SpringBall)]),
            ]),
        ]),
    }
}

pub fn can_climb_heights() -> Requirement {
    or([can(CanFly), item(Item::HiJump), item(Item::SpeedBooster)])
}
