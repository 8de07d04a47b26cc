use smalttp_game::{Capability::*, Game, Item, LocationKind::*, Requirement};

use crate::regions::{and, can, item, or, reserves};
use crate::world::{LocationDef, RegionLogic, RegionRequirements};

pub struct WreckedShip;

const LOCATIONS: &[LocationDef] = &[
    LocationDef::new("Missile (Wrecked Ship middle)", Visible, Item::Missile),
    LocationDef::new("Reserve Tank, Wrecked Ship", Chozo, Item::ReserveTank),
    LocationDef::new("Missile (Gravity Suit)", Visible, Item::Missile),
    LocationDef::new("Missile (Wrecked Ship top)", Visible, Item::Missile),
    LocationDef::new("Energy Tank, Wrecked Ship", Visible, Item::ETank),
    LocationDef::new("Super Missile (Wrecked Ship left)", Visible, Item::Super),
    LocationDef::new("Right Super, Wrecked Ship", Visible, Item::Super),
    LocationDef::new("Gravity Suit", Chozo, Item::Gravity),
];

impl RegionLogic for WreckedShip {
    fn name(&self) -> &'static str {
        "Wrecked Ship"
    }

    fn game(&self) -> Game {
        Game::SuperMetroid
    }

    fn locations(&self) -> &'static [LocationDef] {
        LOCATIONS
    }

    fn init_no_glitches(&self, r: &mut RegionRequirements) {
        r.set_entry(and([can(CanUsePowerBombs), item(Item::Super)]));

        let suit_room = or([item(Item::Varia), reserves(2)]);
        r.set_location(
            "Reserve Tank, Wrecked Ship",
            and([item(Item::SpeedBooster), suit_room.clone()]),
        );
        r.set_location("Missile (Gravity Suit)", suit_room.clone());
        r.set_location(
            "Energy Tank, Wrecked Ship",
            Requirement::any_item(&[
                Item::Bomb,
                Item::PowerBomb,
                Item::HiJump,
                Item::SpaceJump,
                Item::SpeedBooster,
                Item::SpringBall,
            ]),
        );
        r.set_location("Gravity Suit", suit_room);
    }
}
