use smalttp_game::{Capability::*, Game, Item, LocationKind::*};

use super::{can_climb_heights, can_navigate_water};
use crate::regions::{and, can, item, or};
use crate::world::{LocationDef, RegionLogic, RegionRequirements};

pub struct Maridia;

const LOCATIONS: &[LocationDef] = &[
    LocationDef::new("Missile (green Maridia shinespark)", Visible, Item::Missile),
    LocationDef::new("Super Missile (green Maridia)", Visible, Item::Super),
    LocationDef::new("Energy Tank, Mama turtle", Visible, Item::ETank),
    LocationDef::new("Missile (green Maridia tatori)", Hidden, Item::Missile),
    LocationDef::new("Super Missile (yellow Maridia)", Visible, Item::Super),
    LocationDef::new(
        "Missile (yellow Maridia super missile)",
        Visible,
        Item::Missile,
    ),
    LocationDef::new(
        "Missile (yellow Maridia false wall)",
        Visible,
        Item::Missile,
    ),
    LocationDef::new("Plasma Beam", Chozo, Item::Plasma),
    LocationDef::new(
        "Missile (left Maridia sand pit room)",
        Visible,
        Item::Missile,
    ),
    LocationDef::new("Reserve Tank, Maridia", Chozo, Item::ReserveTank),
    LocationDef::new(
        "Missile (right Maridia sand pit room)",
        Visible,
        Item::Missile,
    ),
    LocationDef::new(
        "Power Bomb (right Maridia sand pit room)",
        Visible,
        Item::PowerBomb,
    ),
    LocationDef::new("Missile (pink Maridia)", Visible, Item::Missile),
    LocationDef::new("Super Missile (pink Maridia)", Visible, Item::Super),
    LocationDef::new("Spring Ball", Chozo, Item::SpringBall),
    LocationDef::new("Missile (Draygon)", Hidden, Item::Missile),
    LocationDef::new("Energy Tank, Botwoon", Visible, Item::ETank),
    LocationDef::new("Space Jump", Chozo, Item::SpaceJump),
];

impl RegionLogic for Maridia {
    fn name(&self) -> &'static str {
        "Maridia"
    }

    fn game(&self) -> Game {
        Game::SuperMetroid
    }

    fn locations(&self) -> &'static [LocationDef] {
        LOCATIONS
    }

    fn init_no_glitches(&self, r: &mut RegionRequirements) {
        let red = r.region("Brinstar Red");
        r.set_entry(and([
            red,
            item(Item::Super),
            can(CanUsePowerBombs),
            can_navigate_water(r.sm_logic),
        ]));

        r.set_location(
            "Missile (green Maridia shinespark)",
            item(Item::SpeedBooster),
        );
        r.set_location(
            "Energy Tank, Mama turtle",
            or([can(CanFly), item(Item::SpeedBooster), item(Item::Grapple)]),
        );
        r.set_location("Missile (green Maridia tatori)", can(CanOpenRedDoors));
        for name in [
            "Super Missile (yellow Maridia)",
            "Missile (yellow Maridia super missile)",
            "Missile (yellow Maridia false wall)",
        ] {
            r.set_location(name, can(CanPassBombPassages));
        }
        r.set_location(
            "Plasma Beam",
            and([
                or([item(Item::Charge), item(Item::ScrewAttack)]),
                can_climb_heights(),
            ]),
        );
        r.set_location("Missile (pink Maridia)", item(Item::SpeedBooster));
        r.set_location("Super Missile (pink Maridia)", item(Item::SpeedBooster));
        r.set_location(
            "Spring Ball",
            and([
                item(Item::Grapple),
                item(Item::Morph),
                or([item(Item::SpaceJump), item(Item::HiJump)]),
            ]),
        );
        // Botwoon blocks the way to Draygon's side of the region.
        let botwoon = or([item(Item::Ice), item(Item::SpeedBooster)]);
        r.set_location("Energy Tank, Botwoon", botwoon.clone());
        r.set_location("Space Jump", botwoon);
    }
}
