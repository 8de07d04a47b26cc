use smalttp_game::{Capability::*, Game, Item, LocationKind::*};

use super::can_climb_heights;
use crate::regions::{and, can, item, or};
use crate::world::{LocationDef, RegionLogic, RegionRequirements};

pub struct Crateria;

const LOCATIONS: &[LocationDef] = &[
    LocationDef::new("Power Bomb (Crateria surface)", Visible, Item::PowerBomb),
    LocationDef::new("Missile (Crateria moat)", Visible, Item::Missile),
    LocationDef::new("Energy Tank, Gauntlet", Visible, Item::ETank),
    LocationDef::new("Missile (Crateria bottom)", Visible, Item::Missile),
    LocationDef::new("Bombs", Chozo, Item::Bomb),
    LocationDef::new("Energy Tank, Terminator", Visible, Item::ETank),
    LocationDef::new("Missile (Crateria gauntlet right)", Visible, Item::Missile),
    LocationDef::new("Missile (Crateria gauntlet left)", Visible, Item::Missile),
    LocationDef::new("Super Missile (Crateria)", Visible, Item::Super),
    LocationDef::new("Missile (Crateria middle)", Visible, Item::Missile),
];

impl RegionLogic for Crateria {
    fn name(&self) -> &'static str {
        "Crateria"
    }

    fn game(&self) -> Game {
        Game::SuperMetroid
    }

    fn locations(&self) -> &'static [LocationDef] {
        LOCATIONS
    }

    fn init_no_glitches(&self, r: &mut RegionRequirements) {
        r.set_location(
            "Power Bomb (Crateria surface)",
            and([
                can(CanUsePowerBombs),
                or([item(Item::SpeedBooster), can(CanFly)]),
            ]),
        );
        r.set_location(
            "Missile (Crateria moat)",
            and([can(CanOpenRedDoors), can(CanPassBombPassages)]),
        );
        r.set_location("Energy Tank, Gauntlet", can(CanDestroyBombWalls));
        r.set_location("Missile (Crateria bottom)", can(CanDestroyBombWalls));
        r.set_location("Bombs", and([item(Item::Morph), can(CanOpenRedDoors)]));
        r.set_location(
            "Energy Tank, Terminator",
            or([can(CanDestroyBombWalls), item(Item::SpeedBooster)]),
        );
        let gauntlet = and([can(CanDestroyBombWalls), can(CanPassBombPassages)]);
        r.set_location("Missile (Crateria gauntlet right)", gauntlet.clone());
        r.set_location("Missile (Crateria gauntlet left)", gauntlet);
        r.set_location(
            "Super Missile (Crateria)",
            and([
                can(CanUsePowerBombs),
                item(Item::SpeedBooster),
                can_climb_heights(),
            ]),
        );
        r.set_location("Missile (Crateria middle)", can(CanPassBombPassages));
    }
}
