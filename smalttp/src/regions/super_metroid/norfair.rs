use smalttp_game::{Capability::*, Game, Item, LocationKind::*};

use super::{can_climb_heights, can_hell_run};
use crate::regions::{and, can, item, or, reserves};
use crate::settings::SmLogic;
use crate::world::{LocationDef, RegionLogic, RegionRequirements};

pub struct Upper;
pub struct Lower;

const UPPER_LOCATIONS: &[LocationDef] = &[
    LocationDef::new("Ice Beam", Chozo, Item::Ice),
    LocationDef::new("Missile (below Ice Beam)", Hidden, Item::Missile),
    LocationDef::new("Hi-Jump Boots", Chozo, Item::HiJump),
    LocationDef::new("Missile (Hi-Jump Boots)", Visible, Item::Missile),
    LocationDef::new("Energy Tank (Hi-Jump Boots)", Visible, Item::ETank),
    LocationDef::new("Missile (lava room)", Hidden, Item::Missile),
    LocationDef::new("Energy Tank (Crocomire)", Visible, Item::ETank),
    LocationDef::new("Missile (above Crocomire)", Visible, Item::Missile),
    LocationDef::new("Power Bomb (Crocomire)", Visible, Item::PowerBomb),
    LocationDef::new("Grappling Beam", Chozo, Item::Grapple),
    LocationDef::new("Speed Booster", Chozo, Item::SpeedBooster),
    LocationDef::new("Wave Beam", Chozo, Item::Wave),
    LocationDef::new("Missile (bubble Norfair)", Visible, Item::Missile),
];

impl RegionLogic for Upper {
    fn name(&self) -> &'static str {
        "Norfair Upper"
    }

    fn game(&self) -> Game {
        Game::SuperMetroid
    }

    fn locations(&self) -> &'static [LocationDef] {
        UPPER_LOCATIONS
    }

    fn init_no_glitches(&self, r: &mut RegionRequirements) {
        let red = r.region("Brinstar Red");
        r.set_entry(and([red, item(Item::Morph)]));

        let hell_run = can_hell_run(r.sm_logic);
        let ice = match r.sm_logic {
            SmLogic::Casual => and([
                item(Item::Super),
                can(CanPassBombPassages),
                item(Item::Varia),
                item(Item::SpeedBooster),
            ]),
            SmLogic::Tournament => and([
                item(Item::Super),
                item(Item::Morph),
                or([item(Item::Varia), reserves(3)]),
            ]),
        };
        r.set_location("Ice Beam", ice.clone());
        r.set_location(
            "Missile (below Ice Beam)",
            and([ice, can(CanUsePowerBombs)]),
        );
        r.set_location(
            "Hi-Jump Boots",
            and([can(CanOpenRedDoors), can(CanPassBombPassages)]),
        );
        r.set_location(
            "Missile (Hi-Jump Boots)",
            and([can(CanOpenRedDoors), item(Item::Morph)]),
        );
        r.set_location("Energy Tank (Hi-Jump Boots)", can(CanOpenRedDoors));
        r.set_location(
            "Missile (lava room)",
            and([hell_run.clone(), can(CanOpenRedDoors), can_climb_heights()]),
        );
        r.set_location(
            "Energy Tank (Crocomire)",
            and([
                hell_run.clone(),
                item(Item::Super),
                or([reserves(1), item(Item::SpaceJump), item(Item::Grapple)]),
            ]),
        );
        r.set_location(
            "Missile (above Crocomire)",
            and([
                hell_run.clone(),
                or([
                    can(CanFly),
                    item(Item::Grapple),
                    and([item(Item::HiJump), item(Item::SpeedBooster)]),
                ]),
            ]),
        );
        r.set_location(
            "Power Bomb (Crocomire)",
            and([
                hell_run.clone(),
                item(Item::Super),
                or([item(Item::SpaceJump), item(Item::Grapple)]),
            ]),
        );
        r.set_location(
            "Grappling Beam",
            and([
                hell_run.clone(),
                item(Item::Super),
                or([
                    item(Item::SpaceJump),
                    and([
                        item(Item::Morph),
                        or([item(Item::SpeedBooster), can(CanUseMorphBombs)]),
                    ]),
                ]),
            ]),
        );
        r.set_location(
            "Speed Booster",
            and([hell_run.clone(), item(Item::Super), can(CanOpenRedDoors)]),
        );
        r.set_location(
            "Wave Beam",
            and([hell_run.clone(), can(CanOpenRedDoors), item(Item::Morph)]),
        );
        r.set_location(
            "Missile (bubble Norfair)",
            and([hell_run, can(CanOpenRedDoors)]),
        );
    }
}

const LOWER_LOCATIONS: &[LocationDef] = &[
    LocationDef::new("Missile (Gold Torizo)", Visible, Item::Missile),
    LocationDef::new("Super Missile (Gold Torizo)", Hidden, Item::Super),
    LocationDef::new("Screw Attack", Chozo, Item::ScrewAttack),
    LocationDef::new("Missile (Mickey Mouse room)", Visible, Item::Missile),
    LocationDef::new("Energy Tank, Ridley", Hidden, Item::ETank),
    LocationDef::new(
        "Power Bomb (Power Bombs of shame)",
        Visible,
        Item::PowerBomb,
    ),
    LocationDef::new("Energy Tank, Firefleas", Visible, Item::ETank),
];

impl RegionLogic for Lower {
    fn name(&self) -> &'static str {
        "Norfair Lower"
    }

    fn game(&self) -> Game {
        Game::SuperMetroid
    }

    fn locations(&self) -> &'static [LocationDef] {
        LOWER_LOCATIONS
    }

    fn init_no_glitches(&self, r: &mut RegionRequirements) {
        let upper = r.region("Norfair Upper");
        let lava_crossing = match r.sm_logic {
            SmLogic::Casual => and([
                item(Item::Gravity),
                or([item(Item::HiJump), item(Item::SpaceJump)]),
            ]),
            SmLogic::Tournament => or([
                item(Item::Gravity),
                and([item(Item::HiJump), item(Item::Ice)]),
            ]),
        };
        r.set_entry(and([
            upper,
            item(Item::Varia),
            can(CanUsePowerBombs),
            item(Item::Super),
            lava_crossing,
        ]));

        let climb = or([can(CanFly), item(Item::HiJump)]);
        r.set_location(
            "Missile (Gold Torizo)",
            and([
                can(CanUsePowerBombs),
                item(Item::SpaceJump),
                item(Item::Super),
            ]),
        );
        r.set_location("Super Missile (Gold Torizo)", can(CanDestroyBombWalls));
        r.set_location("Screw Attack", can(CanDestroyBombWalls));
        r.set_location("Missile (Mickey Mouse room)", climb.clone());
        let ridley_energy = match r.sm_logic {
            SmLogic::Casual => reserves(3),
            SmLogic::Tournament => reserves(2),
        };
        r.set_location(
            "Energy Tank, Ridley",
            and([climb.clone(), item(Item::Charge), ridley_energy]),
        );
        r.set_location(
            "Power Bomb (Power Bombs of shame)",
            and([can(CanUsePowerBombs), climb.clone()]),
        );
        r.set_location("Energy Tank, Firefleas", climb);
    }
}
