use smalttp_game::{Capability::*, Game, Item, LocationKind::*};

use crate::regions::{and, can, item, or, reserves};
use crate::settings::SmLogic;
use crate::world::{LocationDef, RegionLogic, RegionRequirements};

pub struct Green;
pub struct Pink;
pub struct Blue;
pub struct Red;

const GREEN_LOCATIONS: &[LocationDef] = &[
    LocationDef::new(
        "Power Bomb (green Brinstar bottom)",
        Visible,
        Item::PowerBomb,
    ),
    LocationDef::new(
        "Missile (green Brinstar below super missile)",
        Visible,
        Item::Missile,
    ),
    LocationDef::new("Super Missile (green Brinstar top)", Visible, Item::Super),
    LocationDef::new("Reserve Tank, Brinstar", Chozo, Item::ReserveTank),
    LocationDef::new(
        "Missile (green Brinstar behind missile)",
        Hidden,
        Item::Missile,
    ),
    LocationDef::new(
        "Missile (green Brinstar behind reserve tank)",
        Visible,
        Item::Missile,
    ),
    LocationDef::new("Energy Tank, Etecoons", Visible, Item::ETank),
    LocationDef::new(
        "Super Missile (green Brinstar bottom)",
        Visible,
        Item::Super,
    ),
];

impl RegionLogic for Green {
    fn name(&self) -> &'static str {
        "Brinstar Green"
    }

    fn game(&self) -> Game {
        Game::SuperMetroid
    }

    fn locations(&self) -> &'static [LocationDef] {
        GREEN_LOCATIONS
    }

    fn init_no_glitches(&self, r: &mut RegionRequirements) {
        r.set_entry(or([can(CanDestroyBombWalls), item(Item::SpeedBooster)]));
        r.set_location("Power Bomb (green Brinstar bottom)", can(CanUsePowerBombs));
        r.set_location(
            "Missile (green Brinstar below super missile)",
            and([can(CanPassBombPassages), can(CanOpenRedDoors)]),
        );
        let top = and([
            can(CanOpenRedDoors),
            or([can(CanUseMorphBombs), item(Item::SpeedBooster)]),
        ]);
        r.set_location("Super Missile (green Brinstar top)", top.clone());
        r.set_location("Reserve Tank, Brinstar", top.clone());
        r.set_location(
            "Missile (green Brinstar behind missile)",
            and([top.clone(), can(CanPassBombPassages)]),
        );
        r.set_location(
            "Missile (green Brinstar behind reserve tank)",
            and([top, item(Item::Morph)]),
        );
        r.set_location("Energy Tank, Etecoons", can(CanUsePowerBombs));
        r.set_location(
            "Super Missile (green Brinstar bottom)",
            and([can(CanUsePowerBombs), item(Item::Super)]),
        );
    }
}

const PINK_LOCATIONS: &[LocationDef] = &[
    LocationDef::new("Super Missile (pink Brinstar)", Chozo, Item::Super),
    LocationDef::new("Missile (pink Brinstar top)", Visible, Item::Missile),
    LocationDef::new("Missile (pink Brinstar bottom)", Visible, Item::Missile),
    LocationDef::new("Charge Beam", Chozo, Item::Charge),
    LocationDef::new("Power Bomb (pink Brinstar)", Visible, Item::PowerBomb),
    LocationDef::new("Missile (green Brinstar pipe)", Visible, Item::Missile),
    LocationDef::new("Energy Tank, Waterway", Visible, Item::ETank),
    LocationDef::new("Energy Tank, Brinstar Gate", Visible, Item::ETank),
];

impl RegionLogic for Pink {
    fn name(&self) -> &'static str {
        "Brinstar Pink"
    }

    fn game(&self) -> Game {
        Game::SuperMetroid
    }

    fn locations(&self) -> &'static [LocationDef] {
        PINK_LOCATIONS
    }

    fn init_no_glitches(&self, r: &mut RegionRequirements) {
        let green = r.region("Brinstar Green");
        r.set_entry(or([
            and([
                green,
                can(CanOpenRedDoors),
                or([can(CanDestroyBombWalls), item(Item::SpeedBooster)]),
            ]),
            can(CanUsePowerBombs),
        ]));
        r.set_location(
            "Super Missile (pink Brinstar)",
            and([can(CanPassBombPassages), item(Item::Super)]),
        );
        r.set_location("Charge Beam", can(CanPassBombPassages));
        r.set_location(
            "Power Bomb (pink Brinstar)",
            and([can(CanUsePowerBombs), item(Item::Super)]),
        );
        r.set_location("Missile (green Brinstar pipe)", can(CanPassBombPassages));
        r.set_location(
            "Energy Tank, Waterway",
            and([
                can(CanUsePowerBombs),
                can(CanOpenRedDoors),
                item(Item::SpeedBooster),
                or([reserves(1), item(Item::Gravity)]),
            ]),
        );
        let gate_shot = match r.sm_logic {
            SmLogic::Casual => item(Item::Wave),
            SmLogic::Tournament => or([item(Item::Wave), item(Item::Super)]),
        };
        r.set_location(
            "Energy Tank, Brinstar Gate",
            and([can(CanUsePowerBombs), gate_shot]),
        );
    }
}

const BLUE_LOCATIONS: &[LocationDef] = &[
    LocationDef::new("Morphing Ball", Visible, Item::Morph),
    LocationDef::new("Power Bomb (blue Brinstar)", Visible, Item::PowerBomb),
    LocationDef::new("Missile (blue Brinstar middle)", Visible, Item::Missile),
    LocationDef::new("Energy Tank, Brinstar Ceiling", Hidden, Item::ETank),
    LocationDef::new("Missile (blue Brinstar bottom)", Chozo, Item::Missile),
    LocationDef::new("Missile (blue Brinstar top)", Visible, Item::Missile),
    LocationDef::new(
        "Missile (blue Brinstar behind missile)",
        Hidden,
        Item::Missile,
    ),
];

impl RegionLogic for Blue {
    fn name(&self) -> &'static str {
        "Brinstar Blue"
    }

    fn game(&self) -> Game {
        Game::SuperMetroid
    }

    fn locations(&self) -> &'static [LocationDef] {
        BLUE_LOCATIONS
    }

    fn init_no_glitches(&self, r: &mut RegionRequirements) {
        r.set_location("Power Bomb (blue Brinstar)", can(CanUsePowerBombs));
        r.set_location(
            "Missile (blue Brinstar middle)",
            and([can(CanOpenRedDoors), item(Item::Morph)]),
        );
        let ceiling = match r.sm_logic {
            SmLogic::Casual => and([
                can(CanOpenRedDoors),
                or([
                    can(CanFly),
                    item(Item::HiJump),
                    item(Item::SpeedBooster),
                    item(Item::Ice),
                ]),
            ]),
            SmLogic::Tournament => can(CanOpenRedDoors),
        };
        r.set_location("Energy Tank, Brinstar Ceiling", ceiling);
        r.set_location("Missile (blue Brinstar bottom)", item(Item::Morph));
        let top = and([can(CanOpenRedDoors), can(CanUsePowerBombs)]);
        r.set_location("Missile (blue Brinstar top)", top.clone());
        r.set_location("Missile (blue Brinstar behind missile)", top);
    }
}

const RED_LOCATIONS: &[LocationDef] = &[
    LocationDef::new("X-Ray Scope", Chozo, Item::XRay),
    LocationDef::new(
        "Power Bomb (red Brinstar sidehopper room)",
        Visible,
        Item::PowerBomb,
    ),
    LocationDef::new(
        "Power Bomb (red Brinstar spike room)",
        Chozo,
        Item::PowerBomb,
    ),
    LocationDef::new("Missile (red Brinstar spike room)", Visible, Item::Missile),
    LocationDef::new("Spazer", Chozo, Item::Spazer),
];

impl RegionLogic for Red {
    fn name(&self) -> &'static str {
        "Brinstar Red"
    }

    fn game(&self) -> Game {
        Game::SuperMetroid
    }

    fn locations(&self) -> &'static [LocationDef] {
        RED_LOCATIONS
    }

    fn init_no_glitches(&self, r: &mut RegionRequirements) {
        r.set_entry(and([
            item(Item::Super),
            or([
                can(CanUsePowerBombs),
                and([
                    or([can(CanDestroyBombWalls), item(Item::SpeedBooster)]),
                    item(Item::Morph),
                ]),
            ]),
        ]));
        let xray_climb = match r.sm_logic {
            SmLogic::Casual => or([item(Item::Grapple), item(Item::SpaceJump)]),
            SmLogic::Tournament => or([
                item(Item::Grapple),
                item(Item::SpaceJump),
                and([item(Item::Ice), item(Item::HiJump)]),
            ]),
        };
        r.set_location(
            "X-Ray Scope",
            and([can(CanUsePowerBombs), can(CanOpenRedDoors), xray_climb]),
        );
        r.set_location(
            "Power Bomb (red Brinstar sidehopper room)",
            and([can(CanUsePowerBombs), item(Item::Super)]),
        );
        r.set_location("Power Bomb (red Brinstar spike room)", item(Item::Super));
        r.set_location(
            "Missile (red Brinstar spike room)",
            and([can(CanUsePowerBombs), item(Item::Super)]),
        );
        r.set_location("Spazer", and([can(CanPassBombPassages), item(Item::Super)]));
    }
}
