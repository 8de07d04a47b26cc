use smalttp_game::{Capability::*, Game, Item, LocationKind::*, Requirement};

use super::{from_light_world, master_sword};
use crate::regions::{and, can, item, or};
use crate::world::{LocationDef, RegionLogic, RegionRequirements};

pub struct DeathMountain;

const LOCATIONS: &[LocationDef] = &[
    LocationDef::new("Old Man", Npc, Item::MagicMirror),
    LocationDef::new("Spectacle Rock Cave", Standing, Item::PieceOfHeart),
    LocationDef::new("Spectacle Rock", Standing, Item::HeartContainer),
    LocationDef::new("Ether Tablet", Standing, Item::TwentyRupees),
    LocationDef::new("Spiral Cave", Chest, Item::ProgressiveArmor),
    LocationDef::new("Paradox Cave Lower - Far Left", Chest, Item::ThreeBombs),
];

impl DeathMountain {
    fn init(&self, r: &mut RegionRequirements, boots_clips: bool) {
        let master = master_sword(r.weapons);
        let clip = |req: Requirement| {
            if boots_clips {
                or([req, item(Item::PegasusBoots)])
            } else {
                req
            }
        };
        let entry = clip(or([
            item(Item::Flute),
            and([can(CanLiftLight), item(Item::Lamp)]),
        ]));
        let entry = from_light_world(r, entry);
        r.set_entry(entry);
        r.set_location("Old Man", item(Item::Lamp));
        r.set_location("Spectacle Rock", clip(item(Item::MagicMirror)));
        r.set_location(
            "Ether Tablet",
            and([
                item(Item::BookOfMudora),
                master,
                clip(item(Item::MagicMirror)),
            ]),
        );
        // East Death Mountain
        let east = clip(or([
            item(Item::Hookshot),
            and([item(Item::MagicMirror), item(Item::Hammer)]),
        ]));
        r.set_location("Spiral Cave", east.clone());
        r.set_location("Paradox Cave Lower - Far Left", east);
    }
}

impl RegionLogic for DeathMountain {
    fn name(&self) -> &'static str {
        "Death Mountain"
    }

    fn game(&self) -> Game {
        Game::LinkToThePast
    }

    fn locations(&self) -> &'static [LocationDef] {
        LOCATIONS
    }

    fn init_no_glitches(&self, r: &mut RegionRequirements) {
        self.init(r, false);
    }

    fn init_overworld_glitches(&self, r: &mut RegionRequirements) {
        self.init(r, true);
    }
}
