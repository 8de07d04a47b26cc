use smalttp_game::{Capability::*, Game, Item, LocationKind::*};

use crate::regions::{and, can, item, or};
use crate::settings::State;
use crate::world::{LocationDef, RegionLogic, RegionRequirements};

pub struct LightWorld;

const LOCATIONS: &[LocationDef] = &[
    LocationDef::new("Link's House", Chest, Item::Lamp),
    LocationDef::new("Sahasrahla's Hut - Left", Chest, Item::TwentyRupees),
    LocationDef::new("Sahasrahla", Npc, Item::PegasusBoots),
    LocationDef::new("Kakariko Well - Top", Chest, Item::PieceOfHeart),
    LocationDef::new("Blind's Hideout - Top", Chest, Item::TwentyRupees),
    LocationDef::new("Chicken House", Chest, Item::TenArrows),
    LocationDef::new("Sick Kid", Npc, Item::BugCatchingNet),
    LocationDef::new("King Zora", Npc, Item::Flippers),
    LocationDef::new("Lost Woods Hideout", Chest, Item::PieceOfHeart),
    LocationDef::new("Magic Bat", Npc, Item::HalfMagic),
    LocationDef::new("Library", Standing, Item::BookOfMudora),
    LocationDef::new("Bottle Merchant", Npc, Item::Bottle),
    LocationDef::new("Master Sword Pedestal", Standing, Item::ProgressiveSword),
    LocationDef::new("Aginah's Cave", Chest, Item::PieceOfHeart),
];

impl RegionLogic for LightWorld {
    fn name(&self) -> &'static str {
        "Light World"
    }

    fn game(&self) -> Game {
        Game::LinkToThePast
    }

    fn locations(&self) -> &'static [LocationDef] {
        LOCATIONS
    }

    fn init_no_glitches(&self, r: &mut RegionRequirements) {
        if r.state == State::Standard {
            // Zelda has to be escorted out of the castle first.
            let castle = r.region("Hyrule Castle");
            r.set_entry(and([castle, can(CanKillMostThings)]));
        }
        r.set_location("Sahasrahla", item(Item::PendantOfCourage));
        r.set_location("Sick Kid", item(Item::Bottle));
        r.set_location("King Zora", can(CanLiftLight));
        r.set_location(
            "Magic Bat",
            or([
                item(Item::Hammer),
                and([
                    item(Item::MoonPearl),
                    item(Item::MagicMirror),
                    can(CanLiftHeavy),
                ]),
            ]),
        );
        r.set_location("Library", item(Item::PegasusBoots));
        r.set_location(
            "Master Sword Pedestal",
            and([
                item(Item::PendantOfCourage),
                item(Item::PendantOfPower),
                item(Item::PendantOfWisdom),
            ]),
        );
    }

    fn init_overworld_glitches(&self, r: &mut RegionRequirements) {
        self.init_no_glitches(r);
        // Boots clip past the rocks in front of the waterfall.
        r.set_location(
            "King Zora",
            or([can(CanLiftLight), item(Item::PegasusBoots)]),
        );
    }
}
