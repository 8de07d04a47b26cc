pub mod dark_world;
pub mod death_mountain;
pub mod dungeons;
pub mod ganons_tower;
pub mod hyrule_castle;
pub mod light_world;

use smalttp_game::{Item, Requirement};

use super::{and, count, item, or};
use crate::settings::{State, Weapons};
use crate::world::{RegionLogic, RegionRequirements};

pub fn regions() -> Vec<Box<dyn RegionLogic>> {
    vec![
        Box::new(light_world::LightWorld),
        Box::new(hyrule_castle::HyruleCastle),
        Box::new(hyrule_castle::CastleTower),
        Box::new(dungeons::EasternPalace),
        Box::new(dungeons::DesertPalace),
        Box::new(death_mountain::DeathMountain),
        Box::new(dungeons::TowerOfHera),
        Box::new(dark_world::DarkWorld),
        Box::new(dungeons::PalaceOfDarkness),
        Box::new(ganons_tower::GanonsTower),
    ]
}

/// Entry requirement for an area reached over the Light World. In standard mode
/// the Light World itself stays closed until the castle escort is done.
pub fn from_light_world(r: &mut RegionRequirements, req: Requirement) -> Requirement {
    match r.state {
        State::Open => req,
        State::Standard => {
            let light_world = r.region("Light World");
            and([light_world, req])
        }
    }
}

// Progressive Sword tiers: Fighter's, Master, Tempered, Golden. Without swords the
// Hammer breaks barriers and reads tablets, and Ganon falls to arrows.
pub fn fighter_sword(weapons: Weapons) -> Requirement {
    match weapons {
        Weapons::Randomized => count(Item::ProgressiveSword, 1),
        Weapons::Swordless => or([item(Item::Hammer), item(Item::Bow)]),
    }
}

pub fn master_sword(weapons: Weapons) -> Requirement {
    match weapons {
        Weapons::Randomized => count(Item::ProgressiveSword, 2),
        Weapons::Swordless => item(Item::Hammer),
    }
}

pub fn tempered_sword(weapons: Weapons) -> Requirement {
    match weapons {
        Weapons::Randomized => count(Item::ProgressiveSword, 3),
        Weapons::Swordless => item(Item::Bow),
    }
}
