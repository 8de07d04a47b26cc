use crate::Inventory;
use smalttp_game::{Capability, Capacity, Item, ProgressiveFamily};

pub fn progressive_tier(inventory: &Inventory, family: ProgressiveFamily) -> Capacity {
    let item = match family {
        ProgressiveFamily::Sword => Item::ProgressiveSword,
        ProgressiveFamily::Glove => Item::ProgressiveGlove,
        ProgressiveFamily::Armor => Item::ProgressiveArmor,
    };
    let max_tier = family.tier_names().len() as Capacity;
    Capacity::min(inventory.count(item), max_tier)
}

pub fn can_use_power_bombs(inventory: &Inventory) -> bool {
    inventory.has(Item::Morph) && inventory.has(Item::PowerBomb)
}

pub fn can_use_morph_bombs(inventory: &Inventory) -> bool {
    inventory.has(Item::Morph) && inventory.has(Item::Bomb)
}

pub fn has_capability(inventory: &Inventory, capability: Capability) -> bool {
    match capability {
        Capability::CanUsePowerBombs => can_use_power_bombs(inventory),
        Capability::CanUseMorphBombs => can_use_morph_bombs(inventory),
        Capability::CanPassBombPassages => {
            can_use_morph_bombs(inventory) || can_use_power_bombs(inventory)
        }
        Capability::CanDestroyBombWalls => {
            can_use_morph_bombs(inventory)
                || can_use_power_bombs(inventory)
                || inventory.has(Item::ScrewAttack)
        }
        Capability::CanOpenRedDoors => inventory.has(Item::Missile) || inventory.has(Item::Super),
        Capability::CanFly => inventory.has(Item::SpaceJump) || can_use_morph_bombs(inventory),
        Capability::CanLiftLight => progressive_tier(inventory, ProgressiveFamily::Glove) >= 1,
        Capability::CanLiftHeavy => progressive_tier(inventory, ProgressiveFamily::Glove) >= 2,
        Capability::CanLightTorches => inventory.has(Item::FireRod) || inventory.has(Item::Lamp),
        Capability::CanKillMostThings => {
            progressive_tier(inventory, ProgressiveFamily::Sword) >= 1
                || inventory.has(Item::Hammer)
                || inventory.has(Item::Bow)
                || inventory.has(Item::FireRod)
        }
    }
}
