use serde::{Deserialize, Serialize};

use crate::{Game, Item};

/// Placement tier of an item. Tiers are filled in declaration order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ItemClass {
    Progression,
    Useful,
    Filler,
    Event,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProgressiveFamily {
    Sword,
    Glove,
    Armor,
}

impl ProgressiveFamily {
    pub fn tier_names(self) -> &'static [&'static str] {
        match self {
            ProgressiveFamily::Sword => &[
                "Fighter's Sword",
                "Master Sword",
                "Tempered Sword",
                "Golden Sword",
            ],
            ProgressiveFamily::Glove => &["Power Glove", "Titan's Mitt"],
            ProgressiveFamily::Armor => &["Blue Mail", "Red Mail"],
        }
    }

    /// Name of the upgrade obtained when picking up copy number `tier` (1-based).
    pub fn tier_name(self, tier: usize) -> Option<&'static str> {
        tier.checked_sub(1)
            .and_then(|idx| self.tier_names().get(idx).copied())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resource {
    Missiles,
    SuperMissiles,
    PowerBombs,
    Energy,
    ReserveEnergy,
    HeartQuarters,
    Magic,
    Rupees,
    Bombs,
    Arrows,
}

/// What picking up one copy of an item does.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemEffect {
    Ability,
    Capacity { resource: Resource, amount: u16 },
    Progressive(ProgressiveFamily),
    Event,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemInfo {
    pub display_name: &'static str,
    pub game: Game,
    pub class: ItemClass,
    // Copies beyond this many are placed with the filler tier.
    pub key_copies: usize,
    pub effect: ItemEffect,
}

const ALL: usize = usize::MAX;

const fn ability(display_name: &'static str, game: Game, class: ItemClass) -> ItemInfo {
    ItemInfo {
        display_name,
        game,
        class,
        key_copies: ALL,
        effect: ItemEffect::Ability,
    }
}

const fn capacity(
    display_name: &'static str,
    game: Game,
    class: ItemClass,
    key_copies: usize,
    resource: Resource,
    amount: u16,
) -> ItemInfo {
    ItemInfo {
        display_name,
        game,
        class,
        key_copies,
        effect: ItemEffect::Capacity { resource, amount },
    }
}

const fn event(display_name: &'static str, game: Game) -> ItemInfo {
    ItemInfo {
        display_name,
        game,
        class: ItemClass::Event,
        key_copies: ALL,
        effect: ItemEffect::Event,
    }
}

impl Item {
    pub fn info(self) -> ItemInfo {
        use Game::{LinkToThePast as Z3, SuperMetroid as SM};
        use ItemClass::{Filler, Progression, Useful};
        use Resource::*;
        match self {
            Item::ETank => capacity("Energy Tank", SM, Progression, 4, Energy, 100),
            Item::Missile => capacity("Missile", SM, Progression, 1, Missiles, 5),
            Item::Super => capacity("Super Missile", SM, Progression, 1, SuperMissiles, 5),
            Item::PowerBomb => capacity("Power Bomb", SM, Progression, 1, PowerBombs, 5),
            Item::Bomb => ability("Bomb", SM, Progression),
            Item::Charge => ability("Charge Beam", SM, Progression),
            Item::Ice => ability("Ice Beam", SM, Progression),
            Item::HiJump => ability("Hi-Jump Boots", SM, Progression),
            Item::SpeedBooster => ability("Speed Booster", SM, Progression),
            Item::Wave => ability("Wave Beam", SM, Progression),
            Item::Spazer => ability("Spazer", SM, Useful),
            Item::SpringBall => ability("Spring Ball", SM, Progression),
            Item::Varia => ability("Varia Suit", SM, Progression),
            Item::Gravity => ability("Gravity Suit", SM, Progression),
            Item::XRay => ability("X-Ray Scope", SM, Useful),
            Item::Plasma => ability("Plasma Beam", SM, Useful),
            Item::Grapple => ability("Grappling Beam", SM, Progression),
            Item::SpaceJump => ability("Space Jump", SM, Progression),
            Item::ScrewAttack => ability("Screw Attack", SM, Progression),
            Item::Morph => ability("Morphing Ball", SM, Progression),
            Item::ReserveTank => capacity("Reserve Tank", SM, Progression, 1, ReserveEnergy, 100),
            Item::ProgressiveSword => ItemInfo {
                display_name: "Progressive Sword",
                game: Z3,
                class: Progression,
                key_copies: ALL,
                effect: ItemEffect::Progressive(ProgressiveFamily::Sword),
            },
            Item::ProgressiveGlove => ItemInfo {
                display_name: "Progressive Glove",
                game: Z3,
                class: Progression,
                key_copies: ALL,
                effect: ItemEffect::Progressive(ProgressiveFamily::Glove),
            },
            Item::ProgressiveArmor => ItemInfo {
                display_name: "Progressive Armor",
                game: Z3,
                class: Useful,
                key_copies: ALL,
                effect: ItemEffect::Progressive(ProgressiveFamily::Armor),
            },
            Item::Bow => ability("Bow", Z3, Progression),
            Item::Hookshot => ability("Hookshot", Z3, Progression),
            Item::FireRod => ability("Fire Rod", Z3, Progression),
            Item::Hammer => ability("Hammer", Z3, Progression),
            Item::Lamp => ability("Lamp", Z3, Progression),
            Item::PegasusBoots => ability("Pegasus Boots", Z3, Progression),
            Item::Flippers => ability("Flippers", Z3, Progression),
            Item::MoonPearl => ability("Moon Pearl", Z3, Progression),
            Item::MagicMirror => ability("Magic Mirror", Z3, Progression),
            Item::Flute => ability("Flute", Z3, Progression),
            Item::BookOfMudora => ability("Book of Mudora", Z3, Progression),
            Item::Bottle => ItemInfo {
                display_name: "Bottle",
                game: Z3,
                class: Progression,
                key_copies: 1,
                effect: ItemEffect::Ability,
            },
            Item::BugCatchingNet => ability("Bug Catching Net", Z3, Useful),
            Item::Boomerang => ability("Boomerang", Z3, Useful),
            Item::HalfMagic => capacity("Half Magic", Z3, Useful, ALL, Magic, 1),
            Item::HeartContainer => capacity("Heart Container", Z3, Useful, ALL, HeartQuarters, 4),
            Item::PieceOfHeart => capacity("Piece of Heart", Z3, Useful, ALL, HeartQuarters, 1),
            Item::TwentyRupees => capacity("Twenty Rupees", Z3, Filler, ALL, Rupees, 20),
            Item::ThreeBombs => capacity("Three Bombs", Z3, Filler, ALL, Bombs, 3),
            Item::TenArrows => capacity("Ten Arrows", Z3, Filler, ALL, Arrows, 10),
            Item::DefeatedAgahnim => event("Agahnim Defeated", Z3),
            Item::PendantOfCourage => event("Pendant of Courage", Z3),
            Item::PendantOfPower => event("Pendant of Power", Z3),
            Item::PendantOfWisdom => event("Pendant of Wisdom", Z3),
            Item::Crystal => event("Crystal", Z3),
            Item::Triforce => event("Triforce", Z3),
            Item::DefeatedMotherBrain => event("Mother Brain Defeated", SM),
        }
    }

    /// Tier used when placing copy number `copy_idx` (0-based) of this item.
    pub fn class_of_copy(self, copy_idx: usize) -> ItemClass {
        let info = self.info();
        if copy_idx < info.key_copies {
            info.class
        } else {
            ItemClass::Filler
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surplus_copies_become_filler() {
        assert_eq!(Item::Missile.class_of_copy(0), ItemClass::Progression);
        assert_eq!(Item::Missile.class_of_copy(1), ItemClass::Filler);
        assert_eq!(Item::ETank.class_of_copy(3), ItemClass::Progression);
        assert_eq!(Item::ETank.class_of_copy(4), ItemClass::Filler);
        assert_eq!(
            Item::ProgressiveSword.class_of_copy(2),
            ItemClass::Progression
        );
        assert_eq!(Item::HeartContainer.class_of_copy(5), ItemClass::Useful);
    }

    #[test]
    fn test_progressive_tier_names() {
        assert_eq!(ProgressiveFamily::Sword.tier_name(2), Some("Master Sword"));
        assert_eq!(ProgressiveFamily::Glove.tier_name(0), None);
        assert_eq!(ProgressiveFamily::Glove.tier_name(3), None);
    }

    #[test]
    fn test_events_are_tagged() {
        for item in Item::all() {
            let info = item.info();
            assert_eq!(
                info.class == ItemClass::Event,
                info.effect == ItemEffect::Event,
                "{item:?}"
            );
        }
        assert_eq!(Item::DefeatedMotherBrain.info().game, Game::SuperMetroid);
    }
}
