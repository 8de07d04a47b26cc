use smalttp_game::Item;

use crate::settings::{Difficulty, RandomizerSettings, Variation, Weapons};

// Items with a fixed count on every difficulty.
const SM_UNIQUE: [Item; 16] = [
    Item::Bomb,
    Item::Charge,
    Item::Ice,
    Item::HiJump,
    Item::SpeedBooster,
    Item::Wave,
    Item::Spazer,
    Item::SpringBall,
    Item::Varia,
    Item::Gravity,
    Item::XRay,
    Item::Plasma,
    Item::Grapple,
    Item::SpaceJump,
    Item::ScrewAttack,
    Item::Morph,
];

const Z3_FIXED: [(Item, usize); 18] = [
    (Item::ProgressiveSword, 3),
    (Item::ProgressiveGlove, 2),
    (Item::ProgressiveArmor, 2),
    (Item::Bow, 1),
    (Item::Hookshot, 1),
    (Item::FireRod, 1),
    (Item::Hammer, 1),
    (Item::Lamp, 1),
    (Item::PegasusBoots, 1),
    (Item::Flippers, 1),
    (Item::MoonPearl, 1),
    (Item::MagicMirror, 1),
    (Item::Flute, 1),
    (Item::BookOfMudora, 1),
    (Item::Bottle, 2),
    (Item::BugCatchingNet, 1),
    (Item::Boomerang, 1),
    (Item::HalfMagic, 1),
];

/// Counts of the items whose multiplicity depends on difficulty. Each row
/// trades tanks and hearts against ammo and rupees, keeping the totals fixed.
fn difficulty_counts(difficulty: Difficulty) -> [(Item, usize); 10] {
    match difficulty {
        Difficulty::Easy => [
            (Item::ETank, 16),
            (Item::ReserveTank, 5),
            (Item::Missile, 31),
            (Item::Super, 10),
            (Item::PowerBomb, 9),
            (Item::HeartContainer, 10),
            (Item::PieceOfHeart, 12),
            (Item::TwentyRupees, 7),
            (Item::ThreeBombs, 4),
            (Item::TenArrows, 4),
        ],
        Difficulty::Normal => [
            (Item::ETank, 14),
            (Item::ReserveTank, 3),
            (Item::Missile, 35),
            (Item::Super, 10),
            (Item::PowerBomb, 9),
            (Item::HeartContainer, 6),
            (Item::PieceOfHeart, 12),
            (Item::TwentyRupees, 9),
            (Item::ThreeBombs, 5),
            (Item::TenArrows, 5),
        ],
        Difficulty::Hard => [
            (Item::ETank, 8),
            (Item::ReserveTank, 1),
            (Item::Missile, 43),
            (Item::Super, 10),
            (Item::PowerBomb, 9),
            (Item::HeartContainer, 3),
            (Item::PieceOfHeart, 8),
            (Item::TwentyRupees, 12),
            (Item::ThreeBombs, 8),
            (Item::TenArrows, 6),
        ],
    }
}

/// The items to distribute over every non-event location, for the configured
/// difficulty, variation and weapons mode. Event items are never part of the pool.
pub fn item_pool(settings: &RandomizerSettings) -> Vec<Item> {
    let mut pool: Vec<Item> = SM_UNIQUE.to_vec();
    for (item, count) in Z3_FIXED {
        let item = match (settings.weapons, item) {
            (Weapons::Swordless, Item::ProgressiveSword) => Item::TwentyRupees,
            _ => item,
        };
        pool.extend(std::iter::repeat_n(item, count));
    }
    for (item, count) in difficulty_counts(settings.difficulty) {
        // One-hit-KO seeds have no use for extra health.
        let item = match (settings.variation, item) {
            (Variation::Ohko, Item::HeartContainer | Item::PieceOfHeart) => Item::TwentyRupees,
            _ => item,
        };
        pool.extend(std::iter::repeat_n(item, count));
    }
    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::World;
    use smalttp_game::NUM_ITEMS;

    fn counts(items: &[Item]) -> Vec<usize> {
        let mut out = vec![0; NUM_ITEMS];
        for &item in items {
            out[item as usize] += 1;
        }
        out
    }

    #[test]
    fn test_pool_fills_every_slot() {
        let world = World::new(&RandomizerSettings::default()).unwrap();
        let num_slots = world.item_location_ids().len();
        for difficulty in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
            for variation in [Variation::None, Variation::Ohko] {
                for weapons in [Weapons::Randomized, Weapons::Swordless] {
                    let settings = RandomizerSettings {
                        difficulty,
                        variation,
                        weapons,
                        ..RandomizerSettings::default()
                    };
                    assert_eq!(
                        item_pool(&settings).len(),
                        num_slots,
                        "{difficulty} / {variation} / {weapons}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_normal_pool_matches_vanilla_layout() {
        let world = World::new(&RandomizerSettings::default()).unwrap();
        let vanilla: Vec<Item> = world
            .item_location_ids()
            .into_iter()
            .map(|i| world.locations[i].vanilla_item)
            .collect();
        assert_eq!(
            counts(&item_pool(&RandomizerSettings::default())),
            counts(&vanilla)
        );
    }

    #[test]
    fn test_ohko_has_no_hearts() {
        let settings = RandomizerSettings {
            variation: Variation::Ohko,
            ..RandomizerSettings::default()
        };
        let pool = item_pool(&settings);
        assert!(!pool.contains(&Item::HeartContainer));
        assert!(!pool.contains(&Item::PieceOfHeart));
        assert_eq!(
            pool.iter().filter(|&&x| x == Item::TwentyRupees).count(),
            9 + 6 + 12
        );
        assert!(pool.iter().all(|x| !x.is_event()));
    }

    #[test]
    fn test_swordless_pool_has_no_swords() {
        let settings = RandomizerSettings {
            weapons: Weapons::Swordless,
            ..RandomizerSettings::default()
        };
        let pool = item_pool(&settings);
        assert!(!pool.contains(&Item::ProgressiveSword));
        let rupees = |pool: &[Item]| pool.iter().filter(|&&x| x == Item::TwentyRupees).count();
        assert_eq!(
            rupees(&pool),
            rupees(&item_pool(&RandomizerSettings::default())) + 3
        );
    }
}
