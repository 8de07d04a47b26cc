// The changes suggested by this lint usually make the code more cluttered and less clear:
#![allow(clippy::needless_range_loop)]

pub mod catalog;

use hashbrown::HashMap;
use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};
use std::hash::Hash;
use strum_macros::{Display, EnumString, VariantNames};

pub use catalog::{ItemClass, ItemEffect, ItemInfo, ProgressiveFamily, Resource};

pub type RegionId = usize; // Index into World.regions
pub type LocationId = usize; // Index into World.locations (all regions share one arena)
pub type Capacity = i16; // Data type used to represent item counts and tank totals

#[derive(Default, Clone, Debug)]
pub struct IndexedVec<T: Hash + Eq> {
    pub keys: Vec<T>,
    pub index_by_key: HashMap<T, usize>,
}

impl<T: Hash + Eq> IndexedVec<T> {
    pub fn add<U: ToOwned<Owned = T> + ?Sized>(&mut self, name: &U) -> usize {
        if !self.index_by_key.contains_key(&name.to_owned()) {
            let idx = self.keys.len();
            self.index_by_key.insert(name.to_owned(), self.keys.len());
            self.keys.push(name.to_owned());
            idx
        } else {
            self.index_by_key[&name.to_owned()]
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Game {
    SuperMetroid,
    LinkToThePast,
}

/// How an item location presents its item in-game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationKind {
    // Super Metroid:
    Visible,
    Chozo,
    Hidden,
    // A Link to the Past:
    Chest,
    BigChest,
    Standing,
    Npc,
    Drop,
    // Boss kills and dungeon prizes. These always hold their own event item.
    Event,
}

#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    VariantNames,
    Display,
    TryFromPrimitive,
    Serialize,
    Deserialize,
    PartialOrd,
    Ord,
)]
#[repr(usize)]
// Note: the ordering of these items is significant; Inventory counts are indexed by it.
pub enum Item {
    // Super Metroid
    ETank,
    Missile,
    Super,
    PowerBomb,
    Bomb,
    Charge,
    Ice,
    HiJump,
    SpeedBooster,
    Wave,
    Spazer,
    SpringBall,
    Varia,
    Gravity,
    XRay,
    Plasma,
    Grapple,
    SpaceJump,
    ScrewAttack,
    Morph,
    ReserveTank,
    // A Link to the Past
    ProgressiveSword,
    ProgressiveGlove,
    ProgressiveArmor,
    Bow,
    Hookshot,
    FireRod,
    Hammer,
    Lamp,
    PegasusBoots,
    Flippers,
    MoonPearl,
    MagicMirror,
    Flute,
    BookOfMudora,
    Bottle,
    BugCatchingNet,
    Boomerang,
    HalfMagic,
    HeartContainer,
    PieceOfHeart,
    TwentyRupees,
    ThreeBombs,
    TenArrows,
    // Events
    DefeatedAgahnim,
    PendantOfCourage,
    PendantOfPower,
    PendantOfWisdom,
    Crystal,
    Triforce,
    DefeatedMotherBrain,
}

pub const NUM_ITEMS: usize = Item::DefeatedMotherBrain as usize + 1;

impl Item {
    pub fn all() -> impl Iterator<Item = Item> {
        (0..NUM_ITEMS).filter_map(|i| Item::try_from(i).ok())
    }

    pub fn game(self) -> Game {
        self.info().game
    }

    pub fn is_event(self) -> bool {
        self.info().class == ItemClass::Event
    }
}

/// Composite abilities derived from several items. Evaluated by `Inventory::can`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    CanUsePowerBombs,
    CanUseMorphBombs,
    CanPassBombPassages,
    CanDestroyBombWalls,
    CanOpenRedDoors,
    CanFly,
    CanLiftLight,
    CanLiftHeavy,
    CanLightTorches,
    CanKillMostThings,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Requirement {
    #[default]
    Free,
    Never,
    Item(Item),
    ItemCount(Item, Capacity),
    EnergyReserves(Capacity),
    Capability(Capability),
    // Another region has already been entered during the current traversal.
    Region(RegionId),
    And(Vec<Requirement>),
    Or(Vec<Requirement>),
}

impl Requirement {
    pub fn make_and(reqs: Vec<Requirement>) -> Requirement {
        let mut out_reqs: Vec<Requirement> = vec![];
        for req in reqs {
            if let Requirement::Never = req {
                return Requirement::Never;
            } else if let Requirement::Free = req {
                continue;
            } else if let Requirement::And(and_reqs) = req {
                out_reqs.extend(and_reqs);
            } else {
                out_reqs.push(req);
            }
        }
        if out_reqs.len() <= 1 {
            out_reqs.pop().unwrap_or(Requirement::Free)
        } else {
            Requirement::And(out_reqs)
        }
    }

    pub fn make_or(reqs: Vec<Requirement>) -> Requirement {
        let mut out_reqs: Vec<Requirement> = vec![];
        for req in reqs {
            if let Requirement::Never = req {
                continue;
            } else if let Requirement::Free = req {
                return Requirement::Free;
            } else if let Requirement::Or(or_reqs) = req {
                out_reqs.extend(or_reqs);
            } else {
                out_reqs.push(req);
            }
        }
        if out_reqs.len() <= 1 {
            out_reqs.pop().unwrap_or(Requirement::Never)
        } else {
            Requirement::Or(out_reqs)
        }
    }

    pub fn any_item(items: &[Item]) -> Requirement {
        Requirement::make_or(items.iter().map(|&x| Requirement::Item(x)).collect())
    }

    pub fn all_items(items: &[Item]) -> Requirement {
        Requirement::make_and(items.iter().map(|&x| Requirement::Item(x)).collect())
    }

    /// Collect the items mentioned anywhere in this requirement.
    pub fn referenced_items(&self, out: &mut Vec<Item>) {
        match self {
            Requirement::Item(item) | Requirement::ItemCount(item, _) => out.push(*item),
            Requirement::EnergyReserves(_) => {
                out.push(Item::ETank);
                out.push(Item::ReserveTank);
            }
            Requirement::And(reqs) | Requirement::Or(reqs) => {
                for r in reqs {
                    r.referenced_items(out);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_make_and_simplifies() {
        assert_eq!(Requirement::default(), Requirement::Free);
        assert_eq!(Requirement::make_and(vec![]), Requirement::Free);
        assert_eq!(
            Requirement::make_and(vec![Requirement::Free, Requirement::Item(Item::Morph)]),
            Requirement::Item(Item::Morph)
        );
        assert_eq!(
            Requirement::make_and(vec![Requirement::Item(Item::Morph), Requirement::Never]),
            Requirement::Never
        );
        let nested = Requirement::make_and(vec![
            Requirement::And(vec![
                Requirement::Item(Item::Morph),
                Requirement::Item(Item::Bomb),
            ]),
            Requirement::Item(Item::Super),
        ]);
        assert_eq!(
            nested,
            Requirement::And(vec![
                Requirement::Item(Item::Morph),
                Requirement::Item(Item::Bomb),
                Requirement::Item(Item::Super),
            ])
        );
    }

    #[test]
    fn test_make_or_simplifies() {
        assert_eq!(Requirement::make_or(vec![]), Requirement::Never);
        assert_eq!(
            Requirement::make_or(vec![Requirement::Item(Item::Lamp), Requirement::Free]),
            Requirement::Free
        );
        assert_eq!(
            Requirement::any_item(&[Item::Lamp]),
            Requirement::Item(Item::Lamp)
        );
    }

    #[test]
    fn test_item_indices_round_trip() {
        assert_eq!(Item::all().count(), NUM_ITEMS);
        for (i, item) in Item::all().enumerate() {
            assert_eq!(item as usize, i);
        }
        assert_eq!(Item::from_str("SpeedBooster").unwrap(), Item::SpeedBooster);
        assert_eq!(Item::ReserveTank.game(), Game::SuperMetroid);
        assert_eq!(Item::ProgressiveSword.game(), Game::LinkToThePast);
    }

    #[test]
    fn test_indexed_vec_add_is_idempotent() {
        let mut isv: IndexedVec<String> = IndexedVec::default();
        assert_eq!(isv.add("Crateria"), 0);
        assert_eq!(isv.add("Maridia"), 1);
        assert_eq!(isv.add("Crateria"), 0);
        assert_eq!(isv.len(), 2);
    }
}
