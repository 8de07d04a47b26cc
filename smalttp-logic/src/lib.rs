pub mod helpers;

use serde::{Deserialize, Serialize};
use smalttp_game::{Capability, Capacity, Item, ProgressiveFamily, NUM_ITEMS};

/// Multiset of owned items. Queries never modify it; hypothetical additions go
/// through `with_item`/`with_items`, which return a new inventory.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Inventory {
    counts: Vec<Capacity>,
}

impl Default for Inventory {
    fn default() -> Self {
        Inventory::new()
    }
}

impl Inventory {
    pub fn new() -> Self {
        Inventory {
            counts: vec![0; NUM_ITEMS],
        }
    }

    pub fn from_items<I: IntoIterator<Item = Item>>(items: I) -> Self {
        let mut inventory = Inventory::new();
        for item in items {
            inventory.collect(item);
        }
        inventory
    }

    /// Build an inventory from per-item counts indexed by `Item as usize`.
    pub fn from_counts(counts: &[usize]) -> Self {
        let mut inventory = Inventory::new();
        for (i, &count) in counts.iter().enumerate().take(NUM_ITEMS) {
            inventory.counts[i] = Capacity::try_from(count).unwrap_or(Capacity::MAX);
        }
        inventory
    }

    pub fn with_item(&self, item: Item) -> Self {
        let mut out = self.clone();
        out.collect(item);
        out
    }

    pub fn with_items<I: IntoIterator<Item = Item>>(&self, items: I) -> Self {
        let mut out = self.clone();
        for item in items {
            out.collect(item);
        }
        out
    }

    fn collect(&mut self, item: Item) {
        let count = &mut self.counts[item as usize];
        *count = count.saturating_add(1);
    }

    pub fn has(&self, item: Item) -> bool {
        self.counts[item as usize] > 0
    }

    pub fn count(&self, item: Item) -> Capacity {
        self.counts[item as usize]
    }

    /// Energy Tanks and Reserve Tanks both count as an energy reserve.
    pub fn energy_reserves(&self) -> Capacity {
        self.count(Item::ETank)
            .saturating_add(self.count(Item::ReserveTank))
    }

    pub fn has_energy_reserves(&self, amount: Capacity) -> bool {
        self.energy_reserves() >= amount
    }

    pub fn progressive_tier(&self, family: ProgressiveFamily) -> Capacity {
        helpers::progressive_tier(self, family)
    }

    pub fn can(&self, capability: Capability) -> bool {
        helpers::has_capability(self, capability)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Item, Capacity)> + '_ {
        Item::all()
            .map(|item| (item, self.counts[item as usize]))
            .filter(|&(_, count)| count > 0)
    }

    /// True when every item count here is at most the corresponding count in `other`.
    pub fn is_subset_of(&self, other: &Inventory) -> bool {
        self.counts
            .iter()
            .zip(other.counts.iter())
            .all(|(a, b)| a <= b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_item_leaves_original_untouched() {
        let base = Inventory::from_items([Item::Morph]);
        let extended = base.with_item(Item::Bomb);
        assert!(!base.has(Item::Bomb));
        assert!(extended.has(Item::Bomb));
        assert!(extended.has(Item::Morph));
        assert!(base.is_subset_of(&extended));
        assert!(!extended.is_subset_of(&base));
    }

    #[test]
    fn test_counts_and_reserves() {
        let inventory =
            Inventory::from_items([Item::ETank, Item::ETank, Item::ReserveTank, Item::Missile]);
        assert_eq!(inventory.count(Item::ETank), 2);
        assert_eq!(inventory.energy_reserves(), 3);
        assert!(inventory.has_energy_reserves(3));
        assert!(!inventory.has_energy_reserves(4));
        assert_eq!(
            inventory.iter().collect::<Vec<_>>(),
            vec![(Item::ETank, 2), (Item::Missile, 1), (Item::ReserveTank, 1)]
        );
    }

    #[test]
    fn test_from_counts_matches_from_items() {
        let mut counts = vec![0usize; NUM_ITEMS];
        counts[Item::Super as usize] = 2;
        counts[Item::Lamp as usize] = 1;
        assert_eq!(
            Inventory::from_counts(&counts),
            Inventory::from_items([Item::Lamp, Item::Super, Item::Super])
        );
    }
}
