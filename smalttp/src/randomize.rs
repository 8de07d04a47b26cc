use log::{debug, info};
use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use smalttp_game::{Item, ItemClass, LocationId, LocationKind, NUM_ITEMS};
use smalttp_logic::Inventory;

use crate::error::{AttemptError, RandomizerError, Result};
use crate::item_pool::item_pool;
use crate::settings::{ItemPlacementStyle, MorphPlacement, RandomizerSettings, State, Weapons};
use crate::traverse::collect;
use crate::world::World;

const TIERS: [ItemClass; 3] = [ItemClass::Progression, ItemClass::Useful, ItemClass::Filler];
const UNCLE_LOCATION: &str = "Link's Uncle";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementStep {
    pub step: usize,
    pub tier: ItemClass,
    pub item: Item,
    pub location_id: LocationId,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    // Indexed by LocationId; every location holds exactly one item.
    pub items: Vec<Item>,
    // Fill order of the randomized items. Pinned items are not part of it.
    pub trace: Vec<PlacementStep>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Randomization {
    pub seed: u64,
    pub attempt_num: usize,
    pub placement: Placement,
}

pub struct Randomizer<'a> {
    pub world: &'a World,
    pub settings: &'a RandomizerSettings,
    // Items placed by the assumed fill. Excludes pinned items.
    pub item_pool: Vec<Item>,
    pub pinned: Vec<(LocationId, Item)>,
}

impl<'a> Randomizer<'a> {
    pub fn new(world: &'a World, settings: &'a RandomizerSettings) -> Result<Self> {
        Randomizer::with_item_pool(world, settings, item_pool(settings))
    }

    /// Build a randomizer over an explicit pool. The pool must hold exactly one
    /// item per non-event location.
    pub fn with_item_pool(
        world: &'a World,
        settings: &'a RandomizerSettings,
        mut item_pool: Vec<Item>,
    ) -> Result<Self> {
        if let Some(item) = item_pool.iter().find(|x| x.is_event()) {
            return Err(RandomizerError::Configuration(format!(
                "event item {item:?} cannot be part of the item pool"
            )));
        }

        let mut pinned: Vec<(LocationId, Item)> = Vec::new();
        for (loc_id, loc) in world.locations.iter().enumerate() {
            if loc.kind == LocationKind::Event {
                if !loc.vanilla_item.is_event() {
                    return Err(RandomizerError::Configuration(format!(
                        "event location '{}' holds non-event item {:?}",
                        loc.name, loc.vanilla_item
                    )));
                }
                pinned.push((loc_id, loc.vanilla_item));
            }
        }

        if settings.morph_placement == MorphPlacement::Vanilla {
            let loc_id = world
                .locations
                .iter()
                .position(|x| x.kind != LocationKind::Event && x.vanilla_item == Item::Morph)
                .ok_or_else(|| {
                    RandomizerError::Configuration("no vanilla Morph Ball location".to_string())
                })?;
            pin_item(&mut item_pool, &mut pinned, loc_id, Item::Morph)?;
        }

        // Standard starts hand a sword over before the escape.
        if settings.state == State::Standard && settings.weapons == Weapons::Randomized {
            let loc_id = world
                .location_id(UNCLE_LOCATION)
                .ok_or_else(|| {
                    RandomizerError::Configuration(format!("no '{UNCLE_LOCATION}' location"))
                })?;
            pin_item(&mut item_pool, &mut pinned, loc_id, Item::ProgressiveSword)?;
        }

        let num_open = world.locations.len() - pinned.len();
        if item_pool.len() != num_open {
            return Err(RandomizerError::Configuration(format!(
                "item pool has {} items for {} open locations",
                item_pool.len(),
                num_open
            )));
        }

        Ok(Randomizer {
            world,
            settings,
            item_pool,
            pinned,
        })
    }

    pub fn randomize(&self, seed: u64) -> Result<Randomization> {
        let mut rng_seed = [0u8; 32];
        rng_seed[..8].copy_from_slice(&seed.to_le_bytes());
        let mut rng = rand::rngs::StdRng::from_seed(rng_seed);

        for attempt_num in 0..self.settings.max_attempts {
            match self.attempt(attempt_num, &mut rng) {
                Ok(placement) => {
                    info!("[attempt {attempt_num}] Placement successful");
                    return Ok(Randomization {
                        seed,
                        attempt_num,
                        placement,
                    });
                }
                Err(e) => {
                    info!("[attempt {attempt_num}] {e}");
                }
            }
        }
        Err(RandomizerError::Unsatisfiable {
            attempts: self.settings.max_attempts,
        })
    }

    /// Tier each pool item and shuffle within tiers. Surplus copies of an item
    /// (beyond those that can unlock anything) drop to the filler tier.
    fn order_items<R: Rng>(&self, rng: &mut R) -> Vec<(ItemClass, Item)> {
        let mut copies_seen = [0usize; NUM_ITEMS];
        let mut tiers: Vec<Vec<Item>> = vec![vec![]; TIERS.len()];
        for &item in &self.item_pool {
            let class = item.class_of_copy(copies_seen[item as usize]);
            copies_seen[item as usize] += 1;
            if let Some(idx) = TIERS.iter().position(|&x| x == class) {
                tiers[idx].push(item);
            }
        }
        let mut out = Vec::with_capacity(self.item_pool.len());
        for (tier, mut items) in TIERS.iter().zip(tiers) {
            items.shuffle(rng);
            out.extend(items.into_iter().map(|item| (*tier, item)));
        }
        out
    }

    fn select_location<R: Rng>(
        &self,
        candidates: &[LocationId],
        tier: ItemClass,
        progression_per_region: &[usize],
        rng: &mut R,
    ) -> LocationId {
        if self.settings.item_placement_style == ItemPlacementStyle::Spread
            && tier == ItemClass::Progression
        {
            let weights: Vec<f32> = candidates
                .iter()
                .map(|&loc_id| {
                    let region_id = self.world.locations[loc_id].region_id;
                    1.0 / (1 + progression_per_region[region_id]) as f32
                })
                .collect();
            if let Ok(dist) = WeightedIndex::new(&weights) {
                return candidates[dist.sample(rng)];
            }
        }
        candidates[rng.gen_range(0..candidates.len())]
    }

    fn attempt<R: Rng>(
        &self,
        attempt_num: usize,
        rng: &mut R,
    ) -> std::result::Result<Placement, AttemptError> {
        let world = self.world;
        let num_locations = world.locations.len();
        let mut placed: Vec<Option<Item>> = vec![None; num_locations];
        for &(loc_id, item) in &self.pinned {
            placed[loc_id] = Some(item);
        }

        let order = self.order_items(rng);
        let mut unplaced_counts = vec![0usize; NUM_ITEMS];
        for &(_, item) in &order {
            unplaced_counts[item as usize] += 1;
        }
        let mut progression_per_region = vec![0usize; world.regions.len()];
        let mut trace: Vec<PlacementStep> = Vec::with_capacity(order.len());

        for (step, &(tier, item)) in order.iter().enumerate() {
            unplaced_counts[item as usize] -= 1;
            let assumed = Inventory::from_counts(&unplaced_counts);
            let (_, reach) = collect(world, &placed, &assumed);
            let candidates: Vec<LocationId> = reach
                .reachable_location_ids()
                .filter(|&i| placed[i].is_none())
                .collect();
            if candidates.is_empty() {
                return Err(AttemptError::FillAttemptExhausted { item, step });
            }
            let loc_id = self.select_location(&candidates, tier, &progression_per_region, rng);
            placed[loc_id] = Some(item);
            if tier == ItemClass::Progression {
                progression_per_region[world.locations[loc_id].region_id] += 1;
            }
            debug!(
                "[attempt {attempt_num}] step {step}: {item:?} ({tier:?}) -> {}",
                world.locations[loc_id].name
            );
            trace.push(PlacementStep {
                step,
                tier,
                item,
                location_id: loc_id,
            });
        }

        let (_, reach) = collect(world, &placed, &Inventory::new());
        if !reach.goal_reachable(world) {
            return Err(AttemptError::VerificationFailed);
        }

        let mut items = Vec::with_capacity(num_locations);
        for slot in placed {
            match slot {
                Some(item) => items.push(item),
                None => return Err(AttemptError::VerificationFailed),
            }
        }
        Ok(Placement { items, trace })
    }
}

/// Move one copy of `item` out of the pool and onto a fixed location.
fn pin_item(
    item_pool: &mut Vec<Item>,
    pinned: &mut Vec<(LocationId, Item)>,
    loc_id: LocationId,
    item: Item,
) -> Result<()> {
    let pool_idx = item_pool
        .iter()
        .position(|&x| x == item)
        .ok_or_else(|| {
            RandomizerError::Configuration(format!("{item:?} is not in the item pool"))
        })?;
    item_pool.swap_remove(pool_idx);
    pinned.push((loc_id, item));
    Ok(())
}
