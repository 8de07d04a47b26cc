use smalttp_game::{Item, LocationId, Requirement};
use smalttp_logic::Inventory;

use crate::world::World;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraverseResult {
    pub region_entered: Vec<bool>,
    pub location_reachable: Vec<bool>,
}

impl TraverseResult {
    pub fn reachable_location_ids(&self) -> impl Iterator<Item = LocationId> + '_ {
        self.location_reachable
            .iter()
            .enumerate()
            .filter(|(_, r)| **r)
            .map(|(i, _)| i)
    }

    pub fn goal_reachable(&self, world: &World) -> bool {
        world
            .goal_location_ids
            .iter()
            .all(|&id| self.location_reachable[id])
    }
}

pub fn apply_requirement(
    req: &Requirement,
    inventory: &Inventory,
    region_entered: &[bool],
) -> bool {
    match req {
        Requirement::Free => true,
        Requirement::Never => false,
        Requirement::Item(item) => inventory.has(*item),
        Requirement::ItemCount(item, count) => inventory.count(*item) >= *count,
        Requirement::EnergyReserves(count) => inventory.has_energy_reserves(*count),
        Requirement::Capability(cap) => inventory.can(*cap),
        Requirement::Region(region_id) => region_entered[*region_id],
        Requirement::And(reqs) => reqs
            .iter()
            .all(|r| apply_requirement(r, inventory, region_entered)),
        Requirement::Or(reqs) => reqs
            .iter()
            .any(|r| apply_requirement(r, inventory, region_entered)),
    }
}

/// Compute which regions can be entered and which locations reached with the given
/// items. Region entry may depend on other regions, so passes over all regions
/// repeat until nothing new becomes reachable.
pub fn traverse(world: &World, inventory: &Inventory) -> TraverseResult {
    let mut region_entered = vec![false; world.regions.len()];
    let mut location_reachable = vec![false; world.locations.len()];
    loop {
        let mut changed = false;
        for (region_id, region) in world.regions.iter().enumerate() {
            if !region_entered[region_id] {
                if !apply_requirement(&region.entry, inventory, &region_entered) {
                    continue;
                }
                region_entered[region_id] = true;
                changed = true;
            }
            for &loc_id in &region.location_ids {
                if !location_reachable[loc_id]
                    && apply_requirement(
                        &world.locations[loc_id].requirement,
                        inventory,
                        &region_entered,
                    )
                {
                    location_reachable[loc_id] = true;
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    TraverseResult {
        region_entered,
        location_reachable,
    }
}

pub fn can_finish(world: &World, inventory: &Inventory) -> bool {
    traverse(world, inventory).goal_reachable(world)
}

/// Starting from `base`, repeatedly pick up every item sitting in a reachable
/// filled location until no new location opens up. `placed` is indexed by
/// location id.
pub fn collect(
    world: &World,
    placed: &[Option<Item>],
    base: &Inventory,
) -> (Inventory, TraverseResult) {
    let mut inventory = base.clone();
    let mut collected = vec![false; world.locations.len()];
    loop {
        let result = traverse(world, &inventory);
        let mut new_items: Vec<Item> = Vec::new();
        for loc_id in result.reachable_location_ids() {
            if collected[loc_id] {
                continue;
            }
            if let Some(item) = placed[loc_id] {
                collected[loc_id] = true;
                new_items.push(item);
            }
        }
        if new_items.is_empty() {
            return (inventory, result);
        }
        inventory = inventory.with_items(new_items);
    }
}

/// Groups of locations in the order a player sweeping from nothing would reach
/// them: sphere `k` holds the filled locations first reachable after picking up
/// everything in spheres `0..k`.
pub fn spheres(world: &World, placed: &[Option<Item>]) -> Vec<Vec<LocationId>> {
    let mut inventory = Inventory::new();
    let mut collected = vec![false; world.locations.len()];
    let mut out: Vec<Vec<LocationId>> = Vec::new();
    loop {
        let result = traverse(world, &inventory);
        let sphere: Vec<LocationId> = result
            .reachable_location_ids()
            .filter(|&i| !collected[i] && placed[i].is_some())
            .collect();
        if sphere.is_empty() {
            return out;
        }
        for &loc_id in &sphere {
            collected[loc_id] = true;
        }
        inventory = inventory.with_items(sphere.iter().filter_map(|&i| placed[i]));
        out.push(sphere);
    }
}
