pub mod alttp;
pub mod super_metroid;

use smalttp_game::{Capability, Capacity, Item, Requirement};

use crate::world::RegionLogic;

/// Regions of the combined world, Super Metroid first.
pub fn standard_regions() -> Vec<Box<dyn RegionLogic>> {
    let mut out = super_metroid::regions();
    out.extend(alttp::regions());
    out
}

// Shorthands used by the region initializers.

pub fn item(item: Item) -> Requirement {
    Requirement::Item(item)
}

pub fn count(item: Item, count: Capacity) -> Requirement {
    Requirement::ItemCount(item, count)
}

pub fn reserves(count: Capacity) -> Requirement {
    Requirement::EnergyReserves(count)
}

pub fn can(capability: Capability) -> Requirement {
    Requirement::Capability(capability)
}

pub fn and<const N: usize>(reqs: [Requirement; N]) -> Requirement {
    Requirement::make_and(reqs.into())
}

pub fn or<const N: usize>(reqs: [Requirement; N]) -> Requirement {
    Requirement::make_or(reqs.into())
}
