use serde::{Deserialize, Serialize};
use smalttp_game::{Item, ItemClass, LocationId};

use crate::error::Result;
use crate::randomize::{PlacementStep, Randomization};
use crate::settings::RandomizerSettings;
use crate::traverse::spheres;
use crate::world::World;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpoilerLocation {
    pub region: String,
    pub location: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpoilerItemLoc {
    pub item: String,
    pub location: SpoilerLocation,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpoilerFillStep {
    pub step: usize,
    pub tier: ItemClass,
    pub item: String,
    pub location: SpoilerLocation,
}

/// Progression and event items first reachable in one playthrough sphere.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpoilerSphere {
    pub sphere: usize,
    pub items: Vec<SpoilerItemLoc>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpoilerRegion {
    pub region: String,
    pub game: String,
    pub items: Vec<SpoilerItemLoc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpoilerLog {
    pub settings: RandomizerSettings,
    // None for the vanilla layout.
    pub seed: Option<u64>,
    pub attempt_num: usize,
    pub fill_order: Vec<SpoilerFillStep>,
    pub playthrough: Vec<SpoilerSphere>,
    pub regions: Vec<SpoilerRegion>,
}

fn item_name(item: Item) -> String {
    item.info().display_name.to_string()
}

fn spoiler_location(world: &World, loc_id: LocationId) -> SpoilerLocation {
    let loc = &world.locations[loc_id];
    SpoilerLocation {
        region: world.regions[loc.region_id].name.clone(),
        location: loc.name.clone(),
    }
}

fn item_loc(world: &World, items: &[Item], loc_id: LocationId) -> SpoilerItemLoc {
    SpoilerItemLoc {
        item: item_name(items[loc_id]),
        location: spoiler_location(world, loc_id),
    }
}

impl SpoilerLog {
    /// Describe a world whose item slots have all been filled by `World::apply_placement`.
    pub fn new(
        world: &World,
        settings: &RandomizerSettings,
        seed: Option<u64>,
        attempt_num: usize,
        trace: &[PlacementStep],
    ) -> Result<SpoilerLog> {
        let items = world.placed_items()?;
        let fill_order = trace
            .iter()
            .map(|x| SpoilerFillStep {
                step: x.step,
                tier: x.tier,
                item: item_name(x.item),
                location: spoiler_location(world, x.location_id),
            })
            .collect();

        let placed: Vec<Option<Item>> = items.iter().map(|&x| Some(x)).collect();
        let playthrough = spheres(world, &placed)
            .into_iter()
            .map(|sphere| {
                sphere
                    .into_iter()
                    .filter(|&i| {
                        matches!(
                            items[i].info().class,
                            ItemClass::Progression | ItemClass::Event
                        )
                    })
                    .map(|i| item_loc(world, &items, i))
                    .collect::<Vec<_>>()
            })
            .filter(|sphere_items| !sphere_items.is_empty())
            .enumerate()
            .map(|(sphere, items)| SpoilerSphere { sphere, items })
            .collect();

        let regions = world
            .regions
            .iter()
            .map(|r| SpoilerRegion {
                region: r.name.clone(),
                game: r.game.to_string(),
                items: r
                    .location_ids
                    .iter()
                    .map(|&i| item_loc(world, &items, i))
                    .collect(),
            })
            .collect();

        Ok(SpoilerLog {
            settings: settings.clone(),
            seed,
            attempt_num,
            fill_order,
            playthrough,
            regions,
        })
    }

    pub fn from_randomization(
        world: &World,
        settings: &RandomizerSettings,
        randomization: &Randomization,
    ) -> Result<SpoilerLog> {
        let mut world = world.clone();
        world.apply_placement(&randomization.placement.items)?;
        SpoilerLog::new(
            &world,
            settings,
            Some(randomization.seed),
            randomization.attempt_num,
            &randomization.placement.trace,
        )
    }

    pub fn vanilla(world: &World, settings: &RandomizerSettings) -> Result<SpoilerLog> {
        let vanilla = world.vanilla_placement();
        let mut world = world.clone();
        world.apply_placement(&vanilla)?;
        SpoilerLog::new(&world, settings, None, 0, &[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vanilla_playthrough_ends_with_goals() {
        let settings = RandomizerSettings::default();
        let world = World::new(&settings).unwrap();
        let spoiler = SpoilerLog::vanilla(&world, &settings).unwrap();
        assert!(spoiler.fill_order.is_empty());
        assert_eq!(spoiler.regions.len(), world.regions.len());
        assert_eq!(
            spoiler.regions.iter().map(|r| r.items.len()).sum::<usize>(),
            world.locations.len()
        );

        let first = &spoiler.playthrough[0];
        assert!(first
            .items
            .iter()
            .any(|x| x.location.location == "Morphing Ball" && x.item == "Morphing Ball"));
        let reached: Vec<&str> = spoiler
            .playthrough
            .iter()
            .flat_map(|s| s.items.iter().map(|x| x.location.location.as_str()))
            .collect();
        assert!(reached.contains(&"Ganon"));
        assert!(reached.contains(&"Mother Brain"));
        // Filler never shows up in the playthrough.
        assert!(!reached.contains(&"Chicken House"));
    }

    #[test]
    fn test_unfilled_world_is_rejected() {
        let settings = RandomizerSettings::default();
        let world = World::new(&settings).unwrap();
        assert!(SpoilerLog::new(&world, &settings, None, 0, &[]).is_err());
    }
}
