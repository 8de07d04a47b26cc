use serde::Serialize;
use smalttp_game::{Game, IndexedVec, Item, LocationId, LocationKind, RegionId, Requirement};
use smalttp_logic::Inventory;

use crate::error::{RandomizerError, Result};
use crate::regions;
use crate::settings::{Logic, RandomizerSettings, SmLogic, State, Weapons};
use crate::traverse;

/// Static description of a location, declared by the region that owns it.
#[derive(Clone, Copy, Debug)]
pub struct LocationDef {
    pub name: &'static str,
    pub kind: LocationKind,
    pub vanilla_item: Item,
}

impl LocationDef {
    pub const fn new(name: &'static str, kind: LocationKind, vanilla_item: Item) -> Self {
        LocationDef {
            name,
            kind,
            vanilla_item,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct Location {
    pub name: String,
    pub kind: LocationKind,
    pub region_id: RegionId,
    pub vanilla_item: Item,
    pub requirement: Requirement,
    pub item: Option<Item>,
}

#[derive(Clone, Debug, Serialize)]
pub struct Region {
    pub name: String,
    pub game: Game,
    pub location_ids: Vec<LocationId>,
    pub entry: Requirement,
}

/// A region's contents plus its logic for each supported ruleset.
pub trait RegionLogic {
    fn name(&self) -> &'static str;
    fn game(&self) -> Game;
    fn locations(&self) -> &'static [LocationDef];
    fn init_no_glitches(&self, reqs: &mut RegionRequirements);

    fn init_overworld_glitches(&self, reqs: &mut RegionRequirements) {
        self.init_no_glitches(reqs);
    }
}

/// Collects the requirements a region installs while it is being initialized.
/// Names are resolved against the world under construction; unknown names are
/// recorded and reported once every region has been initialized.
pub struct RegionRequirements<'a> {
    pub sm_logic: SmLogic,
    pub weapons: Weapons,
    pub state: State,
    region_id: RegionId,
    region_isv: &'a IndexedVec<String>,
    location_isv: &'a IndexedVec<String>,
    location_region: &'a [RegionId],
    entry: Requirement,
    location_reqs: Vec<(LocationId, Requirement)>,
    errors: Vec<String>,
}

impl<'a> RegionRequirements<'a> {
    pub fn set_entry(&mut self, req: Requirement) {
        self.entry = req;
    }

    pub fn set_location(&mut self, name: &str, req: Requirement) {
        match self.location_isv.index_by_key.get(name) {
            Some(&id) if self.location_region[id] == self.region_id => {
                self.location_reqs.push((id, req));
            }
            Some(_) => self.errors.push(format!(
                "location '{name}' does not belong to region '{}'",
                self.region_isv.keys[self.region_id]
            )),
            None => self.errors.push(format!("unknown location '{name}'")),
        }
    }

    /// Requirement that another region has already been entered.
    pub fn region(&mut self, name: &str) -> Requirement {
        match self.region_isv.index_by_key.get(name) {
            Some(&id) => Requirement::Region(id),
            None => {
                self.errors.push(format!("unknown region '{name}'"));
                Requirement::Never
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct World {
    pub regions: Vec<Region>,
    pub locations: Vec<Location>,
    pub region_isv: IndexedVec<String>,
    pub location_isv: IndexedVec<String>,
    pub goal_location_ids: Vec<LocationId>,
}

impl World {
    /// The combined Super Metroid and A Link to the Past world for the given settings.
    pub fn new(settings: &RandomizerSettings) -> Result<World> {
        World::build(
            &regions::standard_regions(),
            settings,
            settings.goal.location_names(),
        )
    }

    /// Build a world from region tables, installing the ruleset the settings select.
    pub fn build(
        region_logic: &[Box<dyn RegionLogic>],
        settings: &RandomizerSettings,
        goal_names: &[&str],
    ) -> Result<World> {
        let mut region_isv: IndexedVec<String> = IndexedVec::default();
        let mut location_isv: IndexedVec<String> = IndexedVec::default();
        let mut regions: Vec<Region> = Vec::new();
        let mut locations: Vec<Location> = Vec::new();

        for r in region_logic {
            if region_isv.index_by_key.contains_key(r.name()) {
                return Err(RandomizerError::Configuration(format!(
                    "duplicate region '{}'",
                    r.name()
                )));
            }
            let region_id = region_isv.add(r.name());
            let mut location_ids = Vec::new();
            for def in r.locations() {
                if location_isv.index_by_key.contains_key(def.name) {
                    return Err(RandomizerError::Configuration(format!(
                        "duplicate location '{}'",
                        def.name
                    )));
                }
                let location_id = location_isv.add(def.name);
                locations.push(Location {
                    name: def.name.to_string(),
                    kind: def.kind,
                    region_id,
                    vanilla_item: def.vanilla_item,
                    requirement: Requirement::Free,
                    item: None,
                });
                location_ids.push(location_id);
            }
            regions.push(Region {
                name: r.name().to_string(),
                game: r.game(),
                location_ids,
                entry: Requirement::Free,
            });
        }

        let location_region: Vec<RegionId> = locations.iter().map(|x| x.region_id).collect();
        let mut errors: Vec<String> = Vec::new();
        for (region_id, r) in region_logic.iter().enumerate() {
            let mut reqs = RegionRequirements {
                sm_logic: settings.sm_logic,
                weapons: settings.weapons,
                state: settings.state,
                region_id,
                region_isv: &region_isv,
                location_isv: &location_isv,
                location_region: &location_region,
                entry: Requirement::Free,
                location_reqs: Vec::new(),
                errors: Vec::new(),
            };
            match settings.logic {
                Logic::NoGlitches => r.init_no_glitches(&mut reqs),
                Logic::OverworldGlitches => r.init_overworld_glitches(&mut reqs),
            }
            regions[region_id].entry = reqs.entry;
            for (location_id, req) in reqs.location_reqs {
                locations[location_id].requirement = req;
            }
            errors.extend(reqs.errors);
        }
        if !errors.is_empty() {
            return Err(RandomizerError::Configuration(errors.join("; ")));
        }

        let mut goal_location_ids = Vec::new();
        for &name in goal_names {
            match location_isv.index_by_key.get(name) {
                Some(&id) => goal_location_ids.push(id),
                None => {
                    return Err(RandomizerError::Configuration(format!(
                        "unknown goal location '{name}'"
                    )))
                }
            }
        }

        Ok(World {
            regions,
            locations,
            region_isv,
            location_isv,
            goal_location_ids,
        })
    }

    pub fn location_id(&self, name: &str) -> Option<LocationId> {
        self.location_isv.index_by_key.get(name).copied()
    }

    pub fn region_id(&self, name: &str) -> Option<RegionId> {
        self.region_isv.index_by_key.get(name).copied()
    }

    pub fn location(&self, name: &str) -> Option<&Location> {
        self.location_id(name).map(|id| &self.locations[id])
    }

    /// Location ids that take part in the fill (everything except event locations).
    pub fn item_location_ids(&self) -> Vec<LocationId> {
        (0..self.locations.len())
            .filter(|&i| self.locations[i].kind != LocationKind::Event)
            .collect()
    }

    /// Every location holding the item it has in the unmodified games.
    pub fn vanilla_placement(&self) -> Vec<Item> {
        self.locations.iter().map(|x| x.vanilla_item).collect()
    }

    /// Fill each location's item slot from a placement indexed by location id.
    pub fn apply_placement(&mut self, items: &[Item]) -> Result<()> {
        if items.len() != self.locations.len() {
            return Err(RandomizerError::Configuration(format!(
                "placement has {} items for {} locations",
                items.len(),
                self.locations.len()
            )));
        }
        for (loc, &item) in self.locations.iter_mut().zip(items) {
            loc.item = Some(item);
        }
        Ok(())
    }

    /// The item in every slot, indexed by location id. Fails if any slot is still empty.
    pub fn placed_items(&self) -> Result<Vec<Item>> {
        self.locations
            .iter()
            .map(|loc| {
                loc.item.ok_or_else(|| {
                    RandomizerError::Configuration(format!("location '{}' has no item", loc.name))
                })
            })
            .collect()
    }

    pub fn can_finish(&self, inventory: &Inventory) -> bool {
        traverse::can_finish(self, inventory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smalttp_game::Capability;

    struct Hub;
    struct Annex;

    const HUB_LOCATIONS: &[LocationDef] = &[
        LocationDef::new("Hub Chest", LocationKind::Chest, Item::Morph),
        LocationDef::new("Hub Boss", LocationKind::Event, Item::Crystal),
    ];
    const ANNEX_LOCATIONS: &[LocationDef] =
        &[LocationDef::new("Annex Chest", LocationKind::Chest, Item::Bomb)];

    impl RegionLogic for Hub {
        fn name(&self) -> &'static str {
            "Hub"
        }
        fn game(&self) -> Game {
            Game::SuperMetroid
        }
        fn locations(&self) -> &'static [LocationDef] {
            HUB_LOCATIONS
        }
        fn init_no_glitches(&self, reqs: &mut RegionRequirements) {
            reqs.set_location(
                "Hub Boss",
                Requirement::Capability(Capability::CanUseMorphBombs),
            );
        }
    }

    impl RegionLogic for Annex {
        fn name(&self) -> &'static str {
            "Annex"
        }
        fn game(&self) -> Game {
            Game::SuperMetroid
        }
        fn locations(&self) -> &'static [LocationDef] {
            ANNEX_LOCATIONS
        }
        fn init_no_glitches(&self, reqs: &mut RegionRequirements) {
            let hub = reqs.region("Hub");
            reqs.set_entry(Requirement::make_and(vec![hub, Requirement::Item(Item::Morph)]));
        }
        fn init_overworld_glitches(&self, reqs: &mut RegionRequirements) {
            reqs.set_entry(Requirement::Free);
        }
    }

    fn regions() -> Vec<Box<dyn RegionLogic>> {
        vec![Box::new(Hub), Box::new(Annex)]
    }

    #[test]
    fn test_build_resolves_names() {
        let world =
            World::build(&regions(), &RandomizerSettings::default(), &["Hub Boss"]).unwrap();
        assert_eq!(world.regions.len(), 2);
        assert_eq!(world.locations.len(), 3);
        assert_eq!(world.location_id("Annex Chest"), Some(2));
        assert_eq!(world.regions[1].location_ids, vec![2]);
        assert_eq!(world.locations[2].region_id, 1);
        assert_eq!(
            world.regions[1].entry,
            Requirement::And(vec![Requirement::Region(0), Requirement::Item(Item::Morph)])
        );
        assert_eq!(world.goal_location_ids, vec![1]);
        assert_eq!(world.item_location_ids(), vec![0, 2]);
    }

    #[test]
    fn test_logic_variant_is_chosen_once() {
        let settings = RandomizerSettings {
            logic: Logic::OverworldGlitches,
            ..RandomizerSettings::default()
        };
        let world = World::build(&regions(), &settings, &["Hub Boss"]).unwrap();
        assert_eq!(world.regions[1].entry, Requirement::Free);
        // Hub has no glitched variant of its own and falls back to the no-glitches rules.
        assert_eq!(
            world.locations[1].requirement,
            Requirement::Capability(Capability::CanUseMorphBombs)
        );
    }

    #[test]
    fn test_unknown_goal_is_configuration_error() {
        let err =
            World::build(&regions(), &RandomizerSettings::default(), &["Nowhere"]).unwrap_err();
        assert!(matches!(err, RandomizerError::Configuration(_)));
    }

    #[test]
    fn test_apply_placement_requires_every_slot() {
        let mut world =
            World::build(&regions(), &RandomizerSettings::default(), &["Hub Boss"]).unwrap();
        assert!(world.apply_placement(&[Item::Bomb]).is_err());
        assert!(matches!(world.placed_items(), Err(RandomizerError::Configuration(_))));
        let vanilla = world.vanilla_placement();
        assert_eq!(vanilla, vec![Item::Morph, Item::Crystal, Item::Bomb]);
        world.apply_placement(&vanilla).unwrap();
        assert_eq!(world.locations[2].item, Some(Item::Bomb));
        assert_eq!(world.placed_items().unwrap(), vanilla);
    }
}
