use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use smalttp::settings::{Goal, Logic, RandomizerSettings, SmLogic, State, Weapons};
use smalttp::traverse::{apply_requirement, collect, traverse, TraverseResult};
use smalttp::world::World;
use smalttp_game::{Item, ItemClass};
use smalttp_logic::Inventory;

fn world_with(logic: Logic, sm_logic: SmLogic, goal: Goal) -> Result<World> {
    let settings = RandomizerSettings {
        logic,
        sm_logic,
        goal,
        ..RandomizerSettings::default()
    };
    Ok(World::new(&settings)?)
}

fn standard_world() -> Result<World> {
    world_with(Logic::NoGlitches, SmLogic::Casual, Goal::Ganon)
}

fn is_subset(a: &TraverseResult, b: &TraverseResult) -> bool {
    a.region_entered
        .iter()
        .zip(&b.region_entered)
        .all(|(&x, &y)| !x || y)
        && a.location_reachable
            .iter()
            .zip(&b.location_reachable)
            .all(|(&x, &y)| !x || y)
}

fn random_inventory<R: Rng>(rng: &mut R, max_items: usize) -> Inventory {
    let items: Vec<Item> = Item::all().collect();
    let n = rng.gen_range(0..=max_items);
    Inventory::from_items((0..n).filter_map(|_| items.choose(&mut *rng).copied()))
}

#[test]
fn wrecked_ship_reserve_tank() -> Result<()> {
    let world = standard_world()?;
    let ws = world.region_id("Wrecked Ship").context("missing region")?;
    let loc = world
        .location("Reserve Tank, Wrecked Ship")
        .context("missing location")?;
    assert_eq!(loc.region_id, ws);

    // The location's own predicate, with the region taken as entered.
    let all_entered = vec![true; world.regions.len()];
    let speed_varia = Inventory::from_items([Item::SpeedBooster, Item::Varia]);
    assert!(apply_requirement(&loc.requirement, &speed_varia, &all_entered));
    let speed_one_tank = Inventory::from_items([Item::SpeedBooster, Item::ETank]);
    assert!(!apply_requirement(&loc.requirement, &speed_one_tank, &all_entered));
    let speed_two_tanks = speed_one_tank.with_item(Item::ReserveTank);
    assert!(apply_requirement(&loc.requirement, &speed_two_tanks, &all_entered));

    // Nothing inside is reachable before the region can be entered.
    let result = traverse(&world, &Inventory::new());
    assert!(!result.region_entered[ws]);
    for &loc_id in &world.regions[ws].location_ids {
        assert!(!result.location_reachable[loc_id]);
    }

    // Entry takes usable Power Bombs and Super Missiles.
    let entry = [Item::Morph, Item::PowerBomb, Item::Super];
    let loc_id = world
        .location_id("Reserve Tank, Wrecked Ship")
        .context("missing location")?;
    let result = traverse(&world, &speed_varia.with_items(entry));
    assert!(result.region_entered[ws]);
    assert!(result.location_reachable[loc_id]);
    let without_morph = speed_varia.with_items([Item::PowerBomb, Item::Super]);
    assert!(!traverse(&world, &without_morph).region_entered[ws]);

    let result = traverse(&world, &speed_one_tank.with_items(entry));
    assert!(result.region_entered[ws]);
    assert!(!result.location_reachable[loc_id]);
    Ok(())
}

#[test]
fn reachability_is_monotonic() -> Result<()> {
    let world = standard_world()?;
    let mut rng = rand::rngs::StdRng::seed_from_u64(0);
    for _ in 0..200 {
        let small = random_inventory(&mut rng, 40);
        let large = small.with_items(
            random_inventory(&mut rng, 40)
                .iter()
                .flat_map(|(item, count)| std::iter::repeat_n(item, count as usize)),
        );
        assert!(small.is_subset_of(&large));
        assert!(is_subset(&traverse(&world, &small), &traverse(&world, &large)));
    }
    Ok(())
}

#[test]
fn traversal_is_idempotent() -> Result<()> {
    let world = standard_world()?;
    let mut rng = rand::rngs::StdRng::seed_from_u64(1);
    for _ in 0..50 {
        let inventory = random_inventory(&mut rng, 60);
        assert_eq!(traverse(&world, &inventory), traverse(&world, &inventory));
    }
    Ok(())
}

#[test]
fn looser_rulesets_reach_more() -> Result<()> {
    let casual = world_with(Logic::NoGlitches, SmLogic::Casual, Goal::Ganon)?;
    let tournament = world_with(Logic::NoGlitches, SmLogic::Tournament, Goal::Ganon)?;
    let glitched = world_with(Logic::OverworldGlitches, SmLogic::Casual, Goal::Ganon)?;
    let mut rng = rand::rngs::StdRng::seed_from_u64(2);
    for _ in 0..200 {
        let inventory = random_inventory(&mut rng, 50);
        let base = traverse(&casual, &inventory);
        assert!(is_subset(&base, &traverse(&tournament, &inventory)));
        assert!(is_subset(&base, &traverse(&glitched, &inventory)));
    }

    // Boots alone let the glitched ruleset onto Death Mountain.
    let boots = Inventory::from_items([Item::PegasusBoots]);
    let dm = casual
        .region_id("Death Mountain")
        .context("missing region")?;
    assert!(!traverse(&casual, &boots).region_entered[dm]);
    assert!(traverse(&glitched, &boots).region_entered[dm]);
    Ok(())
}

#[test]
fn vanilla_layout_is_completable() -> Result<()> {
    for logic in [Logic::NoGlitches, Logic::OverworldGlitches] {
        for sm_logic in [SmLogic::Casual, SmLogic::Tournament] {
            for goal in [Goal::Ganon, Goal::Pedestal] {
                let world = world_with(logic, sm_logic, goal)?;
                let placed: Vec<Option<Item>> =
                    world.vanilla_placement().into_iter().map(Some).collect();
                let (inventory, result) = collect(&world, &placed, &Inventory::new());
                assert!(
                    result.location_reachable.iter().all(|&x| x),
                    "{logic} / {sm_logic}: unreachable vanilla locations"
                );
                assert!(
                    world.can_finish(&inventory),
                    "{logic} / {sm_logic} / {goal}"
                );
            }
        }
    }
    Ok(())
}

#[test]
fn standard_state_closes_the_light_world() -> Result<()> {
    let open = standard_world()?;
    let standard = World::new(&RandomizerSettings {
        state: State::Standard,
        ..RandomizerSettings::default()
    })?;
    let lw = standard.region_id("Light World").context("missing region")?;
    let eastern = standard
        .region_id("Eastern Palace")
        .context("missing region")?;
    assert!(traverse(&open, &Inventory::new()).region_entered[lw]);
    let result = traverse(&standard, &Inventory::new());
    assert!(!result.region_entered[lw]);
    assert!(!result.region_entered[eastern]);

    // The castle itself stays open, and a weapon finishes the escort.
    let uncle = standard
        .location_id("Link's Uncle")
        .context("missing location")?;
    assert!(result.location_reachable[uncle]);
    let armed = traverse(&standard, &Inventory::from_items([Item::ProgressiveSword]));
    assert!(armed.region_entered[lw]);
    assert!(armed.region_entered[eastern]);
    Ok(())
}

#[test]
fn swordless_weapons_replace_swords() -> Result<()> {
    let world = World::new(&RandomizerSettings {
        weapons: Weapons::Swordless,
        ..RandomizerSettings::default()
    })?;
    let tower = world.region_id("Castle Tower").context("missing region")?;
    let swords = Inventory::from_items([Item::ProgressiveSword; 4]);
    assert!(!traverse(&world, &swords).region_entered[tower]);
    let hammer = Inventory::from_items([Item::Hammer]);
    assert!(traverse(&world, &hammer).region_entered[tower]);

    let all_entered = vec![true; world.regions.len()];
    let ganon = world.location("Ganon").context("missing location")?;
    let base = [Item::DefeatedAgahnim, Item::Lamp];
    let with_bow = Inventory::from_items(base).with_item(Item::Bow);
    assert!(apply_requirement(&ganon.requirement, &with_bow, &all_entered));
    let with_swords = swords.with_items(base);
    assert!(!apply_requirement(&ganon.requirement, &with_swords, &all_entered));
    Ok(())
}

#[test]
fn goal_needs_both_games() -> Result<()> {
    let world = world_with(Logic::NoGlitches, SmLogic::Casual, Goal::Pedestal)?;
    let placed: Vec<Option<Item>> = world
        .vanilla_placement()
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            // Drop Super Metroid's items entirely.
            let region = &world.regions[world.locations[i].region_id];
            (region.game == smalttp_game::Game::LinkToThePast).then_some(item)
        })
        .collect();
    let (inventory, result) = collect(&world, &placed, &Inventory::new());
    let pedestal = world
        .location_id("Master Sword Pedestal")
        .context("missing location")?;
    assert!(result.location_reachable[pedestal]);
    assert!(!world.can_finish(&inventory));
    Ok(())
}

#[test]
fn logic_only_references_key_items() -> Result<()> {
    for weapons in [Weapons::Randomized, Weapons::Swordless] {
        for logic in [Logic::NoGlitches, Logic::OverworldGlitches] {
            let world = World::new(&RandomizerSettings {
                logic,
                weapons,
                sm_logic: SmLogic::Tournament,
                state: State::Standard,
                ..RandomizerSettings::default()
            })?;
            let mut items: Vec<Item> = Vec::new();
            for region in &world.regions {
                region.entry.referenced_items(&mut items);
            }
            for loc in &world.locations {
                loc.requirement.referenced_items(&mut items);
            }
            for item in items {
                assert!(
                    matches!(item.info().class, ItemClass::Progression | ItemClass::Event),
                    "{item:?} gates a location but is not a key item"
                );
            }
        }
    }
    Ok(())
}
