use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{info, warn};
use rand::{RngCore, SeedableRng};
use smalttp::randomize::Randomizer;
use smalttp::settings::{parse_option, RandomizerSettings, DEFAULT_MAX_ATTEMPTS};
use smalttp::spoiler_log::SpoilerLog;
use smalttp::world::World;
use std::path::{Path, PathBuf};

#[derive(Parser)]
struct Args {
    #[arg(long, default_value = "normal")]
    difficulty: String,

    #[arg(long, default_value = "NoGlitches")]
    logic: String,

    #[arg(long, default_value = "ganon")]
    goal: String,

    #[arg(long, default_value = "none")]
    variation: String,

    #[arg(long, default_value = "Casual")]
    sm_logic: String,

    #[arg(long, default_value = "randomized")]
    morph: String,

    #[arg(long, default_value = "Neutral")]
    item_placement_style: String,

    #[arg(long, default_value = "randomized")]
    weapons: String,

    #[arg(long, default_value = "open")]
    state: String,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = 1)]
    bulk: usize,

    #[arg(long)]
    max_attempts: Option<usize>,

    /// Spoiler log path for a single seed. Cannot be combined with `--bulk`.
    #[arg(long)]
    output_spoiler_log: Option<PathBuf>,

    /// Directory receiving one spoiler log per seed in bulk mode.
    #[arg(long)]
    spoiler_dir: Option<PathBuf>,

    /// Write the vanilla item layout instead of randomizing.
    #[arg(long)]
    vanilla: bool,
}

fn get_settings(args: &Args) -> Result<RandomizerSettings> {
    let mut settings = RandomizerSettings::from_names(
        &args.difficulty,
        &args.logic,
        &args.goal,
        &args.variation,
        &args.sm_logic,
        &args.morph,
    )?;
    settings.item_placement_style =
        parse_option("item placement style", &args.item_placement_style)?;
    settings.weapons = parse_option("weapons", &args.weapons)?;
    settings.state = parse_option("state", &args.state)?;
    settings.max_attempts = args.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS);
    Ok(settings)
}

fn write_spoiler_log(path: &Path, spoiler_log: &SpoilerLog) -> Result<()> {
    println!("Writing spoiler log to {}", path.display());
    let spoiler_str = serde_json::to_string_pretty(spoiler_log)?;
    std::fs::write(path, spoiler_str)
        .with_context(|| format!("Unable to write spoiler log to {}", path.display()))?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = Args::parse();
    let settings = get_settings(&args)?;
    let world = World::new(&settings)?;

    if args.vanilla {
        let spoiler_log = SpoilerLog::vanilla(&world, &settings)?;
        if let Some(path) = &args.output_spoiler_log {
            write_spoiler_log(path, &spoiler_log)?;
        }
        return Ok(());
    }

    if args.bulk == 0 {
        bail!("--bulk must be at least 1");
    }
    // A fixed seed always produces the same placement, so it runs once.
    let bulk = if args.seed.is_some() { 1 } else { args.bulk };
    if bulk < args.bulk {
        warn!(
            "--seed given, generating a single seed instead of {}",
            args.bulk
        );
    }
    if bulk > 1 && args.output_spoiler_log.is_some() {
        bail!("--output-spoiler-log takes a single seed; use --spoiler-dir with --bulk");
    }
    if let Some(dir) = &args.spoiler_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Unable to create directory {}", dir.display()))?;
    }

    let randomizer = Randomizer::new(&world, &settings)?;
    let mut root_rng = rand::rngs::StdRng::from_entropy();
    for i in 0..bulk {
        let seed = match args.seed {
            Some(s) => s,
            None => root_rng.next_u64() & 0xFFFFFFFF,
        };
        info!("Seed {}/{bulk}: {seed}", i + 1);
        let randomization = randomizer
            .randomize(seed)
            .with_context(|| format!("Randomization failed for seed {seed}"))?;
        info!(
            "Seed {seed} placed {} items after {} failed attempts",
            randomization.placement.trace.len(),
            randomization.attempt_num
        );
        let spoiler_log = SpoilerLog::from_randomization(&world, &settings, &randomization)?;
        if let Some(path) = &args.output_spoiler_log {
            write_spoiler_log(path, &spoiler_log)?;
        }
        if let Some(dir) = &args.spoiler_dir {
            write_spoiler_log(&dir.join(format!("smalttp-{seed}.json")), &spoiler_log)?;
        }
    }

    Ok(())
}
