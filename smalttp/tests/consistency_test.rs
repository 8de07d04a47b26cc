use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Result;
use smalttp::settings::{State, Weapons};
use smalttp::spoiler_log::SpoilerLog;

fn run_cli(extra_args: &[&str], output: &Path) -> Result<SpoilerLog> {
    let cli_path = env!("CARGO_BIN_EXE_smalttp-cli");
    let status = Command::new(cli_path)
        .args([
            "--sm-logic",
            "tournament",
            "--item-placement-style",
            "spread",
        ])
        .args(extra_args)
        .arg("--output-spoiler-log")
        .arg(output)
        .status()?;
    assert!(status.success());
    let spoiler_log: SpoilerLog = serde_json::from_str(&std::fs::read_to_string(output)?)?;
    std::fs::remove_file(output)?;
    Ok(spoiler_log)
}

fn tmp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("smalttp-{}-{name}.json", std::process::id()))
}

/// Given the same settings and seed, the CLI must write the same spoiler log.
/// This catches any non-determinism that sneaks into the fill.
#[test]
fn consistency_test() -> Result<()> {
    let log1 = run_cli(&["--seed", "12345"], &tmp_path("consistency1"))?;
    let log2 = run_cli(&["--seed", "12345"], &tmp_path("consistency2"))?;
    assert_eq!(log1.seed, Some(12345));
    if log1 != log2 {
        let differing: Vec<&str> = log1
            .fill_order
            .iter()
            .zip(&log2.fill_order)
            .filter(|(a, b)| a != b)
            .map(|(a, _)| a.location.location.as_str())
            .collect();
        panic!("Inconsistent spoiler logs: differing fill steps at {differing:?}");
    }
    Ok(())
}

#[test]
fn vanilla_spoiler_has_no_seed() -> Result<()> {
    let log = run_cli(&["--vanilla"], &tmp_path("vanilla"))?;
    assert_eq!(log.seed, None);
    assert!(log.fill_order.is_empty());
    assert!(!log.playthrough.is_empty());
    Ok(())
}

#[test]
fn fixed_seed_ignores_bulk() -> Result<()> {
    let log = run_cli(&["--seed", "77", "--bulk", "3"], &tmp_path("fixed"))?;
    assert_eq!(log.seed, Some(77));
    Ok(())
}

#[test]
fn bulk_rejects_single_spoiler_path() -> Result<()> {
    let output = tmp_path("bulk");
    let status = Command::new(env!("CARGO_BIN_EXE_smalttp-cli"))
        .args(["--bulk", "2", "--output-spoiler-log"])
        .arg(&output)
        .status()?;
    assert!(!status.success());
    assert!(!output.exists());
    Ok(())
}

#[test]
fn swordless_standard_from_cli() -> Result<()> {
    let args = ["--weapons", "swordless", "--state", "standard"];
    let log = run_cli(&args, &tmp_path("swordless"))?;
    assert_eq!(log.settings.weapons, Weapons::Swordless);
    assert_eq!(log.settings.state, State::Standard);
    assert!(!log.playthrough.is_empty());
    Ok(())
}
