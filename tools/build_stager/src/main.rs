//! Build Stager
//!
//! Builds the game in release mode, stages the executable together with the
//! `materials`, `models`, `shaders` and `skyboxes` directories, and packs the
//! result into `hot_chickens.7z`.
//!
//! Usage: run from the project root with no arguments.

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use release_tools::foundation::logging;
use release_tools::prelude::*;

fn main() -> Result<()> {
    let matches = Command::new("build_stager")
        .about("Builds, stages and archives a release of the game")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("TOML or RON file overriding the staging layout"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log verbosity (repeatable)")
                .action(ArgAction::Count),
        )
        .get_matches();

    logging::init(logging::level_for_verbosity(matches.get_count("verbose")));

    let config = match matches.get_one::<String>("config") {
        Some(path) => StagerConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config {path}"))?,
        None => StagerConfig::default(),
    };

    let stager = Stager::new(config);
    let report = stager
        .run_with(|event| {
            if event == StageEvent::Compressing {
                println!("{COMPRESSING_LINE}");
            }
        })
        .context("Release staging failed")?;

    log::info!(
        "Archive {} holds {} files",
        report.archive.display(),
        report.summary.files
    );
    println!("{}", format_duration_line(report.elapsed));

    Ok(())
}
