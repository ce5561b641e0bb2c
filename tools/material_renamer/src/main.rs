//! Material Renamer
//!
//! Renames the textures inside every material directory to the canonical
//! names the renderer expects (`albedo.png`, `normal.png`, `roughness.png`).
//!
//! Usage: run from the `materials` directory with no arguments.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use release_tools::foundation::logging;
use release_tools::prelude::*;

fn main() -> Result<()> {
    let matches = Command::new("material_renamer")
        .about("Renames material textures to canonical names")
        .arg(
            Arg::new("root")
                .short('r')
                .long("root")
                .value_name("DIR")
                .help("Directory containing the material directories (defaults to the current directory)"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("TOML or RON file overriding the pattern table"),
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

    let mut config = match matches.get_one::<String>("config") {
        Some(path) => RenamerConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config {path}"))?,
        None => RenamerConfig::default(),
    };
    if let Some(root) = matches.get_one::<String>("root") {
        config.root = PathBuf::from(root);
    }

    let table = PatternTable::from_specs(&config.patterns).context("Invalid pattern table")?;
    log::debug!("Using {} texture patterns", table.len());

    let report = rename_materials_with(&config.root, &table, |rename| println!("{rename}"))
        .with_context(|| format!("Failed to rename materials in {}", config.root.display()))?;

    log::info!(
        "{} textures renamed across {} material directories",
        report.renames.len(),
        report.directories_scanned
    );

    Ok(())
}
