//! # Release Tools
//!
//! Asset and release tooling for the hot_chickens build pipeline.
//!
//! ## Features
//!
//! - **Material Renaming**: normalizes texture files inside material
//!   directories to canonical names (`albedo.png`, `normal.png`, ...)
//! - **Build Staging**: runs the release build, stages the executable with
//!   its asset directories and compresses everything into one archive
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use release_tools::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RenamerConfig::default();
//!     let table = PatternTable::from_specs(&config.patterns)?;
//!     let report = rename_materials(&config.root, &table)?;
//!     println!("{} textures renamed", report.renames.len());
//!
//!     let report = Stager::new(StagerConfig::default()).run()?;
//!     println!("{}", format_duration_line(report.elapsed));
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod foundation;
pub mod materials;
pub mod staging;

/// Common imports for tool front-ends
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, PatternSpec, RenamerConfig, StagerConfig},
        foundation::fs::FsError,
        materials::{
            rename_materials, rename_materials_with, PatternEntry, PatternTable, Rename,
            RenameError, RenameReport,
        },
        staging::{
            format_duration_line, StageError, StageEvent, StageReport, Stager, COMPRESSING_LINE,
        },
    };
}
