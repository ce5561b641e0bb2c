//! Material texture renaming
//!
//! Material directories are exported from several tools, each with its own
//! texture naming habits (`Rock_Base_Color.png`, `rock_albedo.PNG`,
//! `T_Rock_Normal.png`, ...). The renamer normalizes them to the canonical
//! names the renderer loads: `albedo.png`, `normal.png`, `roughness.png`.

pub mod pattern_table;
pub mod renamer;

pub use pattern_table::{PatternEntry, PatternTable};
pub use renamer::{rename_materials, rename_materials_with, Rename, RenameReport};

use thiserror::Error;

use crate::foundation::fs::FsError;

/// Material renaming errors
#[derive(Error, Debug)]
pub enum RenameError {
    /// A pattern in the table is not a valid regular expression
    #[error("invalid texture pattern '{pattern}'")]
    Pattern {
        /// Offending pattern source
        pattern: String,
        /// Regex compilation error
        #[source]
        source: regex::Error,
    },

    /// Filesystem failure while scanning or renaming
    #[error(transparent)]
    Fs(#[from] FsError),
}
