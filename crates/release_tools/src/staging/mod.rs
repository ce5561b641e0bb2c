//! Release build staging
//!
//! The stager runs the release build, assembles the executable and the
//! asset directories into a staging directory, compresses that directory
//! into the 7z distribution archive and removes it again.

pub mod archive;
pub mod build;
pub mod stager;

pub use archive::{write_archive, ArchiveSummary};
pub use build::run_build;
pub use stager::{format_duration_line, StageEvent, StageReport, Stager, COMPRESSING_LINE};

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

use crate::foundation::fs::FsError;

/// Build staging errors
#[derive(Error, Debug)]
pub enum StageError {
    /// The configured build command has no program
    #[error("build command is empty")]
    EmptyBuildCommand,

    /// The build program could not be started
    #[error("failed to run build command '{command}'")]
    BuildSpawn {
        /// Full command line
        command: String,
        /// Spawn error
        #[source]
        source: std::io::Error,
    },

    /// The build finished with a failure status
    #[error("build command '{command}' failed with {status}")]
    BuildFailed {
        /// Full command line
        command: String,
        /// Exit status reported by the build
        status: ExitStatus,
    },

    /// Writing the archive failed
    #[error("failed to write archive {}", .path.display())]
    Archive {
        /// Archive being written
        path: PathBuf,
        /// 7z writer error
        #[source]
        source: sevenz_rust::Error,
    },

    /// A staged path could not be expressed relative to the staging root
    #[error("{} is outside the staging directory", .0.display())]
    OutsideStaging(PathBuf),

    /// Filesystem failure while staging
    #[error(transparent)]
    Fs(#[from] FsError),
}
