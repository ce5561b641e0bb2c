//! Staging pipeline

use std::path::{Path, PathBuf};
use std::time::Duration;

use super::{run_build, write_archive, ArchiveSummary, StageError};
use crate::config::StagerConfig;
use crate::foundation::fs;
use crate::foundation::time::Stopwatch;

/// Progress notifications emitted while staging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageEvent<'a> {
    /// A staging directory left over from a previous run was removed
    RemovedStaleStaging(&'a Path),
    /// The release build is about to run
    Building,
    /// An asset directory was copied into the staging directory
    StagedAssets {
        /// Asset directory name
        name: &'a Path,
        /// Files copied
        files: u64,
    },
    /// The executable was copied into the staging root
    StagedExecutable(&'a Path),
    /// Archive compression is starting
    Compressing,
    /// The staging directory was deleted
    CleanedUp,
}

/// Result of a successful staging run
#[derive(Debug, Clone)]
pub struct StageReport {
    /// Archive that was written
    pub archive: PathBuf,
    /// Archive contents
    pub summary: ArchiveSummary,
    /// Wall-clock time of the whole run
    pub elapsed: Duration,
}

/// Runs the build, stage, compress, clean up sequence
#[derive(Debug, Clone)]
pub struct Stager {
    config: StagerConfig,
}

impl Stager {
    /// Create a stager for `config`
    pub const fn new(config: StagerConfig) -> Self {
        Self { config }
    }

    /// Run the pipeline without progress notifications
    pub fn run(&self) -> Result<StageReport, StageError> {
        self.run_with(|_| {})
    }

    /// Run the pipeline, reporting progress to `on_event`
    ///
    /// Steps run strictly in sequence: remove a stale staging directory,
    /// build, create the staging directory, copy the asset directories and
    /// the executable, write the archive, remove the staging directory.
    /// The first failure aborts the run. A failed build leaves neither a
    /// staging directory nor an archive behind; later failures leave
    /// whatever was already staged.
    pub fn run_with(
        &self,
        mut on_event: impl FnMut(StageEvent<'_>),
    ) -> Result<StageReport, StageError> {
        let stopwatch = Stopwatch::start_new();
        let config = &self.config;
        let staging = config.resolve(&config.staging_dir);
        let archive = config.resolve(&config.archive);

        if fs::remove_dir_if_exists(&staging)? {
            log::info!("Removed stale staging directory {}", staging.display());
            on_event(StageEvent::RemovedStaleStaging(&staging));
        }

        on_event(StageEvent::Building);
        run_build(&config.build_command, &config.root)?;

        fs::create_dir(&staging)?;

        for name in &config.asset_dirs {
            let files = fs::copy_dir_all(config.resolve(name), staging.join(name))?;
            log::info!("Staged {} ({} files)", name.display(), files);
            on_event(StageEvent::StagedAssets {
                name: name.as_path(),
                files,
            });
        }

        let executable = fs::copy_file_into(config.resolve(&config.executable), &staging)?;
        log::info!("Staged executable {}", executable.display());
        on_event(StageEvent::StagedExecutable(&executable));

        on_event(StageEvent::Compressing);
        let summary = write_archive(&staging, &archive)?;

        fs::remove_dir_if_exists(&staging)?;
        on_event(StageEvent::CleanedUp);

        Ok(StageReport {
            archive,
            summary,
            elapsed: stopwatch.elapsed(),
        })
    }
}

/// Progress line printed when archive compression starts
pub const COMPRESSING_LINE: &str = "Compressing build...";

/// Final report line, e.g. `Done! in 12.3456 seconds`
pub fn format_duration_line(elapsed: Duration) -> String {
    format!("Done! in {:.4} seconds", elapsed.as_secs_f64())
}
