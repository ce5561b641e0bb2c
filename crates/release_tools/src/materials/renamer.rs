//! Material directory scan and rename

use std::fmt;
use std::path::{Path, PathBuf};

use super::{PatternTable, RenameError};
use crate::foundation::fs;

/// A texture moved to its canonical name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    /// Original texture path
    pub source: PathBuf,
    /// Canonical path inside the same material directory
    pub destination: PathBuf,
    /// Canonical name of the matched pattern
    pub canonical_name: String,
}

/// Progress line, e.g. `Moved rock/Rock_Normal.png to rock/normal.png`
impl fmt::Display for Rename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Moved {} to {}",
            self.source.display(),
            self.destination.display()
        )
    }
}

/// Outcome of a renamer run
#[derive(Debug, Clone, Default)]
pub struct RenameReport {
    /// Material directories scanned
    pub directories_scanned: usize,
    /// Files tested against the pattern table
    pub files_inspected: usize,
    /// Renames in the order they happened
    pub renames: Vec<Rename>,
}

/// Rename textures in every material directory under `root`
///
/// See [`rename_materials_with`].
pub fn rename_materials(
    root: impl AsRef<Path>,
    table: &PatternTable,
) -> Result<RenameReport, RenameError> {
    rename_materials_with(root, table, |_| {})
}

/// Rename textures in every material directory under `root`, reporting each move
///
/// Each immediate subdirectory of `root` is a material directory. Every
/// regular file directly inside it is classified with `table` and, on a
/// match, renamed to `<material dir>/<canonical name>.png`. An existing file
/// at the destination is overwritten without warning. Files at the top level
/// of `root`, nested directories and unmatched files are left alone.
///
/// The first filesystem error aborts the run; renames already done stay done.
pub fn rename_materials_with(
    root: impl AsRef<Path>,
    table: &PatternTable,
    mut on_rename: impl FnMut(&Rename),
) -> Result<RenameReport, RenameError> {
    let root = root.as_ref();
    let mut report = RenameReport::default();

    log::info!("Scanning material directories in {}", root.display());

    for entry in fs::read_dir_entries(root)? {
        let material_dir = entry.path();
        if !material_dir.is_dir() {
            log::trace!("Skipping top-level entry {}", material_dir.display());
            continue;
        }

        report.directories_scanned += 1;
        rename_directory(&material_dir, table, &mut report, &mut on_rename)?;
    }

    log::info!(
        "Renamed {} of {} textures in {} material directories",
        report.renames.len(),
        report.files_inspected,
        report.directories_scanned
    );

    Ok(report)
}

fn rename_directory(
    material_dir: &Path,
    table: &PatternTable,
    report: &mut RenameReport,
    on_rename: &mut impl FnMut(&Rename),
) -> Result<(), RenameError> {
    for entry in fs::read_dir_entries(material_dir)? {
        let source = entry.path();
        if !source.is_file() {
            continue;
        }

        report.files_inspected += 1;

        let file_name = entry.file_name();
        let file_name = file_name.to_string_lossy();
        let Some(pattern) = table.classify(&file_name) else {
            log::debug!("No texture pattern matches {}", source.display());
            continue;
        };

        let destination = material_dir.join(pattern.canonical_file_name());
        log::debug!("{} matches '{}'", source.display(), pattern.pattern());
        fs::rename(&source, &destination)?;

        let rename = Rename {
            source,
            destination,
            canonical_name: pattern.canonical_name().to_string(),
        };
        on_rename(&rename);
        report.renames.push(rename);
    }

    Ok(())
}
