//! Distribution archive writer

use std::ffi::OsString;
use std::fs::File;
use std::io::{self, Seek, Write};
use std::path::{Component, Path, PathBuf};

use sevenz_rust::{SevenZArchiveEntry, SevenZWriter};

use super::StageError;
use crate::foundation::fs::{self, FsError};

/// What went into an archive
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArchiveSummary {
    /// File entries written
    pub files: usize,
    /// Directory entries written
    pub directories: usize,
    /// Uncompressed bytes of all files
    pub bytes: u64,
}

/// Compress the tree under `staging_root` into a 7z archive at `archive_path`
///
/// Entry names are relative to `staging_root` and use `/` separators.
/// Entries are written in file name order so identical trees produce
/// identically ordered archives.
///
/// The archive is written next to `archive_path` under a `.partial` suffix
/// and renamed over `archive_path` once complete. An existing archive is
/// only replaced by a finished one.
pub fn write_archive(staging_root: &Path, archive_path: &Path) -> Result<ArchiveSummary, StageError> {
    let partial = partial_path(archive_path);

    let summary = match write_partial(staging_root, &partial) {
        Ok(summary) => summary,
        Err(err) => {
            match std::fs::remove_file(&partial) {
                Err(e) if e.kind() != io::ErrorKind::NotFound => {
                    log::warn!("Could not remove {}: {}", partial.display(), e);
                }
                _ => {}
            }
            return Err(err);
        }
    };

    fs::rename(&partial, archive_path)?;

    log::info!(
        "Wrote {} ({} files, {} directories, {} bytes uncompressed)",
        archive_path.display(),
        summary.files,
        summary.directories,
        summary.bytes
    );

    Ok(summary)
}

/// `<archive_path>.partial`
fn partial_path(archive_path: &Path) -> PathBuf {
    let mut partial = OsString::from(archive_path.as_os_str());
    partial.push(".partial");
    PathBuf::from(partial)
}

fn write_partial(staging_root: &Path, partial: &Path) -> Result<ArchiveSummary, StageError> {
    let mut writer = SevenZWriter::create(partial).map_err(|source| StageError::Archive {
        path: partial.to_path_buf(),
        source,
    })?;

    let mut summary = ArchiveSummary::default();
    append_dir(&mut writer, staging_root, staging_root, &mut summary)?;

    writer.finish().map_err(|e| FsError {
        op: "finish archive",
        path: partial.to_path_buf(),
        source: e,
    })?;

    Ok(summary)
}

fn append_dir<W: Write + Seek>(
    writer: &mut SevenZWriter<W>,
    staging_root: &Path,
    dir: &Path,
    summary: &mut ArchiveSummary,
) -> Result<(), StageError> {
    let mut entries = fs::read_dir_entries(dir)?;
    entries.sort_by_key(std::fs::DirEntry::file_name);

    for entry in entries {
        let path = entry.path();
        let name = entry_name(staging_root, &path)?;
        let archive_err = |source: sevenz_rust::Error| StageError::Archive {
            path: path.clone(),
            source,
        };

        if path.is_dir() {
            let archive_entry = SevenZArchiveEntry::from_path(&path, name);
            writer
                .push_archive_entry::<&[u8]>(archive_entry, None)
                .map_err(archive_err)?;
            summary.directories += 1;
            append_dir(writer, staging_root, &path, summary)?;
        } else {
            let source = File::open(&path).map_err(|e| FsError {
                op: "open",
                path: path.clone(),
                source: e,
            })?;
            let bytes = source
                .metadata()
                .map_err(|e| FsError {
                    op: "read metadata of",
                    path: path.clone(),
                    source: e,
                })?
                .len();

            log::trace!("Archiving {} ({} bytes)", name, bytes);
            let archive_entry = SevenZArchiveEntry::from_path(&path, name);
            writer
                .push_archive_entry(archive_entry, Some(source))
                .map_err(archive_err)?;

            summary.files += 1;
            summary.bytes += bytes;
        }
    }

    Ok(())
}

/// Archive entry name of `path`: relative to `staging_root`, `/`-separated
fn entry_name(staging_root: &Path, path: &Path) -> Result<String, StageError> {
    let relative = path
        .strip_prefix(staging_root)
        .map_err(|_| StageError::OutsideStaging(path.to_path_buf()))?;

    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_string_lossy()),
            _ => return Err(StageError::OutsideStaging(path.to_path_buf())),
        }
    }

    Ok(parts.join("/"))
}
