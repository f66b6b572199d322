use std::ffi::{OsStr, OsString};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};

/// Create `dir` (and parents) if missing, then delete every regular file directly
/// inside it. Subdirectories and their contents are left alone.
pub fn prepare_dir(dir: &Path) -> Result<usize> {
    fs::create_dir_all(dir)?;
    clear_top_level_files(dir)
}

/// Delete the regular files at the top level of `dir`. Returns how many were removed.
pub fn clear_top_level_files(dir: &Path) -> Result<usize> {
    let mut removed = 0;
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            fs::remove_file(&path)?;
            removed += 1;
        }
    }
    if removed > 0 {
        info!("Cleared {} file(s) from {:?}", removed, dir);
    }
    Ok(removed)
}

/// A top-level directory entry, as seen by the batch loop. `name` is the lossy form used
/// for extension matching and messages; `file_name` is the exact name on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub file_name: OsString,
    pub path: PathBuf,
}

impl DirEntry {
    pub fn is_file(&self) -> bool {
        self.path.is_file()
    }
}

/// Every top-level entry of `dir` (files, directories, anything), sorted by name.
pub fn list_sorted_entries(dir: &Path) -> Result<Vec<DirEntry>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        entries.push((entry.file_name(), entry.path()));
    }
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    Ok(entries
        .into_iter()
        .map(|(file_name, path)| DirEntry {
            name: file_name.to_string_lossy().into_owned(),
            file_name,
            path,
        })
        .collect())
}

/// Destination of `name` inside `archive_dir`, refusing to replace an existing file.
pub fn archive_destination(archive_dir: &Path, name: &OsStr) -> Result<PathBuf> {
    let destination = archive_dir.join(name);
    if destination.exists() {
        return Err(Error::ArchiveCollision { path: destination });
    }
    Ok(destination)
}

/// Move `source` into `archive_dir`, keeping its file name.
pub fn move_into(source: &Path, archive_dir: &Path, name: &OsStr) -> Result<PathBuf> {
    let destination = archive_destination(archive_dir, name)?;
    match fs::rename(source, &destination) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::CrossesDevices => {
            debug!("rename across devices, copying {:?} instead", source);
            fs::copy(source, &destination)?;
            fs::remove_file(source)?;
        }
        Err(e) => return Err(e.into()),
    }
    Ok(destination)
}
