//! Single-level directory listing.

use std::fs;

use super::control::Entry;
use crate::error::{Error, Result};
use crate::path::AbsPath;
use crate::probe::EntryKind;

impl AbsPath {
    /// List the direct children of this directory, excluding hidden entries
    /// (names starting with `.`).
    ///
    /// Entries come back in the order the filesystem returns them. Symlinks
    /// are reported as [`EntryKind::Symlink`] and are not followed.
    ///
    /// # Errors
    ///
    /// Fails if the directory cannot be opened: [`Error::PathNotFound`],
    /// [`Error::PermissionDenied`], or [`Error::Io`] (for instance when the
    /// path is a file).
    pub fn ls(&self) -> Result<Vec<Entry>> {
        self.list(false)
    }

    /// Like [`ls`](AbsPath::ls), but hidden entries are included.
    ///
    /// # Errors
    ///
    /// Same as [`ls`](AbsPath::ls).
    pub fn ls_all(&self) -> Result<Vec<Entry>> {
        self.list(true)
    }

    fn list(&self, include_hidden: bool) -> Result<Vec<Entry>> {
        let reader = fs::read_dir(self.as_path()).map_err(|e| Error::from_io(self, e))?;

        let mut entries = Vec::new();
        for item in reader {
            let item = match item {
                Ok(item) => item,
                Err(e) => {
                    log::debug!("skipping unreadable entry in {self}: {e}");
                    continue;
                }
            };
            let name = item.file_name();
            let Some(name) = name.to_str() else {
                log::warn!("skipping non UTF-8 name in {self}: {}", name.to_string_lossy());
                continue;
            };
            if !include_hidden && is_hidden(name) {
                continue;
            }
            let kind = match item.file_type() {
                Ok(file_type) => EntryKind::from(file_type),
                Err(e) => {
                    log::debug!("skipping {name} in {self}: {e}");
                    continue;
                }
            };
            entries.push(Entry {
                kind,
                path: self.join(name),
                depth: 1,
            });
        }
        Ok(entries)
    }
}

/// Returns `true` for dot-files.
#[must_use]
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Partitioning helpers for a listing.
pub trait EntriesExt {
    /// Paths of the directory entries.
    fn directories(&self) -> Vec<AbsPath>;

    /// Paths of the regular-file entries.
    fn files(&self) -> Vec<AbsPath>;

    /// Paths of the regular-file entries whose extension is `ext`. A leading
    /// dot in `ext` is ignored.
    fn files_with_extension(&self, ext: &str) -> Vec<AbsPath>;
}

impl EntriesExt for [Entry] {
    fn directories(&self) -> Vec<AbsPath> {
        paths_where(self, Entry::is_dir)
    }

    fn files(&self) -> Vec<AbsPath> {
        paths_where(self, Entry::is_file)
    }

    fn files_with_extension(&self, ext: &str) -> Vec<AbsPath> {
        let ext = ext.strip_prefix('.').unwrap_or(ext);
        paths_where(self, |entry| entry.is_file() && entry.path.extension() == ext)
    }
}

fn paths_where<F>(entries: &[Entry], mut keep: F) -> Vec<AbsPath>
where
    F: FnMut(&Entry) -> bool,
{
    entries
        .iter()
        .filter(|entry| keep(entry))
        .map(|entry| entry.path.clone())
        .collect()
}
