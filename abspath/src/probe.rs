//! The filesystem probe: the only place the path model asks the OS anything.
//!
//! The core needs exactly two answers from the operating system: what kind
//! of entry (if any) lives at a normalized path, and where a user's home
//! directory is. [`EntryProbe`] fixes that contract; [`OsProbe`] is the real
//! implementation.

use std::collections::HashSet;
use std::env;
use std::fs::{self, FileType};

use crate::path::AbsPath;

/// Classification of a filesystem entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// A regular file, or anything else that is neither a directory nor a
    /// symlink (sockets, fifos, devices).
    File,
    /// A directory.
    Directory,
    /// A symbolic link. Links are never followed when classifying.
    Symlink,
    /// Nothing exists at the path, or it could not be inspected.
    Absent,
}

impl EntryKind {
    /// Returns `true` unless the kind is [`EntryKind::Absent`].
    #[must_use]
    pub fn exists(self) -> bool {
        !matches!(self, Self::Absent)
    }
}

impl From<FileType> for EntryKind {
    fn from(file_type: FileType) -> Self {
        if file_type.is_symlink() {
            Self::Symlink
        } else if file_type.is_dir() {
            Self::Directory
        } else {
            Self::File
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Directory => write!(f, "directory"),
            Self::Symlink => write!(f, "symlink"),
            Self::Absent => write!(f, "absent"),
        }
    }
}

/// Capability the path model requires from the operating system.
///
/// Implementations must be side-effect free from the caller's point of
/// view: probing never creates, modifies or caches anything.
pub trait EntryProbe {
    /// Classify the entry at `path` without following symlinks.
    fn classify(&self, path: &AbsPath) -> EntryKind;

    /// Resolve a home directory.
    ///
    /// `None` asks for the current user's home, `Some(name)` for the named
    /// user's. Returns `None` when there is no such home.
    fn resolve_home(&self, user: Option<&str>) -> Option<String>;
}

/// Probe backed by the real operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsProbe;

impl EntryProbe for OsProbe {
    fn classify(&self, path: &AbsPath) -> EntryKind {
        match fs::symlink_metadata(path.as_path()) {
            Ok(meta) => meta.file_type().into(),
            Err(e) => {
                log::trace!("classify {path}: {e}");
                EntryKind::Absent
            }
        }
    }

    fn resolve_home(&self, user: Option<&str>) -> Option<String> {
        match user {
            None => current_home(),
            Some(name) if is_current_user(name) => current_home(),
            Some(name) => passwd_home(name),
        }
    }
}

fn current_home() -> Option<String> {
    let home = home::home_dir()?;
    home.to_str().map(str::to_string)
}

fn is_current_user(name: &str) -> bool {
    ["USER", "LOGNAME"]
        .iter()
        .filter_map(|key| env::var(key).ok())
        .any(|current| current == name)
}

/// Look up `name` in the system user database file.
fn passwd_home(name: &str) -> Option<String> {
    let contents = match fs::read_to_string("/etc/passwd") {
        Ok(contents) => contents,
        Err(e) => {
            log::debug!("cannot read /etc/passwd: {e}");
            return None;
        }
    };
    home_from_passwd(&contents, name)
}

/// Extract the home directory field for `name` from passwd-formatted text.
fn home_from_passwd(contents: &str, name: &str) -> Option<String> {
    contents
        .lines()
        .filter(|line| !line.starts_with('#'))
        .map(|line| line.split(':').collect::<Vec<_>>())
        .find(|fields| fields.len() >= 6 && fields[0] == name)
        .map(|fields| fields[5].to_string())
        .filter(|home| !home.is_empty())
}

/// A set of kinds, used by the finder's kind filter.
pub type KindSet = HashSet<EntryKind>;
