//! Per-entry control flow for push-based enumeration.

use crate::path::AbsPath;
use crate::probe::EntryKind;

/// What a visitor wants the walk to do after seeing an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Control {
    /// Carry on with the next entry.
    #[default]
    Continue,
    /// If the entry is a directory, do not descend into it. Siblings are
    /// still visited. For any other kind this is the same as `Continue`.
    Skip,
    /// Stop the walk. The finder is exhausted afterwards.
    Abort,
}

/// An entry produced by a walk or a listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    /// The kind of this entry, as reported without following symlinks.
    pub kind: EntryKind,
    /// The full path of this entry.
    pub path: AbsPath,
    /// Nesting level below the walk root (1 for direct children).
    pub depth: usize,
}

impl Entry {
    /// Returns `true` if this entry is a directory.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Returns `true` if this entry is a regular file.
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}
