//! Kind and extension filters.
//!
//! Each filter starts out absent (everything passes). Adding a kind or an
//! extension creates the set; further additions widen it, so repeated calls
//! form a union rather than replacing one another.

use std::collections::HashSet;

use crate::path::AbsPath;
use crate::probe::{EntryKind, KindSet};

/// Which entries a finder yields.
///
/// # Examples
///
/// ```
/// use abspath::finder::EntryFilter;
/// use abspath::probe::EntryKind;
/// use abspath::AbsPath;
///
/// let filter = EntryFilter::default()
///     .with_kind(EntryKind::File)
///     .with_extension("json");
///
/// let file = AbsPath::root().join("foo.json");
/// assert!(filter.matches(&file, EntryKind::File));
/// assert!(!filter.matches(&file, EntryKind::Directory));
/// assert!(!filter.matches(&AbsPath::root().join("bar.txt"), EntryKind::File));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    kinds: Option<KindSet>,
    extensions: Option<HashSet<String>>,
}

impl EntryFilter {
    /// Also accept entries of `kind`.
    ///
    /// [`EntryKind::Absent`] is accepted for symmetry but never matches an
    /// enumerated entry.
    #[must_use]
    pub fn with_kind(mut self, kind: EntryKind) -> Self {
        self.kinds.get_or_insert_with(HashSet::new).insert(kind);
        self
    }

    /// Also accept entries whose extension is `ext`.
    ///
    /// A leading dot is ignored, so `"json"` and `".json"` are equivalent.
    /// Compound extensions such as `"tar.gz"` are matched whole.
    #[must_use]
    pub fn with_extension(mut self, ext: &str) -> Self {
        let ext = ext.strip_prefix('.').unwrap_or(ext);
        self.extensions
            .get_or_insert_with(HashSet::new)
            .insert(ext.to_string());
        self
    }

    /// The accepted kinds, `None` when kinds are not filtered.
    #[must_use]
    pub fn kinds(&self) -> Option<&KindSet> {
        self.kinds.as_ref()
    }

    /// The accepted extensions, `None` when extensions are not filtered.
    #[must_use]
    pub fn extensions(&self) -> Option<&HashSet<String>> {
        self.extensions.as_ref()
    }

    /// Returns `true` if nothing is filtered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_none() && self.extensions.is_none()
    }

    /// Returns `true` if an entry at `path` of `kind` passes every filter.
    #[must_use]
    pub fn matches(&self, path: &AbsPath, kind: EntryKind) -> bool {
        if let Some(kinds) = &self.kinds {
            if !kinds.contains(&kind) {
                return false;
            }
        }
        if let Some(extensions) = &self.extensions {
            if !extensions.contains(path.extension()) {
                return false;
            }
        }
        true
    }
}
