//! Path relationship checking.
//!
//! Relationships are decided component by component on normalized paths, so
//! `/foo` is not an ancestor of `/foobar` and no filesystem access happens.

use crate::path::AbsPath;

/// Relationship between two paths.
///
/// # Examples
///
/// ```
/// use abspath::{AbsPath, PathRelationship};
///
/// let parent = AbsPath::root().join("home/user");
/// let child = AbsPath::root().join("home/user/project");
///
/// assert_eq!(
///     PathRelationship::between(&parent, &child),
///     PathRelationship::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path is an ancestor of the second.
    Ancestor,

    /// The first path is a descendant of the second.
    Descendant,

    /// The paths are the same.
    Same,

    /// Neither path is an ancestor or descendant of the other.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths.
    ///
    /// # Examples
    ///
    /// ```
    /// use abspath::{AbsPath, PathRelationship};
    ///
    /// let a = AbsPath::root().join("a");
    /// let ab = AbsPath::root().join("a/b");
    /// let b = AbsPath::root().join("b");
    ///
    /// assert_eq!(PathRelationship::between(&a, &ab), PathRelationship::Ancestor);
    /// assert_eq!(PathRelationship::between(&ab, &a), PathRelationship::Descendant);
    /// assert_eq!(PathRelationship::between(&a, &a), PathRelationship::Same);
    /// assert_eq!(PathRelationship::between(&a, &b), PathRelationship::Unrelated);
    /// ```
    #[must_use]
    pub fn between(path1: &AbsPath, path2: &AbsPath) -> Self {
        if path1 == path2 {
            return Self::Same;
        }

        if path2.starts_with(path1) {
            return Self::Ancestor;
        }

        if path1.starts_with(path2) {
            return Self::Descendant;
        }

        Self::Unrelated
    }

    /// Check if the relationship is hierarchical (not unrelated).
    #[must_use]
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Self::Ancestor | Self::Descendant | Self::Same)
    }

    /// Check if a path is within a directory (descendant or same).
    ///
    /// # Examples
    ///
    /// ```
    /// use abspath::{AbsPath, PathRelationship};
    ///
    /// let dir = AbsPath::root().join("home/user");
    /// let file = dir.join("file.txt");
    ///
    /// assert!(PathRelationship::is_within(&file, &dir));
    /// assert!(PathRelationship::is_within(&dir, &dir));
    /// assert!(!PathRelationship::is_within(&dir, &file));
    /// ```
    #[must_use]
    pub fn is_within(path: &AbsPath, directory: &AbsPath) -> bool {
        matches!(
            Self::between(path, directory),
            Self::Descendant | Self::Same
        )
    }

    /// Check if a path contains another path (ancestor or same).
    #[must_use]
    pub fn contains(path: &AbsPath, other: &AbsPath) -> bool {
        matches!(Self::between(path, other), Self::Ancestor | Self::Same)
    }

    /// Get a human-readable description of the relationship.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Ancestor => "ancestor",
            Self::Descendant => "descendant",
            Self::Same => "same",
            Self::Unrelated => "unrelated",
        }
    }
}

impl std::fmt::Display for PathRelationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}
