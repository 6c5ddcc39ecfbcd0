//! Common test utilities for integration tests.
//!
//! This module provides a fixture builder that lays out a directory tree
//! under a temporary directory, plus helpers for comparing finder output.

use std::collections::BTreeSet;

use abspath::AbsPath;

/// A directory tree under a temporary root, removed on drop.
pub struct Tree {
    // Keeps the directory alive.
    _guard: tempfile::TempDir,
    /// The tree's root.
    pub root: AbsPath,
}

impl Tree {
    /// Paths below the root, relative to it.
    #[allow(dead_code)]
    pub fn relative<I>(&self, paths: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = AbsPath>,
    {
        paths.into_iter().map(|p| p.relative_to(&self.root)).collect()
    }
}

/// Builder for test trees.
///
/// Entries ending in `/` are directories; anything else is an empty file.
/// Parents are created as needed.
///
/// # Examples
///
/// ```no_run
/// # use common::TreeFixture;
/// let tree = TreeFixture::new().entries(&["a", "b/c", "b/d/e", "empty/"]).build();
/// assert!(tree.root.join("b/d").is_dir());
/// ```
#[derive(Default)]
pub struct TreeFixture {
    entries: Vec<String>,
    #[cfg(unix)]
    links: Vec<(String, String)>,
}

#[allow(dead_code)]
impl TreeFixture {
    /// An empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// The tree used throughout the depth tests: `a`, `b/c`, `b/d/e`.
    pub fn standard() -> Self {
        Self::new().entries(&["a", "b/c", "b/d/e"])
    }

    /// Add entries.
    pub fn entries(mut self, entries: &[&str]) -> Self {
        self.entries.extend(entries.iter().map(|s| (*s).to_string()));
        self
    }

    /// Add a symlink at `link` pointing to `target` (relative to the root).
    #[cfg(unix)]
    pub fn symlink(mut self, link: &str, target: &str) -> Self {
        self.links.push((link.to_string(), target.to_string()));
        self
    }

    /// Create everything on disk.
    pub fn build(self) -> Tree {
        let guard = tempfile::tempdir().expect("create temp dir");
        let root = AbsPath::try_from(guard.path()).expect("temp dir is absolute UTF-8");

        for entry in &self.entries {
            let path = root.join(entry);
            if entry.ends_with('/') {
                path.mkpath().expect("create directory");
            } else {
                path.parent().mkpath().expect("create parent");
                path.touch().expect("create file");
            }
        }

        #[cfg(unix)]
        for (link, target) in &self.links {
            let link = root.join(link);
            link.parent().mkpath().expect("create parent");
            root.join(target).symlink_as(&link).expect("create symlink");
        }

        Tree {
            _guard: guard,
            root,
        }
    }
}

/// Shorthand for an expected set of relative paths.
#[allow(dead_code)]
pub fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
