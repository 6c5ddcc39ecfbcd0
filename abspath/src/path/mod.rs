//! Normalized absolute paths and the lexical algebra over them.
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! Every [`AbsPath`] is normalized at construction:
//! - A leading `~` or `~user` is expanded to a home directory
//! - `.` and `..` components are resolved lexically (`..` at the root is a
//!   no-op)
//! - Repeated and trailing separators are collapsed
//!
//! Nothing here touches the filesystem except home-directory lookup, which
//! goes through an [`EntryProbe`](crate::probe::EntryProbe).
//!
//! ## Joining
//!
//! [`AbsPath::join`] is total: it re-applies the same lexical rules to the
//! concatenation, treats a leading `/` in the component as part of the
//! append, and never expands `~`.
//!
//! ## Canonicalization
//!
//! Only [`AbsPath::realpath`] and [`AbsPath::readlink`] look at symlinks.
//! Two paths that reach one file through different links compare unequal
//! until canonicalized.
//!
//! # Examples
//!
//! ```
//! use abspath::AbsPath;
//!
//! let base = AbsPath::root().join("tmp");
//! let file = &base / "foo" / "bar.tar.gz";
//!
//! assert_eq!(file.as_str(), "/tmp/foo/bar.tar.gz");
//! assert_eq!(file.extension(), "tar.gz");
//! assert_eq!(file.basename_without_extension(), "bar");
//! assert_eq!(file.relative_to(&base), "foo/bar.tar.gz");
//! assert_eq!(base.relative_to(&file), "../..");
//! ```

pub mod algebra;
pub mod canonicalize;
pub mod normalize;
pub mod relationship;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use algebra::COMPOUND_EXTENSIONS;
pub use relationship::PathRelationship;
pub use types::AbsPath;
