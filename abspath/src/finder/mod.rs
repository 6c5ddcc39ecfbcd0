//! Recursive search and directory listing.
//!
//! # Key Concepts
//!
//! ## Depth
//!
//! The search root is depth 0, its children depth 1, and so on. The root
//! itself is never yielded, so a [`DepthRange`] with a lower bound of 0
//! behaves like one starting at 1. The default range is `1..`.
//!
//! ## Filters
//!
//! [`EntryFilter`] narrows results by [`EntryKind`](crate::probe::EntryKind)
//! and by extension. Filters only decide what is yielded; a directory that
//! fails a filter is still descended into.
//!
//! ## Control flow
//!
//! [`Finder::execute`] hands each [`Entry`] to a visitor which answers with
//! a [`Control`]: keep going, skip the directory's subtree, or abort.
//!
//! ## Symlinks
//!
//! Symlinks inside the tree are reported as symlinks and never followed, so
//! cycles cannot occur. A symlinked search root is followed.

pub mod control;
pub mod depth;
pub mod filter;
pub mod listing;
mod walk;

// Re-export key types
pub use control::{Control, Entry};
pub use depth::DepthRange;
pub use filter::EntryFilter;
pub use listing::EntriesExt;
pub use walk::Finder;
