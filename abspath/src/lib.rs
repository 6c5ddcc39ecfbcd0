#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # abspath
//!
//! Normalized absolute filesystem paths and a recursive finder.
//!
//! An [`AbsPath`] always holds an absolute, lexically normalized path: no
//! `.` or `..` components, no repeated or trailing separators. Joining,
//! relative paths and extension parsing are pure string operations; only
//! the predicates, the finder and the [`fs`] operations touch the disk.
//!
//! ## Core Types
//!
//! - [`AbsPath`] and [`PathRelationship`]: the path value and how two paths
//!   relate
//! - [`Finder`], [`Entry`] and [`Control`]: recursive search with depth
//!   bounds, filters and early exit
//! - [`EntryKind`] and [`EntryProbe`]: the filesystem questions the path
//!   model asks
//! - [`Error`] and [`Result`]: Error handling types
//! - [`LogLevel`] and [`init_logger`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use abspath::{abspath, AbsPath};
//!
//! let root = AbsPath::root();
//! let file = abspath!(root, "usr", "share/../lib", "libfoo.tar.gz");
//!
//! assert_eq!(file.as_str(), "/usr/lib/libfoo.tar.gz");
//! assert_eq!(file.extension(), "tar.gz");
//! assert_eq!(file.parent().basename(), "lib");
//! assert_eq!(root.join("..").join(".."), root);
//! ```
//!
//! Searching:
//!
//! ```
//! use abspath::probe::EntryKind;
//! use abspath::AbsPath;
//!
//! # fn main() -> abspath::Result<()> {
//! AbsPath::mktemp(|dir| {
//!     dir.join("src/bin").mkpath()?;
//!     dir.join("src/lib.rs").touch()?;
//!     dir.join("src/bin/main.rs").touch()?;
//!     dir.join("README.md").touch()?;
//!
//!     let mut sources: Vec<_> = dir.find().kind(EntryKind::File).extension("rs").collect();
//!     sources.sort();
//!     assert_eq!(sources, [dir.join("src/bin/main.rs"), dir.join("src/lib.rs")]);
//!     Ok(())
//! })
//! # }
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod finder;
pub mod fs;
pub mod logging;
pub mod path;
pub mod probe;
pub mod temp;

// Re-export key types at crate root for convenience
pub use config::{Directories, Environment, Platform};
pub use error::{Error, Result};
pub use finder::{Control, DepthRange, EntriesExt, Entry, EntryFilter, Finder};
pub use logging::{init_logger, LogLevel, StderrLogger};
pub use path::{AbsPath, PathRelationship};
pub use probe::{EntryKind, EntryProbe, OsProbe};
pub use temp::TemporaryDirectory;
