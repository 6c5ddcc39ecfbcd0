//! Environment-driven configuration.
//!
//! abspath reads no configuration files. The only inputs it consults are
//! environment variables and process state (home and working directory),
//! reached through the [`Environment`] trait so they can be injected.
//!
//! [`Directories`] turns an environment into well-known locations. The
//! process environment takes cache, documents and data directories from
//! `directories::{BaseDirs, UserDirs}`; the right-hand columns are the
//! fallbacks under home when those have no answer:
//!
//! | Directory | Source | Linux fallback | macOS fallback |
//! |-----------|--------|----------------|----------------|
//! | temp | `TMPDIR`, `TEMP`, `TMP` | `/tmp` | `/tmp` |
//! | cache | [`Environment::cache_dir`] | `~/.cache` | `~/Library/Caches` |
//! | documents | [`Environment::document_dir`] | `~/Documents` | `~/Documents` |
//! | app support | [`Environment::data_dir`] | `~/.local/share` | `~/Library/Application Support` |

pub mod directories;
pub mod environment;

// Re-export key types
pub use directories::Directories;
pub use environment::{Environment, MapEnvironment, Platform, ProcessEnvironment};
