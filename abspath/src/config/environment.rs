//! Process environment access.
//!
//! Everything that reads environment variables, the home directory, the
//! working directory or the per-user base directories goes through the
//! [`Environment`] trait so callers and tests can substitute a fixed
//! environment.
//!
//! [`ProcessEnvironment`] resolves base directories with the `directories`
//! crate, which follows the XDG rules on Linux (including
//! `~/.config/user-dirs.dirs` for documents) and `~/Library` on macOS.

use std::collections::HashMap;
use std::env;
use std::fmt;
use std::path::Path;

use ::directories::{BaseDirs, UserDirs};

/// The operating-system family, as far as directory conventions go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// macOS: `~/Library` conventions.
    MacOs,
    /// Linux: XDG base directories.
    Linux,
    /// Anything else. Treated like Linux without the XDG variables.
    Other,
}

impl Platform {
    /// The platform this binary was compiled for.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::MacOs
        } else if cfg!(target_os = "linux") {
            Self::Linux
        } else {
            Self::Other
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MacOs => write!(f, "macos"),
            Self::Linux => write!(f, "linux"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Source of environment variables and well-known process state.
///
/// All values are raw strings; [`Directories`](super::Directories) decides
/// which of them are usable.
pub trait Environment {
    /// The value of `key`, `None` if unset or not valid Unicode.
    fn var(&self, key: &str) -> Option<String>;

    /// The current user's home directory.
    fn home_dir(&self) -> Option<String>;

    /// The process working directory.
    fn current_dir(&self) -> Option<String>;

    /// The per-user cache directory, if the platform defines one.
    fn cache_dir(&self) -> Option<String>;

    /// The per-user application data directory.
    fn data_dir(&self) -> Option<String>;

    /// The per-user documents directory.
    fn document_dir(&self) -> Option<String>;

    /// The platform whose conventions apply.
    fn platform(&self) -> Platform;
}

/// The real process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }

    fn home_dir(&self) -> Option<String> {
        home::home_dir().as_deref().and_then(utf8)
    }

    fn current_dir(&self) -> Option<String> {
        match env::current_dir() {
            Ok(dir) => utf8(&dir),
            Err(e) => {
                log::debug!("working directory unavailable: {e}");
                None
            }
        }
    }

    fn cache_dir(&self) -> Option<String> {
        BaseDirs::new().and_then(|d| utf8(d.cache_dir()))
    }

    fn data_dir(&self) -> Option<String> {
        BaseDirs::new().and_then(|d| utf8(d.data_dir()))
    }

    fn document_dir(&self) -> Option<String> {
        UserDirs::new().and_then(|d| d.document_dir().and_then(utf8))
    }

    fn platform(&self) -> Platform {
        Platform::current()
    }
}

fn utf8(path: &Path) -> Option<String> {
    let rv = path.to_str().map(str::to_owned);
    if rv.is_none() {
        log::debug!("ignoring non-UTF-8 path {}", path.display());
    }
    rv
}

/// A fixed environment, built up explicitly.
///
/// # Examples
///
/// ```
/// use abspath::config::{Environment, MapEnvironment, Platform};
///
/// let env = MapEnvironment::new(Platform::Linux)
///     .with_home("/home/alice")
///     .with_cache_dir("/var/cache/alice")
///     .with_var("TMPDIR", "/scratch");
///
/// assert_eq!(env.home_dir().as_deref(), Some("/home/alice"));
/// assert_eq!(env.cache_dir().as_deref(), Some("/var/cache/alice"));
/// assert_eq!(env.var("TMPDIR").as_deref(), Some("/scratch"));
/// assert_eq!(env.document_dir(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapEnvironment {
    vars: HashMap<String, String>,
    home: Option<String>,
    cwd: Option<String>,
    cache: Option<String>,
    data: Option<String>,
    documents: Option<String>,
    platform: Platform,
}

impl MapEnvironment {
    /// An empty environment for `platform`.
    #[must_use]
    pub fn new(platform: Platform) -> Self {
        Self {
            vars: HashMap::new(),
            home: None,
            cwd: None,
            cache: None,
            data: None,
            documents: None,
            platform,
        }
    }

    /// Set a variable.
    #[must_use]
    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }

    /// Set the home directory.
    #[must_use]
    pub fn with_home(mut self, home: &str) -> Self {
        self.home = Some(home.to_string());
        self
    }

    /// Set the working directory.
    #[must_use]
    pub fn with_cwd(mut self, cwd: &str) -> Self {
        self.cwd = Some(cwd.to_string());
        self
    }

    /// Set the cache directory.
    #[must_use]
    pub fn with_cache_dir(mut self, dir: &str) -> Self {
        self.cache = Some(dir.to_string());
        self
    }

    /// Set the application data directory.
    #[must_use]
    pub fn with_data_dir(mut self, dir: &str) -> Self {
        self.data = Some(dir.to_string());
        self
    }

    /// Set the documents directory.
    #[must_use]
    pub fn with_document_dir(mut self, dir: &str) -> Self {
        self.documents = Some(dir.to_string());
        self
    }
}

impl Environment for MapEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn home_dir(&self) -> Option<String> {
        self.home.clone()
    }

    fn current_dir(&self) -> Option<String> {
        self.cwd.clone()
    }

    fn cache_dir(&self) -> Option<String> {
        self.cache.clone()
    }

    fn data_dir(&self) -> Option<String> {
        self.data.clone()
    }

    fn document_dir(&self) -> Option<String> {
        self.documents.clone()
    }

    fn platform(&self) -> Platform {
        self.platform
    }
}
