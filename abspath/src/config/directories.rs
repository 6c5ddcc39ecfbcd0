//! Well-known user directories.

use super::environment::{Environment, Platform, ProcessEnvironment};
use crate::path::AbsPath;

const DEFAULT_TEMP: &str = "/tmp";
const TEMP_VARS: [&str; 3] = ["TMPDIR", "TEMP", "TMP"];

/// Resolves the home, working, temporary, cache, documents and application
/// support directories from an [`Environment`].
///
/// Cache, documents and application support come from the environment's
/// base directory hooks. When a hook has nothing usable, the platform's
/// default location under home is used instead.
///
/// Nothing is created or checked on disk. A value that is missing or not
/// absolute yields `None` (or the fallback, where one exists).
///
/// # Examples
///
/// ```
/// use abspath::config::{Directories, MapEnvironment, Platform};
///
/// let env = MapEnvironment::new(Platform::Linux)
///     .with_home("/home/alice")
///     .with_document_dir("/home/alice/Docs");
/// let dirs = Directories::new(env);
///
/// assert_eq!(dirs.cache().unwrap().as_str(), "/home/alice/.cache");
/// assert_eq!(dirs.documents().unwrap().as_str(), "/home/alice/Docs");
/// assert_eq!(dirs.temp().as_str(), "/tmp");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Directories<E = ProcessEnvironment> {
    env: E,
}

impl<E: Environment> Directories<E> {
    /// Resolve directories against `env`.
    pub const fn new(env: E) -> Self {
        Self { env }
    }

    /// The environment being consulted.
    pub const fn environment(&self) -> &E {
        &self.env
    }

    /// The current user's home directory.
    pub fn home(&self) -> Option<AbsPath> {
        self.env.home_dir().as_deref().and_then(absolute)
    }

    /// The working directory.
    pub fn cwd(&self) -> Option<AbsPath> {
        self.env.current_dir().as_deref().and_then(absolute)
    }

    /// The first absolute value of `TMPDIR`, `TEMP` or `TMP`, else `/tmp`.
    pub fn temp(&self) -> AbsPath {
        TEMP_VARS
            .iter()
            .find_map(|key| self.absolute_var(key))
            .unwrap_or_else(|| AbsPath::root().join(DEFAULT_TEMP))
    }

    /// Per-user cache directory.
    pub fn cache(&self) -> Option<AbsPath> {
        let fallback = match self.env.platform() {
            Platform::MacOs => "Library/Caches",
            Platform::Linux | Platform::Other => ".cache",
        };
        self.base_dir("cache", self.env.cache_dir(), fallback)
    }

    /// Per-user documents directory.
    pub fn documents(&self) -> Option<AbsPath> {
        self.base_dir("documents", self.env.document_dir(), "Documents")
    }

    /// Per-user application data directory.
    pub fn application_support(&self) -> Option<AbsPath> {
        let fallback = match self.env.platform() {
            Platform::MacOs => "Library/Application Support",
            Platform::Linux | Platform::Other => ".local/share",
        };
        self.base_dir("application support", self.env.data_dir(), fallback)
    }

    fn absolute_var(&self, key: &str) -> Option<AbsPath> {
        let value = self.env.var(key)?;
        let rv = absolute(&value);
        if rv.is_none() {
            log::debug!("ignoring {key}={value:?}: not an absolute path");
        }
        rv
    }

    fn base_dir(&self, what: &str, value: Option<String>, fallback: &str) -> Option<AbsPath> {
        if let Some(value) = value {
            match absolute(&value) {
                Some(rv) => return Some(rv),
                None => log::debug!("ignoring {what} directory {value:?}: not an absolute path"),
            }
        }
        self.under_home(fallback)
    }

    fn under_home(&self, relative: &str) -> Option<AbsPath> {
        self.home().map(|home| home.join(relative))
    }
}

/// Accepts `/`-prefixed strings only. `~` is left to the caller.
fn absolute(value: &str) -> Option<AbsPath> {
    value
        .starts_with('/')
        .then(|| AbsPath::root().join(value))
}

impl AbsPath {
    /// The current user's home directory.
    #[must_use]
    pub fn home() -> Option<Self> {
        Directories::new(ProcessEnvironment).home()
    }

    /// The process working directory.
    #[must_use]
    pub fn cwd() -> Option<Self> {
        Directories::new(ProcessEnvironment).cwd()
    }

    /// The per-user documents directory.
    #[must_use]
    pub fn documents() -> Option<Self> {
        Directories::new(ProcessEnvironment).documents()
    }

    /// The per-user cache directory.
    #[must_use]
    pub fn caches() -> Option<Self> {
        Directories::new(ProcessEnvironment).cache()
    }

    /// The per-user application data directory.
    #[must_use]
    pub fn application_support() -> Option<Self> {
        Directories::new(ProcessEnvironment).application_support()
    }
}
