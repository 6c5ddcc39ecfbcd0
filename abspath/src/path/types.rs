//! The normalized absolute path value type.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Div;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::path::normalize::{self, SEPARATOR};
use crate::probe::{EntryKind, EntryProbe, OsProbe};

/// A normalized absolute filesystem path.
///
/// The underlying representation is a `String` that always starts with `/`,
/// contains no `.`, `..` or empty components, and has no trailing separator
/// unless it is the root. There may or may not be anything on disk at the
/// path.
///
/// Equality and hashing compare the normalized string, so two different
/// symlinks to one file are *not* equal; use [`AbsPath::realpath`] to
/// compare real locations. Ordering is a case-insensitive collation with a
/// byte-order tiebreak, so sorted listings read the way a file browser shows
/// them.
///
/// # Examples
///
/// ```
/// use abspath::AbsPath;
///
/// let path = AbsPath::new("/usr/local/../bin/./ls").unwrap();
/// assert_eq!(path.as_str(), "/usr/bin/ls");
///
/// assert!(AbsPath::new("relative/path").is_none());
///
/// let joined = AbsPath::root() / "a" / "b/../c";
/// assert_eq!(joined.as_str(), "/a/c");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct AbsPath {
    string: String,
}

impl AbsPath {
    /// Wrap a string that is already normalized.
    pub(crate) fn from_normalized(string: String) -> Self {
        debug_assert!(
            normalize::is_normalized(&string),
            "not normalized: {string:?}"
        );
        Self { string }
    }

    /// The filesystem root, `/`.
    #[must_use]
    pub fn root() -> Self {
        Self::from_normalized(SEPARATOR.to_string())
    }

    /// Parse an absolute path, expanding a leading `~` against the real
    /// home directory.
    ///
    /// Returns `None` unless `input` starts with `/` or `~`, or if a `~user`
    /// prefix names a user without a home directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use abspath::AbsPath;
    ///
    /// assert_eq!(AbsPath::new("//foo///bar//").unwrap().as_str(), "/foo/bar");
    /// assert_eq!(AbsPath::new("/..").unwrap(), AbsPath::root());
    /// assert!(AbsPath::new("foo").is_none());
    /// ```
    #[must_use]
    pub fn new(input: &str) -> Option<Self> {
        Self::parse_with(input, &OsProbe)
    }

    /// Parse an absolute path, resolving home directories through `probe`.
    #[must_use]
    pub fn parse_with<P>(input: &str, probe: &P) -> Option<Self>
    where
        P: EntryProbe + ?Sized,
    {
        normalize::normalize(input, probe).map(Self::from_normalized)
    }

    /// The normalized string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.string
    }

    /// The normalized string as a `std::path::Path`.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        Path::new(&self.string)
    }

    /// Convert into the underlying `String`.
    #[must_use]
    pub fn into_string(self) -> String {
        self.string
    }

    /// Returns `true` if this is the root path.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.string.len() == 1
    }

    /// Join a relative component onto this path.
    ///
    /// Never fails. `component` may contain several `/`-separated parts;
    /// leading separators are absorbed rather than replacing `self`; `.` and
    /// `..` are applied lexically; an empty component returns a copy of
    /// `self`. A `~` is an ordinary character here.
    ///
    /// # Examples
    ///
    /// ```
    /// use abspath::AbsPath;
    ///
    /// let root = AbsPath::root();
    /// assert_eq!(root.join("a/b").as_str(), "/a/b");
    /// assert_eq!(root.join("a").join("/b").as_str(), "/a/b");
    /// assert_eq!(root.join("a/foo").join("../../../bar").as_str(), "/bar");
    /// assert_eq!(root.join("~/b").as_str(), "/~/b");
    /// ```
    #[must_use]
    pub fn join(&self, component: impl AsRef<str>) -> Self {
        Self::from_normalized(normalize::join_components(
            &self.string,
            component.as_ref(),
        ))
    }

    /// The parent directory. The root is its own parent.
    ///
    /// # Examples
    ///
    /// ```
    /// use abspath::AbsPath;
    ///
    /// assert_eq!(AbsPath::root().join("a/b").parent().as_str(), "/a");
    /// assert_eq!(AbsPath::root().parent(), AbsPath::root());
    /// ```
    #[must_use]
    pub fn parent(&self) -> Self {
        match self.string.rfind(SEPARATOR) {
            Some(0) | None => Self::root(),
            Some(idx) => Self::from_normalized(self.string[..idx].to_string()),
        }
    }

    /// Returns `true` if something exists at this path (symlinks count, even
    /// dangling ones).
    #[must_use]
    pub fn exists(&self) -> bool {
        self.exists_with(&OsProbe)
    }

    /// [`exists`](Self::exists) against a caller-supplied probe.
    #[must_use]
    pub fn exists_with<P: EntryProbe + ?Sized>(&self, probe: &P) -> bool {
        probe.classify(self).exists()
    }

    /// Returns `true` if the entry at this path is a regular file.
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.is_file_with(&OsProbe)
    }

    /// [`is_file`](Self::is_file) against a caller-supplied probe.
    #[must_use]
    pub fn is_file_with<P: EntryProbe + ?Sized>(&self, probe: &P) -> bool {
        probe.classify(self) == EntryKind::File
    }

    /// Returns `true` if the entry at this path is a directory.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.is_dir_with(&OsProbe)
    }

    /// [`is_dir`](Self::is_dir) against a caller-supplied probe.
    #[must_use]
    pub fn is_dir_with<P: EntryProbe + ?Sized>(&self, probe: &P) -> bool {
        probe.classify(self) == EntryKind::Directory
    }

    /// Returns `true` if the entry at this path is a symbolic link.
    #[must_use]
    pub fn is_symlink(&self) -> bool {
        self.is_symlink_with(&OsProbe)
    }

    /// [`is_symlink`](Self::is_symlink) against a caller-supplied probe.
    #[must_use]
    pub fn is_symlink_with<P: EntryProbe + ?Sized>(&self, probe: &P) -> bool {
        probe.classify(self) == EntryKind::Symlink
    }
}

/// Chained joining: `base / "a" / "b"`.
impl<S: AsRef<str>> Div<S> for AbsPath {
    type Output = AbsPath;

    fn div(self, rhs: S) -> AbsPath {
        self.join(rhs)
    }
}

impl<S: AsRef<str>> Div<S> for &AbsPath {
    type Output = AbsPath;

    fn div(self, rhs: S) -> AbsPath {
        self.join(rhs)
    }
}

/// Join any number of components onto a base path.
///
/// ```
/// use abspath::{abspath, AbsPath};
///
/// let base = AbsPath::root();
/// assert_eq!(abspath!(base, "usr", "local", "bin").as_str(), "/usr/local/bin");
/// ```
#[macro_export]
macro_rules! abspath {
    ($base:expr $(, $component:expr)* $(,)?) => {{
        let path: $crate::AbsPath = ::std::clone::Clone::clone(&$base);
        $( let path = path.join($component); )*
        path
    }};
}

impl Ord for AbsPath {
    fn cmp(&self, other: &Self) -> Ordering {
        let folded = self
            .string
            .chars()
            .flat_map(char::to_lowercase)
            .cmp(other.string.chars().flat_map(char::to_lowercase));
        folded.then_with(|| self.string.cmp(&other.string))
    }
}

impl PartialOrd for AbsPath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for AbsPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.string)
    }
}

impl fmt::Debug for AbsPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AbsPath({})", self.string)
    }
}

impl AsRef<str> for AbsPath {
    fn as_ref(&self) -> &str {
        &self.string
    }
}

impl AsRef<Path> for AbsPath {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl From<AbsPath> for PathBuf {
    fn from(path: AbsPath) -> Self {
        PathBuf::from(path.string)
    }
}

impl From<AbsPath> for String {
    fn from(path: AbsPath) -> Self {
        path.string
    }
}

impl TryFrom<&Path> for AbsPath {
    type Error = Error;

    /// Lexically normalize an absolute `std::path::Path`. No tilde expansion.
    fn try_from(path: &Path) -> Result<Self> {
        let string = path.to_str().ok_or_else(|| Error::InvalidPath {
            path: path.display().to_string(),
            reason: "path contains invalid UTF-8".to_string(),
        })?;
        if !string.starts_with(SEPARATOR) {
            return Err(Error::InvalidPath {
                path: string.to_string(),
                reason: "path is not absolute".to_string(),
            });
        }
        Ok(Self::from_normalized(normalize::resolve_components(string)))
    }
}

impl TryFrom<PathBuf> for AbsPath {
    type Error = Error;

    fn try_from(path: PathBuf) -> Result<Self> {
        Self::try_from(path.as_path())
    }
}

impl FromStr for AbsPath {
    type Err = Error;

    /// Like [`AbsPath::new`], for callers that prefer `?` over `Option`.
    fn from_str(s: &str) -> Result<Self> {
        Self::new(s).ok_or_else(|| Error::InvalidPath {
            path: s.to_string(),
            reason: "expected an absolute path or a path starting with ~".to_string(),
        })
    }
}
