//! Derivations built on top of [`AbsPath`]: components, basename,
//! extension and relative paths.

use crate::path::normalize::SEPARATOR;
use crate::path::relationship::PathRelationship;
use crate::path::AbsPath;

/// Double extensions recognised as a single unit.
///
/// Matching is on the full `.`-prefixed suffix, so `a.tar.gz` has extension
/// `tar.gz` but `a..tar..xz` has extension `xz`.
pub const COMPOUND_EXTENSIONS: &[&str] = &[
    "tar.gz", "tar.bz", "tar.bz2", "tar.xz", "tar.zst", "tar.lz",
];

impl AbsPath {
    /// The non-root components, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use abspath::AbsPath;
    ///
    /// let path = AbsPath::root().join("usr/local/bin");
    /// assert_eq!(path.components().collect::<Vec<_>>(), ["usr", "local", "bin"]);
    /// assert_eq!(AbsPath::root().components().count(), 0);
    /// ```
    pub fn components(&self) -> impl Iterator<Item = &str> + '_ {
        self.as_str()
            .split(SEPARATOR)
            .filter(|component| !component.is_empty())
    }

    /// Returns `true` if `base`'s components are a prefix of this path's.
    ///
    /// Unlike a string prefix test, `/foobar` does not start with `/foo`.
    #[must_use]
    pub fn starts_with(&self, base: &AbsPath) -> bool {
        let mut ours = self.components();
        base.components().all(|theirs| ours.next() == Some(theirs))
    }

    /// The last component. The root's basename is `/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use abspath::AbsPath;
    ///
    /// assert_eq!(AbsPath::root().join("foo.rs").basename(), "foo.rs");
    /// assert_eq!(AbsPath::root().basename(), "/");
    /// ```
    #[must_use]
    pub fn basename(&self) -> &str {
        if self.is_root() {
            return self.as_str();
        }
        let string = self.as_str();
        match string.rfind(SEPARATOR) {
            Some(idx) => &string[idx + 1..],
            None => string,
        }
    }

    /// The basename with its [`extension`](Self::extension) and the dot
    /// before it removed.
    ///
    /// Names without a recognised extension come back unchanged, trailing
    /// dots included.
    ///
    /// # Examples
    ///
    /// ```
    /// use abspath::AbsPath;
    ///
    /// let dir = AbsPath::root();
    /// assert_eq!(dir.join("foo.bar").basename_without_extension(), "foo");
    /// assert_eq!(dir.join("foo.bar.baz").basename_without_extension(), "foo.bar");
    /// assert_eq!(dir.join("a.tar.gz").basename_without_extension(), "a");
    /// assert_eq!(dir.join("foo.").basename_without_extension(), "foo.");
    /// ```
    #[must_use]
    pub fn basename_without_extension(&self) -> &str {
        let name = self.basename();
        let ext = extension_of(name);
        if ext.is_empty() {
            name
        } else {
            &name[..name.len() - ext.len() - 1]
        }
    }

    /// The file extension, without the leading dot.
    ///
    /// Empty when the basename has no dot except a leading one, or when it
    /// ends with a dot. Compound archive suffixes such as `tar.gz` are
    /// returned whole (see [`COMPOUND_EXTENSIONS`]).
    ///
    /// # Examples
    ///
    /// ```
    /// use abspath::AbsPath;
    ///
    /// let dir = AbsPath::root();
    /// assert_eq!(dir.join("a.rs").extension(), "rs");
    /// assert_eq!(dir.join("a.tar.gz").extension(), "tar.gz");
    /// assert_eq!(dir.join("a..").extension(), "");
    /// assert_eq!(dir.join(".profile").extension(), "");
    /// ```
    #[must_use]
    pub fn extension(&self) -> &str {
        extension_of(self.basename())
    }

    /// The relative path from `base` to this path.
    ///
    /// When `base` is this path or one of its ancestors the result is the
    /// remaining components (empty if the two are equal). Otherwise the
    /// common leading components are dropped and one `..` is emitted per
    /// remaining component of `base`, followed by the remaining components
    /// of this path.
    ///
    /// # Examples
    ///
    /// ```
    /// use abspath::AbsPath;
    ///
    /// let root = AbsPath::root();
    /// assert_eq!(root.join("tmp/foo").relative_to(&root.join("tmp")), "foo");
    /// assert_eq!(root.join("tmp/foo/bar").relative_to(&root.join("tmp/baz")), "../foo/bar");
    /// assert_eq!(root.relative_to(&root.join("foo")), "..");
    /// ```
    #[must_use]
    pub fn relative_to(&self, base: &AbsPath) -> String {
        let ours: Vec<&str> = self.components().collect();
        let theirs: Vec<&str> = base.components().collect();

        if PathRelationship::contains(base, self) {
            return ours[theirs.len()..].join("/");
        }

        let common = ours
            .iter()
            .zip(&theirs)
            .take_while(|(a, b)| a == b)
            .count();

        let ups = std::iter::repeat("..").take(theirs.len() - common);
        ups.chain(ours[common..].iter().copied())
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Extension of a single file name.
fn extension_of(name: &str) -> &str {
    if name.ends_with('.') {
        return "";
    }

    for compound in COMPOUND_EXTENSIONS {
        // Needs a non-empty stem and the dot before the suffix
        if let Some(stem) = name.strip_suffix(compound) {
            if stem.len() > 1 && stem.ends_with('.') {
                return &name[stem.len()..];
            }
        }
    }

    match name.rfind('.') {
        Some(0) | None => "",
        Some(idx) => &name[idx + 1..],
    }
}
