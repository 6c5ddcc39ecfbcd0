//! Lexical path normalization.
//!
//! Everything here works on strings only: no filesystem access, no symlink
//! resolution. The functions in this module are the single source of the
//! [`AbsPath`](super::AbsPath) invariants:
//! - the result starts with `/`
//! - no `.` or `..` components
//! - no empty components
//! - no trailing `/` unless the result is the root

use crate::probe::EntryProbe;

/// The root separator.
pub const SEPARATOR: char = '/';

/// The home-directory marker.
pub const HOME_MARKER: char = '~';

/// Resolve `.` and `..` components and collapse repeated separators.
///
/// The input is treated as absolute whether or not it starts with `/`.
/// A `..` at the root is a no-op: the root is its own parent.
///
/// # Examples
///
/// ```
/// use abspath::path::normalize::resolve_components;
///
/// assert_eq!(resolve_components("/a/./b/../c"), "/a/c");
/// assert_eq!(resolve_components("/a/b/../../c"), "/c");
/// assert_eq!(resolve_components("/a/../../.."), "/");
/// assert_eq!(resolve_components("//foo///bar//"), "/foo/bar");
/// ```
#[must_use]
pub fn resolve_components(path: &str) -> String {
    let mut parts: Vec<&str> = Vec::new();

    for component in path.split(SEPARATOR) {
        match component {
            "" | "." => {}
            ".." => {
                // Popping an empty stack is the root absorbing `..`
                parts.pop();
            }
            normal => parts.push(normal),
        }
    }

    if parts.is_empty() {
        return SEPARATOR.to_string();
    }

    let mut result = String::with_capacity(path.len());
    for part in parts {
        result.push(SEPARATOR);
        result.push_str(part);
    }
    result
}

/// Check whether `path` already satisfies every normalization invariant.
///
/// # Examples
///
/// ```
/// use abspath::path::normalize::is_normalized;
///
/// assert!(is_normalized("/"));
/// assert!(is_normalized("/a/b"));
/// assert!(!is_normalized("/a/"));
/// assert!(!is_normalized("/a//b"));
/// assert!(!is_normalized("/a/./b"));
/// assert!(!is_normalized("a/b"));
/// ```
#[must_use]
pub fn is_normalized(path: &str) -> bool {
    if path == "/" {
        return true;
    }
    let Some(rest) = path.strip_prefix(SEPARATOR) else {
        return false;
    };
    rest.split(SEPARATOR)
        .all(|component| !matches!(component, "" | "." | ".."))
}

/// Expand a leading `~` against the home directory reported by `probe`.
///
/// - `~` and `~/rest` expand against the current user's home.
/// - `~name` and `~name/rest` expand against `name`'s home.
///
/// Returns `None` if `input` does not start with `~`, if the home directory
/// cannot be resolved, or if the resolved home is not absolute. The result
/// is not yet normalized.
///
/// # Examples
///
/// ```
/// use abspath::path::normalize::expand_tilde;
/// use abspath::probe::OsProbe;
///
/// // Not a tilde path
/// assert_eq!(expand_tilde("/absolute", &OsProbe), None);
/// ```
pub fn expand_tilde<P>(input: &str, probe: &P) -> Option<String>
where
    P: EntryProbe + ?Sized,
{
    let rest = input.strip_prefix(HOME_MARKER)?;

    let (user, remainder) = match rest.find(SEPARATOR) {
        Some(idx) => (&rest[..idx], &rest[idx..]),
        None => (rest, ""),
    };

    let home = if user.is_empty() {
        probe.resolve_home(None)
    } else {
        probe.resolve_home(Some(user))
    };

    let Some(home) = home else {
        log::trace!("no home directory for {input:?}");
        return None;
    };

    if !home.starts_with(SEPARATOR) {
        log::debug!("ignoring non-absolute home directory {home:?}");
        return None;
    }

    Some(format!("{home}{SEPARATOR}{remainder}"))
}

/// Normalize a caller-supplied string into an absolute path string.
///
/// Accepts strings starting with `/` or `~`; anything else yields `None`.
pub fn normalize<P>(input: &str, probe: &P) -> Option<String>
where
    P: EntryProbe + ?Sized,
{
    if input.starts_with(SEPARATOR) {
        Some(resolve_components(input))
    } else if input.starts_with(HOME_MARKER) {
        expand_tilde(input, probe).map(|expanded| resolve_components(&expanded))
    } else {
        None
    }
}

/// Lexically append `component` to an already normalized `base`.
///
/// Leading separators in `component` are absorbed. An empty component
/// returns `base` unchanged.
#[must_use]
pub fn join_components(base: &str, component: &str) -> String {
    if component.is_empty() {
        return base.to_string();
    }
    let mut joined = String::with_capacity(base.len() + component.len() + 1);
    joined.push_str(base);
    joined.push(SEPARATOR);
    joined.push_str(component);
    resolve_components(&joined)
}
