//! The recursive finder.

use std::iter::FusedIterator;
use std::ops::RangeBounds;
use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use super::control::{Control, Entry};
use super::depth::DepthRange;
use super::filter::EntryFilter;
use crate::path::AbsPath;
use crate::probe::EntryKind;

/// Iteration state. Only ever moves forward.
#[derive(Debug)]
enum State {
    NotStarted,
    Enumerating(walkdir::IntoIter),
    Exhausted,
}

/// Recursive search under a root directory.
///
/// A `Finder` is configured with consuming builder methods and then either
/// iterated (it is an `Iterator<Item = AbsPath>`) or driven with
/// [`execute`](Finder::execute), whose visitor decides per entry whether to
/// continue, skip a directory's subtree, or abort.
///
/// Constructing a finder does not touch the filesystem; the directory is
/// opened on the first pull. A finder is single-pass: once exhausted it
/// yields nothing more, even if the tree changes.
///
/// A root that is missing or unreadable produces an empty sequence. Errors
/// below the root (an unreadable subdirectory, an entry that vanished) are
/// logged and skipped so one bad subtree cannot end the search.
///
/// # Examples
///
/// ```no_run
/// use abspath::finder::Control;
/// use abspath::probe::EntryKind;
/// use abspath::AbsPath;
///
/// let src = AbsPath::new("/usr/src").unwrap();
///
/// // Pull: every Rust file at most three levels down
/// for path in src.find().max_depth(3).kind(EntryKind::File).extension("rs") {
///     println!("{path}");
/// }
///
/// // Push: stop at the first match, never enter `target/`
/// let mut first = None;
/// src.find().extension("toml").execute(|entry| {
///     if entry.is_dir() && entry.path.basename() == "target" {
///         return Control::Skip;
///     }
///     first = Some(entry.path.clone());
///     Control::Abort
/// });
/// ```
#[derive(Debug)]
pub struct Finder<'a> {
    root: &'a AbsPath,
    depth: DepthRange,
    filter: EntryFilter,
    state: State,
}

impl AbsPath {
    /// Start a recursive search rooted at this path.
    ///
    /// The default depth range is `1..`: every descendant, not the root.
    #[must_use]
    pub fn find(&self) -> Finder<'_> {
        Finder::new(self)
    }
}

impl<'a> Finder<'a> {
    /// Create a finder over `root` with the default configuration.
    #[must_use]
    pub fn new(root: &'a AbsPath) -> Self {
        Self {
            root,
            depth: DepthRange::default(),
            filter: EntryFilter::default(),
            state: State::NotStarted,
        }
    }

    /// Limit the search to `max` levels below the root.
    ///
    /// The range becomes `min(max, lower)..=max`.
    #[must_use]
    pub fn max_depth(mut self, max: usize) -> Self {
        self.depth = self.depth.with_max(max);
        self
    }

    /// Only yield entries at least `min` levels below the root. Shallower
    /// directories are still descended into.
    ///
    /// The range becomes `min..=max(upper, min)`.
    #[must_use]
    pub fn min_depth(mut self, min: usize) -> Self {
        self.depth = self.depth.with_min(min);
        self
    }

    /// Set the depth range explicitly, e.g. `2..=3` or `..4`.
    #[must_use]
    pub fn depth<R: RangeBounds<usize>>(mut self, range: R) -> Self {
        self.depth = DepthRange::from_bounds(range);
        self
    }

    /// Also accept entries of `kind`. Repeated calls widen the filter.
    #[must_use]
    pub fn kind(mut self, kind: EntryKind) -> Self {
        self.filter = self.filter.with_kind(kind);
        self
    }

    /// Also accept entries with extension `ext`. Repeated calls widen the
    /// filter. Directories are filtered by extension too.
    #[must_use]
    pub fn extension(mut self, ext: &str) -> Self {
        self.filter = self.filter.with_extension(ext);
        self
    }

    /// The root being searched.
    #[must_use]
    pub fn root(&self) -> &AbsPath {
        self.root
    }

    /// The configured depth range.
    #[must_use]
    pub fn depth_range(&self) -> DepthRange {
        self.depth
    }

    /// The configured filters.
    #[must_use]
    pub fn filter(&self) -> &EntryFilter {
        &self.filter
    }

    /// Returns `true` once the walk has finished or been aborted.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        matches!(self.state, State::Exhausted)
    }

    /// Walk the tree, calling `visit` for every matching entry.
    ///
    /// `visit` returns [`Control::Continue`] to carry on,
    /// [`Control::Skip`] to leave a directory's contents unvisited, or
    /// [`Control::Abort`] to stop immediately.
    pub fn execute<F>(&mut self, mut visit: F)
    where
        F: FnMut(&Entry) -> Control,
    {
        while let Some(entry) = self.next_entry() {
            match visit(&entry) {
                Control::Continue => {}
                Control::Skip => {
                    if entry.is_dir() {
                        self.skip_current_dir();
                    }
                }
                Control::Abort => {
                    log::trace!("search under {} aborted at {}", self.root, entry.path);
                    self.state = State::Exhausted;
                    break;
                }
            }
        }
    }

    /// Collect every remaining match.
    pub fn collect_all(&mut self) -> Vec<AbsPath> {
        let mut rv = Vec::new();
        self.execute(|entry| {
            rv.push(entry.path.clone());
            Control::Continue
        });
        rv
    }

    fn open(&self) -> State {
        if self.depth.is_empty() {
            return State::Exhausted;
        }
        let mut walk = WalkDir::new(self.root.as_path())
            .min_depth(1)
            .follow_links(false);
        if let Some(max) = self.depth.max() {
            walk = walk.max_depth(max);
        }
        log::trace!("searching {} at depth {}", self.root, self.depth);
        State::Enumerating(walk.into_iter())
    }

    fn next_entry(&mut self) -> Option<Entry> {
        loop {
            if matches!(self.state, State::NotStarted) {
                self.state = self.open();
            }
            let State::Enumerating(walker) = &mut self.state else {
                return None;
            };
            let dent = match walker.next() {
                None => {
                    self.state = State::Exhausted;
                    return None;
                }
                Some(Err(err)) => {
                    log::debug!("skipping unreadable entry under {}: {err}", self.root);
                    continue;
                }
                Some(Ok(dent)) => dent,
            };
            if let Some(entry) = self.accept(&dent) {
                return Some(entry);
            }
        }
    }

    /// Depth and filter checks for one enumerated entry.
    fn accept(&self, dent: &DirEntry) -> Option<Entry> {
        let depth = dent.depth();
        if !self.depth.contains(depth) {
            return None;
        }
        let Some(path) = child_path(self.root, dent.path()) else {
            log::warn!("skipping non UTF-8 path {}", dent.path().display());
            return None;
        };
        let kind = EntryKind::from(dent.file_type());
        if !self.filter.matches(&path, kind) {
            return None;
        }
        Some(Entry { kind, path, depth })
    }

    /// Prune the directory most recently yielded.
    fn skip_current_dir(&mut self) {
        if let State::Enumerating(walker) = &mut self.state {
            walker.skip_current_dir();
        }
    }
}

/// Rebuild an enumerated path with the same join rules as [`AbsPath::join`].
fn child_path(root: &AbsPath, child: &Path) -> Option<AbsPath> {
    let relative = child.strip_prefix(root.as_path()).ok()?;
    Some(root.join(relative.to_str()?))
}

impl Iterator for Finder<'_> {
    type Item = AbsPath;

    fn next(&mut self) -> Option<AbsPath> {
        self.next_entry().map(|entry| entry.path)
    }
}

impl FusedIterator for Finder<'_> {}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;

    use super::*;

    /// Builds `a`, `b/c`, `b/d/e` under a fresh temporary directory.
    fn tree() -> (tempfile::TempDir, AbsPath) {
        let guard = tempfile::tempdir().unwrap();
        let root = AbsPath::try_from(guard.path()).unwrap();
        fs::write(root.join("a").as_path(), b"").unwrap();
        fs::create_dir_all(root.join("b/d").as_path()).unwrap();
        fs::write(root.join("b/c").as_path(), b"").unwrap();
        fs::write(root.join("b/d/e").as_path(), b"").unwrap();
        (guard, root)
    }

    fn relative(root: &AbsPath, paths: impl IntoIterator<Item = AbsPath>) -> BTreeSet<String> {
        paths.into_iter().map(|p| p.relative_to(root)).collect()
    }

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_default_finds_everything_but_root() {
        let (_guard, root) = tree();
        assert_eq!(
            relative(&root, root.find()),
            set(&["a", "b", "b/c", "b/d", "b/d/e"])
        );
    }

    #[test]
    fn test_max_depth_boundaries() {
        let (_guard, root) = tree();
        assert_eq!(relative(&root, root.find().max_depth(0)), set(&[]));
        assert_eq!(relative(&root, root.find().max_depth(1)), set(&["a", "b"]));
        assert_eq!(
            relative(&root, root.find().max_depth(2)),
            set(&["a", "b", "b/c", "b/d"])
        );
    }

    #[test]
    fn test_min_depth_still_descends() {
        let (_guard, root) = tree();
        assert_eq!(
            relative(&root, root.find().min_depth(2)),
            set(&["b/c", "b/d", "b/d/e"])
        );
        assert_eq!(relative(&root, root.find().min_depth(3)), set(&["b/d/e"]));
    }

    #[test]
    fn test_explicit_range() {
        let (_guard, root) = tree();
        assert_eq!(relative(&root, root.find().depth(2..=2)), set(&["b/c", "b/d"]));
        assert_eq!(relative(&root, root.find().depth(..2)), set(&["a", "b"]));
        assert_eq!(relative(&root, root.find().depth(..0)), set(&[]));
    }

    #[test]
    fn test_kind_filter() {
        let (_guard, root) = tree();
        assert_eq!(
            relative(&root, root.find().kind(EntryKind::Directory)),
            set(&["b", "b/d"])
        );
        assert_eq!(
            relative(&root, root.find().kind(EntryKind::File).max_depth(2)),
            set(&["a", "b/c"])
        );
    }

    #[test]
    fn test_single_pass() {
        let (_guard, root) = tree();
        let mut finder = root.find();
        assert_eq!(finder.by_ref().count(), 5);
        assert!(finder.is_exhausted());
        assert_eq!(finder.by_ref().count(), 0);
        assert!(finder.collect_all().is_empty());
    }

    #[test]
    fn test_abort_visits_one_entry() {
        let (_guard, root) = tree();
        let mut finder = root.find();
        let mut visited = 0;
        finder.execute(|_| {
            visited += 1;
            Control::Abort
        });
        assert_eq!(visited, 1);
        assert!(finder.is_exhausted());
        assert_eq!(finder.count(), 0);
    }

    #[test]
    fn test_skip_prunes_directory() {
        let (_guard, root) = tree();
        let mut seen = Vec::new();
        root.find().execute(|entry| {
            seen.push(entry.path.clone());
            if entry.path.basename() == "b" {
                Control::Skip
            } else {
                Control::Continue
            }
        });
        assert_eq!(relative(&root, seen), set(&["a", "b"]));
    }

    #[test]
    fn test_skip_on_file_is_continue() {
        let (_guard, root) = tree();
        let mut seen = Vec::new();
        root.find().execute(|entry| {
            seen.push(entry.path.clone());
            Control::Skip
        });
        // Files are never pruned, but every directory is
        assert_eq!(relative(&root, seen), set(&["a", "b"]));
    }

    #[test]
    fn test_entries_report_depth_and_kind() {
        let (_guard, root) = tree();
        let mut entries = Vec::new();
        root.find().execute(|entry| {
            entries.push(entry.clone());
            Control::Continue
        });
        let e = entries
            .iter()
            .find(|entry| entry.path.basename() == "e")
            .unwrap();
        assert_eq!(e.depth, 3);
        assert_eq!(e.kind, EntryKind::File);
        assert_eq!(e.path, root.join("b/d/e"));
    }

    #[test]
    fn test_missing_root_is_empty() {
        let (_guard, root) = tree();
        let missing = root.join("void");
        assert_eq!(missing.find().count(), 0);
        assert!(missing.find().collect_all().is_empty());
    }

    #[test]
    fn test_file_root_is_empty() {
        let (_guard, root) = tree();
        assert_eq!(root.join("a").find().count(), 0);
    }

    #[test]
    fn test_builders_do_not_interfere() {
        let (_guard, root) = tree();
        let shallow = root.find().max_depth(1);
        let files = root.find().kind(EntryKind::File);
        assert_eq!(relative(&root, shallow), set(&["a", "b"]));
        assert_eq!(relative(&root, files), set(&["a", "b/c", "b/d/e"]));
    }
}
