//! Filesystem operations on [`AbsPath`].
//!
//! Each mutating operation returns the path it produced so calls chain:
//!
//! ```no_run
//! use abspath::AbsPath;
//!
//! # fn main() -> abspath::Result<()> {
//! let bin = AbsPath::root().join("tmp/demo/bin").mkpath()?;
//! AbsPath::root()
//!     .join("bin/ls")
//!     .copy_into(&bin, true)?
//!     .chmod(0o500)?;
//! # Ok(())
//! # }
//! ```
//!
//! Failures are classified with [`Error::from_io`], so a missing source
//! surfaces as [`Error::PathNotFound`] and a destination that is in the way
//! as [`Error::AlreadyExists`].

use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::path::AbsPath;
use crate::probe::EntryKind;

impl AbsPath {
    /// Create this directory. Intermediate directories are not created.
    ///
    /// An existing directory is not an error.
    ///
    /// # Errors
    ///
    /// [`Error::PathNotFound`] if the parent is missing,
    /// [`Error::AlreadyExists`] if a non-directory is in the way.
    pub fn mkdir(&self) -> Result<AbsPath> {
        match fs::create_dir(self.as_path()) {
            Err(e) if e.kind() == ErrorKind::AlreadyExists && self.as_path().is_dir() => {}
            rv => rv.map_err(|e| Error::from_io(self, e))?,
        }
        Ok(self.clone())
    }

    /// Create this directory and any missing parents.
    ///
    /// # Errors
    ///
    /// Fails if a component exists and is not a directory.
    pub fn mkpath(&self) -> Result<AbsPath> {
        fs::create_dir_all(self.as_path()).map_err(|e| Error::from_io(self, e))?;
        Ok(self.clone())
    }

    /// Create an empty file, or bump the modification time of an existing
    /// one.
    ///
    /// An existing file keeps its contents. This differs from writing an
    /// empty string to the path, which truncates; use
    /// [`write`](AbsPath::write) with `""` for that.
    ///
    /// # Errors
    ///
    /// Fails if the parent directory is missing or not writable.
    pub fn touch(&self) -> Result<AbsPath> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.as_path())
            .map_err(|e| Error::from_io(self, e))?;
        file.set_modified(SystemTime::now())?;
        Ok(self.clone())
    }

    /// Remove whatever is at this path, recursively for directories.
    ///
    /// Symlinks are removed, never followed.
    ///
    /// # Errors
    ///
    /// [`Error::PathNotFound`] if nothing is there.
    pub fn delete(&self) -> Result<()> {
        let meta = fs::symlink_metadata(self.as_path()).map_err(|e| Error::from_io(self, e))?;
        let rv = if meta.is_dir() {
            fs::remove_dir_all(self.as_path())
        } else {
            fs::remove_file(self.as_path())
        };
        rv.map_err(|e| Error::from_io(self, e))?;
        log::trace!("deleted {self}");
        Ok(())
    }

    /// Copy this file or directory tree to `to`.
    ///
    /// With `overwrite`, an existing *file* at `to` is replaced when `self`
    /// is also a file. Directories are never merged or replaced.
    ///
    /// # Errors
    ///
    /// [`Error::AlreadyExists`] if `to` is occupied (and not replaceable),
    /// [`Error::PathNotFound`] if `self` is missing.
    pub fn copy_to(&self, to: &AbsPath, overwrite: bool) -> Result<AbsPath> {
        if overwrite && to.is_file() && self.is_file() {
            to.delete()?;
        }
        if to.exists() {
            return Err(Error::AlreadyExists { path: to.clone() });
        }
        copy_entry(self, to)?;
        Ok(to.clone())
    }

    /// Copy this file or directory tree into `dir`, keeping its basename.
    /// `dir` is created if missing.
    ///
    /// With `overwrite`, a *file* already at `dir/basename` is deleted
    /// whatever `self` is. A directory there is never replaced.
    ///
    /// # Errors
    ///
    /// [`Error::NotADirectory`] if `dir` is something else,
    /// [`Error::AlreadyExists`] if the destination is occupied and not
    /// replaceable.
    pub fn copy_into(&self, dir: &AbsPath, overwrite: bool) -> Result<AbsPath> {
        ensure_directory(dir)?;
        let rv = dir.join(self.basename());
        if overwrite && rv.is_file() {
            rv.delete()?;
        }
        self.copy_to(&rv, false)
    }

    /// Move this entry to `to`. With `overwrite`, whatever is at `to` is
    /// deleted first.
    ///
    /// # Errors
    ///
    /// [`Error::AlreadyExists`] if `to` is occupied and `overwrite` is
    /// false. Moving across filesystems is not supported and surfaces as
    /// [`Error::Io`].
    pub fn move_to(&self, to: &AbsPath, overwrite: bool) -> Result<AbsPath> {
        if to.exists() {
            if !overwrite {
                return Err(Error::AlreadyExists { path: to.clone() });
            }
            to.delete()?;
        }
        fs::rename(self.as_path(), to.as_path()).map_err(|e| Error::from_io(self, e))?;
        log::trace!("moved {self} to {to}");
        Ok(to.clone())
    }

    /// Move this entry into `dir`, keeping its basename. `dir` is created
    /// if missing.
    ///
    /// # Errors
    ///
    /// [`Error::NotADirectory`] if `dir` is something else,
    /// [`Error::AlreadyExists`] if `dir` already holds an entry of the same
    /// name.
    pub fn move_into(&self, dir: &AbsPath) -> Result<AbsPath> {
        ensure_directory(dir)?;
        self.move_to(&dir.join(self.basename()), false)
    }

    /// Rename this entry within its directory.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPath`] if `name` is empty, `.`, `..` or contains a
    /// separator; otherwise as [`move_to`](AbsPath::move_to).
    pub fn rename(&self, name: &str) -> Result<AbsPath> {
        if name.is_empty() || name == "." || name == ".." || name.contains('/') {
            return Err(Error::InvalidPath {
                path: name.to_string(),
                reason: "not a single path component".to_string(),
            });
        }
        self.move_to(&self.parent().join(name), false)
    }

    /// Create a symlink at `link` pointing to this path.
    ///
    /// # Errors
    ///
    /// [`Error::AlreadyExists`] if `link` is occupied.
    #[cfg(unix)]
    pub fn symlink_as(&self, link: &AbsPath) -> Result<AbsPath> {
        std::os::unix::fs::symlink(self.as_path(), link.as_path())
            .map_err(|e| Error::from_io(link, e))?;
        Ok(link.clone())
    }

    /// Create a symlink to this path inside `dir`, named after this path's
    /// basename. `dir` is created if missing.
    ///
    /// # Errors
    ///
    /// [`Error::NotADirectory`] if `dir` is something else, otherwise as
    /// [`symlink_as`](AbsPath::symlink_as).
    #[cfg(unix)]
    pub fn symlink_into(&self, dir: &AbsPath) -> Result<AbsPath> {
        ensure_directory(dir)?;
        self.symlink_as(&dir.join(self.basename()))
    }

    /// Modification time, falling back to creation time. `None` if the
    /// entry is missing or the platform reports neither.
    #[must_use]
    pub fn mtime(&self) -> Option<DateTime<Utc>> {
        let meta = fs::metadata(self.as_path()).ok()?;
        meta.modified().or_else(|_| meta.created()).ok().map(DateTime::from)
    }

    /// Creation (birth) time, if the platform records one.
    #[must_use]
    pub fn ctime(&self) -> Option<DateTime<Utc>> {
        fs::metadata(self.as_path())
            .ok()?
            .created()
            .ok()
            .map(DateTime::from)
    }

    /// Set unix permission bits, e.g. `0o644`.
    ///
    /// # Errors
    ///
    /// [`Error::PathNotFound`] if nothing is there.
    #[cfg(unix)]
    pub fn chmod(&self, mode: u32) -> Result<AbsPath> {
        use std::os::unix::fs::PermissionsExt;

        fs::set_permissions(self.as_path(), fs::Permissions::from_mode(mode))
            .map_err(|e| Error::from_io(self, e))?;
        Ok(self.clone())
    }

    /// Returns `true` for a file (after following symlinks) with any execute
    /// bit set.
    #[cfg(unix)]
    #[must_use]
    pub fn is_executable(&self) -> bool {
        use std::os::unix::fs::PermissionsExt;

        fs::metadata(self.as_path())
            .is_ok_and(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
    }

    /// Returns `true` if something exists here and is not marked read-only.
    #[must_use]
    pub fn is_writable(&self) -> bool {
        fs::metadata(self.as_path()).is_ok_and(|meta| !meta.permissions().readonly())
    }

    /// Read the whole file as UTF-8.
    ///
    /// # Errors
    ///
    /// [`Error::PathNotFound`] if nothing is there, [`Error::Io`] for
    /// invalid UTF-8.
    pub fn read_to_string(&self) -> Result<String> {
        fs::read_to_string(self.as_path()).map_err(|e| Error::from_io(self, e))
    }

    /// Read the whole file.
    ///
    /// # Errors
    ///
    /// [`Error::PathNotFound`] if nothing is there.
    pub fn read(&self) -> Result<Vec<u8>> {
        fs::read(self.as_path()).map_err(|e| Error::from_io(self, e))
    }

    /// Replace the file's contents, creating it if needed.
    ///
    /// # Errors
    ///
    /// Fails if the parent directory is missing or not writable.
    pub fn write(&self, contents: impl AsRef<[u8]>) -> Result<AbsPath> {
        fs::write(self.as_path(), contents).map_err(|e| Error::from_io(self, e))?;
        Ok(self.clone())
    }
}

/// Create `dir` if missing; fail if something other than a directory is
/// there. A symlink to a directory is accepted.
fn ensure_directory(dir: &AbsPath) -> Result<()> {
    if !dir.exists() {
        dir.mkpath()?;
    } else if !dir.as_path().is_dir() {
        return Err(Error::NotADirectory { path: dir.clone() });
    }
    Ok(())
}

/// Copy one entry. Directories are copied recursively; symlinks inside them
/// are recreated rather than followed.
fn copy_entry(from: &AbsPath, to: &AbsPath) -> Result<()> {
    if !from.as_path().is_dir() {
        fs::copy(from.as_path(), to.as_path()).map_err(|e| Error::from_io(from, e))?;
        return Ok(());
    }

    for dent in WalkDir::new(from.as_path()).follow_links(false) {
        let dent = dent.map_err(|e| match e.into_io_error() {
            Some(io) => Error::from_io(from, io),
            None => Error::InvalidPath {
                path: from.to_string(),
                reason: "filesystem loop".to_string(),
            },
        })?;
        let relative = dent
            .path()
            .strip_prefix(from.as_path())
            .ok()
            .and_then(|p| p.to_str())
            .ok_or_else(|| Error::InvalidPath {
                path: dent.path().display().to_string(),
                reason: "not valid UTF-8".to_string(),
            })?;
        let target = to.join(relative);

        match EntryKind::from(dent.file_type()) {
            EntryKind::Directory => {
                fs::create_dir(target.as_path()).map_err(|e| Error::from_io(&target, e))?;
            }
            #[cfg(unix)]
            EntryKind::Symlink if dent.depth() > 0 => {
                let pointee = fs::read_link(dent.path())?;
                std::os::unix::fs::symlink(pointee, target.as_path())
                    .map_err(|e| Error::from_io(&target, e))?;
            }
            _ => {
                fs::copy(dent.path(), target.as_path()).map_err(|e| Error::from_io(&target, e))?;
            }
        }
    }
    log::trace!("copied tree {from} to {to}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch() -> (tempfile::TempDir, AbsPath) {
        let guard = tempfile::tempdir().unwrap();
        let root = AbsPath::try_from(guard.path()).unwrap();
        (guard, root)
    }

    #[test]
    fn test_mkdir_is_idempotent() {
        let (_guard, root) = scratch();
        let dir = root.join("a");
        assert_eq!(dir.mkdir().unwrap(), dir);
        assert!(dir.mkdir().is_ok());
        assert!(dir.is_dir());
    }

    #[test]
    fn test_mkdir_requires_parent() {
        let (_guard, root) = scratch();
        let err = root.join("a/b").mkdir().unwrap_err();
        assert!(err.is_not_found());
        assert!(root.join("a/b").mkpath().unwrap().is_dir());
    }

    #[test]
    fn test_mkdir_over_file_fails() {
        let (_guard, root) = scratch();
        let file = root.join("f").touch().unwrap();
        assert!(matches!(file.mkdir(), Err(Error::AlreadyExists { .. })));
    }

    #[test]
    fn test_touch_keeps_contents() {
        let (_guard, root) = scratch();
        let file = root.join("f").write("hello").unwrap();
        file.touch().unwrap();
        assert_eq!(file.read_to_string().unwrap(), "hello");
        assert!(file.mtime().is_some());
    }

    #[test]
    fn test_delete_tree_and_missing() {
        let (_guard, root) = scratch();
        let dir = root.join("d/e").mkpath().unwrap();
        dir.join("f").touch().unwrap();
        root.join("d").delete().unwrap();
        assert!(!root.join("d").exists());
        assert!(root.join("d").delete().unwrap_err().is_not_found());
    }

    #[test]
    fn test_copy_to_respects_overwrite() {
        let (_guard, root) = scratch();
        let a = root.join("a").write("a").unwrap();
        let b = root.join("b").write("b").unwrap();

        assert!(matches!(a.copy_to(&b, false), Err(Error::AlreadyExists { .. })));
        assert_eq!(a.copy_to(&b, true).unwrap(), b);
        assert_eq!(b.read_to_string().unwrap(), "a");
    }

    #[test]
    fn test_copy_to_never_replaces_directory() {
        let (_guard, root) = scratch();
        let a = root.join("a").touch().unwrap();
        let dir = root.join("dir").mkdir().unwrap();
        assert!(a.copy_to(&dir, true).is_err());
    }

    #[test]
    fn test_copy_tree() {
        let (_guard, root) = scratch();
        let src = root.join("src/nested").mkpath().unwrap().parent();
        src.join("nested/leaf").write("x").unwrap();
        #[cfg(unix)]
        src.join("nested/leaf").symlink_as(&src.join("link")).unwrap();

        let dst = src.copy_to(&root.join("dst"), false).unwrap();
        assert_eq!(dst.join("nested/leaf").read_to_string().unwrap(), "x");
        #[cfg(unix)]
        assert!(dst.join("link").is_symlink());
    }

    #[test]
    fn test_copy_into_creates_directory() {
        let (_guard, root) = scratch();
        let file = root.join("file.txt").write("x").unwrap();
        let copied = file.copy_into(&root.join("out/bin"), false).unwrap();
        assert_eq!(copied, root.join("out/bin/file.txt"));
        assert!(file.exists());
        assert!(copied.is_file());
    }

    #[test]
    fn test_copy_into_replaces_file_with_tree() {
        let (_guard, root) = scratch();
        let tree = root.join("src/tree").mkpath().unwrap();
        tree.join("leaf").write("x").unwrap();
        let out = root.join("out").mkdir().unwrap();
        out.join("tree").write("stale").unwrap();

        assert!(matches!(
            tree.copy_into(&out, false),
            Err(Error::AlreadyExists { .. })
        ));
        let copied = tree.copy_into(&out, true).unwrap();
        assert!(copied.is_dir());
        assert_eq!(copied.join("leaf").read_to_string().unwrap(), "x");

        // A directory in the way is never replaced
        out.join("src").mkdir().unwrap();
        assert!(root.join("src").copy_into(&out, true).is_err());
    }

    #[test]
    fn test_copy_into_file_fails() {
        let (_guard, root) = scratch();
        let file = root.join("a").touch().unwrap();
        let blocker = root.join("b").touch().unwrap();
        assert!(matches!(
            file.copy_into(&blocker, false),
            Err(Error::NotADirectory { .. })
        ));
    }

    #[test]
    fn test_move_to_and_overwrite() {
        let (_guard, root) = scratch();
        let a = root.join("a").write("a").unwrap();
        let b = root.join("b").write("b").unwrap();

        assert!(matches!(a.move_to(&b, false), Err(Error::AlreadyExists { .. })));
        let moved = a.move_to(&b, true).unwrap();
        assert!(!a.exists());
        assert_eq!(moved.read_to_string().unwrap(), "a");
    }

    #[test]
    fn test_move_into() {
        let (_guard, root) = scratch();
        let a = root.join("a.txt").touch().unwrap();
        let moved = a.move_into(&root.join("sub")).unwrap();
        assert_eq!(moved, root.join("sub/a.txt"));
        assert!(!a.exists());

        let again = root.join("a.txt").touch().unwrap();
        assert!(matches!(
            again.move_into(&root.join("sub")),
            Err(Error::AlreadyExists { .. })
        ));
    }

    #[test]
    fn test_rename() {
        let (_guard, root) = scratch();
        let a = root.join("a").touch().unwrap();
        assert_eq!(a.rename("b").unwrap(), root.join("b"));
        assert!(matches!(
            root.join("b").rename("x/y"),
            Err(Error::InvalidPath { .. })
        ));
        assert!(root.join("b").rename("..").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_into_and_readlink() {
        let (_guard, root) = scratch();
        let target = root.join("target").touch().unwrap();
        let link = target.symlink_into(&root.join("links")).unwrap();
        assert_eq!(link, root.join("links/target"));
        assert!(link.is_symlink());
        assert_eq!(link.readlink().unwrap(), target);
        assert!(matches!(
            target.symlink_as(&link),
            Err(Error::AlreadyExists { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_chmod_and_is_executable() {
        let (_guard, root) = scratch();
        let file = root.join("tool").touch().unwrap();
        assert!(!file.is_executable());
        file.chmod(0o755).unwrap();
        assert!(file.is_executable());
        assert!(!root.is_executable());
        assert!(!root.join("missing").is_executable());
    }

    #[test]
    fn test_is_writable() {
        let (_guard, root) = scratch();
        let file = root.join("w").touch().unwrap();
        assert!(file.is_writable());
        assert!(!root.join("missing").is_writable());
    }

    #[test]
    fn test_times_of_missing_entry() {
        let (_guard, root) = scratch();
        assert!(root.join("missing").mtime().is_none());
        assert!(root.join("missing").ctime().is_none());
    }
}
