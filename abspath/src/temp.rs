//! Self-deleting temporary directories.

use tempfile::TempDir;

use crate::error::Result;
use crate::path::AbsPath;

/// A fresh directory under the system temporary directory, removed with
/// its contents when dropped.
///
/// # Examples
///
/// ```
/// use abspath::temp::TemporaryDirectory;
///
/// let tmp = TemporaryDirectory::new().unwrap();
/// let file = tmp.path().join("scratch.txt").touch().unwrap();
/// assert!(file.is_file());
///
/// let dir = tmp.path().clone();
/// drop(tmp);
/// assert!(!dir.exists());
/// ```
#[derive(Debug)]
pub struct TemporaryDirectory {
    inner: TempDir,
    path: AbsPath,
}

impl TemporaryDirectory {
    /// Create a new temporary directory.
    ///
    /// # Errors
    ///
    /// Fails if the directory cannot be created or its location is not a
    /// UTF-8 absolute path.
    pub fn new() -> Result<Self> {
        let inner = tempfile::Builder::new().prefix("abspath-").tempdir()?;
        let path = AbsPath::try_from(inner.path())?;
        log::trace!("created temporary directory {path}");
        Ok(Self { inner, path })
    }

    /// The directory's path.
    #[must_use]
    pub fn path(&self) -> &AbsPath {
        &self.path
    }

    /// Remove the directory now, reporting any failure that drop would
    /// swallow.
    ///
    /// # Errors
    ///
    /// Fails if the tree cannot be removed.
    pub fn close(self) -> Result<()> {
        self.inner.close()?;
        Ok(())
    }
}

impl AbsPath {
    /// Run `body` with a fresh temporary directory that is removed when it
    /// returns.
    ///
    /// # Errors
    ///
    /// Fails if the directory cannot be created; otherwise returns whatever
    /// `body` returns.
    ///
    /// # Examples
    ///
    /// ```
    /// use abspath::AbsPath;
    ///
    /// let count = AbsPath::mktemp(|dir| {
    ///     dir.join("a").touch()?;
    ///     dir.join("b").touch()?;
    ///     Ok(dir.ls()?.len())
    /// })
    /// .unwrap();
    /// assert_eq!(count, 2);
    /// ```
    pub fn mktemp<T, F>(body: F) -> Result<T>
    where
        F: FnOnce(&AbsPath) -> Result<T>,
    {
        let tmp = TemporaryDirectory::new()?;
        body(tmp.path())
    }
}
