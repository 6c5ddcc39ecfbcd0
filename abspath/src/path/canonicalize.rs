//! Symlink-aware resolution.
//!
//! Everything else in [`crate::path`] is lexical. These are the two places
//! where the real filesystem decides the answer.

use std::fs;
use std::io::ErrorKind;

use crate::error::{Error, Result};
use crate::path::AbsPath;

impl AbsPath {
    /// Follow every symlink and return the real location.
    ///
    /// The path must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The path does not exist (`PathNotFound`)
    /// - Permission is denied (`PermissionDenied`)
    /// - The resolved path is not valid UTF-8 (`InvalidPath`)
    /// - Any other I/O error occurs
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use abspath::AbsPath;
    ///
    /// let real = AbsPath::new("/tmp").unwrap().realpath().unwrap();
    /// assert!(real.exists());
    /// ```
    pub fn realpath(&self) -> Result<AbsPath> {
        let real = fs::canonicalize(self.as_path()).map_err(|e| Error::from_io(self, e))?;
        AbsPath::try_from(real.as_path())
    }

    /// Read the target of the symlink at this path.
    ///
    /// Relative targets are resolved lexically against this path's parent.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPath` if this path is not a symlink, `PathNotFound`
    /// if nothing exists here, or another error if the link cannot be read.
    pub fn readlink(&self) -> Result<AbsPath> {
        let target = match fs::read_link(self.as_path()) {
            Ok(target) => target,
            Err(e) if e.kind() == ErrorKind::InvalidInput => {
                return Err(Error::InvalidPath {
                    path: self.to_string(),
                    reason: "not a symlink".to_string(),
                });
            }
            Err(e) => return Err(Error::from_io(self, e)),
        };

        let target = target.to_str().ok_or_else(|| Error::InvalidPath {
            path: self.to_string(),
            reason: "symlink target contains invalid UTF-8".to_string(),
        })?;

        if target.starts_with('/') {
            AbsPath::try_from(std::path::Path::new(target))
        } else {
            Ok(self.parent().join(target))
        }
    }
}
