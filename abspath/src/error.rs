//! Error types for the abspath library.
//!
//! Expected absence (a relative string handed to [`AbsPath::new`], an unknown
//! `~user`, a finder rooted at a missing directory) is never an error; those
//! cases are `Option`s or empty sequences. This enum covers genuine failures
//! reported by the operating system and by the codec.
//!
//! [`AbsPath::new`]: crate::AbsPath::new

use std::io::{self, ErrorKind};

use thiserror::Error;

use crate::path::AbsPath;

/// Result type alias for operations that may fail with an abspath error.
///
/// # Examples
///
/// ```
/// use abspath::{AbsPath, Result};
///
/// fn touch_marker(dir: &AbsPath) -> Result<AbsPath> {
///     dir.join(".marker").touch()
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the abspath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A string could not be turned into an absolute path.
    #[error("invalid path {path}: {reason}")]
    InvalidPath {
        /// The offending input.
        path: String,
        /// The reason the input was rejected.
        reason: String,
    },

    /// A path does not exist.
    #[error("path not found: {path}")]
    PathNotFound {
        /// The path that was not found.
        path: AbsPath,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {path}")]
    PermissionDenied {
        /// The path that could not be accessed.
        path: AbsPath,
    },

    /// The destination of a copy, move or link already exists.
    #[error("already exists: {path}")]
    AlreadyExists {
        /// The path that is in the way.
        path: AbsPath,
    },

    /// A directory was required but something else is there.
    #[error("not a directory: {path}")]
    NotADirectory {
        /// The path that is not a directory.
        path: AbsPath,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A path could not be encoded or decoded.
    #[error("codec error: {message}")]
    Codec {
        /// Details about the failure.
        message: String,
    },
}

impl Error {
    /// Classify an I/O error raised while operating on `path`.
    ///
    /// `NotFound`, `PermissionDenied` and `AlreadyExists` become their
    /// dedicated variants; everything else is wrapped as [`Error::Io`].
    #[must_use]
    pub fn from_io(path: &AbsPath, err: io::Error) -> Self {
        match err.kind() {
            ErrorKind::NotFound => Self::PathNotFound { path: path.clone() },
            ErrorKind::PermissionDenied => Self::PermissionDenied { path: path.clone() },
            ErrorKind::AlreadyExists => Self::AlreadyExists { path: path.clone() },
            _ => Self::Io(err),
        }
    }

    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use abspath::{AbsPath, Error};
    ///
    /// let err = Error::PathNotFound { path: AbsPath::root().join("nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::PathNotFound { .. } => true,
            Self::Io(err) => err.kind() == ErrorKind::NotFound,
            _ => false,
        }
    }

    /// Check if error is permission-related.
    ///
    /// # Examples
    ///
    /// ```
    /// use abspath::{AbsPath, Error};
    ///
    /// let err = Error::PermissionDenied { path: AbsPath::root().join("restricted") };
    /// assert!(err.is_permission_denied());
    /// ```
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        match self {
            Self::PermissionDenied { .. } => true,
            Self::Io(err) => err.kind() == ErrorKind::PermissionDenied,
            _ => false,
        }
    }
}
