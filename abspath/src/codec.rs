//! Serde support for [`AbsPath`].
//!
//! A path serializes as its string. Deserializing accepts only absolute
//! strings, which are normalized lexically (`~` is not expanded).
//!
//! To store paths relative to a root, wrap them in [`Relative`] or
//! [`RelativeSlice`] when serializing and decode with [`RelativeSeed`] or
//! [`RelativeVecSeed`]. Relative decoding joins each string onto the root;
//! absolute strings pass through unchanged.
//!
//! ```
//! use abspath::codec::{RelativeSlice, RelativeVecSeed};
//! use abspath::AbsPath;
//! use serde::de::DeserializeSeed;
//!
//! let base = AbsPath::root().join("foo");
//! let paths = [AbsPath::root(), base.clone(), base.join("bar")];
//!
//! let json = serde_json::to_string(&RelativeSlice::new(&paths, &base)).unwrap();
//! assert_eq!(json, r#"["..","","bar"]"#);
//!
//! let mut de = serde_json::Deserializer::from_str(&json);
//! let decoded = RelativeVecSeed::new(&base).deserialize(&mut de).unwrap();
//! assert_eq!(decoded, paths);
//! ```

use std::fmt;

use serde::de::{self, DeserializeSeed, Deserializer, SeqAccess, Visitor};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::path::AbsPath;

/// Decode one string, relative to `root` if given.
///
/// # Errors
///
/// [`Error::Codec`] for a relative string without a root.
pub fn decode(value: &str, root: Option<&AbsPath>) -> Result<AbsPath> {
    match root {
        Some(root) => Ok(resolve(value, root)),
        None if value.starts_with('/') => Ok(AbsPath::root().join(value)),
        None => Err(Error::Codec {
            message: format!("cannot decode relative path {value:?} without a root"),
        }),
    }
}

// Absolute strings ignore the root.
fn resolve(value: &str, root: &AbsPath) -> AbsPath {
    if value.starts_with('/') {
        AbsPath::root().join(value)
    } else {
        root.join(value)
    }
}

/// Encode each path relative to `root`.
#[must_use]
pub fn encode_relative(paths: &[AbsPath], root: &AbsPath) -> Vec<String> {
    paths.iter().map(|path| path.relative_to(root)).collect()
}

/// Decode strings produced by [`encode_relative`] (or absolute ones).
#[must_use]
pub fn decode_relative<S: AsRef<str>>(values: &[S], root: &AbsPath) -> Vec<AbsPath> {
    values
        .iter()
        .map(|value| resolve(value.as_ref(), root))
        .collect()
}

impl Serialize for AbsPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AbsPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_str(PathVisitor { root: None })
    }
}

struct PathVisitor<'a> {
    root: Option<&'a AbsPath>,
}

impl<'de> Visitor<'de> for PathVisitor<'_> {
    type Value = AbsPath;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root {
            Some(root) => write!(f, "a path relative to {root}"),
            None => f.write_str("an absolute path string"),
        }
    }

    fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<AbsPath, E> {
        decode(value, self.root).map_err(E::custom)
    }
}

/// Serializes a path relative to a root.
#[derive(Debug, Clone, Copy)]
pub struct Relative<'a> {
    path: &'a AbsPath,
    root: &'a AbsPath,
}

impl<'a> Relative<'a> {
    /// Wrap `path` for serialization relative to `root`.
    #[must_use]
    pub const fn new(path: &'a AbsPath, root: &'a AbsPath) -> Self {
        Self { path, root }
    }
}

impl Serialize for Relative<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.path.relative_to(self.root))
    }
}

/// Serializes a slice of paths relative to a root, as a sequence.
#[derive(Debug, Clone, Copy)]
pub struct RelativeSlice<'a> {
    paths: &'a [AbsPath],
    root: &'a AbsPath,
}

impl<'a> RelativeSlice<'a> {
    /// Wrap `paths` for serialization relative to `root`.
    #[must_use]
    pub const fn new(paths: &'a [AbsPath], root: &'a AbsPath) -> Self {
        Self { paths, root }
    }
}

impl Serialize for RelativeSlice<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.paths.len()))?;
        for path in self.paths {
            seq.serialize_element(&Relative::new(path, self.root))?;
        }
        seq.end()
    }
}

/// Deserializes one path, joining relative strings onto a root.
#[derive(Debug, Clone, Copy)]
pub struct RelativeSeed<'a> {
    root: &'a AbsPath,
}

impl<'a> RelativeSeed<'a> {
    /// Decode relative to `root`.
    #[must_use]
    pub const fn new(root: &'a AbsPath) -> Self {
        Self { root }
    }
}

impl<'de> DeserializeSeed<'de> for RelativeSeed<'_> {
    type Value = AbsPath;

    fn deserialize<D: Deserializer<'de>>(
        self,
        deserializer: D,
    ) -> std::result::Result<AbsPath, D::Error> {
        deserializer.deserialize_str(PathVisitor {
            root: Some(self.root),
        })
    }
}

/// Deserializes a sequence of paths, joining relative strings onto a root.
#[derive(Debug, Clone, Copy)]
pub struct RelativeVecSeed<'a> {
    root: &'a AbsPath,
}

impl<'a> RelativeVecSeed<'a> {
    /// Decode relative to `root`.
    #[must_use]
    pub const fn new(root: &'a AbsPath) -> Self {
        Self { root }
    }
}

impl<'de> DeserializeSeed<'de> for RelativeVecSeed<'_> {
    type Value = Vec<AbsPath>;

    fn deserialize<D: Deserializer<'de>>(
        self,
        deserializer: D,
    ) -> std::result::Result<Vec<AbsPath>, D::Error> {
        deserializer.deserialize_seq(self)
    }
}

impl<'de> Visitor<'de> for RelativeVecSeed<'_> {
    type Value = Vec<AbsPath>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a sequence of paths relative to {}", self.root)
    }

    fn visit_seq<A: SeqAccess<'de>>(
        self,
        mut seq: A,
    ) -> std::result::Result<Vec<AbsPath>, A::Error> {
        let mut rv = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(path) = seq.next_element_seed(RelativeSeed::new(self.root))? {
            rv.push(path);
        }
        Ok(rv)
    }
}
