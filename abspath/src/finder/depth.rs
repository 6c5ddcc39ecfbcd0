//! Depth bounds for a traversal.

use std::fmt;
use std::ops::{Bound, RangeBounds};

/// A closed interval of traversal depths.
///
/// Depth 0 is the root, depth 1 its direct children and so on. The upper
/// bound may be unbounded. A range whose lower bound exceeds its upper bound
/// is empty and matches nothing.
///
/// # Examples
///
/// ```
/// use abspath::finder::DepthRange;
///
/// let range = DepthRange::default();
/// assert_eq!(range.min(), 1);
/// assert_eq!(range.max(), None);
///
/// let range = range.with_max(2);
/// assert!(range.contains(1) && range.contains(2) && !range.contains(3));
///
/// assert_eq!(DepthRange::from_bounds(..3), DepthRange::new(0, Some(2)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DepthRange {
    min: usize,
    max: Option<usize>,
}

impl Default for DepthRange {
    fn default() -> Self {
        Self { min: 1, max: None }
    }
}

impl DepthRange {
    /// Create a range from explicit bounds. `None` means unbounded.
    #[must_use]
    pub const fn new(min: usize, max: Option<usize>) -> Self {
        Self { min, max }
    }

    /// The empty range.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            min: 1,
            max: Some(0),
        }
    }

    /// Convert any `usize` range. Exclusive upper bounds become inclusive by
    /// subtracting one; `..0` is [`DepthRange::empty`].
    #[must_use]
    pub fn from_bounds<R: RangeBounds<usize>>(range: R) -> Self {
        let min = match range.start_bound() {
            Bound::Included(&n) => n,
            Bound::Excluded(&n) => n.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let max = match range.end_bound() {
            Bound::Included(&n) => Some(n),
            Bound::Excluded(&n) => match n.checked_sub(1) {
                Some(n) => Some(n),
                None => return Self::empty(),
            },
            Bound::Unbounded => None,
        };
        Self { min, max }
    }

    /// The lower bound.
    #[must_use]
    pub const fn min(&self) -> usize {
        self.min
    }

    /// The upper bound, `None` when unbounded.
    #[must_use]
    pub const fn max(&self) -> Option<usize> {
        self.max
    }

    /// Cap the range at `max`: the result is `min(max, lower)..=max`.
    #[must_use]
    pub fn with_max(self, max: usize) -> Self {
        Self {
            min: self.min.min(max),
            max: Some(max),
        }
    }

    /// Raise the lower bound to `min`: the result is `min..=max(upper, min)`.
    #[must_use]
    pub fn with_min(self, min: usize) -> Self {
        Self {
            min,
            max: self.max.map(|max| max.max(min)),
        }
    }

    /// Returns `true` if no depth satisfies the range.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.max.is_some_and(|max| max < self.min)
    }

    /// Returns `true` if `depth` lies within the range.
    #[must_use]
    pub fn contains(&self, depth: usize) -> bool {
        depth >= self.min && self.max.map_or(true, |max| depth <= max)
    }
}

impl fmt::Display for DepthRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "{}..={max}", self.min),
            None => write!(f, "{}..", self.min),
        }
    }
}
