//! Page reference identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies a requested memory page.
///
/// Using `i64` because a reference is whatever integer the caller hands us:
/// a live process pid, a hand-typed token from a reference string, negative
/// values included. No upper bound is assumed and repeats are expected.
///
/// # Example
/// ```
/// use pagesim::PageRef;
///
/// let page = PageRef::new(42);
/// assert_eq!(page.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageRef(pub i64);

impl PageRef {
    /// Create a new PageRef.
    #[inline]
    pub fn new(id: i64) -> Self {
        PageRef(id)
    }
}

impl From<i64> for PageRef {
    fn from(id: i64) -> Self {
        PageRef(id)
    }
}

impl fmt::Display for PageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page({})", self.0)
    }
}
