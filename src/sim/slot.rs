//! FrameSlot - one physical frame in the simulation.

use crate::common::PageRef;

/// One physical frame: either empty or holding a page, plus the logical
/// time at which it was last referenced.
///
/// Content and recency live in one record, so victim selection never has
/// to join parallel collections by index.
///
/// `page == None` is the "empty" sentinel. `last_used_at == None` means
/// "never used"; `Option<usize>` orders `None` below every `Some(t)`, so
/// a never-used slot compares as older than any real timestamp without a
/// magic marker value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSlot {
    /// The resident page, or None if the slot is empty.
    page: Option<PageRef>,

    /// Position in the reference sequence at which this slot was last
    /// touched. Only the LRU engine reads it; FIFO never does.
    last_used_at: Option<usize>,
}

impl FrameSlot {
    /// Create a new empty slot.
    pub fn new() -> Self {
        Self {
            page: None,
            last_used_at: None,
        }
    }

    /// The page currently resident, or `None` if the slot is empty.
    #[inline]
    pub fn page(&self) -> Option<PageRef> {
        self.page
    }

    /// Logical time of the last reference to this slot.
    #[inline]
    pub fn last_used_at(&self) -> Option<usize> {
        self.last_used_at
    }

    /// Check if the slot is empty (no page resident).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.page.is_none()
    }

    /// Check whether the slot currently holds `page`.
    #[inline]
    pub fn holds(&self, page: PageRef) -> bool {
        self.page == Some(page)
    }

    /// Load a page into the slot, overwriting whatever was there.
    #[inline]
    pub fn load(&mut self, page: PageRef) {
        self.page = Some(page);
    }

    /// Record a reference to this slot at logical time `t`.
    #[inline]
    pub fn touch(&mut self, t: usize) {
        self.last_used_at = Some(t);
    }
}

impl Default for FrameSlot {
    fn default() -> Self {
        Self::new()
    }
}
