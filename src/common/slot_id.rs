//! Frame slot identifier type.

use std::fmt;

/// Identifies a slot in the frame table.
///
/// Using `usize` because:
/// 1. Slots are stored in `Vec<FrameSlot>`
/// 2. Direct indexing without casting: `slots[slot_id.0]`
/// 3. Matches Rust idioms for array/vector indexing
///
/// Slot indices are fixed at table construction and never move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(pub usize);

impl SlotId {
    /// Create a new SlotId.
    #[inline]
    pub fn new(id: usize) -> Self {
        SlotId(id)
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Slot({})", self.0)
    }
}
