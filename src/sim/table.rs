//! FrameTable - the fixed-capacity frame array for one simulation run.

use crate::common::{Error, PageRef, Result, SlotId};
use crate::sim::slot::FrameSlot;

/// An ordered, fixed-length sequence of [`FrameSlot`]s.
///
/// Capacity is fixed for the lifetime of one run and slot indices never
/// move. A fresh table is created per engine invocation; the engine owns
/// it and callers only ever see snapshots of its contents.
///
/// Both engines share the hit test, empty-slot lookup, and victim scan
/// defined here, so capacity validation also lives here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameTable {
    slots: Vec<FrameSlot>,
}

impl FrameTable {
    /// Create a table with `capacity` empty slots.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCapacity`] if `capacity` is zero. This is
    /// checked before any simulation step is produced.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }

        Ok(Self {
            slots: vec![FrameSlot::new(); capacity],
        })
    }

    /// Number of slots (fixed after construction).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Shared access to one slot.
    #[inline]
    pub fn slot(&self, id: SlotId) -> &FrameSlot {
        &self.slots[id.0]
    }

    /// Exclusive access to one slot.
    #[inline]
    pub fn slot_mut(&mut self, id: SlotId) -> &mut FrameSlot {
        &mut self.slots[id.0]
    }

    /// Linear hit test: the slot currently holding `page`, if any.
    ///
    /// A page is resident in at most one slot at any instant, so the
    /// first match is the only match.
    pub fn find(&self, page: PageRef) -> Option<SlotId> {
        self.slots
            .iter()
            .position(|slot| slot.holds(page))
            .map(SlotId::new)
    }

    /// Lowest-indexed empty slot, if any.
    pub fn first_empty(&self) -> Option<SlotId> {
        self.slots
            .iter()
            .position(FrameSlot::is_empty)
            .map(SlotId::new)
    }

    /// The slot with the minimum `last_used_at`.
    ///
    /// Never-used slots order below every real timestamp, so one of them
    /// wins whenever any exists. Ties resolve to the lowest slot index;
    /// with unique per-reference timestamps ties can only occur between
    /// never-used slots.
    pub fn lru_victim(&self) -> SlotId {
        let mut victim = SlotId::new(0);
        for (i, slot) in self.slots.iter().enumerate().skip(1) {
            if slot.last_used_at() < self.slot(victim).last_used_at() {
                victim = SlotId::new(i);
            }
        }
        victim
    }

    /// Snapshot of the current frame contents, in slot order.
    ///
    /// Always exactly `capacity` entries; `None` marks an empty slot.
    pub fn snapshot(&self) -> Vec<Option<PageRef>> {
        self.slots.iter().map(FrameSlot::page).collect()
    }
}
