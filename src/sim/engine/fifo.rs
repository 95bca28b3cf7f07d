//! FIFO (First-In-First-Out) replacement engine.

use crate::common::{PageRef, Result, SlotId};
use crate::sim::table::FrameTable;
use crate::sim::trace::{SimulationResult, TraceBuilder};

/// Evicts the longest-resident slot by insertion order.
///
/// A single circular write cursor starts at slot 0 and advances by one
/// (mod capacity) only on a fault, independent of which slot it lands on.
/// Hits never refresh a slot's position - that is the defining property
/// separating FIFO from LRU.
pub struct FifoEngine;

impl FifoEngine {
    /// Simulate FIFO replacement over `pages` with `capacity` frames.
    ///
    /// The input is assumed to be a pre-validated integer sequence (see
    /// [`crate::input`]); an empty sequence is legal and yields an empty
    /// trace. Output is deterministic: identical inputs produce identical
    /// results.
    ///
    /// # Errors
    /// [`Error::InvalidCapacity`](crate::common::Error::InvalidCapacity)
    /// if `capacity` is zero; no steps are produced in that case.
    pub fn run(pages: &[PageRef], capacity: usize) -> Result<SimulationResult> {
        let mut table = FrameTable::new(capacity)?;
        let mut trace = TraceBuilder::with_capacity(pages.len());
        let mut cursor = 0usize;

        for &page in pages {
            let fault = table.find(page).is_none();

            if fault {
                // Overwrite whatever the cursor points at, empty or not
                table.slot_mut(SlotId::new(cursor)).load(page);
                cursor = (cursor + 1) % capacity;
            }

            trace.record(page, &table, fault);
        }

        Ok(trace.finish())
    }
}
