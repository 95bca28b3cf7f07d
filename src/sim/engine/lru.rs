//! LRU (Least-Recently-Used) replacement engine.

use crate::common::{PageRef, Result};
use crate::sim::table::FrameTable;
use crate::sim::trace::{SimulationResult, TraceBuilder};

/// Evicts the slot whose page was least recently referenced.
///
/// Every hit refreshes the slot's recency with the reference's logical
/// time (its 0-based position in the input). Empty slots fill lowest
/// index first and are never chosen as victims while one remains; once
/// the table is full, the victim is the slot with the minimum
/// `last_used_at`.
pub struct LruEngine;

impl LruEngine {
    /// Simulate LRU replacement over `pages` with `capacity` frames.
    ///
    /// Same input assumptions and determinism guarantees as
    /// [`FifoEngine::run`](super::FifoEngine::run).
    ///
    /// # Errors
    /// [`Error::InvalidCapacity`](crate::common::Error::InvalidCapacity)
    /// if `capacity` is zero; no steps are produced in that case.
    pub fn run(pages: &[PageRef], capacity: usize) -> Result<SimulationResult> {
        let mut table = FrameTable::new(capacity)?;
        let mut trace = TraceBuilder::with_capacity(pages.len());

        for (t, &page) in pages.iter().enumerate() {
            match table.find(page) {
                Some(id) => {
                    table.slot_mut(id).touch(t);
                    trace.record(page, &table, false);
                }
                None => {
                    let id = table
                        .first_empty()
                        .unwrap_or_else(|| table.lru_victim());

                    let slot = table.slot_mut(id);
                    slot.load(page);
                    slot.touch(t);
                    trace.record(page, &table, true);
                }
            }
        }

        Ok(trace.finish())
    }
}
