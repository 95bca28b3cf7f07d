//! Simulation trace: per-reference step records and the finished result.

use serde::{Deserialize, Serialize};

use crate::common::PageRef;
use crate::sim::table::FrameTable;

/// One record per input reference, in order.
///
/// Steps are never mutated after creation; the full sequence of steps is
/// the trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationStep {
    /// The page that was referenced.
    pub page: PageRef,

    /// Frame contents after the reference was serviced, in slot order.
    /// Always exactly `capacity` entries; `None` marks an empty slot.
    pub frames: Vec<Option<PageRef>>,

    /// Whether servicing the reference required a fill or an eviction.
    pub is_fault: bool,
}

/// The finished, read-only output of one engine run.
///
/// Fields are private: callers receive a trace they can replay and
/// serialize but not edit. `total_faults` equals the number of steps with
/// `is_fault` set, by construction - [`TraceBuilder`] is its only writer
/// and increments it exactly when a fault step is recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    steps: Vec<SimulationStep>,
    total_faults: u64,
}

impl SimulationResult {
    /// The ordered step records.
    #[inline]
    pub fn steps(&self) -> &[SimulationStep] {
        &self.steps
    }

    /// Total page faults across the run.
    #[inline]
    pub fn total_faults(&self) -> u64 {
        self.total_faults
    }

    /// Number of steps (one per input reference).
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if the trace is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Fraction of references that faulted (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        if self.steps.is_empty() {
            0.0
        } else {
            self.total_faults as f64 / self.steps.len() as f64
        }
    }
}

/// Accumulates steps while an engine runs.
#[derive(Debug)]
pub(crate) struct TraceBuilder {
    steps: Vec<SimulationStep>,
    total_faults: u64,
}

impl TraceBuilder {
    /// Create a builder sized for `n` references.
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            steps: Vec::with_capacity(n),
            total_faults: 0,
        }
    }

    /// Record the outcome of one reference against the current table state.
    pub(crate) fn record(&mut self, page: PageRef, table: &FrameTable, is_fault: bool) {
        if is_fault {
            self.total_faults += 1;
        }
        self.steps.push(SimulationStep {
            page,
            frames: table.snapshot(),
            is_fault,
        });
    }

    /// Finish the trace.
    pub(crate) fn finish(self) -> SimulationResult {
        SimulationResult {
            steps: self.steps,
            total_faults: self.total_faults,
        }
    }
}
