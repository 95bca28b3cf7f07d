//! The page-replacement simulation core.
//!
//! A simulation run is a pure function: an ordered sequence of page
//! references plus a frame capacity goes in, a replayable trace comes out.
//! No I/O, no clock, no randomness, no state shared across calls.
//!
//! # Components
//! - [`FrameSlot`] - one physical frame: content + recency metadata
//! - [`FrameTable`] - the fixed-capacity slot vector for one run
//! - [`SimulationStep`] / [`SimulationResult`] - the trace data model
//! - [`engine`] - replacement policy implementations (FIFO, LRU)

pub mod engine;
mod slot;
mod table;
mod trace;

pub use engine::{simulate, Algorithm, FifoEngine, LruEngine};
pub use slot::FrameSlot;
pub use table::FrameTable;
pub use trace::{SimulationResult, SimulationStep};
