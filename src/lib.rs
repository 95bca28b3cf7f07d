//! pagesim - page-replacement policy simulation with replayable traces.
//!
//! # Architecture
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                           pagesim                              │
//! ├────────────────────────────────────────────────────────────────┤
//! │  ┌──────────────┐   ┌──────────────┐                           │
//! │  │ input        │   │ sysmon       │   (reference adaptation)  │
//! │  │ text → pages │   │ pids → pages │                           │
//! │  └──────┬───────┘   └──────┬───────┘                           │
//! │         └───────┬──────────┘                                   │
//! │                 ▼                                              │
//! │  ┌──────────────────────────────────────────────────────────┐  │
//! │  │          Simulation Core (sim/)  [pure, deterministic]   │  │
//! │  │  ┌──────────────────────────────────────────────────┐    │  │
//! │  │  │     Replacement Engines: FIFO | LRU              │    │  │
//! │  │  │        (selectable via Algorithm)                │    │  │
//! │  │  └──────────────────────────────────────────────────┘    │  │
//! │  │      FrameTable + FrameSlot + SimulationResult           │  │
//! │  └──────────────────────────┬───────────────────────────────┘  │
//! │                             ▼                                  │
//! │  ┌──────────────────────────────────────────────────────────┐  │
//! │  │       Playback (playback/)  [all mutable cursor state]   │  │
//! │  │            play / pause / reset / advance                │  │
//! │  └──────────────────────────────────────────────────────────┘  │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageRef, SlotId, Error, config)
//! - [`sim`] - The simulation core: frame table, engines, trace model
//! - [`input`] - Reference-string parsing and process→page adaptation
//! - [`sysmon`] - Host process/memory/CPU enumeration
//! - [`playback`] - Stepwise replay of a finished trace
//!
//! # Quick Start
//! ```
//! use pagesim::{input::parse_reference_string, Algorithm};
//!
//! let pages = parse_reference_string("1 2 3 1 4");
//! let result = Algorithm::Lru.run(&pages, 3).unwrap();
//!
//! assert_eq!(result.len(), 5);
//! assert_eq!(result.total_faults(), 4);
//! ```

// Core modules
pub mod common;
pub mod sim;

// Boundary modules
pub mod input;
pub mod playback;
pub mod sysmon;

// Re-export commonly used items at crate root for convenience
pub use common::config::DEFAULT_CAPACITY;
pub use common::{Error, PageRef, Result, SlotId};

pub use playback::PlaybackController;
pub use sim::{simulate, Algorithm, FifoEngine, LruEngine, SimulationResult, SimulationStep};
pub use sysmon::{ProcessInfo, SystemMonitor, SystemStats};
