//! Replacement policy engines.
//!
//! Currently implements:
//! - [`FifoEngine`] - circular insertion-order eviction
//! - [`LruEngine`] - minimum-recency eviction
//!
//! Each engine is a pure function over `(pages, capacity)`. Adding a
//! policy means adding a module here and a variant to [`Algorithm`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::{Error, PageRef, Result};
use crate::sim::trace::SimulationResult;

mod fifo;
mod lru;

pub use fifo::FifoEngine;
pub use lru::LruEngine;

/// Which replacement policy to simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-In-First-Out: evict the longest-resident slot.
    Fifo,
    /// Least-Recently-Used: evict the slot referenced longest ago.
    Lru,
}

impl Algorithm {
    /// Run the selected engine over `pages` with `capacity` frames.
    ///
    /// # Errors
    /// [`Error::InvalidCapacity`] if `capacity` is zero; no steps are
    /// produced in that case.
    pub fn run(self, pages: &[PageRef], capacity: usize) -> Result<SimulationResult> {
        match self {
            Algorithm::Fifo => FifoEngine::run(pages, capacity),
            Algorithm::Lru => LruEngine::run(pages, capacity),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Fifo => write!(f, "FIFO"),
            Algorithm::Lru => write!(f, "LRU"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(Algorithm::Fifo),
            "lru" => Ok(Algorithm::Lru),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Run `algorithm` over `pages` with `capacity` frames.
///
/// Convenience wrapper around [`Algorithm::run`] for callers holding the
/// three pieces separately (e.g. parsed UI state).
///
/// # Errors
/// [`Error::InvalidCapacity`] if `capacity` is zero.
pub fn simulate(
    algorithm: Algorithm,
    pages: &[PageRef],
    capacity: usize,
) -> Result<SimulationResult> {
    algorithm.run(pages, capacity)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(pages: &[i64]) -> Vec<PageRef> {
        pages.iter().copied().map(PageRef::new).collect()
    }

    #[test]
    fn test_algorithm_from_str() {
        assert_eq!("FIFO".parse::<Algorithm>().unwrap(), Algorithm::Fifo);
        assert_eq!("lru".parse::<Algorithm>().unwrap(), Algorithm::Lru);
        assert_eq!(" Fifo ".parse::<Algorithm>().unwrap(), Algorithm::Fifo);

        let err = "clock".parse::<Algorithm>().unwrap_err();
        assert_eq!(err, Error::UnknownAlgorithm("clock".to_string()));
    }

    #[test]
    fn test_algorithm_display_round_trips() {
        for alg in [Algorithm::Fifo, Algorithm::Lru] {
            assert_eq!(alg.to_string().parse::<Algorithm>().unwrap(), alg);
        }
    }

    #[test]
    fn test_simulate_dispatches() {
        let pages = refs(&[1, 2, 3, 1, 4]);

        let via_dispatch = simulate(Algorithm::Lru, &pages, 3).unwrap();
        let direct = LruEngine::run(&pages, 3).unwrap();
        assert_eq!(via_dispatch, direct);

        let via_dispatch = simulate(Algorithm::Fifo, &pages, 3).unwrap();
        let direct = FifoEngine::run(&pages, 3).unwrap();
        assert_eq!(via_dispatch, direct);
    }

    #[test]
    fn test_invalid_capacity_through_dispatch() {
        for alg in [Algorithm::Fifo, Algorithm::Lru] {
            let err = alg.run(&refs(&[1, 2]), 0).unwrap_err();
            assert_eq!(err, Error::InvalidCapacity(0));
        }
    }
}
