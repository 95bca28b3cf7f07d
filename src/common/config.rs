//! Configuration constants for pagesim.

use std::time::Duration;

/// Default number of physical frames for a simulation run.
///
/// Three frames keep every eviction decision visible in a step table
/// without scrolling, which is why visualizers conventionally default
/// to it. Any positive capacity is accepted at run time.
pub const DEFAULT_CAPACITY: usize = 3;

/// Default playback cadence: one step per second.
pub const DEFAULT_PLAYBACK_INTERVAL: Duration = Duration::from_millis(1000);

/// Fastest allowed playback cadence.
pub const MIN_PLAYBACK_INTERVAL: Duration = Duration::from_millis(100);

/// Slowest allowed playback cadence.
pub const MAX_PLAYBACK_INTERVAL: Duration = Duration::from_millis(5000);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_capacity_is_valid() {
        assert!(DEFAULT_CAPACITY >= 1);
    }

    #[test]
    fn test_interval_bounds_ordered() {
        assert!(MIN_PLAYBACK_INTERVAL < MAX_PLAYBACK_INTERVAL);
        assert!(MIN_PLAYBACK_INTERVAL <= DEFAULT_PLAYBACK_INTERVAL);
        assert!(DEFAULT_PLAYBACK_INTERVAL <= MAX_PLAYBACK_INTERVAL);
    }
}
