//! Input adaptation for the simulation core.
//!
//! The engines assume a pre-validated integer sequence and do no parsing
//! themselves. Everything lossy or fallible about turning user text or
//! live process data into page references happens here, at the boundary.

use crate::common::PageRef;
use crate::sysmon::ProcessInfo;

/// Parse a whitespace-separated reference string into page references.
///
/// Tokens that fail to parse as integers are silently dropped; negative
/// values and duplicates are kept. An empty or all-invalid string yields
/// an empty sequence, which is a legal engine input.
///
/// # Example
/// ```
/// use pagesim::{input::parse_reference_string, PageRef};
///
/// let pages = parse_reference_string("1 2 x 3");
/// assert_eq!(pages, vec![PageRef::new(1), PageRef::new(2), PageRef::new(3)]);
/// ```
pub fn parse_reference_string(input: &str) -> Vec<PageRef> {
    input
        .split_whitespace()
        .filter_map(|token| token.parse::<i64>().ok())
        .map(PageRef::new)
        .collect()
}

/// Use live process pids as the reference sequence.
///
/// Selection order is preserved: the caller decides which processes to
/// include and in what order they are referenced.
pub fn pages_from_processes(processes: &[ProcessInfo]) -> Vec<PageRef> {
    processes
        .iter()
        .map(|p| PageRef::new(i64::from(p.pid)))
        .collect()
}
