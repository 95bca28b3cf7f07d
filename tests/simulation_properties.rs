//! Property tests for the replacement engines.
//!
//! These check the invariants that must hold for every run, on random
//! reference sequences and capacities.

use pagesim::{Algorithm, PageRef};
use proptest::prelude::*;

fn pages_strategy() -> impl Strategy<Value = Vec<PageRef>> {
    // A small page universe forces plenty of hits and evictions
    prop::collection::vec((-20i64..20).prop_map(PageRef::new), 0..80)
}

fn algorithm_strategy() -> impl Strategy<Value = Algorithm> {
    prop_oneof![Just(Algorithm::Fifo), Just(Algorithm::Lru)]
}

proptest! {
    /// `total_faults` equals the number of fault steps, always.
    #[test]
    fn fault_count_matches_fault_steps(
        pages in pages_strategy(),
        capacity in 1usize..8,
        alg in algorithm_strategy(),
    ) {
        let result = alg.run(&pages, capacity).unwrap();
        let counted = result.steps().iter().filter(|s| s.is_fault).count() as u64;
        prop_assert_eq!(result.total_faults(), counted);
    }

    /// One step per input reference, echoing the reference in order.
    #[test]
    fn step_count_and_order_match_input(
        pages in pages_strategy(),
        capacity in 1usize..8,
        alg in algorithm_strategy(),
    ) {
        let result = alg.run(&pages, capacity).unwrap();
        prop_assert_eq!(result.len(), pages.len());

        for (step, &page) in result.steps().iter().zip(&pages) {
            prop_assert_eq!(step.page, page);
        }
    }

    /// Every snapshot has exactly `capacity` slots.
    #[test]
    fn every_snapshot_has_capacity_slots(
        pages in pages_strategy(),
        capacity in 1usize..8,
        alg in algorithm_strategy(),
    ) {
        let result = alg.run(&pages, capacity).unwrap();
        for step in result.steps() {
            prop_assert_eq!(step.frames.len(), capacity);
        }
    }

    /// Identical inputs produce identical results.
    #[test]
    fn runs_are_deterministic(
        pages in pages_strategy(),
        capacity in 1usize..8,
        alg in algorithm_strategy(),
    ) {
        let first = alg.run(&pages, capacity).unwrap();
        let second = alg.run(&pages, capacity).unwrap();
        prop_assert_eq!(first, second);
    }

    /// A step is a hit exactly when its page was resident in the
    /// previous snapshot (the table starts empty).
    #[test]
    fn hit_iff_resident_in_previous_snapshot(
        pages in pages_strategy(),
        capacity in 1usize..8,
        alg in algorithm_strategy(),
    ) {
        let result = alg.run(&pages, capacity).unwrap();

        let mut previous = vec![None; capacity];
        for step in result.steps() {
            let resident = previous.contains(&Some(step.page));
            prop_assert_eq!(step.is_fault, !resident);
            previous.clone_from(&step.frames);
        }
    }

    /// No page occupies two slots in any snapshot.
    #[test]
    fn resident_pages_are_unique_per_snapshot(
        pages in pages_strategy(),
        capacity in 1usize..8,
        alg in algorithm_strategy(),
    ) {
        let result = alg.run(&pages, capacity).unwrap();

        for step in result.steps() {
            let mut seen: Vec<PageRef> =
                step.frames.iter().flatten().copied().collect();
            seen.sort_unstable();
            let before = seen.len();
            seen.dedup();
            prop_assert_eq!(seen.len(), before);
        }
    }

    /// Each distinct page faults at least once (cold start), and the
    /// fault total never exceeds the reference count.
    #[test]
    fn fault_count_bounds(
        pages in pages_strategy(),
        capacity in 1usize..8,
        alg in algorithm_strategy(),
    ) {
        let result = alg.run(&pages, capacity).unwrap();

        let mut distinct: Vec<PageRef> = pages.clone();
        distinct.sort_unstable();
        distinct.dedup();

        prop_assert!(result.total_faults() >= distinct.len() as u64);
        prop_assert!(result.total_faults() <= pages.len() as u64);
    }

    /// Faults only evict: at most one slot changes content per step, and
    /// on a hit none do.
    #[test]
    fn at_most_one_slot_changes_per_step(
        pages in pages_strategy(),
        capacity in 1usize..8,
        alg in algorithm_strategy(),
    ) {
        let result = alg.run(&pages, capacity).unwrap();

        let mut previous = vec![None; capacity];
        for step in result.steps() {
            let changed = previous
                .iter()
                .zip(&step.frames)
                .filter(|(a, b)| a != b)
                .count();

            if step.is_fault {
                prop_assert_eq!(changed, 1);
            } else {
                prop_assert_eq!(changed, 0);
            }
            previous.clone_from(&step.frames);
        }
    }

    /// With capacity at least the number of distinct pages, every page
    /// faults exactly once under either policy: nothing is ever evicted.
    #[test]
    fn no_evictions_when_everything_fits(
        pages in pages_strategy(),
        alg in algorithm_strategy(),
    ) {
        let mut distinct: Vec<PageRef> = pages.clone();
        distinct.sort_unstable();
        distinct.dedup();
        let capacity = distinct.len().max(1);

        let result = alg.run(&pages, capacity).unwrap();
        prop_assert_eq!(result.total_faults(), distinct.len() as u64);
    }
}
