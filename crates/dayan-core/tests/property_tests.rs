//! # Property-Based Tests
//!
//! Verification of the counting arithmetic invariants under arbitrary
//! split sequences. The ritual guarantees fall out of the arithmetic, not
//! of any particular choice of split, so they must hold for every input.

use dayan_core::engine::Phase;
use dayan_core::variation::{clamp_split, run_variation};
use dayan_core::{DivinationEngine, ScriptedSplits};
use proptest::collection::vec;
use proptest::prelude::*;

fn engine(points: Vec<u32>) -> DivinationEngine {
    DivinationEngine::new(Box::new(ScriptedSplits::new(points)))
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// A clamped split always leaves both piles non-empty.
    #[test]
    fn clamp_always_yields_valid_piles(pool in 2u32..200, requested in 0u32..1000) {
        let left = clamp_split(pool, requested);
        prop_assert!(left >= 1);
        prop_assert!(left <= pool - 1);
    }

    /// A variation removes 4, 5, 8 or 9 stalks when the right pile
    /// survives the hang, and the pool always accounts for the removal.
    #[test]
    fn variation_removes_one_of_four_totals(pool in 5u32..60, split in 0u32..80) {
        let out = run_variation(pool, split);
        prop_assert_eq!(out.new_pool, pool - out.total_removed);
        if !out.right_skipped {
            prop_assert!([4, 5, 8, 9].contains(&out.total_removed));
        } else {
            // Skipped right count: only the left remainder and the hung
            // stalk leave the pool.
            prop_assert_eq!(out.total_removed, out.left_remainder + 1);
        }
        prop_assert!((1..=4).contains(&out.left_remainder));
    }

    /// After the third variation of any line the pool is divisible by 4
    /// and lies in {24, 28, 32, 36}, for any split sequence.
    #[test]
    fn end_of_line_pool_is_always_valid(splits in vec(0u32..60, 18)) {
        let mut e = engine(splits);
        e.start("问").expect("start");
        e.confirm_taiji().expect("taiji");

        for _ in 0..6 {
            for _ in 0..3 {
                e.divide(None).expect("divide");
                e.designate_heaven_stalk().expect("hang");
                let p = e.count_left().expect("left");
                if p.phase == Phase::RightCountPending {
                    e.count_right().expect("right");
                }
                let p = e.acknowledge().expect("ack");
                if p.phase == Phase::LineDone {
                    prop_assert_eq!(p.pool % 4, 0);
                    prop_assert!([24, 28, 32, 36].contains(&p.pool));
                }
            }
            e.acknowledge().expect("line ack");
        }

        let result = e.result().expect("complete");
        for value in result.lines {
            prop_assert!((6..=9).contains(&value.value()));
        }
    }

    /// The same split sequence always derives the same oracle.
    #[test]
    fn sessions_are_deterministic(splits in vec(1u32..48, 18)) {
        let mut e1 = engine(splits.clone());
        let mut e2 = engine(splits);
        e1.start("问").expect("start");
        e2.start("问").expect("start");

        let r1 = e1.run_to_completion().expect("run");
        let r2 = e2.run_to_completion().expect("run");
        prop_assert_eq!(r1, r2);
    }

    /// Reset from any point yields an engine equivalent to a fresh one.
    #[test]
    fn reset_is_total(splits in vec(0u32..60, 18), steps in 0usize..40) {
        let mut e = engine(splits);
        e.start("问").expect("start");
        for _ in 0..steps {
            // Feed whichever event the current phase accepts.
            let _ = match e.phase() {
                Phase::TaijiPending => e.confirm_taiji(),
                Phase::SplitPending => e.divide(None),
                Phase::HeavenPending => e.designate_heaven_stalk(),
                Phase::LeftCountPending => e.count_left(),
                Phase::RightCountPending => e.count_right(),
                Phase::VariationDone | Phase::LineDone => e.acknowledge(),
                Phase::Idle | Phase::Complete => break,
            };
        }
        e.reset();

        let p = e.progress();
        prop_assert_eq!(p.phase, Phase::Idle);
        prop_assert_eq!(p.pool, 49);
        prop_assert_eq!(p.line, 0);
        prop_assert_eq!(p.variation, 0);
        prop_assert!(p.lines.is_empty());

        // The reset engine can run a full session again.
        e.start("问").expect("restart");
        prop_assert!(e.run_to_completion().is_ok());
    }
}
