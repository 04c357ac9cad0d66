//! # Variation Arithmetic
//!
//! The pure arithmetic of one split → hang → count-left → count-right →
//! remove cycle on a stalk pool. Three of these cycles make one line.
//!
//! This module never fails: out-of-range split points are clamped to the
//! nearest valid value, since a caller-chosen visual split may legitimately
//! land exactly on a boundary. The one genuine edge case is the right pile
//! being emptied by the hang-stalk removal, in which case its counting step
//! is skipped entirely and its remainder is 0.

use serde::Serialize;

use crate::primitives::GROUP_SIZE;

// =============================================================================
// SPLIT CLAMPING
// =============================================================================

/// Clamp a requested split point into [1, pool - 1].
///
/// A split requires both piles non-empty; the pool is always >= 2 when a
/// split is requested during a session.
#[must_use]
pub fn clamp_split(pool: u32, requested: u32) -> u32 {
    requested.clamp(1, pool.saturating_sub(1).max(1))
}

// =============================================================================
// COUNTING BY FOURS
// =============================================================================

/// Count a non-empty pile by fours and return the remainder set aside.
///
/// A raw remainder of 0 is redefined as 4: a complete last group of four
/// is still set aside.
#[must_use]
pub fn count_remainder(pile: u32) -> u32 {
    let raw = pile % GROUP_SIZE;
    if raw == 0 { GROUP_SIZE } else { raw }
}

// =============================================================================
// ONE FULL VARIATION
// =============================================================================

/// The outcome of one complete variation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VariationOutcome {
    /// Size of the left pile after the split.
    pub left: u32,
    /// Size of the right pile after the split and the hang-stalk removal.
    pub right: u32,
    /// Remainder set aside from the left pile (1..=4).
    pub left_remainder: u32,
    /// Remainder set aside from the right pile (0 when the count was
    /// skipped because the hang removal emptied the pile, else 1..=4).
    pub right_remainder: u32,
    /// Whether the right-pile count was auto-skipped.
    pub right_skipped: bool,
    /// Total stalks removed: left + right remainders + the hung stalk.
    pub total_removed: u32,
    /// Pool left for the next variation (or for the line value).
    pub new_pool: u32,
}

/// Run one full variation on `pool` with the given split point.
///
/// This is the non-interactive composition of the five ritual steps; the
/// engine performs the same steps one event at a time. The split point is
/// clamped, so this operation never fails.
#[must_use]
pub fn run_variation(pool: u32, split_point: u32) -> VariationOutcome {
    debug_assert!(pool >= 2, "a split requires both piles non-empty");

    // Step 1 (divide): both piles non-empty.
    let left = clamp_split(pool, split_point);
    let mut right = pool - left;

    // Step 2 (designate): hang one stalk from the right pile.
    right -= 1;

    // Steps 3-4 (count by fours): the right count is skipped when the
    // hang removal emptied the pile.
    let left_remainder = count_remainder(left);
    let right_skipped = right == 0;
    let right_remainder = if right_skipped { 0 } else { count_remainder(right) };

    // Step 5 (remove): remainders plus the hung stalk leave the pool.
    let total_removed = left_remainder + right_remainder + 1;

    VariationOutcome {
        left,
        right,
        left_remainder,
        right_remainder,
        right_skipped,
        total_removed,
        new_pool: pool - total_removed,
    }
}

// =============================================================================
// TESTS
// =============================================================================
