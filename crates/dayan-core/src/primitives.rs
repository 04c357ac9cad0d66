//! # Ritual Primitives
//!
//! Hardcoded constants of the Great Expansion procedure.
//!
//! The engine starts with zero state but fixed arithmetic.
//! These values are compiled into the binary and are immutable at runtime;
//! changing any of them changes which oracle the engine computes.

/// Total number of yarrow stalks at session start.
///
/// The 50th stalk (the Taiji stalk) is set aside once, symbolically,
/// and never re-enters the counting pool.
pub const TOTAL_STALKS: u32 = 50;

/// Number of stalks participating in the counting for each line.
///
/// Every line begins from this pool; within a line the pool carries the
/// reduced count from the previous variation instead of resetting.
pub const WORKING_STALKS: u32 = 49;

/// Lines per hexagram, derived bottom to top.
pub const LINES_PER_HEXAGRAM: usize = 6;

/// Variations (split-hang-count-remove cycles) per line.
pub const VARIATIONS_PER_LINE: usize = 3;

/// Counting group size for the "counting by fours" step.
pub const GROUP_SIZE: u32 = 4;

/// The only pools reachable after the third variation of a line.
///
/// `pool / 4` maps these to line values 6, 7, 8 and 9 respectively.
/// Any other end-of-line pool is an arithmetic invariant violation.
pub const FINAL_POOLS: [u32; 4] = [24, 28, 32, 36];
