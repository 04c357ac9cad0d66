//! # Split-Point Providers
//!
//! The split point of each variation is normally chosen by the caller
//! (an interactive selection); when none is supplied, the engine defers to
//! an injected provider. This is the only seam through which randomness may
//! enter the engine, and it is a seam precisely so that tests and replays
//! can supply deterministic sequences.
//!
//! The engine clamps whatever a provider returns into [1, pool - 1], so
//! providers are infallible by contract.

use std::collections::VecDeque;

// =============================================================================
// PROVIDER TRAIT
// =============================================================================

/// Supplies the left-pile size for a split of `pool` stalks.
///
/// Implementations should return a value in [1, pool - 1]; out-of-range
/// values are clamped by the engine rather than rejected.
pub trait SplitProvider {
    /// Choose the split point for a pool of the given size.
    fn split_point(&mut self, pool: u32) -> u32;
}

// =============================================================================
// SCRIPTED PROVIDER
// =============================================================================

/// A deterministic provider fed from a fixed queue of split points.
///
/// Used by tests and replays. When the queue runs dry it falls back to the
/// midpoint of the pool, so a partial script still drives a session to
/// completion.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSplits {
    queue: VecDeque<u32>,
}

impl ScriptedSplits {
    /// Create a provider from a sequence of predetermined split points.
    #[must_use]
    pub fn new(points: impl IntoIterator<Item = u32>) -> Self {
        Self {
            queue: points.into_iter().collect(),
        }
    }

    /// Number of scripted points not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl SplitProvider for ScriptedSplits {
    fn split_point(&mut self, pool: u32) -> u32 {
        self.queue.pop_front().unwrap_or(pool / 2)
    }
}

// =============================================================================
// TESTS
// =============================================================================
