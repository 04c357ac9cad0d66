//! # Core Type Definitions
//!
//! This module contains the terminal value types and error taxonomy for the
//! Dayan divination engine:
//! - Line values (`LineValue`) — the sole artifact of a line's three variations
//! - Error types (`DayanError`)
//!
//! ## Determinism Guarantees
//!
//! All types in this module use integer arithmetic only and reject any value
//! the ritual arithmetic cannot produce, instead of clamping or defaulting.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::Phase;
use crate::primitives::GROUP_SIZE;

// =============================================================================
// LINE VALUE
// =============================================================================

/// The value of one finished line: 6, 7, 8 or 9.
///
/// 6 (old yin) and 9 (old yang) are *changing* lines; 7 (young yang) and
/// 8 (young yin) are stable. The value is always the end-of-line pool
/// divided by four.
///
/// Serializes as a bare integer for history-format compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineValue(u8);

impl LineValue {
    /// Create a line value, rejecting anything outside 6..=9.
    pub fn new(value: u8) -> Result<Self, DayanError> {
        if (6..=9).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DayanError::InvalidLineValue(value))
        }
    }

    /// Derive the line value from the pool left after the third variation.
    ///
    /// The pool must be divisible by four and yield a value in 6..=9;
    /// anything else means the counting arithmetic was violated upstream.
    pub fn from_pool(pool: u32) -> Result<Self, DayanError> {
        if pool % GROUP_SIZE != 0 {
            return Err(DayanError::PoolInvariant(pool));
        }
        let value = pool / GROUP_SIZE;
        u8::try_from(value)
            .ok()
            .and_then(|v| Self::new(v).ok())
            .ok_or(DayanError::PoolInvariant(pool))
    }

    /// Get the raw value (6, 7, 8 or 9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// A changing line flips in the transformed hexagram.
    #[must_use]
    pub const fn is_changing(self) -> bool {
        matches!(self.0, 6 | 9)
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the Dayan system.
///
/// - Malformed split points are *clamped*, never rejected — the only true
///   caller error is an event sent in the wrong phase.
/// - The engine never panics; all errors must be reported loudly, since a
///   misordered call would otherwise corrupt the derived oracle without
///   visible symptom.
#[derive(Debug, Error)]
pub enum DayanError {
    /// An event was sent while the session was in a phase that does not
    /// accept it (e.g. `count_right` after the right-pile step was skipped).
    #[error("event '{event}' not valid in phase {phase}")]
    InvalidEvent {
        /// The offending event name.
        event: &'static str,
        /// The phase the session was in.
        phase: Phase,
    },

    /// `result` was requested before the session reached `Complete`.
    #[error("result not ready: session is in phase {0}")]
    ResultNotReady(Phase),

    /// A line value outside 6..=9 was supplied.
    #[error("line value {0} outside 6..=9")]
    InvalidLineValue(u8),

    /// The pool after the third variation of a line violated the
    /// divisibility invariant. Internal error: unreachable if the
    /// variation arithmetic is intact.
    #[error("pool {0} violates the end-of-line divisibility invariant")]
    PoolInvariant(u32),

    /// No catalog entry for a hexagram key. Internal error: the catalog
    /// is exhaustive over all 64 keys, so this is provably unreachable.
    #[error("no hexagram for key '{0}'")]
    CatalogMiss(String),

    /// A session was started with an empty question.
    #[error("question must not be empty")]
    EmptyQuestion,

    /// An I/O error occurred (app layer: history persistence).
    #[error("I/O error: {0}")]
    Io(String),

    /// A serialization or deserialization error occurred.
    #[error("serialization error: {0}")]
    Serialization(String),
}

// =============================================================================
// TESTS
// =============================================================================
