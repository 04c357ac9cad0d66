//! # dayan-core
//!
//! The deterministic divination engine for Dayan - THE LOGIC.
//!
//! This crate simulates the classical Great Expansion (大衍筮法) yarrow-stalk
//! procedure: a fixed, stepwise arithmetic ritual that consumes a pool of
//! counting stalks through repeated splitting and mod-4 counting to derive
//! six line values, then maps them to one or two of the 64 canonical
//! hexagrams.
//!
//! ## Architectural Constraints
//!
//! The CORE:
//! - Is turn-based and purely synchronous; every event returns before the
//!   next is accepted
//! - Holds all session state in one owned value, never in globals, so
//!   independent sessions never interfere
//! - Contains no clock, no I/O and no randomness — split points are either
//!   supplied by the caller or drawn from an injected provider
//! - Is bit-exact: an off-by-one in remainder handling silently produces a
//!   wrong oracle, so every arithmetic rule is tested against known traces

// =============================================================================
// MODULES
// =============================================================================

pub mod catalog;
pub mod encoder;
pub mod engine;
pub mod formats;
pub mod primitives;
pub mod split;
pub mod types;
pub mod variation;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{DayanError, LineValue};

// =============================================================================
// RE-EXPORTS: Engine
// =============================================================================

pub use catalog::HexagramRecord;
pub use encoder::Aspect;
pub use engine::{DivinationEngine, DivinationResult, Phase, Progress};
pub use split::{ScriptedSplits, SplitProvider};
pub use variation::{VariationOutcome, run_variation};

// =============================================================================
// RE-EXPORTS: Formats (from formats module)
// =============================================================================

pub use formats::HistoryRecord;
