//! # dayan
//!
//! Application library for the Dayan binary: CLI commands, configuration,
//! history persistence, display text and the random split provider.
//! The divination arithmetic itself lives in `dayan-core`.

pub mod cli;
pub mod config;
pub mod history;
pub mod random;
pub mod text;
