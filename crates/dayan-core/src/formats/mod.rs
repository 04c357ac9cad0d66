//! # Formats
//!
//! Wire/data formats consumed by external collaborators.
//! File I/O operations live in the app layer.

mod history;

pub use history::HistoryRecord;
