//! # History Record Format
//!
//! The JSON object appended to the history file for every completed
//! session. The field set and types are a compatibility contract with the
//! external history consumer and must be reproduced exactly:
//!
//! - `question`, `date` ("YYYY-MM-DD HH:MM:SS") — strings
//! - `yao_values` — six integers in {6,7,8,9}, bottom to top
//! - `original_name`, `original_xiang`, `original_symbols` (6-char ⚊/⚋)
//! - `changed_name`, `changed_xiang`, `changed_symbols` — **empty strings**
//!   (never absent, never null) when no line is changing
//!
//! The core has no clock; the caller supplies the formatted timestamp.

use serde::{Deserialize, Serialize};

use crate::engine::DivinationResult;
use crate::types::LineValue;

/// One persisted divination, in the exact on-disk field layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// The question asked.
    pub question: String,
    /// Local timestamp, "YYYY-MM-DD HH:MM:SS".
    pub date: String,
    /// The six line values, bottom to top.
    pub yao_values: Vec<LineValue>,
    /// Original hexagram name.
    pub original_name: String,
    /// Original trigram-pair label.
    pub original_xiang: String,
    /// Original symbol string, six ⚊/⚋ characters.
    pub original_symbols: String,
    /// Changed hexagram name, or "" when no line is changing.
    pub changed_name: String,
    /// Changed trigram-pair label, or "".
    pub changed_xiang: String,
    /// Changed symbol string, or "".
    pub changed_symbols: String,
}

impl HistoryRecord {
    /// Build a record from a completed session and a formatted timestamp.
    #[must_use]
    pub fn new(result: &DivinationResult, date: String) -> Self {
        let (changed_name, changed_xiang, changed_symbols) = match &result.changed {
            Some(changed) => (
                changed.name.clone(),
                changed.xiang.clone(),
                changed.symbols.clone(),
            ),
            None => (String::new(), String::new(), String::new()),
        };
        Self {
            question: result.question.clone(),
            date,
            yao_values: result.lines.to_vec(),
            original_name: result.original.name.clone(),
            original_xiang: result.original.xiang.clone(),
            original_symbols: result.original.symbols.clone(),
            changed_name,
            changed_xiang,
            changed_symbols,
        }
    }

    /// Whether the record carries a changed hexagram.
    #[must_use]
    pub fn has_changed(&self) -> bool {
        !self.changed_name.is_empty()
    }
}

// =============================================================================
// TESTS
// =============================================================================
