//! # History Persistence
//!
//! Loads and appends the JSON history file. The record layout is defined
//! in `dayan_core::formats` and is a compatibility contract; this module
//! only does the file I/O around it.
//!
//! Persistence failures are local: a missing or corrupt file loads as an
//! empty history, and a failed save must never abort or corrupt a
//! completed session (callers log and continue).

use std::path::Path;

use dayan_core::{DayanError, HistoryRecord};

/// Load all history records.
///
/// A missing file is an empty history. A corrupt file is logged and also
/// treated as empty rather than blocking new casts.
#[must_use]
pub fn load(path: &Path) -> Vec<HistoryRecord> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(_) => return Vec::new(),
    };
    match serde_json::from_str(&raw) {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!("history file '{}' is corrupt: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// Append one record and rewrite the file.
pub fn append(path: &Path, record: HistoryRecord) -> Result<(), DayanError> {
    let mut records = load(path);
    records.push(record);
    save(path, &records)
}

/// Write the full history, pretty-printed with hexagram names unescaped.
pub fn save(path: &Path, records: &[HistoryRecord]) -> Result<(), DayanError> {
    let json = serde_json::to_string_pretty(records)
        .map_err(|e| DayanError::Serialization(e.to_string()))?;
    std::fs::write(path, json).map_err(|e| {
        DayanError::Io(format!("cannot write history '{}': {}", path.display(), e))
    })
}

/// Records newest-first, ordered by the timestamp string.
///
/// "YYYY-MM-DD HH:MM:SS" sorts correctly as text.
#[must_use]
pub fn newest_first(mut records: Vec<HistoryRecord>) -> Vec<HistoryRecord> {
    records.sort_by(|a, b| b.date.cmp(&a.date));
    records
}
