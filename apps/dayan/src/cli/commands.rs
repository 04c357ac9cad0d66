//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use std::path::Path;

use chrono::Local;
use dayan_core::{
    DayanError, DivinationEngine, DivinationResult, HistoryRecord, Phase, Progress,
    ScriptedSplits, SplitProvider, catalog,
};

use crate::history;
use crate::random::UniformSplit;
use crate::text;

// =============================================================================
// CAST COMMAND
// =============================================================================

/// Cast a full hexagram for a question.
pub fn cmd_cast(
    history_path: &Path,
    json_mode: bool,
    quiet: bool,
    question: &str,
    seed: Option<u64>,
    splits: Option<&str>,
    prompt: bool,
    no_save: bool,
) -> Result<(), DayanError> {
    let provider = build_provider(seed, splits)?;
    let mut engine = DivinationEngine::new(provider);

    engine.start(question)?;
    engine.confirm_taiji()?;
    if !quiet && !json_mode {
        println!("取太极：50根取1根，49根参与演算\n");
    }

    let result = drive(&mut engine, quiet || json_mode)?;

    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&result)
                .map_err(|e| DayanError::Serialization(e.to_string()))?
        );
    } else {
        println!("\n{}", text::result_summary(&result));
    }

    if prompt {
        let date_cn = Local::now().format("%Y年%m月%d日").to_string();
        println!("\n{}", text::interpretation_prompt(&result, &date_cn));
    }

    if !no_save {
        let date = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let record = HistoryRecord::new(&result, date);
        // A failed save never invalidates the completed cast.
        if let Err(e) = history::append(history_path, record) {
            tracing::warn!("failed to save history: {}", e);
        }
    }

    Ok(())
}

/// Select the split-point source: explicit script, seeded random, or
/// OS-seeded random.
fn build_provider(
    seed: Option<u64>,
    splits: Option<&str>,
) -> Result<Box<dyn SplitProvider>, DayanError> {
    if let Some(splits) = splits {
        let points = parse_splits(splits)?;
        return Ok(Box::new(ScriptedSplits::new(points)));
    }
    Ok(match seed {
        Some(seed) => Box::new(UniformSplit::seeded(seed)),
        None => Box::new(UniformSplit::from_entropy()),
    })
}

/// Parse a comma-separated split list.
fn parse_splits(raw: &str) -> Result<Vec<u32>, DayanError> {
    raw.split(',')
        .map(|part| {
            part.trim()
                .parse::<u32>()
                .map_err(|e| DayanError::Serialization(format!("invalid split '{part}': {e}")))
        })
        .collect()
}

/// Drive a started session to completion, printing the per-variation
/// trace unless silenced.
fn drive(engine: &mut DivinationEngine, silent: bool) -> Result<DivinationResult, DayanError> {
    loop {
        match engine.phase() {
            Phase::SplitPending => engine.divide(None)?,
            Phase::HeavenPending => engine.designate_heaven_stalk()?,
            Phase::LeftCountPending => engine.count_left()?,
            Phase::RightCountPending => engine.count_right()?,
            Phase::VariationDone => {
                if !silent {
                    print_variation(&engine.progress());
                }
                engine.acknowledge()?
            }
            Phase::LineDone => {
                if !silent {
                    print_line(&engine.progress());
                }
                engine.acknowledge()?
            }
            Phase::Complete => return engine.result(),
            phase @ (Phase::Idle | Phase::TaijiPending) => {
                return Err(DayanError::InvalidEvent {
                    event: "cast",
                    phase,
                });
            }
        };
    }
}

fn print_variation(p: &Progress) {
    let position = text::YAO_POSITIONS[p.line.min(5)];
    let bian = text::BIAN_NAMES[p.variation.min(2)];
    if p.right_skipped {
        println!(
            "{position}·{bian}：左{}根余{}，右堆为0无需揲四，归奇{}根，余{}根",
            p.left, p.left_remainder, p.removed, p.pool
        );
    } else {
        println!(
            "{position}·{bian}：左{}根余{}，右{}根余{}，归奇{}根，余{}根",
            p.left, p.left_remainder, p.right, p.right_remainder, p.removed, p.pool
        );
    }
}

fn print_line(p: &Progress) {
    if let Some(&value) = p.lines.last() {
        println!(
            "{}：三变余{}根 ÷4 = {}，得{}\n",
            text::YAO_POSITIONS[p.line.min(5)],
            p.pool,
            value.value(),
            text::yao_value_detail(value)
        );
    }
}

// =============================================================================
// HISTORY COMMAND
// =============================================================================

/// List past casts, newest first.
pub fn cmd_history(history_path: &Path, json_mode: bool, limit: usize) -> Result<(), DayanError> {
    let mut records = history::newest_first(history::load(history_path));
    records.truncate(limit);

    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&records)
                .map_err(|e| DayanError::Serialization(e.to_string()))?
        );
        return Ok(());
    }

    if records.is_empty() {
        println!("暂无历史记录");
        return Ok(());
    }

    for record in &records {
        let changed = if record.has_changed() {
            format!("{}{}", record.changed_xiang, record.changed_name)
        } else {
            "无".to_string()
        };
        println!(
            "{}  {}  本卦：{}{}  之卦：{}",
            record.date, record.question, record.original_xiang, record.original_name, changed
        );
    }
    Ok(())
}

// =============================================================================
// LOOKUP COMMAND
// =============================================================================

/// Resolve one catalog entry by key.
pub fn cmd_lookup(key: &str, json_mode: bool) -> Result<(), DayanError> {
    let (name, xiang) =
        catalog::lookup(key).ok_or_else(|| DayanError::CatalogMiss(key.to_string()))?;

    if json_mode {
        println!(
            "{}",
            serde_json::json!({ "key": key, "name": name, "xiang": xiang })
        );
    } else {
        println!("{key}  {xiang}{name}");
    }
    Ok(())
}
