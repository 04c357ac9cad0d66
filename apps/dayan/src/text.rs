//! # Display Text
//!
//! Chinese display strings for casts, traces, summaries and the
//! downstream interpretation prompt. Pure formatting over the engine's
//! result types; nothing here interprets the oracle.

use dayan_core::encoder::{Aspect, line_bit};
use dayan_core::{DivinationResult, LineValue};

/// Line position names, bottom to top, as displayed during a cast.
pub const YAO_POSITIONS: [&str; 6] = ["初爻", "二爻", "三爻", "四爻", "五爻", "上爻"];

/// Line position names as used inside the interpretation prompt
/// (the topmost line is called 六爻 there).
const PROMPT_POSITIONS: [&str; 6] = ["初爻", "二爻", "三爻", "四爻", "五爻", "六爻"];

/// Variation names within a line.
pub const BIAN_NAMES: [&str; 3] = ["一变", "二变", "三变"];

/// Short name of a line value: 老阴 / 少阳 / 少阴 / 老阳.
#[must_use]
pub fn yao_value_name(value: LineValue) -> &'static str {
    match value.value() {
        6 => "老阴",
        7 => "少阳",
        8 => "少阴",
        _ => "老阳",
    }
}

/// Long description of a line value, with its change behaviour.
#[must_use]
pub fn yao_value_detail(value: LineValue) -> &'static str {
    match value.value() {
        6 => "老阴（⚋变⚊）",
        7 => "少阳（⚊不变）",
        8 => "少阴（⚋不变）",
        _ => "老阳（⚊变⚋）",
    }
}

/// The yin/yang reading of a line in the changed hexagram.
fn changed_polarity(value: LineValue) -> &'static str {
    match line_bit(value, Aspect::Changed) {
        '1' => "阳",
        _ => "阴",
    }
}

// =============================================================================
// RESULT SUMMARY
// =============================================================================

/// The human-readable result block shown after a completed cast.
#[must_use]
pub fn result_summary(result: &DivinationResult) -> String {
    let mut out = format!("本卦：{}{}\n", result.original.xiang, result.original.name);

    let parts: Vec<String> = result
        .lines
        .iter()
        .enumerate()
        .map(|(i, &v)| format!("{}{}", YAO_POSITIONS[i], yao_value_name(v)))
        .collect();
    out.push_str(&parts.join("，"));

    match &result.changed {
        Some(changed) => {
            out.push_str(&format!("\n之卦：{}{}", changed.xiang, changed.name));
        }
        None => out.push_str("\n之卦：无"),
    }
    out
}

// =============================================================================
// INTERPRETATION PROMPT
// =============================================================================

/// The natural-language prompt handed to a downstream interpreter.
///
/// The engine itself never interprets the hexagram; this is pure
/// templating over the result, in the established prompt wording.
#[must_use]
pub fn interpretation_prompt(result: &DivinationResult, date_cn: &str) -> String {
    let original_parts: Vec<String> = result
        .lines
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let mark = if v.is_changing() { "、动爻" } else { "" };
            format!("{}{}{}", PROMPT_POSITIONS[i], yao_value_name(v), mark)
        })
        .collect();
    let original_str = original_parts.join("，");

    match &result.changed {
        Some(changed) => {
            let changed_parts: Vec<String> = result
                .lines
                .iter()
                .enumerate()
                .map(|(i, &v)| format!("{}{}", PROMPT_POSITIONS[i], changed_polarity(v)))
                .collect();
            let changed_str = changed_parts.join("，");

            format!(
                "你是一名精通周易大衍筮法的中国传统文化预测学专家，某人问{}？\n\n\
                 于{}用大衍筮法起卦，得到起卦结果如下\n\n\
                 本卦：卦名为{}，卦象为{}，{}。\n\n\
                 之卦：卦名为{}，卦象为{}，{}。\n\n\
                 然后无需结合现状，仅仅请根据上文起卦得到的文字信息，从卦象阴阳角度，\
                 根据大衍筮法的方法，从专家的角度综合进行解卦预测。",
                result.question,
                date_cn,
                result.original.name,
                result.original.xiang,
                original_str,
                changed.name,
                changed.xiang,
                changed_str,
            )
        }
        None => format!(
            "你是一名精通周易大衍筮法的中国传统文化预测学专家，某人问{}？\n\n\
             于{}用大衍筮法起卦，得到起卦结果如下\n\n\
             本卦：卦名为{}，卦象为{}，{}，无变卦。\n\n\
             然后无需结合现状，仅仅请根据上文起卦得到的文字信息，从卦象阴阳角度，\
             根据大衍筮法的方法，从专家的角度综合进行解卦预测。",
            result.question,
            date_cn,
            result.original.name,
            result.original.xiang,
            original_str,
        ),
    }
}

// =============================================================================
// TESTS
// =============================================================================
