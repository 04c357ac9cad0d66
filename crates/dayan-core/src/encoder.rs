//! # Line Encoding
//!
//! Pure mappings from line values to binary bits and display symbols,
//! used to build hexagram lookup keys and to detect changing lines.
//!
//! | value | original bit | changed bit | changing? |
//! |-------|--------------|-------------|-----------|
//! | 6     | 0            | 1           | yes       |
//! | 7     | 1            | 1           | no        |
//! | 8     | 0            | 0           | no        |
//! | 9     | 1            | 0           | yes       |

use serde::Serialize;

use crate::types::LineValue;

// =============================================================================
// ASPECT
// =============================================================================

/// Which of the session's two hexagrams a key or symbol belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Aspect {
    /// The figure as cast, before changing lines flip.
    Original,
    /// The figure after every changing line has flipped.
    Changed,
}

// =============================================================================
// PER-LINE ENCODING
// =============================================================================

/// The binary bit of a line value under the given aspect.
#[must_use]
pub fn line_bit(value: LineValue, aspect: Aspect) -> char {
    match (value.value(), aspect) {
        (6, Aspect::Original) | (8, _) | (9, Aspect::Changed) => '0',
        _ => '1',
    }
}

/// The display symbol of a line value under the given aspect:
/// ⚊ (solid, yang) or ⚋ (broken, yin).
#[must_use]
pub fn line_symbol(value: LineValue, aspect: Aspect) -> char {
    match line_bit(value, aspect) {
        '1' => '⚊',
        _ => '⚋',
    }
}

// =============================================================================
// SEQUENCE ENCODING
// =============================================================================

/// Build the 6-character binary key of a line sequence, bottom to top.
#[must_use]
pub fn hexagram_key(lines: &[LineValue], aspect: Aspect) -> String {
    lines.iter().map(|&v| line_bit(v, aspect)).collect()
}

/// Build the 6-character symbol string of a line sequence, bottom to top.
#[must_use]
pub fn hexagram_symbols(lines: &[LineValue], aspect: Aspect) -> String {
    lines.iter().map(|&v| line_symbol(v, aspect)).collect()
}

/// Whether any line in the sequence is changing.
#[must_use]
pub fn has_changing(lines: &[LineValue]) -> bool {
    lines.iter().any(|v| v.is_changing())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn lv(v: u8) -> LineValue {
        LineValue::new(v).expect("valid line value")
    }

    #[test]
    fn bit_table_matches_the_ritual() {
        let cases = [(6, '0', '1'), (7, '1', '1'), (8, '0', '0'), (9, '1', '0')];
        for (v, original, changed) in cases {
            assert_eq!(line_bit(lv(v), Aspect::Original), original);
            assert_eq!(line_bit(lv(v), Aspect::Changed), changed);
        }
    }

    #[test]
    fn changing_iff_bits_differ() {
        for v in 6..=9 {
            let value = lv(v);
            let differs =
                line_bit(value, Aspect::Original) != line_bit(value, Aspect::Changed);
            assert_eq!(value.is_changing(), differs);
        }
    }

    #[test]
    fn symbols_follow_bits() {
        assert_eq!(line_symbol(lv(7), Aspect::Original), '⚊');
        assert_eq!(line_symbol(lv(8), Aspect::Original), '⚋');
        assert_eq!(line_symbol(lv(6), Aspect::Original), '⚋');
        assert_eq!(line_symbol(lv(6), Aspect::Changed), '⚊');
        assert_eq!(line_symbol(lv(9), Aspect::Original), '⚊');
        assert_eq!(line_symbol(lv(9), Aspect::Changed), '⚋');
    }

    #[test]
    fn key_is_bottom_to_top() {
        let lines = vec![lv(9), lv(7), lv(8), lv(7), lv(8), lv(7)];
        assert_eq!(hexagram_key(&lines, Aspect::Original), "110101");
        assert_eq!(hexagram_key(&lines, Aspect::Changed), "010101");
    }

    #[test]
    fn changed_key_differs_only_at_changing_lines() {
        let lines = vec![lv(6), lv(7), lv(9), lv(8), lv(7), lv(8)];
        let original: Vec<char> = hexagram_key(&lines, Aspect::Original).chars().collect();
        let changed: Vec<char> = hexagram_key(&lines, Aspect::Changed).chars().collect();
        for (i, value) in lines.iter().enumerate() {
            assert_eq!(value.is_changing(), original[i] != changed[i]);
        }
    }

    #[test]
    fn stable_sequence_has_no_changing_lines() {
        let stable = vec![lv(7); 6];
        assert!(!has_changing(&stable));
        let one_change = vec![lv(7), lv(7), lv(6), lv(7), lv(7), lv(7)];
        assert!(has_changing(&one_change));
    }
}
