//! # Hexagram Catalog
//!
//! The fixed reference table of the 64 canonical hexagrams, keyed by the
//! 6-character binary string built bottom to top from the line bits.
//!
//! The table is exhaustive over all 64 possible keys, so a lookup miss for
//! a key built by the encoder is an internal invariant violation, never a
//! user error. Lookup is an exact-match map; no fuzzy matching exists.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::encoder::{self, Aspect};
use crate::types::{DayanError, LineValue};

// =============================================================================
// CANONICAL TABLE
// =============================================================================

/// (key, name, trigram-pair label), in King Wen order.
///
/// Pure trigram doublings carry the single-trigram label (乾 -> 天, 坎 -> 水,
/// ...), matching the canonical table this format is compatible with.
const HEXAGRAMS: [(&str, &str, &str); 64] = [
    ("111111", "乾", "天"),
    ("000000", "坤", "地"),
    ("100010", "屯", "水雷"),
    ("010001", "蒙", "山水"),
    ("111010", "需", "水天"),
    ("010111", "讼", "天水"),
    ("010000", "师", "地水"),
    ("000010", "比", "水地"),
    ("111011", "小畜", "风天"),
    ("110111", "履", "天泽"),
    ("111000", "泰", "地天"),
    ("000111", "否", "天地"),
    ("101111", "同人", "天火"),
    ("111101", "大有", "火天"),
    ("001000", "谦", "地山"),
    ("000100", "豫", "雷地"),
    ("100110", "随", "泽雷"),
    ("011001", "蛊", "山风"),
    ("110000", "临", "地泽"),
    ("000011", "观", "风地"),
    ("100101", "噬嗑", "火雷"),
    ("101001", "贲", "山火"),
    ("000001", "剥", "山地"),
    ("100000", "复", "地雷"),
    ("100111", "无妄", "天雷"),
    ("111001", "大畜", "山天"),
    ("100001", "颐", "山雷"),
    ("011110", "大过", "泽风"),
    ("010010", "坎", "水"),
    ("101101", "离", "火"),
    ("001110", "咸", "泽山"),
    ("011100", "恒", "雷风"),
    ("001111", "遁", "天山"),
    ("111100", "大壮", "雷天"),
    ("000101", "晋", "火地"),
    ("101000", "明夷", "地火"),
    ("101011", "家人", "风火"),
    ("110101", "睽", "火泽"),
    ("001010", "蹇", "水山"),
    ("010100", "解", "雷水"),
    ("110001", "损", "山泽"),
    ("100011", "益", "风雷"),
    ("111110", "夬", "泽天"),
    ("011111", "姤", "天风"),
    ("000110", "萃", "泽地"),
    ("011000", "升", "地风"),
    ("010110", "困", "泽水"),
    ("011010", "井", "水风"),
    ("101110", "革", "泽火"),
    ("011101", "鼎", "火风"),
    ("100100", "震", "雷"),
    ("001001", "艮", "山"),
    ("001011", "渐", "风山"),
    ("110100", "归妹", "雷泽"),
    ("101100", "丰", "雷火"),
    ("001101", "旅", "火山"),
    ("011011", "巽", "风"),
    ("110110", "兑", "泽"),
    ("010011", "涣", "风水"),
    ("110010", "节", "水泽"),
    ("001100", "中孚", "风泽"),
    ("110011", "小过", "雷山"),
    ("010101", "既济", "水火"),
    ("101010", "未济", "火水"),
];

/// Lazily built exact-match index from key to table position.
fn index() -> &'static BTreeMap<&'static str, usize> {
    static INDEX: OnceLock<BTreeMap<&'static str, usize>> = OnceLock::new();
    INDEX.get_or_init(|| {
        HEXAGRAMS
            .iter()
            .enumerate()
            .map(|(i, (key, _, _))| (*key, i))
            .collect()
    })
}

// =============================================================================
// LOOKUP
// =============================================================================

/// A resolved hexagram: name, trigram-pair label, and the key and symbol
/// string it was resolved from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexagramRecord {
    /// Canonical name (e.g. 乾, 既济).
    pub name: String,
    /// Trigram-pair label (e.g. 天, 水火).
    pub xiang: String,
    /// The 6-character binary key, bottom to top.
    pub key: String,
    /// The 6-character ⚊/⚋ symbol string, bottom to top.
    pub symbols: String,
}

/// Look up a 6-bit key in the canonical table.
#[must_use]
pub fn lookup(key: &str) -> Option<(&'static str, &'static str)> {
    index().get(key).map(|&i| {
        let (_, name, xiang) = HEXAGRAMS[i];
        (name, xiang)
    })
}

/// Resolve a full line sequence into a hexagram record under one aspect.
///
/// The key is built by the encoder, so a miss here means the catalog or
/// the encoder is broken — it is reported, never defaulted.
pub fn resolve(lines: &[LineValue], aspect: Aspect) -> Result<HexagramRecord, DayanError> {
    let key = encoder::hexagram_key(lines, aspect);
    let (name, xiang) = lookup(&key).ok_or_else(|| DayanError::CatalogMiss(key.clone()))?;
    Ok(HexagramRecord {
        name: name.to_string(),
        xiang: xiang.to_string(),
        symbols: encoder::hexagram_symbols(lines, aspect),
        key,
    })
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_sixty_four_entries() {
        assert_eq!(HEXAGRAMS.len(), 64);
        assert_eq!(index().len(), 64, "keys must be unique");
    }

    #[test]
    fn every_possible_key_resolves() {
        for bits in 0u32..64 {
            let key: String = (0..6)
                .map(|i| if bits & (1 << i) != 0 { '1' } else { '0' })
                .collect();
            assert!(lookup(&key).is_some(), "missing key {key}");
        }
    }

    #[test]
    fn names_are_unique() {
        let names: std::collections::BTreeSet<_> =
            HEXAGRAMS.iter().map(|(_, name, _)| *name).collect();
        assert_eq!(names.len(), 64);
    }

    #[test]
    fn pure_trigram_doublings_use_single_labels() {
        for (key, label) in [
            ("111111", "天"),
            ("000000", "地"),
            ("010010", "水"),
            ("101101", "火"),
            ("100100", "雷"),
            ("001001", "山"),
            ("011011", "风"),
            ("110110", "泽"),
        ] {
            let (_, xiang) = lookup(key).expect("pure trigram");
            assert_eq!(xiang, label);
        }
    }

    #[test]
    fn resolve_builds_key_and_symbols() {
        let lines: Vec<LineValue> = [9, 7, 8, 7, 8, 7]
            .iter()
            .map(|&v| LineValue::new(v).expect("valid"))
            .collect();

        let original = resolve(&lines, Aspect::Original).expect("original");
        assert_eq!(original.name, "睽");
        assert_eq!(original.xiang, "火泽");
        assert_eq!(original.key, "110101");
        assert_eq!(original.symbols.chars().count(), 6);

        let changed = resolve(&lines, Aspect::Changed).expect("changed");
        assert_eq!(changed.name, "既济");
        assert_eq!(changed.xiang, "水火");
        assert_eq!(changed.key, "010101");
    }

    #[test]
    fn unknown_key_is_a_catalog_miss() {
        assert!(lookup("10101").is_none());
        assert!(lookup("1010101").is_none());
        assert!(lookup("10101x").is_none());
    }
}
