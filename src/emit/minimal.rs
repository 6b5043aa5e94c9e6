//! Minimal-phonology emitter (strict-CV target).
//!
//! The target orthography has no voiced stops, no geminates, no long vowels
//! and no vowel clusters. Devoicing and the fixed substitutions live in the
//! rule table; the positional h-rule and vowel-cluster smoothing run here.
//! "zu" is the single branching mora and yields two parallel candidates.

use std::collections::BTreeMap;

use crate::error::TransliterateError;
use crate::mora::MoraSequence;
use crate::tables::RuleTables;
use crate::variants::{combine_with, Choice, VariantSet};

pub fn emit(seq: &MoraSequence, tables: &RuleTables) -> Result<VariantSet, TransliterateError> {
    let mut choices = Vec::with_capacity(seq.len());
    for (idx, mora) in seq.iter().enumerate() {
        let key = mora.key();
        let fragments = tables
            .minimal
            .mappings
            .get(&key)
            .ok_or_else(|| TransliterateError::UnmappableOnset { mora: key.clone() })?;
        // Positional h-rule: word-initial h → k, medial h → p. Applies to the
        // mapped fragment, so table entries that already lost their h (hya →
        // kija) are untouched. Length and geminate flags are simply dropped:
        // the target has neither.
        let fragments = fragments
            .iter()
            .map(|f| reposition_h(f, idx == 0))
            .collect();
        choices.push(Choice { key, fragments });
    }

    Ok(combine_with(&choices, |fragments| {
        capitalize(&smooth_diphthongs(fragments, &tables.minimal.diphthongs))
    }))
}

fn reposition_h(fragment: &str, word_initial: bool) -> String {
    match fragment.strip_prefix('h') {
        Some(rest) if word_initial => format!("k{rest}"),
        Some(rest) => format!("p{rest}"),
        None => fragment.to_string(),
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'u' | 'e' | 'o')
}

/// Collapse adjacent vowels across fragment boundaries with the closed
/// diphthong table ("ka"+"o" → "ko", "u"+"e" → "uwe"), then join. A
/// replacement may itself end in a vowel, so smoothing chains left to right.
fn smooth_diphthongs(fragments: &[&str], table: &BTreeMap<String, String>) -> String {
    let mut merged: Vec<String> = Vec::with_capacity(fragments.len());
    for &fragment in fragments {
        let Some(prev) = merged.last_mut() else {
            merged.push(fragment.to_string());
            continue;
        };
        let pair: Option<String> = match (prev.chars().last(), fragment.chars().next()) {
            (Some(a), Some(b)) if is_vowel(a) && is_vowel(b) => Some([a, b].iter().collect()),
            _ => None,
        };
        match pair.as_deref().and_then(|p| table.get(p)) {
            Some(replacement) => {
                prev.pop();
                prev.push_str(replacement);
                if fragment.chars().count() > 1 {
                    merged.push(fragment[1..].to_string());
                }
            }
            None => merged.push(fragment.to_string()),
        }
    }
    merged.concat()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mora::tokenize;
    use crate::tables::RuleTables;

    fn emit_texts(romaji: &str) -> Vec<String> {
        emit(&tokenize(romaji).unwrap(), RuleTables::global())
            .unwrap()
            .texts()
    }

    #[test]
    fn test_hachiman() {
        // Initial h → k, chi → si, final nasal retained.
        assert_eq!(emit_texts("hachiman"), ["Kasiman"]);
    }

    #[test]
    fn test_medial_h_becomes_p() {
        assert_eq!(emit_texts("toyotamahime"), ["Tojotamapime"]);
    }

    #[test]
    fn test_zu_branches_su_first() {
        assert_eq!(emit_texts("zushi"), ["Susi", "Tusi"]);
    }

    #[test]
    fn test_devoicing() {
        assert_eq!(emit_texts("kanda"), ["Kanta"]);
        assert_eq!(emit_texts("ginza"), ["Kinsa"]);
    }

    #[test]
    fn test_r_to_l() {
        assert_eq!(emit_texts("hiroshima"), ["Kilosima"]);
    }

    #[test]
    fn test_long_vowels_collapse() {
        assert_eq!(emit_texts("tookyoo"), ["Tokijo"]);
    }

    #[test]
    fn test_geminate_dropped() {
        assert_eq!(emit_texts("hattori"), ["Katoli"]);
    }

    #[test]
    fn test_diphthong_smoothing() {
        // ka + o + ri: "ao" → "o"
        assert_eq!(emit_texts("kaori"), ["Koli"]);
        // a + i collapses entirely
        assert_eq!(emit_texts("ai"), ["A"]);
        // u + e gains a glide
        assert_eq!(emit_texts("ueno"), ["Uweno"]);
    }

    #[test]
    fn test_multiplicative_branching() {
        assert_eq!(emit_texts("zuzu"), ["Susu", "Tusu", "Sutu", "Tutu"]);
    }

    #[test]
    fn test_unvoiced_output_only() {
        for input in ["hachiman", "kanda", "ginza", "fujisan", "tookyoo"] {
            for text in emit_texts(input) {
                let lower = text.to_lowercase();
                assert!(
                    !lower.contains(['g', 'z', 'd', 'b']),
                    "voiced letter in {text}"
                );
            }
        }
    }
}
