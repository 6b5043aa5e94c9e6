//! Voicing-preserving featural emitter (hangul target).
//!
//! Unlike the minimal-phonology target, voiced and unvoiced onsets map to
//! distinct syllable blocks. A standalone nasal-coda mora never stands
//! alone when it can be a coda: it merges as batchim into the preceding
//! block via hangul codepoint arithmetic.

use crate::error::TransliterateError;
use crate::mora::MoraSequence;
use crate::tables::RuleTables;
use crate::variants::VariantSet;

/// Hangul syllable blocks start here; each block is
/// (initial × 21 + medial) × 28 + final.
const HANGUL_BASE: u32 = 0xAC00;
const HANGUL_BLOCK_COUNT: u32 = 11172;
/// Jamo index of ㄴ as a final consonant.
const FINAL_NIEUN: u32 = 4;

fn block_index(c: char) -> Option<u32> {
    let offset = (c as u32).wrapping_sub(HANGUL_BASE);
    (offset < HANGUL_BLOCK_COUNT).then_some(offset)
}

fn has_final(c: char) -> bool {
    block_index(c).is_some_and(|offset| offset % 28 != 0)
}

/// Merge ㄴ into a block that has no final consonant yet.
fn with_nieun_final(c: char) -> Option<char> {
    if block_index(c).is_some() && !has_final(c) {
        char::from_u32(c as u32 + FINAL_NIEUN)
    } else {
        None
    }
}

/// Emit the featural form of a mora sequence, with an optional entity-type
/// suffix appended as whole blocks (space-separated, never merged
/// phonologically with the stem).
pub fn emit(
    seq: &MoraSequence,
    tables: &RuleTables,
    suffix: Option<&str>,
) -> Result<VariantSet, TransliterateError> {
    let mut text = String::new();
    for mora in seq.iter() {
        let key = mora.key();
        let glyph = tables
            .featural
            .get(&key)
            .ok_or(TransliterateError::UnmappableOnset { mora: key })?;

        if mora.coda_nasal {
            // Batchim merge; a preceding block that already carries a final
            // cannot host another, so the bare jamo is appended instead.
            match text.chars().last().and_then(with_nieun_final) {
                Some(merged) => {
                    text.pop();
                    text.push(merged);
                }
                None => text.push_str(glyph),
            }
        } else {
            // Geminate and length flags are dropped: the target writes
            // neither.
            text.push_str(glyph);
        }
    }

    if text.is_empty() {
        return Ok(VariantSet::default());
    }
    if let Some(suffix) = suffix {
        text.push(' ');
        text.push_str(suffix);
    }
    Ok(VariantSet::single(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mora::tokenize;
    use crate::tables::RuleTables;

    fn emit_text(romaji: &str) -> String {
        let set = emit(&tokenize(romaji).unwrap(), RuleTables::global(), None).unwrap();
        assert_eq!(set.len(), 1);
        set.texts().remove(0)
    }

    #[test]
    fn test_jamo_arithmetic() {
        assert!(!has_final('카'));
        assert!(has_final('칸'));
        assert_eq!(with_nieun_final('카'), Some('칸'));
        assert_eq!(with_nieun_final('칸'), None);
        assert_eq!(with_nieun_final('a'), None);
    }

    #[test]
    fn test_coda_merge_single_block() {
        // ka + nasal coda merge into one block, not two.
        assert_eq!(emit_text("kan"), "칸");
        assert_eq!(emit_text("kan").chars().count(), 1);
    }

    #[test]
    fn test_hachiman() {
        assert_eq!(emit_text("hachiman"), "하치만");
    }

    #[test]
    fn test_voicing_preserved() {
        assert_eq!(emit_text("jinja"), "진자");
        assert_eq!(emit_text("kanda"), "칸다");
        // Same consonant row, opposite voicing, distinct blocks.
        assert_ne!(emit_text("ka"), emit_text("ga"));
    }

    #[test]
    fn test_no_bare_nieun_after_block() {
        for input in ["kan", "shinsen", "hachiman", "kanzan"] {
            let text = emit_text(input);
            assert!(!text.contains('ㄴ'), "bare ㄴ in {text} for {input}");
        }
    }

    #[test]
    fn test_leading_nasal_stays_bare() {
        // No preceding block to host the coda.
        assert_eq!(emit_text("n"), "ㄴ");
    }

    #[test]
    fn test_suffix_appended_unmerged() {
        let seq = tokenize("hachiman").unwrap();
        let set = emit(&seq, RuleTables::global(), Some("신사")).unwrap();
        assert_eq!(set.texts(), ["하치만 신사"]);
    }

    #[test]
    fn test_unmappable_onset_surfaces() {
        // Doctor a featural table with a coverage gap: "ka" has no entry.
        let global = RuleTables::global();
        let tables = RuleTables {
            kana: global.kana.clone(),
            minimal: crate::tables::MinimalTable {
                mappings: global.minimal.mappings.clone(),
                diphthongs: global.minimal.diphthongs.clone(),
            },
            featural: crate::tables::parse_featural_toml("[mappings]\nki = \"키\"\n", |k| {
                k == "ki"
            })
            .unwrap(),
            logographic: global.logographic.clone(),
        };
        let seq = tokenize("kaki").unwrap();
        let err = emit(&seq, &tables, None).unwrap_err();
        assert_eq!(err, TransliterateError::UnmappableOnset { mora: "ka".into() });
    }
}
