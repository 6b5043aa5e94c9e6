//! Script normalization: arbitrary label text in, canonical romaji out.
//!
//! Accepts Latin romanization, hiragana, or katakana (not mixed), strips
//! bracketed annotations and separators, and converts kana input through the
//! closed kana table so the tokenizer only ever sees one representation.

use crate::error::TransliterateError;
use crate::tables::RuleTables;
use crate::unicode::{fold_katakana, is_kana, is_latin, is_macron_vowel, macron_base};

/// Remove `(…)`, `[…]` and `{…}` spans, delimiters included. Annotations and
/// alternate names carry no phonological content.
pub(crate) fn strip_brackets(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut closers: Vec<char> = Vec::new();
    for c in raw.chars() {
        match c {
            '(' => closers.push(')'),
            '[' => closers.push(']'),
            '{' => closers.push('}'),
            ')' | ']' | '}' if closers.last() == Some(&c) => {
                closers.pop();
            }
            _ if closers.is_empty() => out.push(c),
            _ => {}
        }
    }
    out
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '-' | '\'' | '’' | '・')
}

/// Convert kana to romaji with the kana table. Input is a list of
/// (position, char) pairs so errors can report the char's offset in the
/// bracket-stripped label rather than in the separator-filtered residue.
/// The sokuon っ doubles the following consonant; the long-vowel mark ー
/// doubles the preceding vowel (dropped if there is none, like a stray
/// mark).
fn kana_to_romaji(
    kana: &[(usize, char)],
    tables: &RuleTables,
) -> Result<String, TransliterateError> {
    let mut out = String::with_capacity(kana.len() * 2);
    let mut pending_sokuon = false;
    let mut i = 0;

    while i < kana.len() {
        let (pos, orig) = kana[i];
        let c = fold_katakana(orig);
        if c == 'っ' {
            pending_sokuon = true;
            i += 1;
            continue;
        }
        if c == 'ー' {
            if let Some(last) = out.chars().last().filter(|ch| "aiueo".contains(*ch)) {
                out.push(last);
            }
            i += 1;
            continue;
        }

        let mut matched = None;
        if i + 1 < kana.len() {
            let pair: String = [c, fold_katakana(kana[i + 1].1)].iter().collect();
            if let Some(v) = tables.kana.get(&pair) {
                matched = Some((v, 2));
            }
        }
        if matched.is_none() {
            if let Some(v) = tables.kana.get(c.to_string().as_str()) {
                matched = Some((v, 1));
            }
        }
        let Some((romaji, width)) = matched else {
            return Err(TransliterateError::UnrecognizedScript { ch: orig, pos });
        };

        if pending_sokuon {
            // "っと" → "tto"; a sokuon before a vowel kana has no consonant
            // to double and is dropped.
            if let Some(first) = romaji.chars().next().filter(|ch| !"aiueo".contains(*ch)) {
                out.push(first);
            }
            pending_sokuon = false;
        }
        out.push_str(romaji);
        i += width;
    }
    Ok(out)
}

/// Canonicalize raw label text into lowercase romaji.
///
/// Bracketed annotations are removed, whitespace/hyphens/apostrophes collapse
/// to nothing, macron vowels expand to doubled letters, and kana input is
/// converted through the kana table. Mixed kana/Latin input and any character
/// outside the supported repertoire fail with `UnrecognizedScript`.
/// Idempotent over its own output.
pub fn normalize(raw: &str) -> Result<String, TransliterateError> {
    normalize_with(raw, RuleTables::global())
}

pub(crate) fn normalize_with(
    raw: &str,
    tables: &RuleTables,
) -> Result<String, TransliterateError> {
    let stripped = strip_brackets(raw);

    let has_kana = stripped.chars().any(is_kana);
    if has_kana {
        // Mixed-script rejection: report the first Latin-script char.
        if let Some((pos, ch)) = stripped
            .chars()
            .enumerate()
            .find(|(_, c)| is_latin(*c) || is_macron_vowel(*c))
        {
            return Err(TransliterateError::UnrecognizedScript { ch, pos });
        }
        if let Some((pos, ch)) = stripped
            .chars()
            .enumerate()
            .find(|(_, c)| !is_kana(*c) && !is_separator(*c))
        {
            return Err(TransliterateError::UnrecognizedScript { ch, pos });
        }
        let kana: Vec<(usize, char)> = stripped
            .chars()
            .enumerate()
            .filter(|(_, c)| !is_separator(*c))
            .collect();
        return kana_to_romaji(&kana, tables);
    }

    let mut out = String::with_capacity(stripped.len());
    for (pos, c) in stripped.chars().enumerate() {
        if is_separator(c) {
            continue;
        }
        for lowered in c.to_lowercase() {
            if let Some(base) = macron_base(lowered) {
                out.push(base);
                out.push(base);
            } else if lowered.is_ascii_lowercase() {
                out.push(lowered);
            } else {
                return Err(TransliterateError::UnrecognizedScript { ch: c, pos });
            }
        }
    }
    Ok(out)
}
