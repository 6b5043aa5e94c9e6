//! Character-level Unicode classification for Japanese input.

/// Check the full Hiragana block (U+3040..U+309F). A few codepoints in the
/// block are unassigned but never occur in label text, so the block-level
/// check is preferred over an exact range.
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Check the full Katakana block (U+30A0..U+30FF), which includes the
/// prolonged sound mark ー (U+30FC).
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

pub fn is_kana(c: char) -> bool {
    is_hiragana(c) || is_katakana(c)
}

pub fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c) || ('\u{3400}'..='\u{4DBF}').contains(&c)
}

pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Macron vowels used for long vowels in Hepburn romanization.
pub fn is_macron_vowel(c: char) -> bool {
    matches!(c, 'ā' | 'ī' | 'ū' | 'ē' | 'ō')
}

/// Base vowel letter for a macron vowel.
pub fn macron_base(c: char) -> Option<char> {
    match c {
        'ā' => Some('a'),
        'ī' => Some('i'),
        'ū' => Some('u'),
        'ē' => Some('e'),
        'ō' => Some('o'),
        _ => None,
    }
}

/// Fold one katakana char to its hiragana counterpart (codepoint offset
/// 0x60 over the voiced and unvoiced syllable range). Other characters,
/// including ー, pass through.
pub fn fold_katakana(c: char) -> char {
    if ('\u{30A1}'..='\u{30F6}').contains(&c) {
        char::from_u32(c as u32 - 0x60).unwrap_or(c)
    } else {
        c
    }
}

/// Convert katakana to hiragana, character by character.
pub fn katakana_to_hiragana(s: &str) -> String {
    s.chars().map(fold_katakana).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_classification() {
        assert!(is_hiragana('あ'));
        assert!(!is_hiragana('ア'));
        assert!(is_katakana('ア'));
        assert!(is_katakana('ー'));
        assert!(is_kana('ん'));
        assert!(is_kanji('神'));
        assert!(!is_kanji('あ'));
        assert!(is_latin('a'));
        assert!(!is_latin('あ'));
        assert!(is_macron_vowel('ō'));
        assert!(!is_macron_vowel('o'));
    }

    #[test]
    fn test_katakana_to_hiragana() {
        assert_eq!(katakana_to_hiragana("トヨタマヒメ"), "とよたまひめ");
        assert_eq!(katakana_to_hiragana("ラーメン"), "らーめん");
        assert_eq!(katakana_to_hiragana("abc"), "abc");
        assert_eq!(katakana_to_hiragana(""), "");
    }

    #[test]
    fn test_macron_base() {
        assert_eq!(macron_base('ā'), Some('a'));
        assert_eq!(macron_base('a'), None);
    }
}
