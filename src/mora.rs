//! Mora segmentation of romanized Japanese.
//!
//! A mora is the atomic phonological timing unit: one (onset, vowel) pairing,
//! or a standalone syllable-final nasal. The tokenizer runs a greedy
//! longest-match scan against a fixed pattern set and is the single shared
//! front end for all phonological targets, so feature extraction happens once
//! and the targets stay consistent for the same input.

use std::sync::OnceLock;

use tracing::trace;

use crate::error::TransliterateError;
use crate::unicode::macron_base;

/// Consonant class opening a mora.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Onset {
    K,
    G,
    S,
    Z,
    Sh,
    J,
    T,
    D,
    Ch,
    Ts,
    N,
    H,
    F,
    B,
    P,
    M,
    Y,
    R,
    W,
}

impl Onset {
    fn as_str(self) -> &'static str {
        match self {
            Onset::K => "k",
            Onset::G => "g",
            Onset::S => "s",
            Onset::Z => "z",
            Onset::Sh => "sh",
            Onset::J => "j",
            Onset::T => "t",
            Onset::D => "d",
            Onset::Ch => "ch",
            Onset::Ts => "ts",
            Onset::N => "n",
            Onset::H => "h",
            Onset::F => "f",
            Onset::B => "b",
            Onset::P => "p",
            Onset::M => "m",
            Onset::Y => "y",
            Onset::R => "r",
            Onset::W => "w",
        }
    }

    /// Romaji prefix for the palatalized (yōon) form: "ky" in "kya".
    /// The digraph onsets sh/ch/j are inherently palatal and take no glide
    /// letter ("sha", not "shya").
    fn yoon_prefix(self) -> &'static str {
        match self {
            Onset::K => "ky",
            Onset::G => "gy",
            Onset::N => "ny",
            Onset::H => "hy",
            Onset::B => "by",
            Onset::P => "py",
            Onset::M => "my",
            Onset::R => "ry",
            Onset::D => "dy",
            other => other.as_str(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vowel {
    A,
    I,
    U,
    E,
    O,
}

impl Vowel {
    pub fn letter(self) -> char {
        match self {
            Vowel::A => 'a',
            Vowel::I => 'i',
            Vowel::U => 'u',
            Vowel::E => 'e',
            Vowel::O => 'o',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Length {
    #[default]
    Short,
    Long,
}

/// One phonological unit. Invariant (enforced by the constructors): a mora
/// has exactly one vowel, or it is a standalone nasal-coda marker with no
/// onset and no vowel; never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mora {
    pub onset: Option<Onset>,
    pub vowel: Option<Vowel>,
    pub length: Length,
    pub geminate: bool,
    pub palatalized: bool,
    pub coda_nasal: bool,
}

impl Mora {
    fn new(onset: Option<Onset>, vowel: Option<Vowel>, palatalized: bool, coda_nasal: bool) -> Self {
        Mora {
            onset,
            vowel,
            length: Length::Short,
            geminate: false,
            palatalized,
            coda_nasal,
        }
    }

    pub fn cv(onset: Onset, vowel: Vowel) -> Self {
        Mora::new(Some(onset), Some(vowel), false, false)
    }

    pub fn bare(vowel: Vowel) -> Self {
        Mora::new(None, Some(vowel), false, false)
    }

    pub fn yoon(onset: Onset, vowel: Vowel) -> Self {
        Mora::new(Some(onset), Some(vowel), true, false)
    }

    pub fn nasal() -> Self {
        Mora::new(None, None, false, true)
    }

    /// Canonical romaji key used to index the rule tables: "ka", "shi",
    /// "kya", "zu", "n". Length and geminate flags do not participate.
    pub fn key(&self) -> String {
        match (self.coda_nasal, self.vowel) {
            (true, _) => "n".to_string(),
            (false, Some(v)) => {
                let mut key = String::with_capacity(4);
                if let Some(onset) = self.onset {
                    key.push_str(if self.palatalized {
                        onset.yoon_prefix()
                    } else {
                        onset.as_str()
                    });
                }
                key.push(v.letter());
                key
            }
            // Unreachable through the constructors.
            (false, None) => String::new(),
        }
    }
}

/// Ordered mora sequence for one input string. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoraSequence(Vec<Mora>);

impl MoraSequence {
    pub fn as_slice(&self) -> &[Mora] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Mora> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Rows of the plain CV grid. Gaps follow Hepburn romanization: the s-row
/// spells し as "shi", the t-row has both "tsu" and the Nihon-shiki "tu",
/// and the d-row keeps "di"/"du" spellings alongside the usual ones.
const PLAIN_ROWS: &[(Onset, &[Vowel])] = &[
    (Onset::K, ALL_VOWELS),
    (Onset::G, ALL_VOWELS),
    (Onset::S, &[Vowel::A, Vowel::U, Vowel::E, Vowel::O]),
    (Onset::Sh, &[Vowel::I]),
    (Onset::Z, &[Vowel::A, Vowel::U, Vowel::E, Vowel::O]),
    (Onset::J, &[Vowel::I]),
    (Onset::T, &[Vowel::A, Vowel::U, Vowel::E, Vowel::O]),
    (Onset::Ch, &[Vowel::I]),
    (Onset::Ts, &[Vowel::U]),
    (Onset::D, ALL_VOWELS),
    (Onset::N, ALL_VOWELS),
    (Onset::H, ALL_VOWELS),
    (Onset::F, &[Vowel::U]),
    (Onset::B, ALL_VOWELS),
    (Onset::P, ALL_VOWELS),
    (Onset::M, ALL_VOWELS),
    (Onset::Y, &[Vowel::A, Vowel::U, Vowel::O]),
    (Onset::R, ALL_VOWELS),
    (Onset::W, &[Vowel::A, Vowel::I, Vowel::E, Vowel::O]),
];

const ALL_VOWELS: &[Vowel] = &[Vowel::A, Vowel::I, Vowel::U, Vowel::E, Vowel::O];

/// Onsets that take a palatalized (yōon) form, always with a/u/o.
const YOON_ONSETS: &[Onset] = &[
    Onset::K,
    Onset::G,
    Onset::Sh,
    Onset::J,
    Onset::Ch,
    Onset::N,
    Onset::H,
    Onset::B,
    Onset::P,
    Onset::M,
    Onset::R,
    Onset::D,
];

/// Pattern table, longest keys first so the greedy scan prefers trigraphs
/// ("kya") over digraphs ("ky" never matches alone) over single letters.
fn patterns() -> &'static [(String, Mora)] {
    static PATTERNS: OnceLock<Vec<(String, Mora)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        let mut pats = Vec::new();
        for &v in ALL_VOWELS {
            pats.push(Mora::bare(v));
        }
        for &(onset, vowels) in PLAIN_ROWS {
            for &v in vowels {
                pats.push(Mora::cv(onset, v));
            }
        }
        for &onset in YOON_ONSETS {
            for v in [Vowel::A, Vowel::U, Vowel::O] {
                pats.push(Mora::yoon(onset, v));
            }
        }
        pats.push(Mora::nasal());
        let mut keyed: Vec<(String, Mora)> = pats.into_iter().map(|m| (m.key(), m)).collect();
        keyed.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        keyed
    })
}

/// All mora keys the tokenizer can produce. Used by table validation.
pub(crate) fn all_mora_keys() -> impl Iterator<Item = &'static str> {
    patterns().iter().map(|(k, _)| k.as_str())
}

fn is_geminable(c: u8) -> bool {
    c.is_ascii_lowercase() && !matches!(c, b'a' | b'i' | b'u' | b'e' | b'o' | b'n')
}

/// Segment a normalized romaji string into a mora sequence.
///
/// Greedy longest-match, left to right. A doubled consonant letter ("kk")
/// marks the preceding mora as geminate and is consumed without emitting a
/// unit; the Hepburn sokuon spelling "tch" (as in "matcha") is treated the
/// same way. A doubled vowel letter or macron makes the mora long. An
/// isolated "n" that opens no pattern becomes a standalone nasal-coda mora.
pub fn tokenize(normalized: &str) -> Result<MoraSequence, TransliterateError> {
    // Fold macrons so long vowels have a single representation in the scan.
    let mut expanded = String::with_capacity(normalized.len() + 4);
    for c in normalized.chars() {
        match macron_base(c) {
            Some(base) => {
                expanded.push(base);
                expanded.push(base);
            }
            None => expanded.push(c),
        }
    }

    let bytes = expanded.as_bytes();
    let mut morae: Vec<Mora> = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i];
        if !c.is_ascii_lowercase() {
            return Err(TransliterateError::UnparsableSequence { pos: i });
        }

        let doubled = i + 1 < bytes.len() && bytes[i + 1] == c && is_geminable(c);
        let hepburn_tch = c == b't' && expanded[i + 1..].starts_with("ch");
        if doubled || hepburn_tch {
            match morae.last_mut() {
                Some(prev) if !prev.coda_nasal => {
                    prev.geminate = true;
                    i += 1;
                    continue;
                }
                _ => return Err(TransliterateError::UnparsableSequence { pos: i }),
            }
        }

        let rest = &expanded[i..];
        let matched = patterns()
            .iter()
            .find(|(key, _)| rest.starts_with(key.as_str()));
        let Some((key, template)) = matched else {
            return Err(TransliterateError::UnparsableSequence { pos: i });
        };

        let mut mora = *template;
        i += key.len();
        if let Some(v) = mora.vowel {
            if i < bytes.len() && bytes[i] == v.letter() as u8 {
                mora.length = Length::Long;
                i += 1;
            }
        }
        trace!(key = %key, "mora");
        morae.push(mora);
    }

    Ok(MoraSequence(morae))
}
