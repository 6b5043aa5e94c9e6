//! Error taxonomy for the transliteration pipeline.
//!
//! None of these are recoverable inside the engine: every failure propagates
//! to the caller, which decides whether to skip the input, log it, or abort
//! the batch. The engine never emits a best-effort partial candidate.

/// Failure raised by `transliterate` and the pipeline stages beneath it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransliterateError {
    /// The input contains a character outside the supported repertoire
    /// (Latin letters, hiragana, katakana, macron vowels), or mixes kana
    /// and Latin script in one token. `pos` is a char offset into the
    /// bracket-stripped input.
    #[error("unrecognized script: {ch:?} at position {pos}")]
    UnrecognizedScript { ch: char, pos: usize },

    /// The tokenizer could not segment the romanized string at `pos`
    /// (char offset), e.g. a bare consonant that is not "n".
    #[error("unparsable mora sequence at position {pos}")]
    UnparsableSequence { pos: usize },

    /// A mora has no entry in the selected target's rule table. Tables are
    /// closed but may be incomplete for rare onsets; the gap is surfaced so
    /// the table can grow, never silently skipped.
    #[error("no rule table entry for mora {mora:?}")]
    UnmappableOnset { mora: String },
}
