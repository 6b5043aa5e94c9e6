//! Multi-target phonological transliteration of Japanese-origin names.
//!
//! One shared front end (script normalization + mora segmentation) feeds
//! three target emitters: a strict-CV minimal-phonology orthography, a
//! voicing-preserving featural alphabet with coda merging, and a logographic
//! script built by character substitution. Ambiguous realizations are
//! enumerated, not resolved: the caller receives an ordered candidate list.
//!
//! Everything is a pure function over immutable inputs; the rule tables are
//! built once and shared read-only, so batches of names can be processed on
//! any number of threads with no coordination.

pub mod emit;
pub mod error;
pub mod mora;
pub mod normalize;
pub mod tables;
pub mod unicode;
pub mod variants;

#[cfg(test)]
mod tests;

use tracing::debug_span;

pub use emit::{IdentityConverter, VariantConverter};
pub use error::TransliterateError;
pub use normalize::normalize;
pub use tables::{RuleTables, TableError};
pub use variants::{Candidate, VariantSet};

/// Target orthography selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Strict-CV syllable orthography; devoices, branches on "zu".
    MinimalPhonology,
    /// Featural alphabet; preserves voicing, merges the nasal coda.
    FeaturalVoicingPreserving,
    /// Logographic script via kana substitution plus external variant
    /// conversion.
    LogographicSubstitution,
}

/// Entity classification tag, produced by an external classifier and only
/// consumed here as a suffix-table key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EntityKind {
    Shrine,
    GrandShrine,
    Temple,
    GrandTemple,
}

/// Caller-supplied mapping from entity kind to the literal suffix the
/// featural target appends. Suffix choice depends on classification done
/// outside the engine, so nothing here is hard-coded.
#[derive(Debug, Clone, Default)]
pub struct SuffixTable {
    entries: std::collections::BTreeMap<EntityKind, String>,
}

impl SuffixTable {
    pub fn insert(&mut self, kind: EntityKind, suffix: impl Into<String>) {
        self.entries.insert(kind, suffix.into());
    }

    pub fn get(&self, kind: EntityKind) -> Option<&str> {
        self.entries.get(&kind).map(String::as_str)
    }
}

impl FromIterator<(EntityKind, String)> for SuffixTable {
    fn from_iter<I: IntoIterator<Item = (EntityKind, String)>>(iter: I) -> Self {
        SuffixTable {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Per-call configuration. All fields are optional: without an entity and
/// suffix table the featural target emits the bare stem, and without a
/// converter the logographic target skips variant conversion.
#[derive(Default)]
pub struct Options<'a> {
    pub entity: Option<EntityKind>,
    pub suffixes: Option<&'a SuffixTable>,
    pub converter: Option<&'a dyn VariantConverter>,
}

/// Transliterate one name into the selected target orthography.
///
/// Returns the ordered candidate list (first entry canonical). Deterministic
/// for a fixed input and target. An input that normalizes to nothing yields
/// an empty list.
pub fn transliterate(
    raw: &str,
    target: Target,
    opts: &Options,
) -> Result<Vec<String>, TransliterateError> {
    let _span = debug_span!("transliterate", ?target).entered();
    let tables = RuleTables::global();

    if target == Target::LogographicSubstitution {
        let label = normalize::strip_brackets(raw);
        let label = label.trim();
        if label.is_empty() {
            return Ok(Vec::new());
        }
        let converter = opts.converter.unwrap_or(&IdentityConverter);
        return Ok(emit::logographic::emit(label, tables, converter).texts());
    }

    let normalized = normalize::normalize_with(raw, tables)?;
    if normalized.is_empty() {
        return Ok(Vec::new());
    }
    let seq = mora::tokenize(&normalized)?;

    let set = match target {
        Target::MinimalPhonology => emit::minimal::emit(&seq, tables)?,
        Target::FeaturalVoicingPreserving => {
            let suffix = opts
                .entity
                .and_then(|kind| opts.suffixes.and_then(|t| t.get(kind)));
            emit::featural::emit(&seq, tables, suffix)?
        }
        Target::LogographicSubstitution => unreachable!(),
    };
    Ok(set.texts())
}
