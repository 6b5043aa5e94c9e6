//! Rule table registry.
//!
//! One closed, read-only mapping table per target orthography, parsed from
//! embedded TOML and validated at startup. The global registry is built once
//! behind a `OnceLock` and shared freely across threads; tests parse bespoke
//! tables and pass them explicitly instead of mutating the global.

mod config;
mod data;

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::mora::all_mora_keys;

pub use config::{
    parse_featural_toml, parse_kana_toml, parse_logographic_toml, parse_minimal_toml,
    MinimalTable, TableError,
};

pub struct RuleTables {
    /// Hiragana → romaji, consulted by the script normalizer.
    pub kana: BTreeMap<String, String>,
    /// Mora key → strict-CV fragment(s), plus diphthong smoothing pairs.
    pub minimal: MinimalTable,
    /// Mora key → hangul syllable block.
    pub featural: BTreeMap<String, String>,
    /// Kana → logograph substitution.
    pub logographic: BTreeMap<String, String>,
}

impl RuleTables {
    /// Parse and validate a full table set from TOML text.
    pub fn from_toml(
        kana: &str,
        minimal: &str,
        featural: &str,
        logographic: &str,
    ) -> Result<Self, TableError> {
        Ok(RuleTables {
            kana: parse_kana_toml(kana)?,
            minimal: parse_minimal_toml(minimal, all_mora_keys())?,
            featural: parse_featural_toml(featural, |k| all_mora_keys().any(|m| m == k))?,
            logographic: parse_logographic_toml(logographic)?,
        })
    }

    /// Get or initialize the global default registry.
    pub fn global() -> &'static RuleTables {
        static INSTANCE: OnceLock<RuleTables> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            RuleTables::from_toml(
                data::KANA_TOML,
                data::MINIMAL_TOML,
                data::FEATURAL_TOML,
                data::LOGOGRAPHIC_TOML,
            )
            .expect("default rule tables must be valid")
        })
    }
}
