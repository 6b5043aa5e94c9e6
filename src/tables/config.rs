//! TOML parsing and validation for the rule tables.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::unicode::is_kana;

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[{0}] table is empty")]
    Empty(&'static str),
    #[error("{table} table: key {key:?} is not a known mora key")]
    UnknownMoraKey { table: &'static str, key: String },
    #[error("minimal table: no entry for mora key {0:?}")]
    MissingMoraKey(String),
    #[error("{table} table: empty value for key {key:?}")]
    EmptyValue { table: &'static str, key: String },
    #[error("kana table: key {0:?} is not kana")]
    NonKanaKey(String),
    #[error("logographic table: key {0:?} is longer than two characters")]
    OverlongKey(String),
}

/// A table value that is either a single fragment or an ordered branch list
/// (first entry is the default choice).
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl From<OneOrMany> for Vec<String> {
    fn from(v: OneOrMany) -> Vec<String> {
        match v {
            OneOrMany::One(s) => vec![s],
            OneOrMany::Many(v) => v,
        }
    }
}

#[derive(Deserialize)]
struct SimpleConfig {
    mappings: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct MinimalConfig {
    mappings: BTreeMap<String, OneOrMany>,
    diphthongs: BTreeMap<String, String>,
}

/// Parsed minimal-phonology table: per-mora fragments plus the diphthong
/// smoothing pairs.
#[derive(Debug)]
pub struct MinimalTable {
    pub mappings: BTreeMap<String, Vec<String>>,
    pub diphthongs: BTreeMap<String, String>,
}

fn parse<T: serde::de::DeserializeOwned>(toml_str: &str) -> Result<T, TableError> {
    toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))
}

/// Parse the kana → romaji table. Keys must be kana (1–2 chars), values
/// non-empty ASCII romaji.
pub fn parse_kana_toml(toml_str: &str) -> Result<BTreeMap<String, String>, TableError> {
    let config: SimpleConfig = parse(toml_str)?;
    if config.mappings.is_empty() {
        return Err(TableError::Empty("kana"));
    }
    for (key, value) in &config.mappings {
        if key.is_empty() || !key.chars().all(is_kana) {
            return Err(TableError::NonKanaKey(key.clone()));
        }
        if value.is_empty() {
            return Err(TableError::EmptyValue {
                table: "kana",
                key: key.clone(),
            });
        }
    }
    Ok(config.mappings)
}

/// Parse the minimal-phonology table and check it is total over
/// `mora_keys`: the strict-CV target may never fail on a tokenized mora.
pub fn parse_minimal_toml<'a>(
    toml_str: &str,
    mora_keys: impl Iterator<Item = &'a str>,
) -> Result<MinimalTable, TableError> {
    let config: MinimalConfig = parse(toml_str)?;
    if config.mappings.is_empty() {
        return Err(TableError::Empty("minimal"));
    }
    let mappings: BTreeMap<String, Vec<String>> = config
        .mappings
        .into_iter()
        .map(|(k, v)| (k, v.into()))
        .collect();
    for (key, fragments) in &mappings {
        if fragments.is_empty() || fragments.iter().any(String::is_empty) {
            return Err(TableError::EmptyValue {
                table: "minimal",
                key: key.clone(),
            });
        }
    }
    for key in mora_keys {
        if !mappings.contains_key(key) {
            return Err(TableError::MissingMoraKey(key.to_string()));
        }
    }
    Ok(MinimalTable {
        mappings,
        diphthongs: config.diphthongs,
    })
}

/// Parse the featural table. Keys must be known mora keys; coverage is not
/// required (the table is closed but may be incomplete, gaps surface as
/// `UnmappableOnset` at emit time).
pub fn parse_featural_toml(
    toml_str: &str,
    is_mora_key: impl Fn(&str) -> bool,
) -> Result<BTreeMap<String, String>, TableError> {
    let config: SimpleConfig = parse(toml_str)?;
    if config.mappings.is_empty() {
        return Err(TableError::Empty("featural"));
    }
    for (key, value) in &config.mappings {
        if !is_mora_key(key) {
            return Err(TableError::UnknownMoraKey {
                table: "featural",
                key: key.clone(),
            });
        }
        if value.is_empty() {
            return Err(TableError::EmptyValue {
                table: "featural",
                key: key.clone(),
            });
        }
    }
    Ok(config.mappings)
}

/// Parse the kana → logograph table. Keys are 1–2 characters starting with
/// kana; empty values are allowed and mean deletion.
pub fn parse_logographic_toml(toml_str: &str) -> Result<BTreeMap<String, String>, TableError> {
    let config: SimpleConfig = parse(toml_str)?;
    if config.mappings.is_empty() {
        return Err(TableError::Empty("logographic"));
    }
    for key in config.mappings.keys() {
        let mut chars = key.chars();
        match chars.next() {
            Some(first) if is_kana(first) => {}
            _ => return Err(TableError::NonKanaKey(key.clone())),
        }
        if chars.count() > 1 {
            return Err(TableError::OverlongKey(key.clone()));
        }
    }
    Ok(config.mappings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_kana_toml() {
        let map = parse_kana_toml("[mappings]\n\"あ\" = \"a\"\n\"きゃ\" = \"kya\"\n").unwrap();
        assert_eq!(map["あ"], "a");
        assert_eq!(map["きゃ"], "kya");
    }

    #[test]
    fn error_empty_kana_mappings() {
        let err = parse_kana_toml("[mappings]\n").unwrap_err();
        assert!(matches!(err, TableError::Empty("kana")));
    }

    #[test]
    fn error_non_kana_key() {
        let err = parse_kana_toml("[mappings]\nka = \"ka\"\n").unwrap_err();
        assert!(matches!(err, TableError::NonKanaKey(_)));
    }

    #[test]
    fn minimal_accepts_branch_values() {
        let toml = r#"
[mappings]
zu = ["su", "tu"]
ka = "ka"
[diphthongs]
ai = "a"
"#;
        let table = parse_minimal_toml(toml, ["ka", "zu"].into_iter()).unwrap();
        assert_eq!(table.mappings["zu"], ["su", "tu"]);
        assert_eq!(table.mappings["ka"], ["ka"]);
        assert_eq!(table.diphthongs["ai"], "a");
    }

    #[test]
    fn minimal_rejects_coverage_gap() {
        let toml = "[mappings]\nka = \"ka\"\n[diphthongs]\n";
        let err = parse_minimal_toml(toml, ["ka", "ki"].into_iter()).unwrap_err();
        assert!(matches!(err, TableError::MissingMoraKey(ref k) if k == "ki"));
    }

    #[test]
    fn featural_rejects_unknown_mora_key() {
        let toml = "[mappings]\nqa = \"가\"\n";
        let err = parse_featural_toml(toml, |k| k == "ka").unwrap_err();
        assert!(matches!(err, TableError::UnknownMoraKey { .. }));
    }

    #[test]
    fn logographic_allows_empty_values() {
        let map = parse_logographic_toml("[mappings]\n\"っ\" = \"\"\n\"の\" = \"之\"\n").unwrap();
        assert_eq!(map["っ"], "");
        assert_eq!(map["の"], "之");
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_kana_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, TableError::Parse(_)));
    }
}
