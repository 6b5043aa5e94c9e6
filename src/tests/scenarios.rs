use std::cell::Cell;

use crate::{
    transliterate, EntityKind, Options, SuffixTable, Target, TransliterateError,
    VariantConverter,
};

fn plain(raw: &str, target: Target) -> Result<Vec<String>, TransliterateError> {
    transliterate(raw, target, &Options::default())
}

#[test]
fn test_minimal_hachiman() {
    assert_eq!(
        plain("Hachiman", Target::MinimalPhonology).unwrap(),
        ["Kasiman"]
    );
}

#[test]
fn test_minimal_zushi_two_candidates_su_first() {
    assert_eq!(
        plain("Zushi", Target::MinimalPhonology).unwrap(),
        ["Susi", "Tusi"]
    );
}

#[test]
fn test_featural_coda_merges_into_one_block() {
    let out = plain("kan", Target::FeaturalVoicingPreserving).unwrap();
    assert_eq!(out, ["칸"]);
    assert_eq!(out[0].chars().count(), 1);
}

#[test]
fn test_unparsable_sequence_reports_position() {
    let err = plain("hachimanx", Target::MinimalPhonology).unwrap_err();
    assert_eq!(err, TransliterateError::UnparsableSequence { pos: 8 });
}

#[test]
fn test_kana_input_reaches_all_phonological_targets() {
    assert_eq!(
        plain("じんじゃ", Target::FeaturalVoicingPreserving).unwrap(),
        ["진자"]
    );
    assert_eq!(
        plain("トヨタマヒメ", Target::MinimalPhonology).unwrap(),
        ["Tojotamapime"]
    );
}

#[test]
fn test_featural_suffix_from_entity_classification() {
    let suffixes: SuffixTable = [
        (EntityKind::Shrine, "신사".to_string()),
        (EntityKind::GrandShrine, "신궁".to_string()),
        (EntityKind::Temple, "사원".to_string()),
        (EntityKind::GrandTemple, "대사원".to_string()),
    ]
    .into_iter()
    .collect();

    let opts = Options {
        entity: Some(EntityKind::Shrine),
        suffixes: Some(&suffixes),
        ..Options::default()
    };
    assert_eq!(
        transliterate("Hachiman", Target::FeaturalVoicingPreserving, &opts).unwrap(),
        ["하치만 신사"]
    );

    let opts = Options {
        entity: Some(EntityKind::GrandShrine),
        suffixes: Some(&suffixes),
        ..Options::default()
    };
    assert_eq!(
        transliterate("Ise", Target::FeaturalVoicingPreserving, &opts).unwrap(),
        ["이세 신궁"]
    );
}

#[test]
fn test_suffix_ignored_without_table() {
    let opts = Options {
        entity: Some(EntityKind::Shrine),
        ..Options::default()
    };
    assert_eq!(
        transliterate("Hachiman", Target::FeaturalVoicingPreserving, &opts).unwrap(),
        ["하치만"]
    );
}

#[test]
fn test_logographic_substitution_then_single_conversion() {
    struct CountingConverter {
        calls: Cell<usize>,
    }
    impl VariantConverter for CountingConverter {
        fn convert_variant(&self, text: &str) -> String {
            self.calls.set(self.calls.get() + 1);
            text.replace('気', "气")
        }
    }

    let converter = CountingConverter { calls: Cell::new(0) };
    let opts = Options {
        converter: Some(&converter),
        ..Options::default()
    };
    let out = transliterate("気比の宮", Target::LogographicSubstitution, &opts).unwrap();
    assert_eq!(out, ["气比之宮"]);
    assert_eq!(converter.calls.get(), 1);
}

#[test]
fn test_logographic_strips_annotations() {
    assert_eq!(
        plain("宮の前 (京都)", Target::LogographicSubstitution).unwrap(),
        ["宮之前"]
    );
}

#[test]
fn test_determinism() {
    for target in [
        Target::MinimalPhonology,
        Target::FeaturalVoicingPreserving,
        Target::LogographicSubstitution,
    ] {
        let a = plain("Zushi", target).unwrap();
        let b = plain("Zushi", target).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn test_empty_input_yields_no_candidates() {
    assert!(plain("", Target::MinimalPhonology).unwrap().is_empty());
    assert!(plain("(only brackets)", Target::FeaturalVoicingPreserving)
        .unwrap()
        .is_empty());
    assert!(plain("  ", Target::LogographicSubstitution)
        .unwrap()
        .is_empty());
}

#[test]
fn test_unrecognized_script_propagates() {
    let err = plain("漢字のみ", Target::MinimalPhonology).unwrap_err();
    assert!(matches!(err, TransliterateError::UnrecognizedScript { .. }));
}
