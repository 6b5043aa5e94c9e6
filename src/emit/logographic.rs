//! Logographic substitution emitter.
//!
//! Operates directly on the mixed kanji/kana label rather than on a mora
//! sequence: logographs are not decomposed phonologically. Kana are replaced
//! through the substitution table (longest match, two chars before one), and
//! the whole string is handed exactly once to the external script-variant
//! converter. This target has no phonological ambiguity source, so the
//! output is always a single candidate.

use crate::tables::RuleTables;
use crate::variants::VariantSet;

/// External script-variant converter (traditional/shinjitai → simplified).
/// Assumed total and deterministic; the emitter treats it as opaque and
/// never reimplements its mapping.
pub trait VariantConverter {
    fn convert_variant(&self, text: &str) -> String;
}

/// Pass-through converter for callers without an orthographic-variant step.
pub struct IdentityConverter;

impl VariantConverter for IdentityConverter {
    fn convert_variant(&self, text: &str) -> String {
        text.to_string()
    }
}

pub fn emit(label: &str, tables: &RuleTables, converter: &dyn VariantConverter) -> VariantSet {
    let chars: Vec<char> = label.chars().collect();
    let mut substituted = String::with_capacity(label.len());
    let mut i = 0;
    while i < chars.len() {
        let mut matched = None;
        if i + 1 < chars.len() {
            let pair: String = chars[i..i + 2].iter().collect();
            if let Some(v) = tables.logographic.get(&pair) {
                matched = Some((v, 2));
            }
        }
        if matched.is_none() {
            if let Some(v) = tables.logographic.get(chars[i].to_string().as_str()) {
                matched = Some((v, 1));
            }
        }
        match matched {
            Some((replacement, width)) => {
                substituted.push_str(replacement);
                i += width;
            }
            // No entry: kanji and anything else pass through unchanged.
            None => {
                substituted.push(chars[i]);
                i += 1;
            }
        }
    }

    VariantSet::single(converter.convert_variant(&substituted))
}
