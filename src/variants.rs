//! Candidate variants and the Cartesian-product combinator.
//!
//! Ambiguity is a design requirement, not an error: a mora with several
//! admissible realizations contributes a branch, and whole-word candidates
//! are enumerated deterministically so callers can choose among them.

use std::collections::HashSet;

/// One whole-word output. `source_ambiguity` lists the mora keys that
/// branched while producing it (test traceability, not output).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub text: String,
    pub source_ambiguity: Vec<String>,
}

/// Ordered, deduplicated candidate list for one (input, target) pair. The
/// first candidate is the canonical form; uniqueness is exact text equality.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantSet {
    candidates: Vec<Candidate>,
}

impl VariantSet {
    pub fn single(text: String) -> Self {
        VariantSet {
            candidates: vec![Candidate {
                text,
                source_ambiguity: Vec::new(),
            }],
        }
    }

    fn push_unique(&mut self, candidate: Candidate, seen: &mut HashSet<String>) {
        if seen.insert(candidate.text.clone()) {
            self.candidates.push(candidate);
        }
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn texts(&self) -> Vec<String> {
        self.candidates.iter().map(|c| c.text.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Per-mora fragment choice. `fragments` is non-empty and ordered, the first
/// entry being the default realization.
#[derive(Debug, Clone)]
pub struct Choice {
    pub key: String,
    pub fragments: Vec<String>,
}

/// Cartesian product of per-mora fragment choices, each combination
/// concatenated into a whole word.
///
/// Order: the all-default combination comes first; the remaining
/// combinations follow with the leftmost branch point varying first, so
/// alternatives are surfaced in the order their branch points occur in the
/// input. Exact duplicates are dropped.
pub fn combine(choices: &[Choice]) -> VariantSet {
    combine_with(choices, |fragments| fragments.concat())
}

/// Like `combine`, but each combination is finished by `finish` before
/// dedup, letting the caller insert word-level post-processing between
/// product and join.
pub(crate) fn combine_with(
    choices: &[Choice],
    finish: impl Fn(&[&str]) -> String,
) -> VariantSet {
    if choices.is_empty() {
        return VariantSet::default();
    }

    let branch_keys: Vec<String> = choices
        .iter()
        .filter(|c| c.fragments.len() > 1)
        .map(|c| c.key.clone())
        .collect();
    let total: usize = choices.iter().map(|c| c.fragments.len()).product();

    let mut set = VariantSet::default();
    let mut seen = HashSet::new();
    for mut n in 0..total {
        let mut picked: Vec<&str> = Vec::with_capacity(choices.len());
        for choice in choices {
            picked.push(choice.fragments[n % choice.fragments.len()].as_str());
            n /= choice.fragments.len();
        }
        set.push_unique(
            Candidate {
                text: finish(&picked),
                source_ambiguity: branch_keys.clone(),
            },
            &mut seen,
        );
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choice(key: &str, fragments: &[&str]) -> Choice {
        Choice {
            key: key.to_string(),
            fragments: fragments.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_no_branch_single_candidate() {
        let set = combine(&[choice("ka", &["ka"]), choice("n", &["n"])]);
        assert_eq!(set.texts(), ["kan"]);
        assert!(set.candidates()[0].source_ambiguity.is_empty());
    }

    #[test]
    fn test_single_branch_order() {
        let set = combine(&[choice("zu", &["su", "tu"]), choice("shi", &["si"])]);
        assert_eq!(set.texts(), ["susi", "tusi"]);
        assert_eq!(set.candidates()[0].source_ambiguity, ["zu"]);
    }

    #[test]
    fn test_multiplicative_branching() {
        // Two independent branch points: 2×2 combinations, default first,
        // leftmost branch varying before the rightmost.
        let set = combine(&[
            choice("zu", &["su", "tu"]),
            choice("ka", &["ka"]),
            choice("zu", &["su", "tu"]),
        ]);
        assert_eq!(set.texts(), ["sukasu", "tukasu", "sukatu", "tukatu"]);
    }

    #[test]
    fn test_duplicates_removed() {
        let set = combine(&[choice("x", &["a", "a"])]);
        assert_eq!(set.texts(), ["a"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(combine(&[]).is_empty());
    }
}
