//! # Clause Presence Detector
//!
//! Decides, clause by clause, whether a regulation's required clauses are
//! adequately represented in the contract text. The decision combines
//! three lexical signals into a weighted score; a clause counts as present
//! when the score reaches the policy threshold.
//!
//! Signals, with their default weights:
//!
//! 1. **Direct keywords** (0.5 each): meaningful words extracted from the
//!    clause name, matched as substrings.
//! 2. **Requirement phrases** (0.3 each): the first few requirement
//!    phrases, where a phrase matches if any of its words appears in the
//!    text.
//! 3. **Semantic concepts** (0.2 each): a fixed per-clause-name table of
//!    domain synonym phrases, matched as substrings.
//!
//! The concept table deliberately covers only the four clause names it was
//! calibrated for. Clauses outside the table score 0 on that signal; this
//! is a known heuristic gap, and inventing synonyms for new clauses here
//! would change scoring without calibration.
//!
//! Detection is a pure function of (clause, text, policy): identical
//! inputs always produce the identical decision.

use std::sync::OnceLock;

use regex::Regex;

use covenant_registry::{ClauseRequirement, RegulationDefinition};

use crate::policy::DetectionPolicy;

/// Words carrying no signal, removed from clause-name keywords.
const STOP_WORDS: &[&str] = &[
    "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
];

/// Minimum keyword length; shorter tokens are too noisy for substring matching.
const MIN_KEYWORD_LEN: usize = 3;

/// Domain synonym phrases per clause name.
///
/// Calibrated against the builtin catalog; clause names absent from this
/// table contribute 0 to the semantic-concept signal.
const CONCEPT_MAP: &[(&str, &[&str])] = &[
    (
        "Financial Privacy Notice",
        &["privacy policy", "data sharing", "opt out", "confidentiality"],
    ),
    (
        "Credit Reporting Authorization",
        &["credit check", "background check", "consumer report", "authorization"],
    ),
    (
        "Data Safeguards Program",
        &["security program", "data protection", "encryption", "access control"],
    ),
    (
        "Truth in Lending Disclosures",
        &["apr", "annual percentage rate", "finance charge", "disclosure"],
    ),
];

fn word_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(&format!(r"\b[a-z]{{{MIN_KEYWORD_LEN},}}\b")).expect("literal pattern compiles")
    })
}

/// Extract up to `max_keywords` meaningful keywords from a clause name.
///
/// Keywords are lowercase alphabetic tokens of length >= 3 with stop words
/// removed, in scan order.
pub fn extract_keywords(text: &str, max_keywords: usize) -> Vec<String> {
    let lowered = text.to_lowercase();
    word_pattern()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .filter(|word| !STOP_WORDS.contains(&word.as_str()))
        .take(max_keywords)
        .collect()
}

/// Synonym phrases for a clause name, if the concept table covers it.
pub fn concept_phrases(clause_name: &str) -> &'static [&'static str] {
    CONCEPT_MAP
        .iter()
        .find(|(name, _)| *name == clause_name)
        .map(|(_, phrases)| *phrases)
        .unwrap_or(&[])
}

/// The combined presence score for one clause against lowercased text.
pub fn presence_score(
    clause: &ClauseRequirement,
    text_lower: &str,
    policy: &DetectionPolicy,
) -> f64 {
    let keyword_matches = extract_keywords(&clause.name, policy.max_keywords)
        .iter()
        .filter(|keyword| text_lower.contains(keyword.as_str()))
        .count();

    let requirement_matches = clause
        .requirements
        .iter()
        .take(policy.max_requirement_phrases)
        .map(|phrase| phrase.to_lowercase())
        .filter(|phrase| phrase.split_whitespace().any(|word| text_lower.contains(word)))
        .count();

    let concept_matches = concept_phrases(&clause.name)
        .iter()
        .filter(|concept| text_lower.contains(*concept))
        .count();

    keyword_matches as f64 * policy.keyword_weight
        + requirement_matches as f64 * policy.requirement_weight
        + concept_matches as f64 * policy.concept_weight
}

/// Whether a clause is adequately represented in the text.
pub fn is_clause_present(
    clause: &ClauseRequirement,
    text_lower: &str,
    policy: &DetectionPolicy,
) -> bool {
    presence_score(clause, text_lower, policy) >= policy.presence_threshold
}

/// The regulation's required clauses not satisfied by the text, in
/// catalog order.
pub fn missing_clauses<'a>(
    definition: &'a RegulationDefinition,
    text_lower: &str,
    policy: &DetectionPolicy,
) -> Vec<&'a ClauseRequirement> {
    definition
        .clauses
        .iter()
        .filter(|clause| !is_clause_present(clause, text_lower, policy))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use covenant_core::RiskLevel;
    use covenant_registry::RegulationRegistry;

    fn policy() -> DetectionPolicy {
        DetectionPolicy::default()
    }

    fn clause(name: &str, requirements: &[&str]) -> ClauseRequirement {
        ClauseRequirement {
            name: name.to_string(),
            description: String::new(),
            risk_level: RiskLevel::High,
            requirements: requirements.iter().map(|r| r.to_string()).collect(),
            legal_citation: None,
        }
    }

    // ── Keyword extraction ───────────────────────────────────────────

    #[test]
    fn test_extract_keywords_basic() {
        assert_eq!(
            extract_keywords("Financial Privacy Notice", 5),
            vec!["financial", "privacy", "notice"]
        );
    }

    #[test]
    fn test_extract_keywords_drops_stop_words_and_short_tokens() {
        assert_eq!(
            extract_keywords("Notice of the Right to Opt Out", 5),
            vec!["notice", "right", "opt", "out"]
        );
    }

    #[test]
    fn test_extract_keywords_caps_at_limit() {
        let keywords = extract_keywords(
            "alpha bravo charlie delta echo foxtrot golf",
            5,
        );
        assert_eq!(keywords.len(), 5);
        assert_eq!(keywords[4], "echo");
    }

    // ── Concept table ────────────────────────────────────────────────

    #[test]
    fn test_concept_table_covers_four_names() {
        assert_eq!(CONCEPT_MAP.len(), 4);
        assert!(!concept_phrases("Financial Privacy Notice").is_empty());
        assert!(!concept_phrases("Truth in Lending Disclosures").is_empty());
    }

    #[test]
    fn test_unknown_clause_has_no_concepts() {
        assert!(concept_phrases("California Consumer Privacy Rights").is_empty());
        assert!(concept_phrases("").is_empty());
    }

    // ── Presence scoring ─────────────────────────────────────────────

    #[test]
    fn test_clause_present_when_name_and_concepts_match() {
        let c = clause(
            "Financial Privacy Notice",
            &["Privacy notice delivery", "Opt-out mechanisms"],
        );
        let text = "the financial institution shall deliver a privacy notice \
                    and maintain a privacy policy with opt out rights";
        assert!(is_clause_present(&c, text, &policy()));
    }

    #[test]
    fn test_clause_missing_in_unrelated_text() {
        let c = clause(
            "NYDFS Cybersecurity Requirements",
            &["Cybersecurity program", "Penetration testing"],
        );
        let text = "lessee shall return the equipment upon expiry";
        assert!(!is_clause_present(&c, text, &policy()));
    }

    #[test]
    fn test_score_zero_for_empty_text() {
        let c = clause("Data Safeguards Program", &["Written security program"]);
        assert_eq!(presence_score(&c, "", &policy()), 0.0);
    }

    #[test]
    fn test_requirement_phrase_matches_on_any_word() {
        let c = clause("Unmatched Name Here", &["Adverse action notices"]);
        // Only "notices" appears; the phrase still counts once.
        let score = presence_score(&c, "delivery of notices is required", &policy());
        assert_eq!(score, 0.3);
    }

    #[test]
    fn test_only_first_three_requirement_phrases_consulted() {
        let c = clause(
            "Zzz Qqq",
            &["aaa", "bbb", "ccc", "matchable"],
        );
        // The matching phrase is fourth; with the default cap of 3 it is
        // never consulted.
        let score = presence_score(&c, "matchable text", &policy());
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_threshold_boundary() {
        let mut p = policy();
        p.presence_threshold = 1.0;
        let c = clause("Payment Schedule Terms", &[]);
        // Two keyword matches at 0.5 each reach the threshold exactly.
        let text = "payment schedule attached";
        assert_eq!(presence_score(&c, text, &p), 1.0);
        assert!(is_clause_present(&c, text, &p));
    }

    #[test]
    fn test_missing_clauses_preserve_catalog_order() {
        let registry = RegulationRegistry::builtin();
        let glba = registry
            .get(&covenant_core::RegulationId::new("GLBA").unwrap())
            .unwrap();
        let missing = missing_clauses(glba, "equipment lease with no relevant wording", &policy());
        assert_eq!(missing.len(), 2);
        assert_eq!(missing[0].name, "Financial Privacy Notice");
        assert_eq!(missing[1].name, "Data Safeguards Program");
    }

    #[test]
    fn test_detection_is_idempotent() {
        let registry = RegulationRegistry::builtin();
        let tila = registry
            .get(&covenant_core::RegulationId::new("TILA").unwrap())
            .unwrap();
        let text = "the apr and finance charge are disclosed below";
        let first = missing_clauses(tila, text, &policy());
        let second = missing_clauses(tila, text, &policy());
        assert_eq!(first, second);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use covenant_core::RiskLevel;
    use proptest::prelude::*;

    fn arbitrary_clause() -> impl Strategy<Value = ClauseRequirement> {
        (
            "[A-Za-z ]{1,40}",
            prop::collection::vec("[a-z ]{1,20}", 0..6),
        )
            .prop_map(|(name, requirements)| ClauseRequirement {
                name,
                description: String::new(),
                risk_level: RiskLevel::Medium,
                requirements,
                legal_citation: None,
            })
    }

    proptest! {
        /// Identical inputs always yield the identical decision.
        #[test]
        fn presence_decision_is_pure(
            clause in arbitrary_clause(),
            text in "[a-z ]{0,200}",
        ) {
            let policy = DetectionPolicy::default();
            let first = is_clause_present(&clause, &text, &policy);
            let second = is_clause_present(&clause, &text, &policy);
            prop_assert_eq!(first, second);
        }

        /// Scores are non-negative and bounded by the maximum each signal
        /// can contribute.
        #[test]
        fn score_within_bounds(
            clause in arbitrary_clause(),
            text in "[a-z ]{0,200}",
        ) {
            let policy = DetectionPolicy::default();
            let score = presence_score(&clause, &text, &policy);
            let max = policy.max_keywords as f64 * policy.keyword_weight
                + policy.max_requirement_phrases as f64 * policy.requirement_weight
                + 4.0 * policy.concept_weight;
            prop_assert!(score >= 0.0);
            prop_assert!(score <= max + f64::EPSILON);
        }
    }
}
