//! # Applicability Resolver
//!
//! Computes the set of regulations that apply to an analysis context by
//! combining three mechanisms:
//!
//! 1. Jurisdiction defaults from the registry.
//! 2. Industry defaults from the registry.
//! 3. Content-signal detection: fixed lexical trigger groups scanned
//!    against the lowercased contract text.
//!
//! The three sources overlap by design; the union over a `BTreeSet`
//! deduplicates and orders them in one step. A compatibility filter then
//! drops candidates whose own jurisdiction/industry tags exclude the
//! context (wildcards `global` and `all` opt out of filtering).
//!
//! Unknown jurisdiction or industry codes contribute nothing and do not
//! error; an empty result set is a valid outcome the aggregator handles.

use std::collections::BTreeSet;

use covenant_core::RegulationId;
use covenant_registry::RegulationRegistry;

use crate::context::AnalysisContext;

/// Financial wording that pulls in the lending/credit regulation group.
const FINANCIAL_TRIGGER_TERMS: &[&str] = &[
    "loan",
    "financing",
    "credit",
    "interest rate",
    "apr",
    "payment",
    "debt",
];
const FINANCIAL_TRIGGER_REGULATIONS: &[&str] = &["GLBA", "FCRA", "TILA", "EFTA"];

/// Privacy wording that pulls in the consumer-privacy regulation group.
const PRIVACY_TRIGGER_TERMS: &[&str] = &[
    "personal data",
    "privacy",
    "confidential",
    "data processing",
    "consumer information",
];
const PRIVACY_TRIGGER_REGULATIONS: &[&str] = &["CCPA_CPRA"];

/// Security wording that pulls in the cybersecurity regulation group.
const SECURITY_TRIGGER_TERMS: &[&str] = &[
    "security",
    "cyber",
    "data protection",
    "encryption",
    "access control",
];
const SECURITY_TRIGGER_REGULATIONS: &[&str] = &["NY_DFS"];

/// Resolve the regulations applicable to a context.
///
/// The result is sorted by regulation id and duplicate-free. Candidates
/// referenced by a trigger group but absent from the registry are dropped
/// silently: trigger tables and catalogs may evolve independently.
pub fn resolve(registry: &RegulationRegistry, context: &AnalysisContext) -> Vec<RegulationId> {
    let mut candidates: BTreeSet<RegulationId> = BTreeSet::new();

    candidates.extend(registry.regulations_for_jurisdiction(&context.jurisdiction));
    candidates.extend(registry.regulations_for_industry(&context.industry));
    candidates.extend(detect_from_content(context.text_lower()));

    candidates
        .into_iter()
        .filter(|id| {
            let Ok(def) = registry.get(id) else {
                return false;
            };
            def.applies_in_jurisdiction(&context.jurisdiction)
                && def.applies_to_industry(&context.industry)
        })
        .collect()
}

/// Content-signal detection over the lowercased contract text.
fn detect_from_content(text_lower: &str) -> BTreeSet<RegulationId> {
    let groups: [(&[&str], &[&str]); 3] = [
        (FINANCIAL_TRIGGER_TERMS, FINANCIAL_TRIGGER_REGULATIONS),
        (PRIVACY_TRIGGER_TERMS, PRIVACY_TRIGGER_REGULATIONS),
        (SECURITY_TRIGGER_TERMS, SECURITY_TRIGGER_REGULATIONS),
    ];

    let mut detected = BTreeSet::new();
    for (terms, regulations) in groups {
        if terms.iter().any(|term| text_lower.contains(term)) {
            detected.extend(
                regulations
                    .iter()
                    .map(|id| RegulationId::new(*id).expect("trigger table id is non-empty")),
            );
        }
    }
    detected
}
