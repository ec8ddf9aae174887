//! # Gap & Score Aggregator
//!
//! Turns detector output into a per-regulation compliance score, risk
//! tier, issue list, and recommendation list, then aggregates across
//! regulations into an overall score and risk.
//!
//! The score formula smooths single-miss penalties with an implicit
//! baseline of contextual clauses: a regulation with one enumerated
//! clause is not scored to the floor by one miss. The floor itself
//! guarantees no regulation reads as zero compliance from missing-clause
//! count alone.
//!
//! Risk assessment on this deterministic path is always Medium; richer
//! per-regulation risk requires signal this engine does not synthesize.

use covenant_core::RiskLevel;
use covenant_registry::RegulationDefinition;

use crate::policy::DetectionPolicy;
use crate::report::{MissingClause, RegulationGapReport};

/// Per-regulation compliance score from the missing-clause count.
///
/// `max(floor, 1.0 - missing / (missing + baseline) * penalty)`
///
/// Monotonically non-increasing in `missing_count`, never below the floor.
pub fn compliance_score(missing_count: usize, policy: &DetectionPolicy) -> f64 {
    let total_clauses = missing_count + policy.baseline_clause_count;
    if total_clauses == 0 {
        return 1.0;
    }
    let penalty = missing_count as f64 / total_clauses as f64 * policy.missing_penalty;
    (1.0 - penalty).max(policy.score_floor)
}

/// Overall score: arithmetic mean of per-regulation scores, 0.0 when no
/// regulations apply.
pub fn overall_score(results: &[RegulationGapReport]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    results.iter().map(|r| r.compliance_score).sum::<f64>() / results.len() as f64
}

/// Overall risk: the highest per-regulation tier, Low when no regulations
/// apply (no findings is no evidence of risk).
pub fn overall_risk(results: &[RegulationGapReport]) -> RiskLevel {
    RiskLevel::highest(results.iter().map(|r| r.risk_assessment))
}

/// Assemble the gap report for one regulation.
///
/// Issues and recommendations are generated deterministically from the
/// missing-clause data, then extended with regulation-specific lexical
/// checks, and finally truncated per policy. Truncation preserves
/// generation order: most severe and first-detected entries survive.
pub fn build_gap_report(
    definition: &RegulationDefinition,
    missing_clauses: Vec<MissingClause>,
    text_lower: &str,
    policy: &DetectionPolicy,
) -> RegulationGapReport {
    let mut issues = Vec::new();
    let mut recommendations = Vec::new();

    if !missing_clauses.is_empty() {
        let high_risk = missing_clauses
            .iter()
            .filter(|m| m.clause.risk_level == RiskLevel::High)
            .count();
        if high_risk > 0 {
            issues.push(format!("Missing {high_risk} high-risk compliance clauses"));
        }
        issues.push(format!(
            "Total {} {} compliance gaps",
            missing_clauses.len(),
            definition.id
        ));

        recommendations.push(format!(
            "Implement comprehensive {} compliance section",
            definition.id
        ));
        for missing in missing_clauses.iter().take(policy.max_clause_recommendations) {
            recommendations.push(format!("Add '{}' clause", missing.clause.name));
        }
    }

    let (content_issues, content_recommendations) =
        content_checks(definition.id.as_str(), text_lower);
    issues.extend(content_issues);
    recommendations.extend(content_recommendations);

    issues.truncate(policy.max_issues);
    recommendations.truncate(policy.max_recommendations);

    let mut legal_references = Vec::new();
    for missing in &missing_clauses {
        if let Some(citation) = &missing.legal_citation {
            if !legal_references.contains(citation) {
                legal_references.push(citation.clone());
            }
        }
    }

    RegulationGapReport {
        regulation: definition.id.clone(),
        compliance_score: compliance_score(missing_clauses.len(), policy),
        risk_assessment: RiskLevel::Medium,
        issues,
        recommendations,
        missing_clauses,
        legal_references,
    }
}

/// Regulation-specific lexical checks over the lowercased contract text.
///
/// These catch gaps the clause detector cannot attribute to a single
/// clause, such as a lending contract that never states an APR.
fn content_checks(regulation: &str, text_lower: &str) -> (Vec<String>, Vec<String>) {
    let mut issues = Vec::new();
    let mut recommendations = Vec::new();

    match regulation {
        "GLBA" => {
            if !text_lower.contains("privacy") && !text_lower.contains("confidential") {
                issues.push("Missing financial privacy provisions".to_string());
                recommendations.push("Add GLBA-compliant privacy notice clause".to_string());
            }
            if !text_lower.contains("opt-out") && !text_lower.contains("opt out") {
                issues.push("Missing opt-out mechanisms for information sharing".to_string());
                recommendations.push("Include GLBA opt-out provisions".to_string());
            }
        }
        "FCRA" => {
            if text_lower.contains("credit") && !text_lower.contains("authorization") {
                issues.push("Missing credit check authorization".to_string());
                recommendations.push("Add FCRA-compliant authorization clause".to_string());
            }
            if !text_lower.contains("adverse action") {
                issues.push("Missing adverse action notice procedures".to_string());
                recommendations.push("Include FCRA adverse action requirements".to_string());
            }
        }
        "TILA" => {
            if !text_lower.contains("apr") && !text_lower.contains("annual percentage rate") {
                issues.push("Missing APR disclosure".to_string());
                recommendations.push("Add TILA-required APR disclosure".to_string());
            }
            if !text_lower.contains("finance charge") {
                issues.push("Missing finance charge disclosure".to_string());
                recommendations.push("Include TILA finance charge calculations".to_string());
            }
        }
        _ => {}
    }

    (issues, recommendations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use covenant_core::RegulationId;
    use covenant_registry::{ClauseRequirement, RegulationRegistry};

    fn policy() -> DetectionPolicy {
        DetectionPolicy::default()
    }

    fn missing(name: &str, risk: RiskLevel, citation: Option<&str>) -> MissingClause {
        MissingClause {
            clause: ClauseRequirement {
                name: name.to_string(),
                description: String::new(),
                risk_level: risk,
                requirements: vec![],
                legal_citation: citation.map(str::to_string),
            },
            suggested_text: "suggested".to_string(),
            legal_citation: citation.map(str::to_string),
        }
    }

    fn definition(id: &str) -> RegulationDefinition {
        RegulationRegistry::builtin()
            .get(&RegulationId::new(id).unwrap())
            .unwrap()
            .clone()
    }

    // ── Score formula ────────────────────────────────────────────────

    #[test]
    fn test_zero_missing_scores_exactly_one() {
        assert_eq!(compliance_score(0, &policy()), 1.0);
    }

    #[test]
    fn test_known_score_values() {
        // 1 missing: 1.0 - 1/4 * 0.8 = 0.8
        assert!((compliance_score(1, &policy()) - 0.8).abs() < 1e-9);
        // 2 missing: 1.0 - 2/5 * 0.8 = 0.68
        assert!((compliance_score(2, &policy()) - 0.68).abs() < 1e-9);
    }

    #[test]
    fn test_score_monotonically_non_increasing() {
        let p = policy();
        let mut previous = compliance_score(0, &p);
        for missing in 1..50 {
            let score = compliance_score(missing, &p);
            assert!(score <= previous, "score rose at missing={missing}");
            previous = score;
        }
    }

    #[test]
    fn test_score_never_below_floor() {
        let mut p = policy();
        p.missing_penalty = 5.0; // force the floor
        for missing in 0..50 {
            assert!(compliance_score(missing, &p) >= p.score_floor);
        }
    }

    // ── Overall aggregation ──────────────────────────────────────────

    fn gap(id: &str, score: f64, risk: RiskLevel) -> RegulationGapReport {
        RegulationGapReport {
            regulation: RegulationId::new(id).unwrap(),
            compliance_score: score,
            risk_assessment: risk,
            issues: vec![],
            recommendations: vec![],
            missing_clauses: vec![],
            legal_references: vec![],
        }
    }

    #[test]
    fn test_overall_score_is_mean() {
        let results = [
            gap("GLBA", 0.8, RiskLevel::Medium),
            gap("TILA", 0.6, RiskLevel::Medium),
        ];
        assert!((overall_score(&results) - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_overall_score_empty_is_zero() {
        assert_eq!(overall_score(&[]), 0.0);
    }

    #[test]
    fn test_overall_risk_escalation() {
        assert_eq!(overall_risk(&[]), RiskLevel::Low);
        assert_eq!(
            overall_risk(&[gap("A", 1.0, RiskLevel::Low), gap("B", 1.0, RiskLevel::Low)]),
            RiskLevel::Low
        );
        assert_eq!(
            overall_risk(&[gap("A", 1.0, RiskLevel::Low), gap("B", 1.0, RiskLevel::Medium)]),
            RiskLevel::Medium
        );
        assert_eq!(
            overall_risk(&[
                gap("A", 1.0, RiskLevel::Medium),
                gap("B", 1.0, RiskLevel::High)
            ]),
            RiskLevel::High
        );
    }

    // ── Gap report assembly ──────────────────────────────────────────

    #[test]
    fn test_glba_report_with_all_clauses_missing() {
        let def = definition("GLBA");
        let missing_clauses = vec![
            missing("Financial Privacy Notice", RiskLevel::High, Some("15 U.S.C. § 6801-6809")),
            missing("Data Safeguards Program", RiskLevel::High, Some("16 CFR Part 314")),
        ];
        let report =
            build_gap_report(&def, missing_clauses, "equipment lease terms", &policy());

        assert_eq!(report.issues[0], "Missing 2 high-risk compliance clauses");
        assert_eq!(report.issues[1], "Total 2 GLBA compliance gaps");
        assert!(report.issues.contains(&"Missing financial privacy provisions".to_string()));
        assert_eq!(report.issues.len(), 4);

        // 5 recommendations generated, truncated at the policy cap of 5.
        assert_eq!(report.recommendations.len(), 5);
        assert_eq!(
            report.recommendations[0],
            "Implement comprehensive GLBA compliance section"
        );
        assert_eq!(
            report.recommendations[1],
            "Add 'Financial Privacy Notice' clause"
        );

        assert!((report.compliance_score - 0.68).abs() < 1e-9);
        assert_eq!(report.risk_assessment, RiskLevel::Medium);
        assert_eq!(
            report.legal_references,
            vec!["15 U.S.C. § 6801-6809", "16 CFR Part 314"]
        );
    }

    #[test]
    fn test_tila_apr_flag() {
        let def = definition("TILA");
        let report = build_gap_report(
            &def,
            vec![],
            "the borrower shall repay the loan in monthly installments",
            &policy(),
        );
        assert!(report.issues.contains(&"Missing APR disclosure".to_string()));
        assert!(report.issues.contains(&"Missing finance charge disclosure".to_string()));
        assert_eq!(report.compliance_score, 1.0);
    }

    #[test]
    fn test_tila_no_flag_when_apr_present() {
        let def = definition("TILA");
        let report = build_gap_report(
            &def,
            vec![],
            "the apr is 5.9% and the finance charge is disclosed",
            &policy(),
        );
        assert!(report.issues.is_empty());
    }

    #[test]
    fn test_fcra_authorization_flag_requires_credit_mention() {
        let def = definition("FCRA");
        let no_credit = build_gap_report(&def, vec![], "adverse action handled", &policy());
        assert!(no_credit.issues.is_empty());

        let credit = build_gap_report(&def, vec![], "credit report adverse action", &policy());
        assert!(credit
            .issues
            .contains(&"Missing credit check authorization".to_string()));
    }

    #[test]
    fn test_clean_regulation_has_no_findings() {
        let def = definition("EFTA");
        let report = build_gap_report(&def, vec![], "any text", &policy());
        assert!(report.issues.is_empty());
        assert!(report.recommendations.is_empty());
        assert!(report.legal_references.is_empty());
        assert_eq!(report.compliance_score, 1.0);
    }

    #[test]
    fn test_truncation_preserves_generation_order() {
        let def = definition("GLBA");
        let missing_clauses: Vec<MissingClause> = (0..6)
            .map(|i| missing(&format!("Clause {i}"), RiskLevel::High, None))
            .collect();
        let report = build_gap_report(&def, missing_clauses, "bare text", &policy());

        assert_eq!(report.issues.len(), policy().max_issues.min(4));
        assert_eq!(report.recommendations.len(), policy().max_recommendations);
        // The first recommendation is always the comprehensive-section one.
        assert_eq!(
            report.recommendations[0],
            "Implement comprehensive GLBA compliance section"
        );
        // Clause recommendations stop at the per-clause cap.
        assert_eq!(report.recommendations[3], "Add 'Clause 2' clause");
    }
}
