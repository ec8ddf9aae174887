//! # Report Types
//!
//! The immutable output of an analysis. A [`RegulationGapReport`] is
//! produced per applicable regulation; the top-level [`AnalysisReport`]
//! aggregates them with an overall score and risk tier.
//!
//! Reports are plain data: once returned they are never mutated, and the
//! engine keeps no copy. Persistence, if any, belongs to the storage
//! collaborator.

use serde::{Deserialize, Serialize};

use covenant_core::{AnalysisId, RegulationId, RiskLevel, Timestamp};
use covenant_registry::ClauseRequirement;

/// A required clause the contract does not cover, with suggested text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingClause {
    /// The catalog requirement that went unsatisfied.
    pub clause: ClauseRequirement,
    /// Remediation text produced by the generator (service or template).
    pub suggested_text: String,
    /// Statutory citation backing the requirement.
    pub legal_citation: Option<String>,
}

/// Findings for one regulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegulationGapReport {
    /// The regulation these findings concern.
    pub regulation: RegulationId,
    /// Heuristic completeness estimate in [0, 1].
    pub compliance_score: f64,
    /// Severity tier of the findings.
    pub risk_assessment: RiskLevel,
    /// Detected problems, most severe first, truncated per policy.
    pub issues: Vec<String>,
    /// Suggested follow-ups, generation order, truncated per policy.
    pub recommendations: Vec<String>,
    /// Missing clauses with suggested replacement text, catalog order.
    pub missing_clauses: Vec<MissingClause>,
    /// Citations backing the missing clauses, deduplicated, first-seen order.
    pub legal_references: Vec<String>,
}

impl RegulationGapReport {
    /// Number of missing clauses at the High risk tier.
    pub fn high_risk_missing(&self) -> usize {
        self.missing_clauses
            .iter()
            .filter(|m| m.clause.risk_level == RiskLevel::High)
            .count()
    }
}

/// The top-level result of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Unique identifier of this run.
    pub analysis_id: AnalysisId,
    /// Mean of per-regulation scores; 0.0 when no regulations apply.
    pub overall_score: f64,
    /// Highest per-regulation risk tier; Low when no regulations apply.
    pub overall_risk: RiskLevel,
    /// Per-regulation findings, sorted by regulation id.
    pub results: Vec<RegulationGapReport>,
    /// Executive summary for business stakeholders.
    pub summary: String,
    /// Per-regulation narrative of issues and recommendations.
    pub detailed_summary: String,
    /// The original contract with suggested clauses appended.
    pub amended_contract: String,
    /// When the analysis ran.
    pub analyzed_at: Timestamp,
    /// Wall-clock duration of the run in seconds.
    pub processing_time_secs: f64,
}

impl AnalysisReport {
    /// Total missing clauses across all regulations.
    pub fn missing_clause_count(&self) -> usize {
        self.results.iter().map(|r| r.missing_clauses.len()).sum()
    }

    /// Number of regulations assessed at the High risk tier.
    pub fn high_risk_regulations(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.risk_assessment == RiskLevel::High)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use covenant_core::RiskLevel;

    fn missing(name: &str, risk: RiskLevel) -> MissingClause {
        MissingClause {
            clause: ClauseRequirement {
                name: name.to_string(),
                description: String::new(),
                risk_level: risk,
                requirements: vec![],
                legal_citation: None,
            },
            suggested_text: String::new(),
            legal_citation: None,
        }
    }

    #[test]
    fn test_high_risk_missing_count() {
        let report = RegulationGapReport {
            regulation: RegulationId::new("GLBA").unwrap(),
            compliance_score: 0.68,
            risk_assessment: RiskLevel::Medium,
            issues: vec![],
            recommendations: vec![],
            missing_clauses: vec![
                missing("A", RiskLevel::High),
                missing("B", RiskLevel::Medium),
                missing("C", RiskLevel::High),
            ],
            legal_references: vec![],
        };
        assert_eq!(report.high_risk_missing(), 2);
    }

    #[test]
    fn test_report_serde_roundtrip() {
        let report = RegulationGapReport {
            regulation: RegulationId::new("TILA").unwrap(),
            compliance_score: 0.8,
            risk_assessment: RiskLevel::Medium,
            issues: vec!["Missing APR disclosure".into()],
            recommendations: vec!["Add TILA-required APR disclosure".into()],
            missing_clauses: vec![missing("Truth in Lending Disclosures", RiskLevel::High)],
            legal_references: vec!["15 U.S.C. § 1601 et seq.".into()],
        };
        let json = serde_json::to_string(&report).unwrap();
        let parsed: RegulationGapReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, parsed);
    }
}
