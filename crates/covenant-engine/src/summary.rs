//! # Report Summaries
//!
//! Deterministic text renderings of an analysis: an executive summary for
//! business stakeholders, a detailed per-regulation narrative, and the
//! amended contract with suggested clauses appended.
//!
//! These are plain-text assemblies of data the aggregator already
//! produced; no generative service is involved.

use covenant_core::{RiskLevel, Timestamp};

use crate::report::RegulationGapReport;

/// Render a score in [0, 1] as a percentage with one decimal.
fn percent(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}

/// Executive summary: overall posture, tier counts, critical findings,
/// and the standing action list.
pub fn executive_summary(
    results: &[RegulationGapReport],
    overall_score: f64,
    overall_risk: RiskLevel,
) -> String {
    let high: Vec<&RegulationGapReport> = results
        .iter()
        .filter(|r| r.risk_assessment == RiskLevel::High)
        .collect();
    let medium_count = results
        .iter()
        .filter(|r| r.risk_assessment == RiskLevel::Medium)
        .count();
    let low_count = results.len() - high.len() - medium_count;

    let mut summary = format!(
        "COMMERCIAL COMPLIANCE ANALYSIS EXECUTIVE SUMMARY\n\n\
         Overall Compliance Score: {}\n\
         Risk Level: {}\n\n\
         REGULATIONS ANALYZED: {}\n\
         - High Risk: {} regulations\n\
         - Medium Risk: {} regulations\n\
         - Low Risk: {} regulations\n\n\
         CRITICAL FINDINGS:\n",
        percent(overall_score),
        overall_risk.as_str().to_uppercase(),
        results.len(),
        high.len(),
        medium_count,
        low_count,
    );

    for result in &high {
        summary.push_str(&format!(
            "- {}: {} missing clauses\n",
            result.regulation,
            result.missing_clauses.len()
        ));
    }

    summary.push_str(
        "\nRECOMMENDED ACTIONS:\n\
         1. Address high-risk compliance gaps immediately\n\
         2. Implement suggested clause additions\n\
         3. Conduct legal review of compliance findings\n\
         4. Establish ongoing compliance monitoring\n",
    );

    summary
}

/// Detailed narrative: per-regulation score, risk, issues, and
/// recommendations.
pub fn detailed_summary(results: &[RegulationGapReport]) -> String {
    let divider = "=".repeat(50);
    let mut out = format!("DETAILED COMPLIANCE ANALYSIS REPORT\n{divider}\n\n");

    for result in results {
        out.push_str(&format!(
            "REGULATION: {}\n\
             Compliance Score: {}\n\
             Risk Assessment: {}\n\n\
             ISSUES IDENTIFIED:\n",
            result.regulation,
            percent(result.compliance_score),
            result.risk_assessment.as_str().to_uppercase(),
        ));
        for issue in &result.issues {
            out.push_str(&format!("- {issue}\n"));
        }
        out.push_str("\nRECOMMENDATIONS:\n");
        for recommendation in &result.recommendations {
            out.push_str(&format!("- {recommendation}\n"));
        }
        out.push_str(&format!("\n{divider}\n\n"));
    }

    out
}

/// The original contract followed by suggested clause additions, grouped
/// per regulation with risk markers and citations.
pub fn amended_contract(
    original_text: &str,
    results: &[RegulationGapReport],
    analyzed_at: Timestamp,
) -> String {
    let wide = "=".repeat(80);
    let mut out = format!(
        "{original_text}\n\n{wide}\n\
         COMPLIANCE ENHANCEMENTS\n\
         {wide}\n\n\
         Generated by the Covenant compliance analyzer\n\
         Analysis Date: {analyzed_at}\n",
    );

    for result in results {
        if result.missing_clauses.is_empty() {
            continue;
        }
        out.push_str(&format!(
            "\n{} COMPLIANCE ADDITIONS\n{}\n\n",
            result.regulation,
            "=".repeat(50)
        ));

        for missing in &result.missing_clauses {
            out.push_str(&format!(
                "{} RISK: {}\nDescription: {}\n",
                missing.clause.risk_level.as_str().to_uppercase(),
                missing.clause.name,
                missing.clause.description,
            ));
            if let Some(citation) = &missing.legal_citation {
                out.push_str(&format!("Legal Reference: {citation}\n"));
            }
            out.push_str(&format!(
                "Requirements: {}\n\nSUGGESTED CLAUSE:\n{}\n\n{}\n\n",
                missing.clause.requirements.join(", "),
                missing.suggested_text,
                "-".repeat(60),
            ));
        }
    }

    out
}
