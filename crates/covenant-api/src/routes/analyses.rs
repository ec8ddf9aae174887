//! # Analysis Submission
//!
//! Routes:
//! - POST /v1/analyses — Analyze contract text
//!
//! Request and response types are transport-layer mirrors of the engine's
//! types: plain strings at the boundary, validated newtypes inside. No
//! business logic lives here.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use covenant_core::{IndustryCode, JurisdictionCode, RegulationId};
use covenant_engine::{AnalysisReport, AnalysisRequest, MissingClause, RegulationGapReport};

use crate::error::AppError;
use crate::state::AppState;

/// Contract analysis request.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// Plain contract text. Must be non-empty.
    pub contract_text: String,
    /// Explicit regulation ids; bypasses applicability resolution.
    #[serde(default)]
    pub regulations: Option<Vec<String>>,
    /// Jurisdiction code (e.g. `US`, `US_CA`); inferred when absent.
    #[serde(default)]
    pub jurisdiction: Option<String>,
    /// Industry code (e.g. `lending`); inferred when absent.
    #[serde(default)]
    pub industry: Option<String>,
}

impl TryFrom<AnalyzeRequest> for AnalysisRequest {
    type Error = AppError;

    fn try_from(request: AnalyzeRequest) -> Result<Self, Self::Error> {
        let regulations = request
            .regulations
            .map(|ids| {
                ids.into_iter()
                    .map(RegulationId::new)
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        let jurisdiction = request
            .jurisdiction
            .map(JurisdictionCode::new)
            .transpose()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        let industry = request
            .industry
            .map(IndustryCode::new)
            .transpose()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        Ok(AnalysisRequest {
            contract_text: request.contract_text,
            regulations,
            jurisdiction,
            industry,
        })
    }
}

/// A missing clause with suggested replacement text.
#[derive(Debug, Serialize, ToSchema)]
pub struct ClauseSuggestion {
    /// Clause name.
    pub clause: String,
    /// What the clause covers.
    pub description: String,
    /// Severity of the omission.
    pub risk_level: String,
    /// Requirement phrases the clause must address.
    pub requirements: Vec<String>,
    /// Suggested clause text.
    pub suggested_text: String,
    /// Statutory citation, when one exists.
    pub legal_citation: Option<String>,
}

impl From<MissingClause> for ClauseSuggestion {
    fn from(missing: MissingClause) -> Self {
        Self {
            clause: missing.clause.name,
            description: missing.clause.description,
            risk_level: missing.clause.risk_level.as_str().to_string(),
            requirements: missing.clause.requirements,
            suggested_text: missing.suggested_text,
            legal_citation: missing.legal_citation,
        }
    }
}

/// Findings for one regulation.
#[derive(Debug, Serialize, ToSchema)]
pub struct ComplianceResult {
    /// Regulation id.
    pub regulation: String,
    /// Heuristic completeness estimate in [0, 1].
    pub compliance_score: f64,
    /// Risk tier of the findings.
    pub risk_assessment: String,
    /// Detected problems.
    pub issues: Vec<String>,
    /// Suggested follow-ups.
    pub recommendations: Vec<String>,
    /// Missing clauses with suggested text.
    pub missing_clauses: Vec<ClauseSuggestion>,
    /// Citations backing the missing clauses.
    pub legal_references: Vec<String>,
}

impl From<RegulationGapReport> for ComplianceResult {
    fn from(report: RegulationGapReport) -> Self {
        Self {
            regulation: report.regulation.to_string(),
            compliance_score: report.compliance_score,
            risk_assessment: report.risk_assessment.as_str().to_string(),
            issues: report.issues,
            recommendations: report.recommendations,
            missing_clauses: report.missing_clauses.into_iter().map(Into::into).collect(),
            legal_references: report.legal_references,
        }
    }
}

/// Full analysis response.
#[derive(Debug, Serialize, ToSchema)]
pub struct AnalysisResponse {
    /// Unique analysis id.
    pub analysis_id: String,
    /// Mean of per-regulation scores; 0.0 when no regulations apply.
    pub overall_score: f64,
    /// Highest per-regulation risk tier.
    pub risk_level: String,
    /// Per-regulation findings, sorted by regulation id.
    pub results: Vec<ComplianceResult>,
    /// Executive summary.
    pub summary: String,
    /// Per-regulation narrative.
    pub executive_summary: String,
    /// Original contract with suggested clauses appended.
    pub modified_contract: String,
    /// When the analysis ran (ISO8601, UTC).
    pub analysis_timestamp: String,
    /// Wall-clock duration in seconds.
    pub processing_time: f64,
}

impl From<AnalysisReport> for AnalysisResponse {
    fn from(report: AnalysisReport) -> Self {
        Self {
            analysis_id: report.analysis_id.to_string(),
            overall_score: report.overall_score,
            risk_level: report.overall_risk.as_str().to_string(),
            results: report.results.into_iter().map(Into::into).collect(),
            summary: report.summary,
            executive_summary: report.detailed_summary,
            modified_contract: report.amended_contract,
            analysis_timestamp: report.analyzed_at.to_iso8601(),
            processing_time: report.processing_time_secs,
        }
    }
}

/// Build the analyses router.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/analyses", post(create_analysis))
}

/// POST /v1/analyses — Analyze contract text.
#[utoipa::path(
    post,
    path = "/v1/analyses",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Analysis report", body = AnalysisResponse),
        (status = 404, description = "Requested regulation not in registry"),
        (status = 422, description = "Empty contract text or malformed codes"),
    ),
    tag = "analyses"
)]
pub async fn create_analysis(
    State(state): State<AppState>,
    Json(body): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResponse>, AppError> {
    metrics::counter!("covenant_analyses_total").increment(1);

    let request: AnalysisRequest = body.try_into()?;
    match state.analyzer.analyze(request).await {
        Ok(report) => {
            metrics::counter!("covenant_analyses_completed_total").increment(1);
            Ok(Json(report.into()))
        }
        Err(error) => {
            metrics::counter!("covenant_analyses_failed_total").increment(1);
            Err(error.into())
        }
    }
}
