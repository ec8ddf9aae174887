//! # Regulation Catalog Queries
//!
//! Routes:
//! - GET /v1/regulations — List the catalog
//! - GET /v1/regulations/{id} — Full definition of one regulation
//!
//! Read-only views over the registry; nothing here mutates state.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use covenant_core::RegulationId;
use covenant_registry::RegulationDefinition;

use crate::error::AppError;
use crate::state::AppState;

/// One catalog entry in the list view.
#[derive(Debug, Serialize, ToSchema)]
pub struct RegulationSummary {
    /// Regulation id.
    pub id: String,
    /// Number of required clauses.
    pub clause_count: usize,
    /// Jurisdictions where the regulation applies.
    pub jurisdictions: Vec<String>,
    /// Industries the regulation applies to.
    pub industries: Vec<String>,
}

/// Catalog list response.
#[derive(Debug, Serialize, ToSchema)]
pub struct RegulationList {
    /// Number of catalog entries.
    pub count: usize,
    /// Entries sorted by id.
    pub regulations: Vec<RegulationSummary>,
}

/// One required clause in the detail view.
#[derive(Debug, Serialize, ToSchema)]
pub struct ClauseDetail {
    /// Clause name.
    pub name: String,
    /// What the clause covers.
    pub description: String,
    /// Severity of omitting the clause.
    pub risk_level: String,
    /// Requirement phrases.
    pub requirements: Vec<String>,
    /// Statutory citation, when one exists.
    pub legal_citation: Option<String>,
}

/// Full definition of one regulation.
#[derive(Debug, Serialize, ToSchema)]
pub struct RegulationDetail {
    /// Regulation id.
    pub id: String,
    /// Required clauses in catalog order.
    pub clauses: Vec<ClauseDetail>,
    /// Jurisdictions where the regulation applies.
    pub jurisdictions: Vec<String>,
    /// Industries the regulation applies to.
    pub industries: Vec<String>,
}

impl From<&RegulationDefinition> for RegulationDetail {
    fn from(definition: &RegulationDefinition) -> Self {
        Self {
            id: definition.id.to_string(),
            clauses: definition
                .clauses
                .iter()
                .map(|clause| ClauseDetail {
                    name: clause.name.clone(),
                    description: clause.description.clone(),
                    risk_level: clause.risk_level.as_str().to_string(),
                    requirements: clause.requirements.clone(),
                    legal_citation: clause.legal_citation.clone(),
                })
                .collect(),
            jurisdictions: definition.jurisdictions.iter().map(|j| j.to_string()).collect(),
            industries: definition.industries.iter().map(|i| i.to_string()).collect(),
        }
    }
}

/// Build the regulations router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/regulations", get(list_regulations))
        .route("/v1/regulations/{id}", get(get_regulation))
}

/// GET /v1/regulations — List the catalog.
#[utoipa::path(
    get,
    path = "/v1/regulations",
    responses(
        (status = 200, description = "Catalog listing", body = RegulationList),
    ),
    tag = "regulations"
)]
pub async fn list_regulations(State(state): State<AppState>) -> Json<RegulationList> {
    let registry = state.analyzer.registry();
    let regulations: Vec<RegulationSummary> = registry
        .list_regulations()
        .iter()
        .filter_map(|id| registry.get(id).ok())
        .map(|definition| RegulationSummary {
            id: definition.id.to_string(),
            clause_count: definition.clauses.len(),
            jurisdictions: definition.jurisdictions.iter().map(|j| j.to_string()).collect(),
            industries: definition.industries.iter().map(|i| i.to_string()).collect(),
        })
        .collect();

    Json(RegulationList {
        count: regulations.len(),
        regulations,
    })
}

/// GET /v1/regulations/{id} — Full definition of one regulation.
#[utoipa::path(
    get,
    path = "/v1/regulations/{id}",
    params(("id" = String, Path, description = "Regulation id, e.g. GLBA")),
    responses(
        (status = 200, description = "Regulation definition", body = RegulationDetail),
        (status = 404, description = "Unknown regulation id"),
    ),
    tag = "regulations"
)]
pub async fn get_regulation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RegulationDetail>, AppError> {
    let id = RegulationId::new(id).map_err(|e| AppError::Validation(e.to_string()))?;
    let definition = state
        .analyzer
        .registry()
        .get(&id)
        .map_err(|e| AppError::NotFound(e.to_string()))?;
    Ok(Json(definition.into()))
}
