//! # OpenAPI Specification Assembly
//!
//! Assembles all utoipa-documented routes into a single OpenAPI document
//! served at `/api-docs/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the entire API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Covenant API",
        version = "0.1.0",
        description = "Contract compliance analysis: regulation applicability, clause gap detection, scoring, and remediation text.",
        license(name = "AGPL-3.0-or-later")
    ),
    paths(
        crate::routes::analyses::create_analysis,
        crate::routes::regulations::list_regulations,
        crate::routes::regulations::get_regulation,
    ),
    tags(
        (name = "analyses", description = "Contract analysis submission"),
        (name = "regulations", description = "Regulation catalog queries"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api-docs/openapi.json", get(serve_openapi))
}

/// GET /api-docs/openapi.json — the assembled document.
async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document_builds() {
        let doc = ApiDoc::openapi();
        let json = serde_json::to_value(&doc).unwrap();
        assert!(json["paths"]["/v1/analyses"].is_object());
        assert!(json["paths"]["/v1/regulations"].is_object());
        assert!(json["paths"]["/v1/regulations/{id}"].is_object());
    }
}
