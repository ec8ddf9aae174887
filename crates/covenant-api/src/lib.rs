//! # covenant-api — Axum API Service
//!
//! The HTTP transport layer for the Covenant stack. Thin by design:
//! handlers convert between wire DTOs and engine types and delegate
//! every decision to `covenant-engine`.
//!
//! ## Routes
//!
//! - `POST /v1/analyses` — analyze contract text
//! - `GET  /v1/regulations` — catalog listing
//! - `GET  /v1/regulations/{id}` — one regulation's definition
//! - `GET  /health/liveness`, `GET /health/readiness` — probes
//! - `GET  /metrics` — Prometheus exposition text
//! - `GET  /api-docs/openapi.json` — OpenAPI document
//!
//! ## Middleware Stack (Tower)
//!
//! TraceLayer → CorsLayer → Handler
//!
//! ## Crate Policy
//!
//! - No business logic in route handlers.
//! - All errors map to structured HTTP responses via `AppError`.

pub mod error;
pub mod openapi;
pub mod routes;
pub mod state;

pub use error::AppError;
pub use state::AppState;

use axum::extract::State;
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::analyses::router())
        .merge(routes::regulations::router())
        .merge(openapi::router())
        .route("/metrics", get(render_metrics))
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness probe: 200 whenever the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe: the registry is compiled in, so readiness follows
/// liveness.
async fn readiness() -> &'static str {
    "ready"
}

/// GET /metrics — Prometheus exposition text.
async fn render_metrics(State(state): State<AppState>) -> Result<String, AppError> {
    state
        .metrics_handle
        .as_ref()
        .map(|handle| handle.render())
        .ok_or_else(|| AppError::Internal("metrics recorder not installed".to_string()))
}
