//! # covenant-api — Binary Entry Point
//!
//! Starts the Axum HTTP server for the Covenant API.
//! Binds to a configurable port (default 8080).

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusBuilder;

use covenant_ai::{OpenRouterClient, OpenRouterConfig, RemediationGenerator};
use covenant_api::AppState;
use covenant_engine::{ClauseTextGenerator, ComplianceAnalyzer, DetectionPolicy};
use covenant_registry::RegulationRegistry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    let registry = Arc::new(RegulationRegistry::builtin());
    tracing::info!(regulations = registry.len(), "regulation catalog loaded");

    // Completion service is optional; without it, suggested clauses come
    // from the deterministic template.
    let generator: Arc<dyn ClauseTextGenerator> = match OpenRouterConfig::from_env() {
        Some(config) => {
            tracing::info!(model = %config.model, "completion service configured");
            Arc::new(RemediationGenerator::new(Arc::new(OpenRouterClient::new(
                config,
            )?)))
        }
        None => {
            tracing::warn!("no completion service configured; suggested clauses use templates");
            Arc::new(RemediationGenerator::offline())
        }
    };

    let mut analyzer = ComplianceAnalyzer::new(registry, generator);
    if let Ok(path) = std::env::var("COVENANT_POLICY_FILE") {
        let policy = DetectionPolicy::from_yaml_file(&path)?;
        tracing::info!(path, "detection policy loaded from file");
        analyzer = analyzer.with_policy(policy);
    }

    let metrics_handle = PrometheusBuilder::new().install_recorder()?;
    let state = AppState::new(Arc::new(analyzer)).with_metrics_handle(metrics_handle);
    let app = covenant_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Covenant API listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
