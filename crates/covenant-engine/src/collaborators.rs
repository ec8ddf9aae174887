//! # Collaborator Interfaces
//!
//! The engine's seams to the surrounding system: remediation text
//! generation, lifecycle notification, and analysis storage. Each is a
//! narrow async trait so transports and vendors stay swappable.
//!
//! Failure isolation is part of the contract. The analyzer logs sink and
//! store errors and moves on; a dead mail server or database must never
//! change an analysis result. Remediation generation is infallible by
//! construction: implementations resolve their own failures (typically by
//! falling back to templated text) and always return something.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use covenant_core::{
    AnalysisId, ContentDigest, IndustryCode, JurisdictionCode, RegulationId, RiskLevel, Timestamp,
};
use covenant_registry::ClauseRequirement;

use crate::report::AnalysisReport;

// ─── Remediation generation ──────────────────────────────────────────

/// Inputs for generating replacement text for one missing clause.
#[derive(Debug, Clone)]
pub struct ClauseTextRequest<'a> {
    /// The regulation requiring the clause.
    pub regulation: &'a RegulationId,
    /// The unsatisfied requirement.
    pub clause: &'a ClauseRequirement,
    /// Bounded excerpt of the contract, for context only.
    pub contract_excerpt: &'a str,
}

/// Produces suggested clause text for a detected gap.
///
/// Implementations must always return non-empty text; external-service
/// failures are resolved internally, never surfaced to the analyzer.
#[async_trait]
pub trait ClauseTextGenerator: Send + Sync {
    /// Suggest clause text addressing the request.
    async fn suggest_clause(&self, request: ClauseTextRequest<'_>) -> String;
}

// ─── Lifecycle notification ──────────────────────────────────────────

/// Structured lifecycle events emitted around an analysis run.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AnalysisEvent {
    /// An analysis has been accepted and is running.
    AnalysisStarted {
        /// The run identifier.
        analysis_id: AnalysisId,
        /// Governing jurisdiction.
        jurisdiction: JurisdictionCode,
        /// Contracting industry.
        industry: IndustryCode,
        /// Regulations queued for analysis, sorted.
        regulations: Vec<RegulationId>,
        /// When the run started.
        at: Timestamp,
    },
    /// An analysis finished and a report is available.
    AnalysisCompleted {
        /// The run identifier.
        analysis_id: AnalysisId,
        /// Mean per-regulation score.
        overall_score: f64,
        /// Highest per-regulation risk tier.
        overall_risk: RiskLevel,
        /// How many regulations were analyzed.
        regulations_analyzed: usize,
        /// How many were assessed at the High tier.
        high_risk_regulations: usize,
        /// Total missing clauses across regulations.
        missing_clause_count: usize,
        /// Wall-clock duration in seconds.
        processing_time_secs: f64,
        /// When the run finished.
        at: Timestamp,
    },
}

/// Error delivering a notification. Logged by the analyzer, never fatal.
#[derive(Error, Debug)]
#[error("notification delivery failed: {0}")]
pub struct NotifyError(pub String);

/// Receives lifecycle events. Delivery (email, chat, spreadsheet) is the
/// collaborator's concern.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Deliver one event.
    async fn notify(&self, event: &AnalysisEvent) -> Result<(), NotifyError>;
}

/// A sink that logs events through `tracing`. The default when no
/// delivery channel is configured.
#[derive(Debug, Default)]
pub struct TracingSink;

#[async_trait]
impl NotificationSink for TracingSink {
    async fn notify(&self, event: &AnalysisEvent) -> Result<(), NotifyError> {
        match event {
            AnalysisEvent::AnalysisStarted {
                analysis_id,
                jurisdiction,
                industry,
                regulations,
                ..
            } => {
                tracing::info!(
                    %analysis_id,
                    %jurisdiction,
                    %industry,
                    regulations = regulations.len(),
                    "analysis started"
                );
            }
            AnalysisEvent::AnalysisCompleted {
                analysis_id,
                overall_score,
                overall_risk,
                missing_clause_count,
                processing_time_secs,
                ..
            } => {
                tracing::info!(
                    %analysis_id,
                    overall_score,
                    %overall_risk,
                    missing_clause_count,
                    processing_time_secs,
                    "analysis completed"
                );
            }
        }
        Ok(())
    }
}

// ─── Analysis storage ────────────────────────────────────────────────

/// The record handed to the storage collaborator after a run.
///
/// Carries the original text and its digest so the collaborator can index
/// and deduplicate; the engine itself retains nothing.
#[derive(Debug, Clone, Serialize)]
pub struct StoredAnalysis {
    /// The run identifier.
    pub analysis_id: AnalysisId,
    /// SHA-256 digest of the analyzed text.
    pub contract_digest: ContentDigest,
    /// The analyzed text.
    pub contract_text: String,
    /// Governing jurisdiction.
    pub jurisdiction: JurisdictionCode,
    /// Contracting industry.
    pub industry: IndustryCode,
    /// Regulations analyzed, sorted.
    pub regulations: Vec<RegulationId>,
    /// The finished report.
    pub report: AnalysisReport,
    /// When the record was emitted.
    pub stored_at: Timestamp,
}

/// Error persisting an analysis record. Logged by the analyzer, never fatal.
#[derive(Error, Debug)]
#[error("analysis storage failed: {0}")]
pub struct StoreError(pub String);

/// Receives finished analyses for persistence and search. The engine
/// never reads back within a run.
#[async_trait]
pub trait AnalysisStore: Send + Sync {
    /// Persist one record.
    async fn store(&self, record: StoredAnalysis) -> Result<(), StoreError>;
}

/// An in-memory store, useful in tests and as the default when no
/// persistence backend is configured.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: std::sync::Mutex<Vec<StoredAnalysis>>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all stored records, in insertion order.
    pub fn records(&self) -> Vec<StoredAnalysis> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }
}

/// A store that drops records. The default when no persistence backend
/// is configured; the record is still assembled so wiring a real store
/// changes nothing upstream.
#[derive(Debug, Default)]
pub struct NullStore;

#[async_trait]
impl AnalysisStore for NullStore {
    async fn store(&self, record: StoredAnalysis) -> Result<(), StoreError> {
        tracing::debug!(analysis_id = %record.analysis_id, "no analysis store configured, dropping record");
        Ok(())
    }
}

#[async_trait]
impl AnalysisStore for InMemoryStore {
    async fn store(&self, record: StoredAnalysis) -> Result<(), StoreError> {
        self.records
            .lock()
            .map_err(|e| StoreError(format!("store mutex poisoned: {e}")))?
            .push(record);
        Ok(())
    }
}
