//! # Compliance Analyzer
//!
//! The orchestrator. One call to [`ComplianceAnalyzer::analyze`] runs the
//! full pipeline: context construction, applicability resolution (or
//! validation of an explicitly requested regulation list), per-regulation
//! clause detection and gap scoring, remediation text generation, and
//! final aggregation into an [`AnalysisReport`].
//!
//! Per-regulation work has no data dependency on other regulations and is
//! fanned out across tokio tasks behind a bounded semaphore. The report's
//! `results` are always in sorted regulation-id order regardless of task
//! completion order, so parallelism is invisible to callers.
//!
//! The analyzer is stateless between calls: an abandoned run leaves
//! nothing to clean up, and a retry starts from scratch.

use std::sync::Arc;
use std::time::Instant;

use thiserror::Error;
use tokio::sync::Semaphore;

use covenant_core::{
    AnalysisId, ContentDigest, IndustryCode, JurisdictionCode, RegulationId, Timestamp,
};
use covenant_registry::{RegistryError, RegulationRegistry};

use crate::collaborators::{
    AnalysisEvent, AnalysisStore, ClauseTextGenerator, ClauseTextRequest, NotificationSink,
    NullStore, StoredAnalysis, TracingSink,
};
use crate::context::AnalysisContext;
use crate::policy::DetectionPolicy;
use crate::report::{AnalysisReport, MissingClause, RegulationGapReport};
use crate::{detector, resolver, score, summary};

/// Upper bound on concurrent per-regulation workers.
const DEFAULT_MAX_CONCURRENCY: usize = 8;

/// One analysis request.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// The contract text, already extracted to plain text by the caller.
    pub contract_text: String,
    /// Explicit regulations to analyze. When set, applicability
    /// resolution is bypassed and every id must exist in the registry.
    pub regulations: Option<Vec<RegulationId>>,
    /// Governing jurisdiction; inferred from the text when absent.
    pub jurisdiction: Option<JurisdictionCode>,
    /// Contracting industry; inferred from the text when absent.
    pub industry: Option<IndustryCode>,
}

impl AnalysisRequest {
    /// A request with only contract text; codes are inferred and
    /// applicability is resolved.
    pub fn for_text(contract_text: impl Into<String>) -> Self {
        Self {
            contract_text: contract_text.into(),
            regulations: None,
            jurisdiction: None,
            industry: None,
        }
    }
}

/// Fatal errors for a single analysis run.
///
/// External-service failures are not represented here: remediation
/// generation resolves them internally and never fails the run.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The contract text was empty or all whitespace.
    #[error("contract text must not be empty")]
    EmptyContract,

    /// An explicitly requested regulation is not in the registry.
    #[error(transparent)]
    UnknownRegulation(#[from] RegistryError),

    /// A per-regulation worker was cancelled or panicked.
    #[error("analysis worker failed: {0}")]
    Worker(String),
}

/// The compliance analysis engine, shared across concurrent requests.
pub struct ComplianceAnalyzer {
    registry: Arc<RegulationRegistry>,
    generator: Arc<dyn ClauseTextGenerator>,
    notifications: Arc<dyn NotificationSink>,
    store: Arc<dyn AnalysisStore>,
    policy: DetectionPolicy,
    max_concurrency: usize,
}

impl ComplianceAnalyzer {
    /// Build an analyzer over a registry and a remediation generator,
    /// with default policy, a tracing notification sink, and no
    /// persistence backend.
    pub fn new(
        registry: Arc<RegulationRegistry>,
        generator: Arc<dyn ClauseTextGenerator>,
    ) -> Self {
        Self {
            registry,
            generator,
            notifications: Arc::new(TracingSink),
            store: Arc::new(NullStore),
            policy: DetectionPolicy::default(),
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
        }
    }

    /// Replace the detection policy.
    pub fn with_policy(mut self, policy: DetectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the notification sink.
    pub fn with_notifications(mut self, sink: Arc<dyn NotificationSink>) -> Self {
        self.notifications = sink;
        self
    }

    /// Replace the analysis store.
    pub fn with_store(mut self, store: Arc<dyn AnalysisStore>) -> Self {
        self.store = store;
        self
    }

    /// Cap the number of concurrent per-regulation workers (minimum 1).
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }

    /// The registry this analyzer consults.
    pub fn registry(&self) -> &RegulationRegistry {
        &self.registry
    }

    /// Run one analysis.
    ///
    /// # Errors
    ///
    /// Fails on empty contract text and on explicitly requested regulation
    /// ids missing from the registry. An empty applicable-regulation set
    /// is not an error; it yields a valid report with overall score 0.0
    /// and risk Low.
    pub async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisReport, AnalysisError> {
        if request.contract_text.trim().is_empty() {
            return Err(AnalysisError::EmptyContract);
        }
        let started = Instant::now();

        let context = Arc::new(AnalysisContext::with_inference(
            request.jurisdiction,
            request.industry,
            request.contract_text,
        ));

        let regulations = match request.regulations {
            Some(explicit) => {
                let mut ids = explicit;
                ids.sort();
                ids.dedup();
                // Requested-but-missing ids indicate caller error and fail
                // the whole analysis rather than being silently skipped.
                for id in &ids {
                    self.registry.get(id)?;
                }
                ids
            }
            None => resolver::resolve(&self.registry, &context),
        };

        let analysis_id = AnalysisId::new();
        let analyzed_at = Timestamp::now();
        tracing::info!(
            %analysis_id,
            jurisdiction = %context.jurisdiction,
            industry = %context.industry,
            regulations = regulations.len(),
            "starting compliance analysis"
        );

        self.emit(AnalysisEvent::AnalysisStarted {
            analysis_id,
            jurisdiction: context.jurisdiction.clone(),
            industry: context.industry.clone(),
            regulations: regulations.clone(),
            at: analyzed_at,
        })
        .await;

        let results = self.analyze_regulations(&regulations, &context).await?;

        let overall_score = score::overall_score(&results);
        let overall_risk = score::overall_risk(&results);
        let report = AnalysisReport {
            analysis_id,
            overall_score,
            overall_risk,
            summary: summary::executive_summary(&results, overall_score, overall_risk),
            detailed_summary: summary::detailed_summary(&results),
            amended_contract: summary::amended_contract(
                &context.contract_text,
                &results,
                analyzed_at,
            ),
            results,
            analyzed_at,
            processing_time_secs: started.elapsed().as_secs_f64(),
        };

        if let Err(error) = self
            .store
            .store(StoredAnalysis {
                analysis_id,
                contract_digest: ContentDigest::from_text(&context.contract_text),
                contract_text: context.contract_text.clone(),
                jurisdiction: context.jurisdiction.clone(),
                industry: context.industry.clone(),
                regulations,
                report: report.clone(),
                stored_at: Timestamp::now(),
            })
            .await
        {
            tracing::warn!(%analysis_id, %error, "analysis store rejected record");
        }

        self.emit(AnalysisEvent::AnalysisCompleted {
            analysis_id,
            overall_score,
            overall_risk,
            regulations_analyzed: report.results.len(),
            high_risk_regulations: report.high_risk_regulations(),
            missing_clause_count: report.missing_clause_count(),
            processing_time_secs: report.processing_time_secs,
            at: Timestamp::now(),
        })
        .await;

        Ok(report)
    }

    /// Fan per-regulation work out across bounded workers and reassemble
    /// results in submission (sorted-id) order.
    async fn analyze_regulations(
        &self,
        regulations: &[RegulationId],
        context: &Arc<AnalysisContext>,
    ) -> Result<Vec<RegulationGapReport>, AnalysisError> {
        let permits = self.max_concurrency.min(regulations.len().max(1));
        let semaphore = Arc::new(Semaphore::new(permits));

        let mut handles = Vec::with_capacity(regulations.len());
        for id in regulations {
            let id = id.clone();
            let registry = Arc::clone(&self.registry);
            let generator = Arc::clone(&self.generator);
            let context = Arc::clone(context);
            let policy = self.policy.clone();
            let semaphore = Arc::clone(&semaphore);
            handles.push(tokio::spawn(async move {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .map_err(|e| AnalysisError::Worker(e.to_string()))?;
                analyze_regulation(&registry, generator.as_ref(), &policy, &context, &id).await
            }));
        }

        let mut results = Vec::with_capacity(handles.len());
        for handle in handles {
            let report = handle
                .await
                .map_err(|e| AnalysisError::Worker(e.to_string()))??;
            results.push(report);
        }
        Ok(results)
    }

    /// Deliver a lifecycle event; sink failures are logged, never fatal.
    async fn emit(&self, event: AnalysisEvent) {
        if let Err(error) = self.notifications.notify(&event).await {
            tracing::warn!(%error, "notification sink failed");
        }
    }
}

/// Detect gaps, generate remediation text, and score one regulation.
async fn analyze_regulation(
    registry: &RegulationRegistry,
    generator: &dyn ClauseTextGenerator,
    policy: &DetectionPolicy,
    context: &AnalysisContext,
    id: &RegulationId,
) -> Result<RegulationGapReport, AnalysisError> {
    let definition = registry.get(id)?;
    let gaps = detector::missing_clauses(definition, context.text_lower(), policy);
    let excerpt = context.excerpt(policy.excerpt_chars);

    // One generator request per missing clause, sequential within the
    // regulation; cross-regulation parallelism is handled by the caller.
    let mut missing = Vec::with_capacity(gaps.len());
    for clause in gaps {
        let suggested_text = generator
            .suggest_clause(ClauseTextRequest {
                regulation: id,
                clause,
                contract_excerpt: excerpt,
            })
            .await;
        missing.push(MissingClause {
            clause: clause.clone(),
            suggested_text,
            legal_citation: clause.legal_citation.clone(),
        });
    }

    Ok(score::build_gap_report(
        definition,
        missing,
        context.text_lower(),
        policy,
    ))
}
