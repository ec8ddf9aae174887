//! # covenant-engine — Compliance Analysis Engine
//!
//! The decision core of the Covenant stack. Given contract text, a
//! jurisdiction, and an industry, the engine determines which regulations
//! apply, which required clauses are missing, and produces a scored gap
//! report per regulation.
//!
//! ## Pipeline
//!
//! ```text
//! AnalysisContext
//!       │
//!       ▼
//! Applicability Resolver ──▶ per regulation:
//!                              Clause Presence Detector
//!                                      │
//!                                      ▼
//!                              Gap & Score Aggregator
//!                                      │
//!                                      ▼
//!                              Remediation Generator (collaborator)
//!       │
//!       ▼
//! AnalysisReport (sorted by regulation id)
//! ```
//!
//! Clause presence detection is a lexical heuristic, not exact matching.
//! False positives and negatives are expected; the goal is directional
//! signal. Every weight, threshold, and truncation count lives in
//! [`DetectionPolicy`], so tuning the heuristic never touches the
//! algorithm shape.
//!
//! ## Crate Policy
//!
//! - Detection and scoring are pure functions of (policy, catalog, text).
//! - The only suspension point is the remediation collaborator, which is
//!   failure-isolated: the engine never surfaces its errors.
//! - No shared mutable state crosses regulation boundaries; the registry
//!   is read-only and shared.

pub mod analyzer;
pub mod collaborators;
pub mod context;
pub mod detector;
pub mod policy;
pub mod report;
pub mod resolver;
pub mod score;
pub mod summary;

pub use analyzer::{AnalysisError, AnalysisRequest, ComplianceAnalyzer};
pub use collaborators::{
    AnalysisEvent, AnalysisStore, ClauseTextGenerator, ClauseTextRequest, InMemoryStore,
    NotificationSink, NotifyError, NullStore, StoreError, StoredAnalysis, TracingSink,
};
pub use context::AnalysisContext;
pub use policy::DetectionPolicy;
pub use report::{AnalysisReport, MissingClause, RegulationGapReport};
