//! # covenant-core — Foundational Types for the Covenant Stack
//!
//! This crate is the bedrock of the Covenant contract-compliance stack. It
//! defines the type-system primitives shared by every other crate in the
//! workspace; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `RegulationId`,
//!    `JurisdictionCode`, `IndustryCode`, `AnalysisId`: all newtypes with
//!    validated constructors. No bare strings for identifiers.
//!
//! 2. **Single `RiskLevel` enum.** One definition, ordered by severity,
//!    exhaustive `match` everywhere. Risk aggregation is `Ord`-based, so
//!    "highest risk wins" cannot drift between call sites.
//!
//! 3. **UTC-only timestamps.** The `Timestamp` type enforces UTC with Z
//!    suffix and seconds precision.
//!
//! 4. **Content digests for contract text.** `ContentDigest` gives the
//!    storage collaborator a stable handle on analyzed text without the
//!    core retaining the text itself.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `covenant-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement `Serialize`/`Deserialize`.

pub mod digest;
pub mod error;
pub mod identity;
pub mod risk;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use digest::ContentDigest;
pub use error::CovenantError;
pub use identity::{AnalysisId, IndustryCode, JurisdictionCode, RegulationId};
pub use risk::RiskLevel;
pub use temporal::Timestamp;
