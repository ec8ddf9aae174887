//! # covenant-registry — Regulation Catalog
//!
//! The static catalog of commercial regulations the Covenant stack knows
//! how to analyze. Each [`RegulationDefinition`] carries its ordered
//! required clauses, the jurisdictions and industries it applies to, and
//! legal citations.
//!
//! The catalog is pure data: it is built once, never mutated, and shared
//! freely across concurrent analyses. Jurisdiction and industry default
//! maps answer "which regulations does this territory/sector pull in by
//! default"; content-driven applicability lives in `covenant-engine`.
//!
//! ## Crate Policy
//!
//! - Depends only on `covenant-core`.
//! - No IO: the builtin catalog is compiled in.
//! - Lookups never allocate surprises: unknown jurisdiction/industry codes
//!   yield empty sets, unknown regulation ids yield `RegistryError::NotFound`.

pub mod catalog;
pub mod definition;

pub use catalog::{RegistryError, RegulationRegistry};
pub use definition::{ClauseRequirement, RegulationDefinition};
