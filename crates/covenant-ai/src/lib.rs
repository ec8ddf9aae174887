//! # covenant-ai — Remediation Text Generation
//!
//! Produces suggested clause text for detected compliance gaps. The
//! primary path delegates to an external generative text service through
//! the [`CompletionClient`] trait; when the service fails, is absent, or
//! returns an unusable response, a deterministic template takes over.
//!
//! The fallback never fails, so the analysis pipeline has no hard
//! dependency on the external service: a dead endpoint degrades the
//! quality of suggested wording, never the analysis itself.
//!
//! ## Crate Policy
//!
//! - The engine sees only `ClauseTextGenerator`; every failure mode is
//!   resolved inside this crate.
//! - At most one completion request per missing clause, with a bounded
//!   timeout and a bounded contract excerpt.
//! - No caching of generated text; that belongs to the storage layer.

pub mod client;
pub mod openrouter;
pub mod remedy;

pub use client::{CompletionClient, CompletionError, CompletionRequest};
pub use openrouter::{OpenRouterClient, OpenRouterConfig};
pub use remedy::RemediationGenerator;
