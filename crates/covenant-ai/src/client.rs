//! # Completion Client Interface
//!
//! The narrow contract the remediation generator places on a generative
//! text service: one prompt pair in, one text out, uniform failures.
//! Callers treat every error variant identically (fall back), so the
//! variants exist for logging fidelity, not control flow.

use async_trait::async_trait;
use thiserror::Error;

/// A single completion request.
#[derive(Debug, Clone)]
pub struct CompletionRequest<'a> {
    /// Instructions framing the assistant's role.
    pub system_prompt: &'a str,
    /// The task itself.
    pub user_prompt: &'a str,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
}

/// Error from a completion service.
#[derive(Error, Debug)]
pub enum CompletionError {
    /// Transport-level failure, including connect errors and timeouts.
    #[error("completion request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("completion service returned {status}: {body}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Response body, for logs.
        body: String,
    },

    /// The response decoded but did not contain usable text.
    #[error("malformed completion response: {0}")]
    Malformed(String),
}

/// A generative text service.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Run one completion.
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, CompletionError>;
}
