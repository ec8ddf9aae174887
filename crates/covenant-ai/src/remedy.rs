//! # Remediation Generator
//!
//! Implements the engine's `ClauseTextGenerator` seam. The structured
//! prompt names the regulation, the clause, and its requirement phrases,
//! with a bounded contract excerpt for context. Responses are validated
//! before use: empty, too-short, or degraded-sentinel responses are
//! treated exactly like transport failures and replaced by the template.
//!
//! The template is the floor of the system: always available, always
//! non-empty, and it quotes the clause name and every requirement phrase
//! verbatim so the suggestion is reviewable against the catalog.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use covenant_core::RegulationId;
use covenant_engine::{ClauseTextGenerator, ClauseTextRequest};
use covenant_registry::ClauseRequirement;

use crate::client::{CompletionClient, CompletionRequest};

/// Responses shorter than this are considered degraded boilerplate.
const MIN_CLAUSE_TEXT_LEN: usize = 50;

/// Sentinel emitted by degraded upstream deployments in place of text.
const DEGRADED_SENTINEL: &str = "AI analysis completed";

/// Token budget for one suggested clause.
const CLAUSE_MAX_TOKENS: u32 = 1000;

const SYSTEM_PROMPT: &str = "You are a senior legal compliance expert with 15+ years of \
experience in corporate law and regulatory compliance. Generate professional, legally \
sound contract clauses that are enforceable and comprehensive.";

/// Suggested-clause generator with a deterministic fallback.
pub struct RemediationGenerator {
    client: Option<Arc<dyn CompletionClient>>,
}

impl RemediationGenerator {
    /// Generator that consults the given completion service first.
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// Generator that always uses the template; for deployments with no
    /// completion service configured.
    pub fn offline() -> Self {
        Self { client: None }
    }

    /// The deterministic template: names the clause, cites the
    /// regulation, and enumerates the requirement phrases verbatim.
    pub fn fallback_clause_text(regulation: &RegulationId, clause: &ClauseRequirement) -> String {
        format!(
            "{}\n\n\
             The Parties shall comply with all applicable requirements under {} regarding \
             {}, including but not limited to: {}.\n\n\
             Appropriate technical and organizational measures shall be implemented to \
             ensure ongoing compliance. All compliance activities shall be properly \
             documented and made available for audit upon request. In case of \
             non-compliance, the Parties shall take immediate corrective action and \
             notify relevant stakeholders as required by applicable law.",
            clause.name.to_uppercase(),
            regulation,
            clause.name,
            clause.requirements.join(", "),
        )
    }

    /// Whether a service response is usable as clause text.
    fn acceptable(response: &str) -> bool {
        let trimmed = response.trim();
        !trimmed.is_empty()
            && trimmed.len() >= MIN_CLAUSE_TEXT_LEN
            && !trimmed.contains(DEGRADED_SENTINEL)
    }

    fn user_prompt(request: &ClauseTextRequest<'_>) -> String {
        format!(
            "Generate a professional legal clause for a commercial contract addressing: {}\n\n\
             REGULATION: {}\n\
             KEY REQUIREMENTS: {}\n\
             CONTRACT CONTEXT: {}\n\n\
             The clause must be:\n\
             - Legally precise and enforceable\n\
             - Comprehensive yet concise\n\
             - Written in formal commercial contract language\n\
             - Include specific obligations, responsibilities, and remedies\n\
             - Reference the relevant regulation appropriately\n\
             - Suitable for commercial use\n\n\
             Provide only the clause text without explanations.",
            request.clause.name,
            request.regulation,
            request.clause.requirements.join(", "),
            request.contract_excerpt,
        )
    }
}

#[async_trait]
impl ClauseTextGenerator for RemediationGenerator {
    async fn suggest_clause(&self, request: ClauseTextRequest<'_>) -> String {
        if let Some(client) = &self.client {
            let completion = CompletionRequest {
                system_prompt: SYSTEM_PROMPT,
                user_prompt: &Self::user_prompt(&request),
                max_tokens: CLAUSE_MAX_TOKENS,
            };
            match client.complete(completion).await {
                Ok(text) if Self::acceptable(&text) => return text.trim().to_string(),
                Ok(text) => {
                    warn!(
                        regulation = %request.regulation,
                        clause = %request.clause.name,
                        response_len = text.trim().len(),
                        "completion response unusable, using template"
                    );
                }
                Err(error) => {
                    warn!(
                        regulation = %request.regulation,
                        clause = %request.clause.name,
                        %error,
                        "completion service degraded, using template"
                    );
                }
            }
        }
        Self::fallback_clause_text(request.regulation, request.clause)
    }
}
