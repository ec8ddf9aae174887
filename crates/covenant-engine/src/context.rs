//! # Analysis Context
//!
//! The read-only input to a single analysis: contract text plus the
//! jurisdiction and industry codes that scope regulation applicability.
//!
//! When a caller supplies no codes, they are inferred from the text with
//! a small lexical heuristic. Inference is a convenience default, not a
//! classification claim; callers that know their jurisdiction should say
//! so.

use covenant_core::{IndustryCode, JurisdictionCode};

/// Financial wording that suggests a financial-industry contract.
const FINANCIAL_INDUSTRY_TERMS: &[&str] =
    &["loan", "financing", "credit", "interest", "payment", "debt"];

/// Read-only context for one analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisContext {
    /// Governing legal territory.
    pub jurisdiction: JurisdictionCode,
    /// Sector of the contracting parties.
    pub industry: IndustryCode,
    /// The contract text, as extracted by the caller.
    pub contract_text: String,
    lowercased: String,
}

impl AnalysisContext {
    /// Build a context from explicit codes.
    pub fn new(
        jurisdiction: JurisdictionCode,
        industry: IndustryCode,
        contract_text: String,
    ) -> Self {
        let lowercased = contract_text.to_lowercase();
        Self {
            jurisdiction,
            industry,
            contract_text,
            lowercased,
        }
    }

    /// Build a context, inferring any code the caller left unspecified.
    pub fn with_inference(
        jurisdiction: Option<JurisdictionCode>,
        industry: Option<IndustryCode>,
        contract_text: String,
    ) -> Self {
        let lowercased = contract_text.to_lowercase();
        let jurisdiction = jurisdiction.unwrap_or_else(|| infer_jurisdiction(&lowercased));
        let industry = industry.unwrap_or_else(|| infer_industry(&lowercased));
        Self {
            jurisdiction,
            industry,
            contract_text,
            lowercased,
        }
    }

    /// The contract text lowercased once, shared by every lexical check.
    pub fn text_lower(&self) -> &str {
        &self.lowercased
    }

    /// A bounded excerpt of the contract for prompts and previews.
    ///
    /// Truncation respects char boundaries, not grapheme clusters; the
    /// excerpt is context for a language model, not display text.
    pub fn excerpt(&self, max_chars: usize) -> &str {
        match self.contract_text.char_indices().nth(max_chars) {
            Some((idx, _)) => &self.contract_text[..idx],
            None => &self.contract_text,
        }
    }
}

/// Guess the governing jurisdiction from contract wording.
///
/// Only unambiguous state names are consulted; everything else defaults
/// to `US`.
fn infer_jurisdiction(text_lower: &str) -> JurisdictionCode {
    let code = if text_lower.contains("new york") {
        "US_NY"
    } else if text_lower.contains("california") {
        "US_CA"
    } else {
        "US"
    };
    JurisdictionCode::new(code).expect("inferred jurisdiction code is non-empty")
}

/// Guess the industry from contract wording: financial vocabulary maps to
/// `financial`, anything else to `general`.
fn infer_industry(text_lower: &str) -> IndustryCode {
    let code = if FINANCIAL_INDUSTRY_TERMS
        .iter()
        .any(|term| text_lower.contains(term))
    {
        "financial"
    } else {
        "general"
    };
    IndustryCode::new(code).expect("inferred industry code is non-empty")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(text: &str) -> AnalysisContext {
        AnalysisContext::with_inference(None, None, text.to_string())
    }

    #[test]
    fn test_explicit_codes_win() {
        let context = AnalysisContext::with_inference(
            Some(JurisdictionCode::new("US_CA").unwrap()),
            Some(IndustryCode::new("lending").unwrap()),
            "This loan agreement is governed by New York law.".to_string(),
        );
        assert_eq!(context.jurisdiction.as_str(), "US_CA");
        assert_eq!(context.industry.as_str(), "lending");
    }

    #[test]
    fn test_infer_new_york() {
        let context = ctx("This agreement is governed by the laws of New York.");
        assert_eq!(context.jurisdiction.as_str(), "US_NY");
    }

    #[test]
    fn test_infer_california() {
        let context = ctx("Venue shall lie in California.");
        assert_eq!(context.jurisdiction.as_str(), "US_CA");
    }

    #[test]
    fn test_infer_defaults() {
        let context = ctx("A simple consulting agreement.");
        assert_eq!(context.jurisdiction.as_str(), "US");
        assert_eq!(context.industry.as_str(), "general");
    }

    #[test]
    fn test_infer_financial_industry() {
        let context = ctx("The loan shall accrue interest monthly.");
        assert_eq!(context.industry.as_str(), "financial");
    }

    #[test]
    fn test_text_lower_cached() {
        let context = ctx("LOAN Agreement");
        assert_eq!(context.text_lower(), "loan agreement");
    }

    #[test]
    fn test_excerpt_bounds() {
        let context = ctx("abcdef");
        assert_eq!(context.excerpt(3), "abc");
        assert_eq!(context.excerpt(100), "abcdef");
    }

    #[test]
    fn test_excerpt_respects_char_boundaries() {
        let context = ctx("§§§§");
        assert_eq!(context.excerpt(2), "§§");
    }
}
