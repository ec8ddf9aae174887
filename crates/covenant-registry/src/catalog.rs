//! # Builtin Catalog and Registry
//!
//! `RegulationRegistry` indexes the regulation definitions by identifier
//! and maintains the jurisdiction/industry default maps used to seed
//! applicability resolution.
//!
//! The builtin catalog covers the US commercial set: GLBA, FCRA, TILA,
//! EFTA, CCPA/CPRA, and the NYDFS cybersecurity regulation. The default
//! maps are intentionally broader than the per-regulation applicability
//! tags; the resolver's compatibility filter reconciles the two.

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

use covenant_core::{IndustryCode, JurisdictionCode, RegulationId, RiskLevel};

use crate::definition::{ClauseRequirement, RegulationDefinition};

/// Error raised by registry lookups.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The requested regulation id is not in the catalog.
    #[error("regulation not found in registry: {id}")]
    NotFound {
        /// The identifier that failed to resolve.
        id: RegulationId,
    },
}

/// Read-only catalog of regulations with default applicability maps.
///
/// Built once at startup and shared across analyses; nothing is mutated
/// after construction, so the registry is safely `Send + Sync`.
#[derive(Debug, Clone)]
pub struct RegulationRegistry {
    regulations: BTreeMap<RegulationId, RegulationDefinition>,
    by_jurisdiction: BTreeMap<JurisdictionCode, BTreeSet<RegulationId>>,
    by_industry: BTreeMap<IndustryCode, BTreeSet<RegulationId>>,
}

impl RegulationRegistry {
    /// All regulation identifiers in the catalog, in sorted order.
    pub fn list_regulations(&self) -> Vec<RegulationId> {
        self.regulations.keys().cloned().collect()
    }

    /// Look up a regulation definition by id.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] for ids outside the catalog.
    /// An explicitly requested but unknown regulation indicates caller or
    /// configuration error and must not be silently skipped.
    pub fn get(&self, id: &RegulationId) -> Result<&RegulationDefinition, RegistryError> {
        self.regulations.get(id).ok_or_else(|| RegistryError::NotFound {
            id: id.clone(),
        })
    }

    /// Whether the catalog contains the given id.
    pub fn contains(&self, id: &RegulationId) -> bool {
        self.regulations.contains_key(id)
    }

    /// Default regulation set for a jurisdiction, sorted.
    ///
    /// Unknown codes yield an empty set, not an error.
    pub fn regulations_for_jurisdiction(
        &self,
        jurisdiction: &JurisdictionCode,
    ) -> BTreeSet<RegulationId> {
        self.by_jurisdiction
            .get(jurisdiction)
            .cloned()
            .unwrap_or_default()
    }

    /// Default regulation set for an industry, sorted.
    ///
    /// Unknown codes yield an empty set, not an error.
    pub fn regulations_for_industry(&self, industry: &IndustryCode) -> BTreeSet<RegulationId> {
        self.by_industry.get(industry).cloned().unwrap_or_default()
    }

    /// Number of regulations in the catalog.
    pub fn len(&self) -> usize {
        self.regulations.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.regulations.is_empty()
    }

    /// Build the builtin US commercial catalog.
    pub fn builtin() -> Self {
        let regulations = [
            glba(),
            fcra(),
            tila(),
            efta(),
            ccpa_cpra(),
            ny_dfs(),
        ];

        let mut by_id = BTreeMap::new();
        for def in regulations {
            by_id.insert(def.id.clone(), def);
        }

        let by_jurisdiction = [
            ("US", vec!["GLBA", "FCRA", "TILA", "EFTA", "CCPA_CPRA"]),
            (
                "US_CA",
                vec!["GLBA", "FCRA", "TILA", "EFTA", "CCPA_CPRA", "NY_DFS"],
            ),
            (
                "US_NY",
                vec!["GLBA", "FCRA", "TILA", "EFTA", "CCPA_CPRA", "NY_DFS"],
            ),
            ("global", vec!["CCPA_CPRA"]),
        ]
        .into_iter()
        .map(|(code, ids)| (jurisdiction(code), ids.into_iter().map(rid).collect()))
        .collect();

        let by_industry = [
            ("financial", vec!["GLBA", "FCRA", "TILA", "EFTA", "NY_DFS"]),
            ("banking", vec!["GLBA", "FCRA", "TILA", "EFTA", "NY_DFS"]),
            ("lending", vec!["GLBA", "FCRA", "TILA", "EFTA"]),
            ("insurance", vec!["GLBA", "NY_DFS"]),
            ("auto_finance", vec!["GLBA", "FCRA", "TILA", "EFTA"]),
            ("general", vec!["CCPA_CPRA"]),
        ]
        .into_iter()
        .map(|(code, ids)| (industry(code), ids.into_iter().map(rid).collect()))
        .collect();

        Self {
            regulations: by_id,
            by_jurisdiction,
            by_industry,
        }
    }
}

// ─── Builtin data ────────────────────────────────────────────────────

/// Builtin identifiers are compile-time literals; construction cannot fail.
fn rid(id: &str) -> RegulationId {
    RegulationId::new(id).expect("builtin regulation id is non-empty")
}

fn jurisdiction(code: &str) -> JurisdictionCode {
    JurisdictionCode::new(code).expect("builtin jurisdiction code is non-empty")
}

fn industry(code: &str) -> IndustryCode {
    IndustryCode::new(code).expect("builtin industry code is non-empty")
}

fn clause(
    name: &str,
    description: &str,
    risk_level: RiskLevel,
    requirements: &[&str],
    legal_citation: &str,
) -> ClauseRequirement {
    ClauseRequirement {
        name: name.to_string(),
        description: description.to_string(),
        risk_level,
        requirements: requirements.iter().map(|r| r.to_string()).collect(),
        legal_citation: Some(legal_citation.to_string()),
    }
}

fn definition(
    id: &str,
    clauses: Vec<ClauseRequirement>,
    jurisdictions: &[&str],
    industries: &[&str],
) -> RegulationDefinition {
    RegulationDefinition {
        id: rid(id),
        clauses,
        jurisdictions: jurisdictions.iter().map(|j| jurisdiction(j)).collect(),
        industries: industries.iter().map(|i| industry(i)).collect(),
    }
}

fn glba() -> RegulationDefinition {
    definition(
        "GLBA",
        vec![
            clause(
                "Financial Privacy Notice",
                "Gramm-Leach-Bliley Act privacy requirements for financial institutions",
                RiskLevel::High,
                &[
                    "Privacy notice delivery",
                    "Opt-out mechanisms",
                    "Information sharing policies",
                    "Safeguards rule compliance",
                    "Annual privacy notices",
                ],
                "15 U.S.C. § 6801-6809",
            ),
            clause(
                "Data Safeguards Program",
                "Information security program for customer data protection",
                RiskLevel::High,
                &[
                    "Written security program",
                    "Employee training",
                    "Access controls",
                    "Data encryption",
                    "Incident response plan",
                ],
                "16 CFR Part 314",
            ),
        ],
        &["US"],
        &["financial", "banking", "lending", "insurance"],
    )
}

fn fcra() -> RegulationDefinition {
    definition(
        "FCRA",
        vec![clause(
            "Credit Reporting Authorization",
            "Fair Credit Reporting Act requirements for credit checks",
            RiskLevel::High,
            &[
                "Consumer authorization",
                "Permissible purpose certification",
                "Adverse action notices",
                "Dispute investigation procedures",
                "Accuracy requirements",
            ],
            "15 U.S.C. § 1681 et seq.",
        )],
        &["US"],
        &["financial", "employment", "lending", "housing"],
    )
}

fn tila() -> RegulationDefinition {
    definition(
        "TILA",
        vec![clause(
            "Truth in Lending Disclosures",
            "Regulation Z requirements for loan cost disclosures",
            RiskLevel::High,
            &[
                "APR disclosure",
                "Finance charge calculation",
                "Payment schedule",
                "Total payments disclosure",
                "Right of rescission",
            ],
            "15 U.S.C. § 1601 et seq.",
        )],
        &["US"],
        &["lending", "financial", "auto_finance", "mortgage"],
    )
}

fn efta() -> RegulationDefinition {
    definition(
        "EFTA",
        vec![clause(
            "Electronic Fund Transfer Authorization",
            "Regulation E requirements for electronic payments",
            RiskLevel::Medium,
            &[
                "EFT authorization",
                "Error resolution procedures",
                "Liability limitations",
                "Receipt requirements",
                "Periodic statements",
            ],
            "15 U.S.C. § 1693 et seq.",
        )],
        &["US"],
        &["financial", "banking", "lending", "payment_processing"],
    )
}

fn ccpa_cpra() -> RegulationDefinition {
    definition(
        "CCPA_CPRA",
        vec![clause(
            "California Consumer Privacy Rights",
            "California Consumer Privacy Act and Privacy Rights Act compliance",
            RiskLevel::High,
            &[
                "Right to know disclosures",
                "Right to delete procedures",
                "Right to opt-out of sales",
                "Non-discrimination policy",
                "Data processing agreements",
            ],
            "Cal. Civ. Code § 1798.100 et seq.",
        )],
        &["US_CA", "US"],
        &["all"],
    )
}

fn ny_dfs() -> RegulationDefinition {
    definition(
        "NY_DFS",
        vec![clause(
            "NYDFS Cybersecurity Requirements",
            "New York Department of Financial Services cybersecurity regulation",
            RiskLevel::High,
            &[
                "Cybersecurity program",
                "Chief Information Security Officer",
                "Penetration testing",
                "Audit trail systems",
                "Incident response plan",
            ],
            "23 NYCRR Part 500",
        )],
        &["US_NY", "US"],
        &["financial", "insurance", "banking"],
    )
}

// ─── Tests ───────────────────────────────────────────────────────────
