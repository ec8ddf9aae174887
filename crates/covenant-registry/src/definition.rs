//! # Regulation and Clause Definitions
//!
//! The immutable data model for catalog entries. A regulation is an
//! ordered sequence of clause requirements plus applicability tags;
//! a clause requirement names a contractual provision, its severity,
//! and the phrases a compliant contract is expected to cover.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use covenant_core::{IndustryCode, JurisdictionCode, RegulationId, RiskLevel};

/// A named contractual provision required by a regulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseRequirement {
    /// Clause name (e.g. "Financial Privacy Notice").
    pub name: String,
    /// Free-text description of what the clause covers.
    pub description: String,
    /// Severity of omitting this clause.
    pub risk_level: RiskLevel,
    /// Ordered requirement phrases the clause must address.
    pub requirements: Vec<String>,
    /// Statutory citation, when one exists.
    pub legal_citation: Option<String>,
}

/// A regulation with its ordered required clauses and applicability tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegulationDefinition {
    /// Registry identifier (e.g. `GLBA`).
    pub id: RegulationId,
    /// Ordered required clauses.
    pub clauses: Vec<ClauseRequirement>,
    /// Jurisdictions where this regulation applies. The `global` wildcard
    /// opts out of jurisdiction filtering.
    pub jurisdictions: BTreeSet<JurisdictionCode>,
    /// Industries this regulation applies to. The `all` wildcard opts out
    /// of industry filtering.
    pub industries: BTreeSet<IndustryCode>,
}

impl RegulationDefinition {
    /// Whether this regulation is compatible with the given jurisdiction.
    ///
    /// Compatible means the code is listed, or the regulation carries the
    /// `global` wildcard.
    pub fn applies_in_jurisdiction(&self, jurisdiction: &JurisdictionCode) -> bool {
        self.jurisdictions.contains(jurisdiction)
            || self.jurisdictions.iter().any(JurisdictionCode::is_wildcard)
    }

    /// Whether this regulation is compatible with the given industry.
    ///
    /// Compatible means the code is listed, or the regulation carries the
    /// `all` wildcard.
    pub fn applies_to_industry(&self, industry: &IndustryCode) -> bool {
        self.industries.contains(industry)
            || self.industries.iter().any(IndustryCode::is_wildcard)
    }

    /// Citations of every clause that carries one, in clause order.
    pub fn citations(&self) -> Vec<&str> {
        self.clauses
            .iter()
            .filter_map(|c| c.legal_citation.as_deref())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition(jurisdictions: &[&str], industries: &[&str]) -> RegulationDefinition {
        RegulationDefinition {
            id: RegulationId::new("TEST").unwrap(),
            clauses: vec![],
            jurisdictions: jurisdictions
                .iter()
                .map(|j| JurisdictionCode::new(*j).unwrap())
                .collect(),
            industries: industries
                .iter()
                .map(|i| IndustryCode::new(*i).unwrap())
                .collect(),
        }
    }

    #[test]
    fn test_jurisdiction_match() {
        let def = definition(&["US", "US_CA"], &["lending"]);
        assert!(def.applies_in_jurisdiction(&JurisdictionCode::new("US").unwrap()));
        assert!(!def.applies_in_jurisdiction(&JurisdictionCode::new("EU").unwrap()));
    }

    #[test]
    fn test_global_wildcard_matches_any_jurisdiction() {
        let def = definition(&["global"], &["lending"]);
        assert!(def.applies_in_jurisdiction(&JurisdictionCode::new("US_NY").unwrap()));
        assert!(def.applies_in_jurisdiction(&JurisdictionCode::new("EU").unwrap()));
    }

    #[test]
    fn test_industry_match() {
        let def = definition(&["US"], &["financial", "banking"]);
        assert!(def.applies_to_industry(&IndustryCode::new("banking").unwrap()));
        assert!(!def.applies_to_industry(&IndustryCode::new("retail").unwrap()));
    }

    #[test]
    fn test_all_wildcard_matches_any_industry() {
        let def = definition(&["US"], &["all"]);
        assert!(def.applies_to_industry(&IndustryCode::new("retail").unwrap()));
        assert!(def.applies_to_industry(&IndustryCode::new("general").unwrap()));
    }

    #[test]
    fn test_definition_serde_roundtrip() {
        let def = definition(&["US", "US_CA"], &["lending", "all"]);
        let json = serde_json::to_string(&def).unwrap();
        let parsed: RegulationDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(def, parsed);
    }

    #[test]
    fn test_citations_preserve_clause_order() {
        let mut def = definition(&["US"], &["all"]);
        def.clauses = vec![
            ClauseRequirement {
                name: "A".into(),
                description: String::new(),
                risk_level: RiskLevel::High,
                requirements: vec![],
                legal_citation: Some("15 U.S.C. § 1".into()),
            },
            ClauseRequirement {
                name: "B".into(),
                description: String::new(),
                risk_level: RiskLevel::Low,
                requirements: vec![],
                legal_citation: None,
            },
            ClauseRequirement {
                name: "C".into(),
                description: String::new(),
                risk_level: RiskLevel::Low,
                requirements: vec![],
                legal_citation: Some("16 CFR Part 2".into()),
            },
        ];
        assert_eq!(def.citations(), vec!["15 U.S.C. § 1", "16 CFR Part 2"]);
    }
}
