//! # Domain Identity Newtypes
//!
//! Newtype wrappers for the identifiers used across the Covenant stack.
//! These prevent accidental identifier confusion: you cannot pass an
//! `IndustryCode` where a `JurisdictionCode` is expected.
//!
//! `JurisdictionCode` and `IndustryCode` each reserve a wildcard value
//! (`global` and `all`) that regulation definitions use to opt out of
//! jurisdiction or industry filtering.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CovenantError;

/// Wildcard jurisdiction: the regulation applies everywhere.
pub const JURISDICTION_WILDCARD: &str = "global";

/// Wildcard industry: the regulation applies to every sector.
pub const INDUSTRY_WILDCARD: &str = "all";

/// Unique identifier for a single analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnalysisId(pub Uuid);

impl AnalysisId {
    /// Generate a new random analysis identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AnalysisId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AnalysisId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "analysis:{}", self.0)
    }
}

/// Identifier of a regulation in the registry (e.g. `GLBA`, `CCPA_CPRA`).
///
/// Ordered lexicographically; result sets across the stack are sorted by
/// this ordering for deterministic output.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RegulationId(String);

impl RegulationId {
    /// Construct a regulation identifier.
    ///
    /// # Errors
    ///
    /// Returns `CovenantError::InvalidIdentifier` if the value is empty or
    /// all whitespace.
    pub fn new(id: impl Into<String>) -> Result<Self, CovenantError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(CovenantError::InvalidIdentifier(
                "regulation id must not be empty".to_string(),
            ));
        }
        Ok(Self(id))
    }

    /// The string form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RegulationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Legal territory code governing which regulations can apply
/// (e.g. `US`, `US_CA`, `US_NY`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct JurisdictionCode(String);

impl JurisdictionCode {
    /// Construct a jurisdiction code.
    ///
    /// # Errors
    ///
    /// Returns `CovenantError::InvalidIdentifier` if the value is empty or
    /// all whitespace.
    pub fn new(code: impl Into<String>) -> Result<Self, CovenantError> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(CovenantError::InvalidIdentifier(
                "jurisdiction code must not be empty".to_string(),
            ));
        }
        Ok(Self(code))
    }

    /// The `global` wildcard jurisdiction.
    pub fn global() -> Self {
        Self(JURISDICTION_WILDCARD.to_string())
    }

    /// Whether this code is the `global` wildcard.
    pub fn is_wildcard(&self) -> bool {
        self.0 == JURISDICTION_WILDCARD
    }

    /// The string form of the code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JurisdictionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sector code used to narrow applicable regulations
/// (e.g. `financial`, `lending`, `general`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IndustryCode(String);

impl IndustryCode {
    /// Construct an industry code.
    ///
    /// # Errors
    ///
    /// Returns `CovenantError::InvalidIdentifier` if the value is empty or
    /// all whitespace.
    pub fn new(code: impl Into<String>) -> Result<Self, CovenantError> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(CovenantError::InvalidIdentifier(
                "industry code must not be empty".to_string(),
            ));
        }
        Ok(Self(code))
    }

    /// The `all` wildcard industry.
    pub fn all() -> Self {
        Self(INDUSTRY_WILDCARD.to_string())
    }

    /// Whether this code is the `all` wildcard.
    pub fn is_wildcard(&self) -> bool {
        self.0 == INDUSTRY_WILDCARD
    }

    /// The string form of the code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for IndustryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
