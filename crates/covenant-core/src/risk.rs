//! # Risk Tiers
//!
//! Defines `RiskLevel`, the coarse severity tier attached to clause
//! requirements and per-regulation findings. This is the one definition
//! used across the entire stack; every `match` on `RiskLevel` must be
//! exhaustive, so adding a tier forces every consumer to handle it.
//!
//! The `Ord` derivation respects variant declaration order
//! (`Low < Medium < High`), which makes "highest risk wins" aggregation a
//! plain `max` instead of hand-rolled comparison logic.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CovenantError;

/// Severity tier for a clause requirement or a regulation's findings.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Gaps at this tier are advisory.
    Low,
    /// Gaps at this tier warrant review before execution.
    Medium,
    /// Gaps at this tier expose the parties to regulatory action.
    High,
}

impl RiskLevel {
    /// Returns the snake_case string identifier for this tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Fold an iterator of risk levels into the highest one present.
    ///
    /// An empty iterator yields `Low`: no findings is no evidence of risk.
    pub fn highest(levels: impl IntoIterator<Item = RiskLevel>) -> RiskLevel {
        levels.into_iter().max().unwrap_or(RiskLevel::Low)
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = CovenantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(CovenantError::UnknownValue(format!(
                "unknown risk level: {other:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_low_to_high() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
    }

    #[test]
    fn test_highest_of_mixed() {
        let levels = [RiskLevel::Medium, RiskLevel::Low, RiskLevel::High];
        assert_eq!(RiskLevel::highest(levels), RiskLevel::High);
    }

    #[test]
    fn test_highest_of_empty_is_low() {
        assert_eq!(RiskLevel::highest([]), RiskLevel::Low);
    }

    #[test]
    fn test_as_str_roundtrip() {
        for level in [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High] {
            let parsed: RiskLevel = level.as_str().parse().unwrap();
            assert_eq!(level, parsed);
        }
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("critical".parse::<RiskLevel>().is_err());
        assert!("HIGH".parse::<RiskLevel>().is_err()); // case-sensitive
        assert!("".parse::<RiskLevel>().is_err());
    }

    #[test]
    fn test_serde_format_matches_as_str() {
        for level in [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High] {
            let json = serde_json::to_string(&level).unwrap();
            assert_eq!(json, format!("\"{}\"", level.as_str()));
        }
    }
}
