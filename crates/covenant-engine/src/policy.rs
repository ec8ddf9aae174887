//! # Detection Policy
//!
//! Every tunable constant of the detection and scoring heuristics in one
//! place. The weights and thresholds are policy, not law: operators may
//! override them from a YAML file without touching the algorithms.
//!
//! The defaults reproduce the reference behavior exactly; changing them
//! changes scoring compatibility with previously stored reports.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error loading a detection policy file.
#[derive(Error, Debug)]
pub enum PolicyError {
    /// The policy file could not be read.
    #[error("cannot read policy file: {0}")]
    Io(#[from] std::io::Error),

    /// The policy file is not valid YAML.
    #[error("invalid policy file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Tunable constants for clause detection and gap scoring.
///
/// All fields default to the reference values, so a partial YAML override
/// file only needs to name the fields it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionPolicy {
    /// Weight of each clause-name keyword found in the text.
    pub keyword_weight: f64,
    /// Weight of each requirement phrase with a word found in the text.
    pub requirement_weight: f64,
    /// Weight of each semantic concept phrase found in the text.
    pub concept_weight: f64,
    /// A clause counts as present when its combined score reaches this.
    pub presence_threshold: f64,
    /// At most this many keywords are extracted from a clause name.
    pub max_keywords: usize,
    /// At most this many requirement phrases are consulted per clause.
    pub max_requirement_phrases: usize,
    /// Implicit baseline of contextual clauses added to the score
    /// denominator, smoothing the penalty of a single miss.
    pub baseline_clause_count: usize,
    /// Fraction of the score lost when every detected clause is missing.
    pub missing_penalty: f64,
    /// No regulation scores below this from missing-clause count alone.
    pub score_floor: f64,
    /// Issue list length in the final report.
    pub max_issues: usize,
    /// Recommendation list length in the final report.
    pub max_recommendations: usize,
    /// How many missing clauses get an individual recommendation.
    pub max_clause_recommendations: usize,
    /// Contract excerpt length handed to the remediation generator.
    pub excerpt_chars: usize,
}

impl Default for DetectionPolicy {
    fn default() -> Self {
        Self {
            keyword_weight: 0.5,
            requirement_weight: 0.3,
            concept_weight: 0.2,
            presence_threshold: 1.0,
            max_keywords: 5,
            max_requirement_phrases: 3,
            baseline_clause_count: 3,
            missing_penalty: 0.8,
            score_floor: 0.1,
            max_issues: 5,
            max_recommendations: 5,
            max_clause_recommendations: 3,
            excerpt_chars: 500,
        }
    }
}

impl DetectionPolicy {
    /// Load a policy from a YAML file, filling unnamed fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError`] if the file cannot be read or parsed.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, PolicyError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }
}
