//! Error types for score construction, arithmetic and parsing

use thiserror::Error;

/// Error raised by score operations.
///
/// All variants describe a programmer or input error; none of them is transient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// Two scores of a different shape were combined or compared.
    #[error("Incompatible score definitions: {left} vs {right}")]
    IncompatibleScoreDefinition { left: String, right: String },

    /// Text did not match the grammar of the target score definition.
    #[error("Invalid {score_type} format '{text}': {reason}")]
    InvalidScoreFormat {
        score_type: &'static str,
        text: String,
        reason: String,
    },

    /// A score was built with a positive init score or the wrong number of levels.
    #[error("Invalid score construction: {0}")]
    InvalidScoreConstruction(String),
}

impl ScoreError {
    pub(crate) fn incompatible(left: impl Into<String>, right: impl Into<String>) -> Self {
        ScoreError::IncompatibleScoreDefinition {
            left: left.into(),
            right: right.into(),
        }
    }

    pub(crate) fn format(score_type: &'static str, text: &str, reason: impl Into<String>) -> Self {
        ScoreError::InvalidScoreFormat {
            score_type,
            text: text.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for score operations
pub type ScoreResult<T> = std::result::Result<T, ScoreError>;
