//! Error types for the Flower Pollination optimizer.
//!
//! Every error is fatal to a run: nothing is retried and no partial result
//! is recovered. Callers wanting resilience wrap the whole `run` call.

use thiserror::Error;

/// Failure reported by an objective function.
///
/// The optimizer never inspects or retries it, it is handed back to the
/// caller inside [`FpaError::Objective`].
#[derive(Debug, Error)]
#[error("objective evaluation failed: {message}")]
pub struct ObjectiveError {
    message: String,
}

impl ObjectiveError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors that can occur while building or running an optimizer.
#[derive(Debug, Error)]
pub enum FpaError {
    /// A recognized hyperparameter has a malformed value.
    #[error("invalid hyperparameter `{key}`: {reason}")]
    Configuration {
        /// Name of the offending option
        key: String,
        /// Human readable cause
        reason: String,
    },

    /// A position does not have one component per bound pair.
    #[error("dimension mismatch: expected {expected} variables, got {got}")]
    DimensionMismatch {
        /// Number of bound pairs
        expected: usize,
        /// Length actually found
        got: usize,
    },

    /// A lower bound exceeds its corresponding upper bound.
    #[error("invalid bounds at index {index}: lower ({lower}) > upper ({upper})")]
    InvalidBounds {
        index: usize,
        lower: f64,
        upper: f64,
    },

    /// A space was built without agents.
    #[error("space must hold at least one agent")]
    EmptyPopulation,

    /// The population cannot feed the update rule.
    #[error("population size ({got}) must be >= {required}")]
    PopulationTooSmall { required: usize, got: usize },

    /// The objective function failed for some position.
    #[error(transparent)]
    Objective(#[from] ObjectiveError),

    /// Levy tail index outside (0, 2].
    #[error("degenerate Levy distribution: beta = {beta} (must be in (0, 2])")]
    DegenerateDistribution { beta: f64 },

    /// `beta` is valid but so close to 0 that the Mantegna scale is not finite.
    #[error("Levy scale overflows for beta = {beta}; use a larger tail index")]
    LevyScaleOverflow { beta: f64 },

    /// `run` was called before a successful `build`.
    #[error("optimizer {algorithm} has not been built")]
    NotBuilt { algorithm: String },

    /// Writing a run trace failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing a run trace failed.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

/// A specialized `Result` type for optimizer operations.
pub type Result<T> = std::result::Result<T, FpaError>;

impl FpaError {
    pub(crate) fn configuration(key: &str, reason: impl Into<String>) -> Self {
        FpaError::Configuration { key: key.to_string(), reason: reason.into() }
    }

    /// Returns `true` for errors caused by the optimizer setup rather than the run.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            FpaError::Configuration { .. }
                | FpaError::DegenerateDistribution { .. }
                | FpaError::LevyScaleOverflow { .. }
                | FpaError::NotBuilt { .. }
        )
    }

    /// Returns `true` if positions and bounds disagree in shape.
    pub fn is_dimension_error(&self) -> bool {
        matches!(self, FpaError::DimensionMismatch { .. })
    }

    /// Returns `true` if the space itself is unusable.
    pub fn is_space_error(&self) -> bool {
        matches!(
            self,
            FpaError::InvalidBounds { .. }
                | FpaError::EmptyPopulation
                | FpaError::PopulationTooSmall { .. }
        )
    }
}
