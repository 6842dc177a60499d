//! Error types for trajectory computation and range aggregation.

use thiserror::Error;

/// Result type for core operations
pub type CollatzResult<T> = Result<T, CollatzError>;

/// Errors raised by the kernel and the aggregators.
///
/// Input validation normally happens at the HTTP boundary, but the core still
/// refuses values it cannot iterate so that library callers get a typed error
/// instead of a panic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollatzError {
    /// Trajectories are only defined for starting values `>= 1`.
    #[error("starting number must be positive, got {value}")]
    NonPositive { value: u64 },

    /// Range bounds must be positive with `start <= end`.
    #[error("invalid range [{start}, {end}]: bounds must be positive with start <= end")]
    InvalidRange { start: u64, end: u64 },

    /// The odd step `3n + 1` left the `u128` value domain.
    #[error("trajectory of {start} overflows u128 at value {at}")]
    Overflow { start: u64, at: u128 },
}

impl CollatzError {
    /// Whether the error stems from caller input rather than the computation itself.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CollatzError::NonPositive { .. } | CollatzError::InvalidRange { .. }
        )
    }
}
