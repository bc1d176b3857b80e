//! Scene error types

use thiserror::Error;

/// Errors raised while building or animating a scene
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    /// A constructor parameter was out of range (bad count, bounds, increment...)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// An entity or scene invariant does not hold
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SceneError::InvalidArgument("bounds must be positive".to_string());
        assert_eq!(err.to_string(), "invalid argument: bounds must be positive");

        let err = SceneError::InvariantViolation("seed 1.5 outside [0, 1)".to_string());
        assert!(err.to_string().starts_with("invariant violation"));
    }
}
