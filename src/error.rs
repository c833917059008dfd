use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by clustering configuration and input assembly.
#[derive(Clone, Debug, PartialEq, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("epsilon must be non-negative, got {got}")]
    InvalidEpsilon { got: f64 },

    #[error("min_points must be at least 1, got {got}")]
    InvalidMinPoints { got: usize },

    #[error("points must have at least one dimension")]
    ZeroDimension,

    #[error("row {index} has {found} values, expected {expected}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::InvalidEpsilon { got: -0.5 };
        assert_eq!(err.to_string(), "epsilon must be non-negative, got -0.5");

        let err = Error::InvalidMinPoints { got: 0 };
        assert_eq!(err.to_string(), "min_points must be at least 1, got 0");

        let err = Error::DimensionMismatch {
            index: 3,
            expected: 2,
            found: 5,
        };
        assert_eq!(err.to_string(), "row 3 has 5 values, expected 2");
    }
}
