//! Error types.
//!
//! Configuration errors are fatal and reported before any run starts.
//! Persistence errors are recoverable: the experiment harness logs them and
//! moves on to the next iteration budget.

use thiserror::Error;

/// Invalid experiment or algorithm configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The instance would have no cities.
    #[error("number of cities must be positive")]
    NoCities,

    /// The iteration budget sweep is empty.
    #[error("iteration budget set must not be empty")]
    NoIterationBudgets,

    /// The number of trials per budget is zero.
    #[error("test run count must be positive")]
    NoTestRuns,

    /// A strategy parameter is out of range.
    #[error("invalid {name}: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Failure while persisting aggregate results.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message() {
        let err = ConfigError::invalid("cooling_rate", "must be in (0, 1), got 1.5");
        assert_eq!(
            err.to_string(),
            "invalid cooling_rate: must be in (0, 1), got 1.5"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: PersistenceError = io.into();
        assert!(matches!(err, PersistenceError::Io(_)));
    }
}
