//! Error handling for the Erlang library
//!
//! The three core formulas (`erlang_b`, `erlang_c`, `fractional_agents`) never
//! return errors: invalid input and arithmetic faults degrade to a sentinel value.
//! The types in this module back the strict APIs layered on top of them
//! ([`StaffingSearch::required_agents`](crate::StaffingSearch::required_agents),
//! [`StaffingParameters::validate`](crate::StaffingParameters::validate) and
//! [`SearchConfig::validate`](crate::SearchConfig::validate)).

#![allow(missing_docs)]

use std::fmt;
use thiserror::Error;

/// Result type alias for Erlang operations
pub type Result<T> = std::result::Result<T, ErlangError>;

/// Error type for the strict staffing APIs
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErlangError {
    /// A numeric input is outside its domain
    #[error("Invalid parameter {parameter}={value}: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Invalid search configuration
    #[error("Invalid search configuration: {details}")]
    InvalidConfig { details: String },

    /// The iteration ceiling was exhausted before the target service level was met
    #[error("Service level target {target} unreachable: reached {achieved:.6} with {agents} agents")]
    TargetUnreachable {
        target: f64,
        achieved: f64,
        agents: u32,
    },
}

impl ErlangError {
    /// Create a new invalid parameter error
    pub fn invalid_parameter(parameter: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            parameter,
            value,
            reason,
        }
    }

    /// Create a new invalid configuration error
    pub fn invalid_config(details: impl Into<String>) -> Self {
        Self::InvalidConfig {
            details: details.into(),
        }
    }

    /// Get the error category
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidParameter { .. } => ErrorCategory::Input,
            Self::InvalidConfig { .. } => ErrorCategory::Configuration,
            Self::TargetUnreachable { .. } => ErrorCategory::Convergence,
        }
    }
}

/// Error category for grouping related errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Caller supplied parameters outside their domain
    Input,
    /// Search configuration errors
    Configuration,
    /// The staffing search did not converge
    Convergence,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Configuration => write!(f, "Configuration"),
            Self::Convergence => write!(f, "Convergence"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = ErlangError::invalid_config("test message");
        assert!(matches!(err, ErlangError::InvalidConfig { .. }));
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(
            ErlangError::invalid_parameter("calls_per_hour", -1.0, "must be non-negative").category(),
            ErrorCategory::Input
        );
        assert_eq!(
            ErlangError::TargetUnreachable {
                target: 0.9,
                achieved: 0.5,
                agents: 10
            }
            .category(),
            ErrorCategory::Convergence
        );
    }

    #[test]
    fn test_error_display() {
        let err = ErlangError::invalid_parameter("average_handle_time_secs", 0.0, "must be positive");
        let display = format!("{}", err);
        assert!(display.contains("average_handle_time_secs=0"));
        assert!(display.contains("must be positive"));

        let err = ErlangError::TargetUnreachable {
            target: 0.95,
            achieved: 0.5,
            agents: 12,
        };
        let display = err.to_string();
        assert!(display.contains("0.95"));
        assert!(display.contains("12 agents"));
    }
}
