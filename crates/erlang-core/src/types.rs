//! Value types for staffing calculations
//!
//! All types are plain values: they carry no state between calls.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::SECONDS_PER_HOUR;
use crate::error::Result;
use crate::utils::validation::{validate_non_negative, validate_positive, validate_probability};

/// Inputs to a staffing search
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StaffingParameters {
    /// Fraction of calls to answer within `service_time_secs` (e.g. `0.8`)
    pub service_level_target: f64,
    /// Target answer time in seconds
    pub service_time_secs: f64,
    /// Calls offered in one hour
    pub calls_per_hour: f64,
    /// Average handle time in seconds, including after-call work
    pub average_handle_time_secs: f64,
}

impl StaffingParameters {
    /// Create a new set of staffing parameters
    pub fn new(
        service_level_target: f64,
        service_time_secs: f64,
        calls_per_hour: f64,
        average_handle_time_secs: f64,
    ) -> Self {
        Self {
            service_level_target,
            service_time_secs,
            calls_per_hour,
            average_handle_time_secs,
        }
    }

    /// Offered load in Erlangs
    pub fn traffic_intensity(&self) -> f64 {
        crate::metrics::traffic_intensity(self.calls_per_hour, self.average_handle_time_secs)
    }

    /// Offered load rounded to whole call-hours, the search's starting point
    pub(crate) fn erlang_hours(&self) -> f64 {
        (self.calls_per_hour * self.average_handle_time_secs / SECONDS_PER_HOUR).round_ties_even()
    }

    /// Validate the parameters for the strict APIs
    ///
    /// # Errors
    ///
    /// Returns [`ErlangError::InvalidParameter`](crate::ErlangError::InvalidParameter)
    /// when a value is negative or not finite, or when the handle time is zero.
    pub fn validate(&self) -> Result<()> {
        validate_probability("service_level_target", self.service_level_target)?;
        validate_non_negative("service_time_secs", self.service_time_secs)?;
        validate_non_negative("calls_per_hour", self.calls_per_hour)?;
        validate_positive("average_handle_time_secs", self.average_handle_time_secs)?;
        Ok(())
    }
}

/// How a staffing search ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    /// The achieved service level reached the target
    TargetMet,
    /// The service level came within the accuracy threshold of 1.0
    AccuracyLimit,
    /// The iteration ceiling was exhausted first
    IterationLimit,
    /// The offered load was not a usable number, no candidate was evaluated
    InvalidLoad,
}

impl SearchStatus {
    /// Whether the returned agent count satisfies the search
    pub fn is_converged(&self) -> bool {
        matches!(self, Self::TargetMet | Self::AccuracyLimit)
    }
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TargetMet => write!(f, "target met"),
            Self::AccuracyLimit => write!(f, "accuracy limit"),
            Self::IterationLimit => write!(f, "iteration limit"),
            Self::InvalidLoad => write!(f, "invalid load"),
        }
    }
}

/// Result of a staffing search
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StaffingOutcome {
    /// Agent count the search ended on
    pub agents: u32,
    /// Service level of the last evaluated candidate (0 when none was evaluated)
    pub service_level: f64,
    /// Offered load in Erlangs
    pub traffic_intensity: f64,
    /// `traffic_intensity / agents`
    pub utilization: f64,
    /// Number of candidates whose service level was evaluated
    pub candidates_evaluated: u32,
    /// Why the search stopped
    pub status: SearchStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traffic_intensity() {
        let params = StaffingParameters::new(0.8, 20.0, 100.0, 180.0);
        assert!((params.traffic_intensity() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_erlang_hours_rounds_half_to_even() {
        // 90 calls * 100s = 2.5 call-hours
        assert_eq!(StaffingParameters::new(0.8, 20.0, 90.0, 100.0).erlang_hours(), 2.0);
        // 126 calls * 100s = 3.5 call-hours
        assert_eq!(StaffingParameters::new(0.8, 20.0, 126.0, 100.0).erlang_hours(), 4.0);
    }

    #[test]
    fn test_validate() {
        assert!(StaffingParameters::new(0.9, 240.0, 1325.0, 630.0).validate().is_ok());
        assert!(StaffingParameters::new(1.5, 240.0, 1325.0, 630.0).validate().is_ok());
        assert!(StaffingParameters::new(0.9, -1.0, 1325.0, 630.0).validate().is_err());
        assert!(StaffingParameters::new(0.9, 240.0, f64::NAN, 630.0).validate().is_err());
        assert!(StaffingParameters::new(0.9, 240.0, 1325.0, 0.0).validate().is_err());
    }

    #[test]
    fn test_status_convergence() {
        assert!(SearchStatus::TargetMet.is_converged());
        assert!(SearchStatus::AccuracyLimit.is_converged());
        assert!(!SearchStatus::IterationLimit.is_converged());
        assert!(!SearchStatus::InvalidLoad.is_converged());
        assert_eq!(SearchStatus::IterationLimit.to_string(), "iteration limit");
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&SearchStatus::TargetMet).unwrap();
        assert_eq!(json, "\"target_met\"");

        let params: StaffingParameters = serde_json::from_str(
            r#"{"service_level_target":0.9,"service_time_secs":240,"calls_per_hour":1325,"average_handle_time_secs":630}"#,
        )
        .unwrap();
        assert_eq!(params, StaffingParameters::new(0.9, 240.0, 1325.0, 630.0));
    }
}
