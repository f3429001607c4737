//! Staffing search configuration

use serde::{Deserialize, Serialize};

use crate::error::{ErlangError, Result};

/// Seconds in one hour, used to turn handle times into hourly service rates
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Default numerical accuracy threshold for the staffing search
///
/// A candidate whose service level exceeds `1 - DEFAULT_MAX_ACCURACY` ends the
/// search even when the target is not reached, so targets of exactly `1.0`
/// terminate.
pub const DEFAULT_MAX_ACCURACY: f64 = 0.00001;

/// Default iteration ceiling, as a multiple of the bootstrapped agent count
pub const DEFAULT_ITERATION_MULTIPLIER: u32 = 100;

/// Configuration for [`StaffingSearch`](crate::StaffingSearch)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Accuracy threshold below 1.0 at which the search stops
    pub max_accuracy: f64,
    /// The search evaluates at most `bootstrap_agents * iteration_multiplier` candidates
    pub iteration_multiplier: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_accuracy: DEFAULT_MAX_ACCURACY,
            iteration_multiplier: DEFAULT_ITERATION_MULTIPLIER,
        }
    }
}

impl SearchConfig {
    /// Create a new search configuration
    pub fn new(max_accuracy: f64, iteration_multiplier: u32) -> Self {
        Self {
            max_accuracy,
            iteration_multiplier,
        }
    }

    /// Set the accuracy threshold
    pub fn with_max_accuracy(mut self, max_accuracy: f64) -> Self {
        self.max_accuracy = max_accuracy;
        self
    }

    /// Set the iteration ceiling multiplier
    pub fn with_iteration_multiplier(mut self, iteration_multiplier: u32) -> Self {
        self.iteration_multiplier = iteration_multiplier;
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the accuracy threshold is not in `[0, 1)` or the
    /// iteration multiplier is zero.
    pub fn validate(&self) -> Result<()> {
        if !self.max_accuracy.is_finite() || !(0.0..1.0).contains(&self.max_accuracy) {
            return Err(ErlangError::invalid_config(format!(
                "max_accuracy must be in [0, 1), got {}",
                self.max_accuracy
            )));
        }

        if self.iteration_multiplier == 0 {
            return Err(ErlangError::invalid_config(
                "iteration_multiplier must be at least 1",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.max_accuracy, 0.00001);
        assert_eq!(config.iteration_multiplier, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = SearchConfig::default()
            .with_max_accuracy(0.001)
            .with_iteration_multiplier(10);
        assert_eq!(config, SearchConfig::new(0.001, 10));
    }

    #[test]
    fn test_validation() {
        assert!(SearchConfig::default().with_max_accuracy(1.0).validate().is_err());
        assert!(SearchConfig::default().with_max_accuracy(-0.1).validate().is_err());
        assert!(SearchConfig::default().with_max_accuracy(f64::NAN).validate().is_err());
        assert!(SearchConfig::default().with_iteration_multiplier(0).validate().is_err());
        assert!(SearchConfig::default().with_max_accuracy(0.0).validate().is_ok());
    }

    #[test]
    fn test_partial_deserialize_uses_defaults() {
        let config: SearchConfig = serde_json::from_str(r#"{"iteration_multiplier": 5}"#).unwrap();
        assert_eq!(config.iteration_multiplier, 5);
        assert_eq!(config.max_accuracy, DEFAULT_MAX_ACCURACY);
    }
}
