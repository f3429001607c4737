//! Input validation for the strict staffing APIs

use crate::error::{ErlangError, Result};

/// Validate that a parameter is finite and non-negative
pub fn validate_non_negative(parameter: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(ErlangError::invalid_parameter(parameter, value, "must be finite"));
    }

    if value < 0.0 {
        return Err(ErlangError::invalid_parameter(
            parameter,
            value,
            "must be non-negative",
        ));
    }

    Ok(())
}

/// Validate that a parameter is finite and strictly positive
pub fn validate_positive(parameter: &'static str, value: f64) -> Result<()> {
    validate_non_negative(parameter, value)?;

    if value == 0.0 {
        return Err(ErlangError::invalid_parameter(parameter, value, "must be positive"));
    }

    Ok(())
}

/// Validate a service level target
///
/// Targets above 1 are accepted since the search caps them.
pub fn validate_probability(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_nan() {
        return Err(ErlangError::invalid_parameter(parameter, value, "must be a number"));
    }

    if value < 0.0 {
        return Err(ErlangError::invalid_parameter(
            parameter,
            value,
            "must be non-negative",
        ));
    }

    Ok(())
}
