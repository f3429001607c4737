//! Utility functions shared by the formulas and the staffing search

pub mod validation;

/// Clamp a value into `[min, max]`.
///
/// NaN collapses to `min` so a probability never escapes its interval.
#[inline]
pub fn min_max(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        return min;
    }
    value.max(min).min(max)
}

/// Clamp a value into the probability interval `[0, 1]`
#[inline]
pub fn clamp_probability(value: f64) -> f64 {
    min_max(value, 0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_max() {
        assert_eq!(min_max(0.5, 0.0, 1.0), 0.5);
        assert_eq!(min_max(-0.5, 0.0, 1.0), 0.0);
        assert_eq!(min_max(1.6, 0.0, 1.0), 1.0);
        assert_eq!(min_max(f64::NAN, 0.0, 1.0), 0.0);
    }

    #[test]
    fn test_clamp_probability_infinities() {
        assert_eq!(clamp_probability(f64::INFINITY), 1.0);
        assert_eq!(clamp_probability(f64::NEG_INFINITY), 0.0);
    }
}
