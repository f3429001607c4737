//! Erlang C: probability that a call waits in a delay system
//!
//! Derived from Erlang B through
//!
//! ```text
//! C = B / (ρ·B + (1 - ρ)),   ρ = A / N
//! ```
//!
//! assuming an infinite queue.

use tracing::trace;

use super::{erlang_b, is_invalid_load};
use crate::utils::clamp_probability;

/// Probability that an arriving call is queued with `servers` agents
/// under an offered load of `intensity` Erlangs.
///
/// Returns `0.0` for negative or non-finite inputs, for zero servers, and when
/// the conversion from Erlang B has a zero denominator or a non-finite result.
/// Overloaded systems (`intensity >= servers`) are clamped, so
/// `erlang_c(n, n) == 1.0`.
///
/// ```rust
/// use erlang_core::erlang_c;
///
/// let c = erlang_c(10.0, 5.0);
/// assert!((c - 0.0361).abs() < 1e-4);
/// assert_eq!(erlang_c(0.0, 5.0), 0.0);
/// ```
pub fn erlang_c(servers: f64, intensity: f64) -> f64 {
    if is_invalid_load(servers, intensity) {
        return 0.0;
    }

    if servers == 0.0 {
        return 0.0;
    }

    let b = erlang_b(servers, intensity);
    let rho = intensity / servers;
    let denominator = rho * b + (1.0 - rho);

    if denominator == 0.0 {
        trace!(servers, intensity, "zero Erlang C denominator");
        return 0.0;
    }

    let c = b / denominator;
    if !c.is_finite() {
        return 0.0;
    }

    clamp_probability(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-12,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_known_values() {
        assert_close(erlang_c(10.0, 5.0), 0.036_105_359_158_320_2);
        assert_close(erlang_c(3.0, 2.0), 0.444_444_444_444_444_5);
        assert_close(erlang_c(20.0, 15.0), 0.160_429_387_416_923_6);
    }

    #[test]
    fn test_single_server_equals_utilization() {
        // M/M/1: probability of waiting is ρ
        assert_close(erlang_c(1.0, 0.25), 0.25);
        assert_close(erlang_c(1.0, 0.8), 0.8);
    }

    #[test]
    fn test_zero_servers() {
        assert_eq!(erlang_c(0.0, 5.0), 0.0);
        assert_eq!(erlang_c(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_zero_denominator() {
        // Fewer than one server leaves B at 0, so ρ == 1 zeroes the denominator
        assert_eq!(erlang_c(0.5, 0.5), 0.0);
    }

    #[test]
    fn test_overloaded_is_clamped() {
        assert_eq!(erlang_c(5.0, 5.0), 1.0);
        assert_eq!(erlang_c(4.0, 5.0), 1.0);
    }

    #[test]
    fn test_zero_intensity() {
        assert_eq!(erlang_c(5.0, 0.0), 0.0);
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(erlang_c(-3.0, 2.0), 0.0);
        assert_eq!(erlang_c(3.0, -2.0), 0.0);
        assert_eq!(erlang_c(f64::INFINITY, 2.0), 0.0);
    }

    #[test]
    fn test_wait_exceeds_blocking() {
        for servers in 1..30 {
            let n = f64::from(servers);
            let a = n * 0.7;
            assert!(erlang_c(n, a) >= erlang_b(n, a));
        }
    }
}
