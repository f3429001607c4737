//! Erlang B: blocking probability of a loss system
//!
//! Evaluated with the forward recurrence
//!
//! ```text
//! B(0) = 1
//! B(n) = A·B(n-1) / (n + A·B(n-1))
//! ```
//!
//! which keeps every intermediate term in `[0, 1]` instead of going through
//! `A^N / N!`.

use tracing::trace;

use super::is_invalid_load;
use crate::utils::clamp_probability;

/// Probability that an arriving call finds all `servers` busy and is lost.
///
/// `servers` may be fractional; it is truncated to the number of recurrence
/// steps. With fewer than one server the recurrence never runs and the result
/// is `0.0`, not the textbook `B(0) = 1`.
///
/// Returns `0.0` for negative or non-finite inputs and when the recurrence
/// produces a non-finite term.
///
/// ```rust
/// use erlang_core::erlang_b;
///
/// assert_eq!(erlang_b(1.0, 1.0), 0.5);
/// assert_eq!(erlang_b(0.0, 5.0), 0.0);
/// assert_eq!(erlang_b(-1.0, 5.0), 0.0);
/// ```
pub fn erlang_b(servers: f64, intensity: f64) -> f64 {
    if is_invalid_load(servers, intensity) {
        return 0.0;
    }

    let max_iterate = servers as u64;
    let mut last = 1.0;
    let mut b = 0.0;

    for count in 1..=max_iterate {
        let offered = intensity * last;
        b = offered / (count as f64 + offered);
        if !b.is_finite() {
            trace!(servers, intensity, count, "non-finite Erlang B term");
            return 0.0;
        }
        last = b;
    }

    clamp_probability(b)
}
