//! Closed-form Erlang formulas
//!
//! Both formulas share the same input policy: negative or non-finite server
//! counts and traffic intensities yield `0.0`, and every result is clamped into
//! `[0, 1]` before it is returned.

pub mod erlang_b;
pub mod erlang_c;

pub use erlang_b::erlang_b;
pub use erlang_c::erlang_c;

/// Returns `true` when a (servers, intensity) pair is outside the formulas' domain
#[inline]
pub(crate) fn is_invalid_load(servers: f64, intensity: f64) -> bool {
    !servers.is_finite() || !intensity.is_finite() || servers < 0.0 || intensity < 0.0
}
