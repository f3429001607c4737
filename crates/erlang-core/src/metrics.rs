//! Traffic and service metrics derived from the Erlang C model
//!
//! These are the figures a workforce planning tool reports next to a staffing
//! requirement. [`StaffingReport`] bundles them for a single agent count.

use serde::{Deserialize, Serialize};

use crate::config::SECONDS_PER_HOUR;
use crate::formulas::erlang_c;
use crate::types::StaffingParameters;
use crate::utils::clamp_probability;

/// Offered load in Erlangs for an hourly call volume and handle time
///
/// ```rust
/// use erlang_core::metrics::traffic_intensity;
///
/// assert!((traffic_intensity(100.0, 180.0) - 5.0).abs() < 1e-12);
/// ```
pub fn traffic_intensity(calls_per_hour: f64, average_handle_time_secs: f64) -> f64 {
    let service_rate = SECONDS_PER_HOUR / average_handle_time_secs;
    calls_per_hour / service_rate
}

/// Offered load per agent; `0.0` when there are no agents
pub fn utilization(intensity: f64, agents: f64) -> f64 {
    if agents <= 0.0 {
        return 0.0;
    }
    intensity / agents
}

/// Service level exactly as the staffing search computes it, without the
/// utilization guard. Only floored at zero.
///
/// No queueing means every call is answered in time, whatever the decay term.
/// A NaN exponent (zero service time over zero handle time) is a fault and
/// yields `0.0`.
pub(crate) fn queued_service_level(
    agents: f64,
    intensity: f64,
    service_time_secs: f64,
    average_handle_time_secs: f64,
) -> f64 {
    let c = erlang_c(agents, intensity);
    if c == 0.0 {
        return 1.0;
    }

    let exponent = (intensity - agents) * service_time_secs / average_handle_time_secs;
    if exponent.is_nan() {
        return 0.0;
    }

    (1.0 - c * exponent.exp()).max(0.0)
}

/// Fraction of calls answered within `service_time_secs` with `agents` agents
///
/// Returns `0.0` when the system is not stable (utilization `>= 1`) or has no agents.
pub fn service_level(
    agents: f64,
    intensity: f64,
    service_time_secs: f64,
    average_handle_time_secs: f64,
) -> f64 {
    if agents <= 0.0 || utilization(intensity, agents) >= 1.0 {
        return 0.0;
    }
    clamp_probability(queued_service_level(
        agents,
        intensity,
        service_time_secs,
        average_handle_time_secs,
    ))
}

/// Average speed of answer in seconds
///
/// Returns `f64::INFINITY` when the queue grows without bound.
pub fn average_speed_of_answer(agents: f64, intensity: f64, average_handle_time_secs: f64) -> f64 {
    if agents <= intensity {
        return f64::INFINITY;
    }
    erlang_c(agents, intensity) * average_handle_time_secs / (agents - intensity)
}

/// Probability a call is answered without queueing
pub fn immediate_answer(agents: f64, intensity: f64) -> f64 {
    1.0 - erlang_c(agents, intensity)
}

/// Service metrics for one agent count
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StaffingReport {
    /// Agent count being evaluated
    pub agents: u32,
    /// Offered load in Erlangs
    pub traffic_intensity: f64,
    /// Offered load per agent
    pub utilization: f64,
    /// Erlang C probability of queueing
    pub wait_probability: f64,
    /// Fraction of calls answered within the service time
    pub service_level: f64,
    /// Average speed of answer; infinite when utilization `>= 1`
    pub average_speed_of_answer_secs: f64,
    /// Fraction of calls answered without queueing
    pub immediate_answer: f64,
    /// Whether `service_level` reaches the (capped) target
    pub meets_target: bool,
}

impl StaffingReport {
    /// Evaluate `agents` against a set of staffing parameters
    pub fn evaluate(params: &StaffingParameters, agents: u32) -> Self {
        let intensity = params.traffic_intensity();
        let n = f64::from(agents);
        let service_level = service_level(
            n,
            intensity,
            params.service_time_secs,
            params.average_handle_time_secs,
        );

        Self {
            agents,
            traffic_intensity: intensity,
            utilization: utilization(intensity, n),
            wait_probability: erlang_c(n, intensity),
            service_level,
            average_speed_of_answer_secs: average_speed_of_answer(
                n,
                intensity,
                params.average_handle_time_secs,
            ),
            immediate_answer: immediate_answer(n, intensity),
            meets_target: service_level >= params.service_level_target.min(1.0),
        }
    }
}
