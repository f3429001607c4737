//! Staffing search: minimum agents for a service level target
//!
//! The search runs in three phases:
//!
//! 1. Normalize: cap the target at 1.0 and derive the offered load in Erlangs.
//! 2. Bootstrap: start at the rounded call-hours (at least one agent) and add
//!    agents until utilization drops below 1.
//! 3. Converge: walk the agent count upward, evaluating the Erlang C service
//!    level for each candidate, until the target is met, the service level is
//!    within the accuracy threshold of 1.0, or the iteration ceiling
//!    (`bootstrap_agents * iteration_multiplier`) is exhausted.
//!
//! [`fractional_agents`] always returns an agent count, even when the ceiling is
//! hit. [`StaffingSearch::solve`] reports how the search ended and
//! [`StaffingSearch::try_solve`] and [`StaffingSearch::required_agents`] turn
//! non-convergence into an error.

use tracing::{debug, trace, warn};

use crate::config::SearchConfig;
use crate::error::{ErlangError, Result};
use crate::metrics::queued_service_level;
use crate::types::{SearchStatus, StaffingOutcome, StaffingParameters};

/// Iterative search for the minimum agent count meeting a service level
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StaffingSearch {
    config: SearchConfig,
}

impl StaffingSearch {
    /// Create a search with the given configuration
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Get the search configuration
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run the search and report how it ended
    ///
    /// Never fails. When the iteration ceiling is exhausted the outcome holds
    /// the last agent count reached and [`SearchStatus::IterationLimit`].
    pub fn solve(&self, params: &StaffingParameters) -> StaffingOutcome {
        let target = params.service_level_target.min(1.0);
        let service_time = params.service_time_secs;
        let aht = params.average_handle_time_secs;
        let traffic_rate = params.traffic_intensity();

        let mut agents = (params.erlang_hours() as u32).max(1);

        if !traffic_rate.is_finite() || traffic_rate >= f64::from(u32::MAX) {
            warn!(traffic_rate, "offered load out of range, skipping staffing search");
            return StaffingOutcome {
                agents,
                service_level: 0.0,
                traffic_intensity: traffic_rate,
                utilization: traffic_rate / f64::from(agents),
                candidates_evaluated: 0,
                status: SearchStatus::InvalidLoad,
            };
        }

        while traffic_rate / f64::from(agents) >= 1.0 {
            agents += 1;
        }

        let max_iterate = agents.saturating_mul(self.config.iteration_multiplier);
        debug!(
            traffic_rate,
            start_agents = agents,
            max_iterate,
            "bootstrapped staffing search"
        );

        let mut service_level = 0.0;
        let mut evaluated = 0u32;

        for _ in 0..max_iterate {
            let server = f64::from(agents);
            if traffic_rate / server < 1.0 {
                service_level = queued_service_level(server, traffic_rate, service_time, aht);
                evaluated += 1;
                trace!(agents, service_level, "evaluated staffing candidate");

                let status = if service_level >= target {
                    Some(SearchStatus::TargetMet)
                } else if service_level > 1.0 - self.config.max_accuracy {
                    Some(SearchStatus::AccuracyLimit)
                } else {
                    None
                };

                if let Some(status) = status {
                    debug!(agents, service_level, %status, "staffing search converged");
                    return StaffingOutcome {
                        agents,
                        service_level,
                        traffic_intensity: traffic_rate,
                        utilization: traffic_rate / server,
                        candidates_evaluated: evaluated,
                        status,
                    };
                }
            }
            agents = agents.saturating_add(1);
        }

        warn!(
            agents,
            service_level, target, max_iterate, "staffing search hit its iteration ceiling"
        );
        StaffingOutcome {
            agents,
            service_level,
            traffic_intensity: traffic_rate,
            utilization: traffic_rate / f64::from(agents),
            candidates_evaluated: evaluated,
            status: SearchStatus::IterationLimit,
        }
    }

    /// Run the search with validated inputs, failing on non-convergence
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters or configuration are invalid, or
    /// [`ErlangError::TargetUnreachable`] if the iteration ceiling is exhausted.
    pub fn try_solve(&self, params: &StaffingParameters) -> Result<StaffingOutcome> {
        self.config.validate()?;
        params.validate()?;

        let outcome = self.solve(params);
        match outcome.status {
            SearchStatus::TargetMet | SearchStatus::AccuracyLimit => Ok(outcome),
            SearchStatus::IterationLimit => Err(ErlangError::TargetUnreachable {
                target: params.service_level_target.min(1.0),
                achieved: outcome.service_level,
                agents: outcome.agents,
            }),
            SearchStatus::InvalidLoad => Err(ErlangError::invalid_parameter(
                "traffic_intensity",
                outcome.traffic_intensity,
                "offered load out of range",
            )),
        }
    }

    /// Minimum agent count, with validated inputs and explicit non-convergence
    ///
    /// # Errors
    ///
    /// Same as [`StaffingSearch::try_solve`].
    pub fn required_agents(&self, params: &StaffingParameters) -> Result<u32> {
        self.try_solve(params).map(|outcome| outcome.agents)
    }
}

/// Number of agents needed to answer `sla` of calls within `service_time` seconds
///
/// * `sla` - target fraction of calls, capped at 1.0 (e.g. `0.8`)
/// * `service_time` - target answer time in seconds
/// * `calls_per_hour` - offered calls in one hour
/// * `aht` - average handle time in seconds, including after-call work
///
/// Always returns an agent count, using the default [`SearchConfig`]. If the
/// target cannot be reached within the iteration ceiling the last candidate is
/// returned; use [`StaffingSearch::solve`] to tell the two apart.
///
/// ```rust
/// use erlang_core::fractional_agents;
///
/// assert_eq!(fractional_agents(0.8, 20.0, 100.0, 180.0), 8);
/// ```
pub fn fractional_agents(sla: f64, service_time: f64, calls_per_hour: f64, aht: f64) -> u32 {
    let params = StaffingParameters::new(sla, service_time, calls_per_hour, aht);
    StaffingSearch::default().solve(&params).agents
}
