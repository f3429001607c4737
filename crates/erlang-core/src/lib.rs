//! # Erlang-Core: Call Center Staffing Library
//!
//! Queueing-theory formulas used by workforce planning tools to turn a call
//! forecast into a staffing requirement.
//!
//! ## Features
//!
//! - **Erlang B**: probability that a call is blocked in a loss system
//! - **Erlang C**: probability that a call waits in a delay system
//! - **Staffing search**: minimum whole number of agents meeting a service level
//! - **Metrics**: service level, average speed of answer and utilization for a
//!   given agent count
//!
//! Every function is pure: no I/O, no shared state, safe to call from any
//! number of threads.
//!
//! ## Error policy
//!
//! [`erlang_b`], [`erlang_c`] and [`fractional_agents`] never fail. Negative or
//! non-finite inputs and arithmetic faults yield `0.0`, and the staffing search
//! returns its last candidate when the iteration ceiling is exhausted. The
//! strict API ([`StaffingSearch::required_agents`]) validates its inputs and
//! reports non-convergence as [`ErlangError::TargetUnreachable`].
//!
//! ## Usage
//!
//! ```rust
//! use erlang_core::{erlang_c, fractional_agents, StaffingParameters, StaffingSearch};
//!
//! // 10 agents handling 5 Erlangs of offered traffic
//! let wait = erlang_c(10.0, 5.0);
//! assert!(wait > 0.036 && wait < 0.037);
//!
//! // 90% of 1325 calls/hour answered within 240s, 630s handle time
//! assert_eq!(fractional_agents(0.9, 240.0, 1325.0, 630.0), 237);
//!
//! let params = StaffingParameters::new(0.9, 240.0, 1325.0, 630.0);
//! let agents = StaffingSearch::default().required_agents(&params)?;
//! assert_eq!(agents, 237);
//! # Ok::<(), erlang_core::ErlangError>(())
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod formulas;
pub mod metrics;
pub mod staffing;
pub mod types;
pub mod utils;

// Re-export commonly used types and functions
pub use config::{SearchConfig, DEFAULT_ITERATION_MULTIPLIER, DEFAULT_MAX_ACCURACY};
pub use error::{ErlangError, ErrorCategory, Result};
pub use formulas::{erlang_b, erlang_c};
pub use metrics::StaffingReport;
pub use staffing::{fractional_agents, StaffingSearch};
pub use types::{SearchStatus, StaffingOutcome, StaffingParameters};

/// Version information for the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
