//! Staffing calculator
//!
//! Without a subcommand, prints the agents required for the given forecast.
//! The defaults describe a 1325 calls/hour queue with a 630s handle time and a
//! 90% in 240s service level target.

mod logging;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};

use erlang_core::{
    erlang_b, erlang_c, SearchConfig, StaffingOutcome, StaffingParameters, StaffingReport,
    StaffingSearch, DEFAULT_ITERATION_MULTIPLIER, DEFAULT_MAX_ACCURACY,
};

use crate::logging::{setup_logging, LoggingConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Call center staffing calculator (Erlang B / Erlang C)", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Fraction of calls to answer within the service time (capped at 1.0)
    #[arg(long, global = true, default_value_t = 0.9)]
    sla: f64,

    /// Target answer time in seconds
    #[arg(long, global = true, default_value_t = 240.0)]
    service_time: f64,

    /// Calls offered per hour
    #[arg(long, global = true, default_value_t = 1325.0)]
    calls_per_hour: f64,

    /// Average handle time in seconds, including after-call work
    #[arg(long, global = true, default_value_t = 630.0)]
    aht: f64,

    /// Stop once the service level is within this distance of 1.0
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_ACCURACY)]
    max_accuracy: f64,

    /// Iteration ceiling as a multiple of the starting agent count
    #[arg(long, global = true, default_value_t = DEFAULT_ITERATION_MULTIPLIER)]
    iteration_multiplier: u32,

    /// Validate inputs and fail instead of printing a best effort when the target is unreachable
    #[arg(long, global = true)]
    strict: bool,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Minimum agents meeting the service level target (default)
    Agents,
    /// Service metrics for a fixed number of agents
    Report {
        /// Number of agents to evaluate
        #[arg(short, long)]
        agents: u32,
    },
    /// Raw Erlang B and Erlang C probabilities
    Erlang {
        /// Number of servers (agents or trunks)
        #[arg(short, long)]
        servers: f64,
        /// Offered traffic in Erlangs
        #[arg(short, long)]
        intensity: f64,
    },
}

#[derive(Debug, Serialize)]
struct ErlangProbabilities {
    servers: f64,
    intensity: f64,
    blocking: f64,
    wait: f64,
}

impl Args {
    fn params(&self) -> StaffingParameters {
        StaffingParameters::new(self.sla, self.service_time, self.calls_per_hour, self.aht)
    }

    fn search(&self) -> anyhow::Result<StaffingSearch> {
        let config = SearchConfig::new(self.max_accuracy, self.iteration_multiplier);
        config.validate().context("invalid search options")?;
        Ok(StaffingSearch::new(config))
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let logging = if args.verbose {
        LoggingConfig::verbose()
    } else {
        LoggingConfig::default()
    };
    setup_logging(logging)?;
    debug!(?args, "parsed arguments");

    match &args.command {
        None | Some(Command::Agents) => run_agents(&args),
        Some(Command::Report { agents }) => run_report(&args, *agents),
        Some(Command::Erlang { servers, intensity }) => run_erlang(&args, *servers, *intensity),
    }
}

fn run_agents(args: &Args) -> anyhow::Result<()> {
    let params = args.params();
    let search = args.search()?;

    let outcome = if args.strict {
        search.try_solve(&params).context("staffing search failed")?
    } else {
        search.solve(&params)
    };
    info!(agents = outcome.agents, status = %outcome.status, "staffing search finished");

    print_outcome(args, &outcome)
}

fn print_outcome(args: &Args, outcome: &StaffingOutcome) -> anyhow::Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
        return Ok(());
    }

    println!("Agents required: {}", outcome.agents);
    if !outcome.status.is_converged() {
        println!(
            "Warning: search stopped at {} (service level {:.4})",
            outcome.status, outcome.service_level
        );
    }
    Ok(())
}

fn run_report(args: &Args, agents: u32) -> anyhow::Result<()> {
    let params = args.params();
    if args.strict {
        params.validate().context("invalid staffing parameters")?;
    }

    let report = StaffingReport::evaluate(&params, agents);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Agents:              {}", report.agents);
    println!("Traffic intensity:   {:.3} Erlangs", report.traffic_intensity);
    println!("Utilization:         {:.1}%", report.utilization * 100.0);
    println!("Wait probability:    {:.4}", report.wait_probability);
    println!("Service level:       {:.2}%", report.service_level * 100.0);
    println!("Average answer:      {:.1}s", report.average_speed_of_answer_secs);
    println!("Immediate answer:    {:.2}%", report.immediate_answer * 100.0);
    println!("Meets target:        {}", if report.meets_target { "yes" } else { "no" });
    Ok(())
}

fn run_erlang(args: &Args, servers: f64, intensity: f64) -> anyhow::Result<()> {
    let result = ErlangProbabilities {
        servers,
        intensity,
        blocking: erlang_b(servers, intensity),
        wait: erlang_c(servers, intensity),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("Erlang B (blocking): {:.6}", result.blocking);
        println!("Erlang C (wait):     {:.6}", result.wait);
    }
    Ok(())
}
