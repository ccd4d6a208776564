/*!
 * Scheduling Simulator - Command Line Entry Point
 *
 * Usage: sched-sim <processes.json> [config.json]
 *
 * Runs the standard policy comparison and prints a JSON report to stdout.
 * Logs go to stderr (see RUST_LOG / SCHED_TRACE_JSON).
 */

use cpu_sched_sim::{init_tracing, load_workload, Comparison, SimulationConfig};
use miette::{IntoDiagnostic, Result};
use tracing::info;

fn main() -> Result<()> {
    init_tracing();

    let mut args = std::env::args().skip(1);
    let Some(workload_path) = args.next() else {
        return Err(miette::miette!(
            help = "Pass a JSON array of {pid, arrival_time, burst_time, priority} objects",
            "usage: sched-sim <processes.json> [config.json]"
        ));
    };

    let config = match args.next() {
        Some(path) => SimulationConfig::from_file(path)?,
        None => SimulationConfig::default(),
    }
    .with_env_overrides()?;

    let comparison = Comparison::from_config(&config)?;
    let workload = load_workload(&workload_path)?;
    info!(
        processes = workload.len(),
        runs = comparison.runs().len(),
        "Starting policy comparison"
    );

    let reports = comparison.run_parallel(&workload)?;
    let json = serde_json::to_string_pretty(&reports).into_diagnostic()?;
    println!("{}", json);

    Ok(())
}
