/*!
 * CPU Scheduling Simulator Library
 * Deterministic single-CPU simulation of FCFS, SJF, priority (with aging),
 * and round robin over a static process set
 */

pub mod comparison;
pub mod config;
pub mod core;
pub mod monitoring;
pub mod process;
pub mod scheduler;

// Re-exports
pub use comparison::{Comparison, PolicyReport, PolicyRun};
pub use config::SimulationConfig;
pub use crate::core::errors::SchedulerError;
pub use crate::core::types::{Pid, Priority, SchedResult, Ticks};
pub use monitoring::{init_tracing, Metrics, MetricsCalculator};
pub use process::{load_workload, parse_workload, ProcessRecord, Workload};
pub use scheduler::{
    simulate, AgingConfig, Engine, Policy, SchedulingEngine, Simulation, Slice, Subject,
    TimeQuantum, Timeline,
};
