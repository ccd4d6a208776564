/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scheduler-related errors with serialization support
///
/// Every variant is raised before any simulation work begins; an engine never
/// returns partial results.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("Invalid process {pid}: {reason}")]
    #[diagnostic(
        code(scheduler::invalid_process),
        help("burst_time must be positive; arrival_time and priority must be non-negative.")
    )]
    InvalidProcess { pid: String, reason: String },

    #[error("Duplicate process id: {0}")]
    #[diagnostic(
        code(scheduler::duplicate_pid),
        help("Each process in a workload needs a unique pid.")
    )]
    DuplicatePid(String),

    #[error("Process {0} already carries simulation results")]
    #[diagnostic(
        code(scheduler::record_reused),
        help("Clone the workload with fresh records before running another policy.")
    )]
    RecordReused(String),

    #[error("Invalid time quantum: {0}")]
    #[diagnostic(
        code(scheduler::invalid_quantum),
        help("Round robin needs a quantum of at least 1 tick.")
    )]
    InvalidQuantum(i64),

    #[error("Invalid aging interval: {0}")]
    #[diagnostic(
        code(scheduler::invalid_aging_interval),
        help("The aging interval must be a positive number of ticks.")
    )]
    InvalidAgingInterval(i64),

    #[error("Invalid configuration: {0}")]
    #[diagnostic(
        code(scheduler::invalid_config),
        help("aging_boost and starvation_threshold must be non-negative.")
    )]
    InvalidConfig(String),

    #[error("Invalid scheduling policy: {0}")]
    #[diagnostic(
        code(scheduler::invalid_policy),
        help("Use fcfs, sjf, priority, or round_robin.")
    )]
    InvalidPolicy(String),

    #[error("Failed to load input: {0}")]
    #[diagnostic(
        code(scheduler::load_failed),
        help("Check that the file exists and holds a JSON array of processes.")
    )]
    Load(String),
}

impl SchedulerError {
    pub(crate) fn invalid_process(pid: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidProcess {
            pid: pid.into(),
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for SchedulerError {
    fn from(err: std::io::Error) -> Self {
        SchedulerError::Load(err.to_string())
    }
}

impl From<serde_json::Error> for SchedulerError {
    fn from(err: serde_json::Error) -> Self {
        SchedulerError::Load(err.to_string())
    }
}
