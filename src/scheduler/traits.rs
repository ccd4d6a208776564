/*!
 * Scheduling Engine Traits
 * Common interface shared by every policy
 */

use super::timeline::Timeline;
use super::types::Policy;
use crate::core::SchedResult;
use crate::process::ProcessRecord;
use serde::Serialize;

/// Result of one engine run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Simulation {
    pub timeline: Timeline,
    /// Completed records in admission order `(arrival_time, pid)`
    pub records: Vec<ProcessRecord>,
}

impl Simulation {
    pub fn empty() -> Self {
        Self {
            timeline: Timeline::new(),
            records: Vec::new(),
        }
    }

    pub fn into_parts(self) -> (Timeline, Vec<ProcessRecord>) {
        (self.timeline, self.records)
    }

    pub fn record(&self, pid: &str) -> Option<&ProcessRecord> {
        self.records.iter().find(|r| r.pid().as_str() == pid)
    }
}

/// A single-CPU scheduling policy
///
/// `simulate` takes exclusive ownership of its records; callers comparing
/// policies hand each engine its own fresh copy.
pub trait SchedulingEngine: Send + Sync {
    /// Policy implemented by this engine
    fn policy(&self) -> Policy;

    /// Run the simulation to completion
    fn simulate(&self, records: Vec<ProcessRecord>) -> SchedResult<Simulation>;
}
