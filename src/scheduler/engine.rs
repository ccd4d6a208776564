/*!
 * Engine Selection
 * Tag-selected policy engines behind one entry point
 */

use super::fcfs::Fcfs;
use super::priority::PriorityScheduler;
use super::round_robin::RoundRobin;
use super::sjf::Sjf;
use super::traits::{SchedulingEngine, Simulation};
use super::types::{AgingConfig, Policy, TimeQuantum};
use crate::core::SchedResult;
use crate::process::ProcessRecord;
use tracing::{info, info_span};
use uuid::Uuid;

/// Configured engine for one of the four policies
#[derive(Debug, Clone, Copy)]
pub enum Engine {
    Fcfs(Fcfs),
    Sjf(Sjf),
    Priority(PriorityScheduler),
    RoundRobin(RoundRobin),
}

impl Engine {
    pub fn fcfs() -> Self {
        Self::Fcfs(Fcfs)
    }

    pub fn sjf() -> Self {
        Self::Sjf(Sjf)
    }

    pub fn priority(aging: AgingConfig) -> Self {
        Self::Priority(PriorityScheduler::new(aging))
    }

    pub fn round_robin(quantum: TimeQuantum) -> Self {
        Self::RoundRobin(RoundRobin::new(quantum))
    }

    /// Build the engine for `policy`, taking only the settings it uses
    pub fn for_policy(policy: Policy, quantum: TimeQuantum, aging: AgingConfig) -> Self {
        match policy {
            Policy::Fcfs => Self::fcfs(),
            Policy::Sjf => Self::sjf(),
            Policy::Priority => Self::priority(aging),
            Policy::RoundRobin => Self::round_robin(quantum),
        }
    }

    fn run(&self, records: Vec<ProcessRecord>) -> SchedResult<Simulation> {
        match self {
            Self::Fcfs(engine) => engine.simulate(records),
            Self::Sjf(engine) => engine.simulate(records),
            Self::Priority(engine) => engine.simulate(records),
            Self::RoundRobin(engine) => engine.simulate(records),
        }
    }
}

impl SchedulingEngine for Engine {
    fn policy(&self) -> Policy {
        match self {
            Self::Fcfs(_) => Policy::Fcfs,
            Self::Sjf(_) => Policy::Sjf,
            Self::Priority(_) => Policy::Priority,
            Self::RoundRobin(_) => Policy::RoundRobin,
        }
    }

    fn simulate(&self, records: Vec<ProcessRecord>) -> SchedResult<Simulation> {
        let run_id = Uuid::new_v4();
        let span = info_span!(
            "simulate",
            policy = self.policy().as_str(),
            processes = records.len(),
            run_id = %run_id
        );
        let _guard = span.enter();

        let simulation = self.run(records)?;
        info!(
            makespan = simulation.timeline.makespan(),
            slices = simulation.timeline.len(),
            "Simulation complete"
        );
        Ok(simulation)
    }
}

/// Run `engine` over `records`
pub fn simulate(records: Vec<ProcessRecord>, engine: &Engine) -> SchedResult<Simulation> {
    engine.simulate(records)
}
