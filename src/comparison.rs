/*!
 * Policy Comparison
 * Runs several engines over one workload, each on its own record set
 */

use crate::config::SimulationConfig;
use crate::core::SchedResult;
use crate::monitoring::{Metrics, MetricsCalculator};
use crate::process::{ProcessRecord, Workload};
use crate::scheduler::{AgingConfig, Engine, Policy, SchedulingEngine, Slice, Timeline, TimeQuantum};
use serde::Serialize;
use std::thread;
use tracing::info;

/// One labelled engine in a comparison
#[derive(Debug, Clone)]
pub struct PolicyRun {
    pub label: String,
    pub engine: Engine,
}

impl PolicyRun {
    pub fn new(label: impl Into<String>, engine: Engine) -> Self {
        Self {
            label: label.into(),
            engine,
        }
    }
}

/// Outcome of one labelled run
#[derive(Debug, Clone, Serialize)]
pub struct PolicyReport {
    pub label: String,
    pub policy: Policy,
    pub timeline: Timeline,
    /// Adjacent same-subject slices merged
    pub coalesced: Vec<Slice>,
    pub records: Vec<ProcessRecord>,
    pub metrics: Metrics,
}

/// A set of runs plus the metrics settings applied to each
#[derive(Debug, Clone)]
pub struct Comparison {
    runs: Vec<PolicyRun>,
    calculator: MetricsCalculator,
}

impl Comparison {
    pub fn new(runs: Vec<PolicyRun>, calculator: MetricsCalculator) -> Self {
        Self { runs, calculator }
    }

    /// FCFS, SJF, priority without and with aging, round robin
    pub fn standard(quantum: TimeQuantum, aging: AgingConfig) -> Self {
        let threshold = aging.starvation_threshold();
        let without_aging = AgingConfig::disabled().with_starvation_threshold(threshold);
        let with_aging = if aging.aging_enabled() {
            aging
        } else {
            AgingConfig::enabled().with_starvation_threshold(threshold)
        };

        let runs = vec![
            PolicyRun::new("FCFS", Engine::fcfs()),
            PolicyRun::new("SJF", Engine::sjf()),
            PolicyRun::new("Priority (aging off)", Engine::priority(without_aging)),
            PolicyRun::new("Priority (aging on)", Engine::priority(with_aging)),
            PolicyRun::new(
                format!("Round Robin (q={})", quantum.ticks()),
                Engine::round_robin(quantum),
            ),
        ];
        Self::new(runs, MetricsCalculator::new(threshold))
    }

    /// Standard comparison from raw configuration, validated up front
    pub fn from_config(config: &SimulationConfig) -> SchedResult<Self> {
        let (quantum, aging) = config.validate()?;
        Ok(Self::standard(quantum, aging))
    }

    pub fn runs(&self) -> &[PolicyRun] {
        &self.runs
    }

    /// Run every engine in order
    pub fn run(&self, workload: &Workload) -> SchedResult<Vec<PolicyReport>> {
        self.runs
            .iter()
            .map(|run| self.run_one(run, workload.fresh_records()))
            .collect()
    }

    /// Run every engine on its own thread; results keep run order
    pub fn run_parallel(&self, workload: &Workload) -> SchedResult<Vec<PolicyReport>> {
        thread::scope(|scope| {
            let handles: Vec<_> = self
                .runs
                .iter()
                .map(|run| {
                    let records = workload.fresh_records();
                    scope.spawn(move || self.run_one(run, records))
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| match handle.join() {
                    Ok(result) => result,
                    Err(panic) => std::panic::resume_unwind(panic),
                })
                .collect()
        })
    }

    fn run_one(&self, run: &PolicyRun, records: Vec<ProcessRecord>) -> SchedResult<PolicyReport> {
        let simulation = run.engine.simulate(records)?;
        let metrics = self.calculator.compute_simulation(&simulation);
        info!(
            label = %run.label,
            avg_waiting = metrics.avg_waiting,
            avg_turnaround = metrics.avg_turnaround,
            cpu_utilization = metrics.cpu_utilization,
            starved = metrics.starved_count(),
            "Policy run finished"
        );

        let (timeline, records) = simulation.into_parts();
        Ok(PolicyReport {
            label: run.label.clone(),
            policy: run.engine.policy(),
            coalesced: timeline.coalesced(),
            timeline,
            records,
            metrics,
        })
    }
}
