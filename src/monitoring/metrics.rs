/*!
 * Run Metrics
 * Aggregate statistics over a completed simulation
 */

use crate::core::limits::DEFAULT_STARVATION_THRESHOLD;
use crate::core::{Pid, Ticks};
use crate::process::ProcessRecord;
use crate::scheduler::{Simulation, Timeline};
use serde::Serialize;

/// Aggregated statistics for one run
///
/// Every average is 0.0 for an empty run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Metrics {
    pub process_count: usize,
    pub avg_waiting: f64,
    pub avg_turnaround: f64,
    pub avg_response: f64,
    pub max_waiting: Ticks,
    /// Pids flagged as starving, in record order
    pub starved_pids: Vec<Pid>,
    /// Percentage of the makespan the CPU was busy
    pub cpu_utilization: f64,
    pub makespan: Ticks,
    /// Completed processes per tick
    pub throughput: f64,
    pub context_switches: usize,
}

impl Metrics {
    pub fn starved_count(&self) -> usize {
        self.starved_pids.len()
    }
}

/// Reduces a run's records and timeline into [`Metrics`]
///
/// Records whose engine did not track starvation fall back to
/// `waiting_time >= starvation_threshold`.
#[derive(Debug, Clone, Copy)]
pub struct MetricsCalculator {
    starvation_threshold: Ticks,
}

impl MetricsCalculator {
    pub fn new(starvation_threshold: Ticks) -> Self {
        Self {
            starvation_threshold,
        }
    }

    pub fn starvation_threshold(&self) -> Ticks {
        self.starvation_threshold
    }

    pub fn compute(&self, records: &[ProcessRecord], timeline: &Timeline) -> Metrics {
        let makespan = timeline.makespan();
        let mut metrics = Metrics {
            process_count: records.len(),
            makespan,
            context_switches: timeline.context_switches(),
            cpu_utilization: ratio(timeline.busy_time() as f64 * 100.0, makespan),
            ..Metrics::default()
        };

        if records.is_empty() {
            return metrics;
        }

        // Sums of in-horizon tick counts can still exceed u64
        let mut total_waiting: u128 = 0;
        let mut total_turnaround: u128 = 0;
        let mut total_response: u128 = 0;
        let mut completed = 0usize;

        for record in records {
            let waiting = record.waiting_time().unwrap_or_default();
            total_waiting += u128::from(waiting);
            total_turnaround += u128::from(record.turnaround_time().unwrap_or_default());
            total_response += u128::from(record.response_time().unwrap_or_default());
            metrics.max_waiting = metrics.max_waiting.max(waiting);
            if record.is_complete() {
                completed += 1;
            }

            let starved = match record.starvation_risk() {
                Some(flag) => flag,
                None => waiting >= self.starvation_threshold,
            };
            if starved {
                metrics.starved_pids.push(record.pid().clone());
            }
        }

        let n = records.len() as f64;
        metrics.avg_waiting = total_waiting as f64 / n;
        metrics.avg_turnaround = total_turnaround as f64 / n;
        metrics.avg_response = total_response as f64 / n;
        metrics.throughput = ratio(completed as f64, makespan);
        metrics
    }

    pub fn compute_simulation(&self, simulation: &Simulation) -> Metrics {
        self.compute(&simulation.records, &simulation.timeline)
    }
}

impl Default for MetricsCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_STARVATION_THRESHOLD)
    }
}

/// `numerator / makespan`, or 0.0 on an empty timeline
#[inline]
fn ratio(numerator: f64, makespan: Ticks) -> f64 {
    if makespan == 0 {
        return 0.0;
    }
    numerator / makespan as f64
}
