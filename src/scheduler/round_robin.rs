/*!
 * Round Robin
 * Preemptive FIFO rotation with a fixed time quantum
 */

use super::arrivals::{prepare, Arrivals};
use super::timeline::Timeline;
use super::traits::{SchedulingEngine, Simulation};
use super::types::{Policy, TimeQuantum};
use crate::core::SchedResult;
use crate::process::ProcessRecord;
use std::collections::VecDeque;
use tracing::debug;

/// Round robin engine
///
/// After each slice, processes that arrived during it join the queue ahead of
/// the preempted process. Every slice is kept as its own timeline entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundRobin {
    quantum: TimeQuantum,
}

impl RoundRobin {
    pub fn new(quantum: TimeQuantum) -> Self {
        Self { quantum }
    }

    /// Shorthand for `RoundRobin::new(TimeQuantum::new(ticks)?)`
    pub fn with_quantum(ticks: i64) -> SchedResult<Self> {
        Ok(Self::new(TimeQuantum::new(ticks)?))
    }

    pub fn quantum(&self) -> TimeQuantum {
        self.quantum
    }
}

impl SchedulingEngine for RoundRobin {
    fn policy(&self) -> Policy {
        Policy::RoundRobin
    }

    fn simulate(&self, records: Vec<ProcessRecord>) -> SchedResult<Simulation> {
        let mut records = prepare(records)?;
        let total = records.len();
        let quantum = self.quantum.ticks();
        let mut timeline = Timeline::new();
        let mut arrivals = Arrivals::new();
        let mut queue: VecDeque<usize> = VecDeque::with_capacity(total);
        let mut clock = 0;
        let mut completed = 0;

        arrivals.admit_until(&records, clock, |i| queue.push_back(i));

        while completed < total {
            let Some(idx) = queue.pop_front() else {
                let Some(next) = arrivals.next_arrival(&records) else {
                    break;
                };
                timeline.push_idle(clock, next);
                clock = next;
                arrivals.admit_until(&records, clock, |i| queue.push_back(i));
                continue;
            };

            let record = &mut records[idx];
            record.dispatch(clock);
            let ran = record.run_for(quantum);
            timeline.push_run(record.pid(), clock, clock + ran);
            let start = clock;
            clock += ran;

            let finished = record.remaining_time() == 0;
            if finished {
                record.complete(clock);
                completed += 1;
            }
            debug!(
                pid = %record.pid(),
                start,
                end = clock,
                remaining = record.remaining_time(),
                "Slice"
            );

            // New arrivals go ahead of the preempted process
            arrivals.admit_until(&records, clock, |i| queue.push_back(i));
            if !finished {
                queue.push_back(idx);
            }
        }

        Ok(Simulation { timeline, records })
    }
}
