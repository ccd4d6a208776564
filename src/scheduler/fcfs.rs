/*!
 * First-Come, First-Served
 * Non-preemptive dispatch in arrival order
 */

use super::arrivals::prepare;
use super::timeline::Timeline;
use super::traits::{SchedulingEngine, Simulation};
use super::types::Policy;
use crate::core::SchedResult;
use crate::process::ProcessRecord;
use tracing::debug;

/// FCFS engine; equal arrivals are served in pid order
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingEngine for Fcfs {
    fn policy(&self) -> Policy {
        Policy::Fcfs
    }

    fn simulate(&self, records: Vec<ProcessRecord>) -> SchedResult<Simulation> {
        let mut records = prepare(records)?;
        let mut timeline = Timeline::with_capacity(records.len() * 2);
        let mut clock = 0;

        for record in records.iter_mut() {
            if clock < record.arrival_time() {
                timeline.push_idle(clock, record.arrival_time());
                clock = record.arrival_time();
            }

            let burst = record.burst_time();
            record.dispatch(clock);
            let ran = record.run_for(burst);
            timeline.push_run(record.pid(), clock, clock + ran);
            clock += ran;
            record.complete(clock);

            debug!(pid = %record.pid(), start = clock - ran, end = clock, "Dispatched");
        }

        Ok(Simulation { timeline, records })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::Workload;

    #[test]
    fn test_fcfs_idle_gap_before_late_arrival() {
        let workload = Workload::from_tuples([("P1", 2, 3, 0), ("P2", 8, 1, 0)]).unwrap();
        let sim = Fcfs.simulate(workload.fresh_records()).unwrap();

        let spans: Vec<(&str, u64, u64)> = sim
            .timeline
            .iter()
            .map(|s| (s.subject.as_str(), s.start, s.end))
            .collect();
        assert_eq!(
            spans,
            vec![("IDLE", 0, 2), ("P1", 2, 5), ("IDLE", 5, 8), ("P2", 8, 9)]
        );
        assert_eq!(sim.record("P2").unwrap().waiting_time(), Some(0));
    }

    #[test]
    fn test_fcfs_response_equals_waiting() {
        let workload =
            Workload::from_tuples([("P1", 0, 4, 0), ("P2", 1, 2, 0), ("P3", 1, 2, 0)]).unwrap();
        let sim = Fcfs.simulate(workload.fresh_records()).unwrap();
        for record in &sim.records {
            assert_eq!(record.response_time(), record.waiting_time());
            assert_eq!(record.remaining_time(), 0);
        }
    }
}
