/*!
 * Shortest Job First
 * Non-preemptive dispatch of the shortest ready burst
 */

use super::arrivals::{prepare, Arrivals};
use super::timeline::Timeline;
use super::traits::{SchedulingEngine, Simulation};
use super::types::Policy;
use crate::core::SchedResult;
use crate::process::ProcessRecord;
use tracing::debug;

/// SJF engine
///
/// Selection key is `(burst_time, arrival_time, pid)`. A running job is never
/// interrupted by a shorter arrival.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl SchedulingEngine for Sjf {
    fn policy(&self) -> Policy {
        Policy::Sjf
    }

    fn simulate(&self, records: Vec<ProcessRecord>) -> SchedResult<Simulation> {
        let mut records = prepare(records)?;
        let total = records.len();
        let mut timeline = Timeline::with_capacity(total * 2);
        let mut arrivals = Arrivals::new();
        let mut ready: Vec<usize> = Vec::with_capacity(total);
        let mut clock = 0;
        let mut completed = 0;

        while completed < total {
            arrivals.admit_until(&records, clock, |idx| ready.push(idx));

            // Records are in (arrival_time, pid) order, so the index breaks burst ties
            let shortest = ready
                .iter()
                .enumerate()
                .min_by_key(|&(_, &idx)| (records[idx].burst_time(), idx))
                .map(|(pos, _)| pos);

            let Some(pos) = shortest else {
                let Some(next) = arrivals.next_arrival(&records) else {
                    break;
                };
                timeline.push_idle(clock, next);
                clock = next;
                continue;
            };

            let record = &mut records[ready.swap_remove(pos)];
            let burst = record.burst_time();
            record.dispatch(clock);
            let ran = record.run_for(burst);
            timeline.push_run(record.pid(), clock, clock + ran);
            clock += ran;
            record.complete(clock);
            completed += 1;

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
    fn test_sjf_burst_tie_broken_by_arrival_then_pid() {
        let workload = Workload::from_tuples([
            ("P1", 0, 4, 0),
            ("P3", 1, 2, 0),
            ("P2", 1, 2, 0),
            ("P4", 2, 2, 0),
        ])
        .unwrap();
        let sim = Sjf.simulate(workload.fresh_records()).unwrap();

        let order: Vec<&str> = sim.timeline.iter().map(|s| s.subject.as_str()).collect();
        assert_eq!(order, vec!["P1", "P2", "P3", "P4"]);
    }

    #[test]
    fn test_sjf_idles_until_next_arrival() {
        let workload = Workload::from_tuples([("P1", 3, 2, 0), ("P2", 10, 1, 0)]).unwrap();
        let sim = Sjf.simulate(workload.fresh_records()).unwrap();

        assert_eq!(sim.timeline.len(), 4);
        assert!(sim.timeline.slices()[0].subject.is_idle());
        assert_eq!(sim.timeline.slices()[2].start, 5);
        assert_eq!(sim.timeline.slices()[2].end, 10);
        assert_eq!(sim.timeline.makespan(), 11);
    }
}
