/*!
 * Priority Scheduling
 * Non-preemptive static priority with optional aging
 */

use super::arrivals::{prepare, Arrivals};
use super::timeline::Timeline;
use super::traits::{SchedulingEngine, Simulation};
use super::types::{AgingConfig, Policy};
use crate::core::{SchedResult, Ticks};
use crate::process::ProcessRecord;
use tracing::{debug, warn};

/// Priority engine (lower value = more urgent)
///
/// At every decision point each ready process gets its `effective_priority`
/// and `starvation_risk` refreshed, then the minimum
/// `(effective_priority, arrival_time, pid)` runs to completion.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityScheduler {
    aging: AgingConfig,
}

impl PriorityScheduler {
    pub fn new(aging: AgingConfig) -> Self {
        Self { aging }
    }

    pub fn aging(&self) -> &AgingConfig {
        &self.aging
    }

    /// Refresh aging state for every ready process at `clock`
    fn refresh(&self, records: &mut [ProcessRecord], ready: &[usize], clock: Ticks) {
        for &idx in ready {
            let record = &mut records[idx];
            let waited = record.waited_at(clock);

            let starving = self.aging.is_starving(waited);
            if starving && record.starvation_risk != Some(true) {
                warn!(pid = %record.pid(), waited, clock, "Starvation risk");
            }
            record.starvation_risk = Some(record.starvation_risk == Some(true) || starving);
            record.effective_priority = self.aging.effective_priority(record.priority(), waited);
        }
    }
}

impl SchedulingEngine for PriorityScheduler {
    fn policy(&self) -> Policy {
        Policy::Priority
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

            if ready.is_empty() {
                let Some(next) = arrivals.next_arrival(&records) else {
                    break;
                };
                timeline.push_idle(clock, next);
                clock = next;
                continue;
            }

            self.refresh(&mut records, &ready, clock);

            // Records are in (arrival_time, pid) order, so the index breaks priority ties
            let pos = ready
                .iter()
                .enumerate()
                .min_by_key(|&(_, &idx)| (records[idx].effective_priority(), idx))
                .map(|(pos, _)| pos)
                .unwrap_or_default();

            let record = &mut records[ready.swap_remove(pos)];
            let remaining = record.remaining_time();
            record.dispatch(clock);
            let ran = record.run_for(remaining);
            timeline.push_run(record.pid(), clock, clock + ran);
            clock += ran;
            record.complete(clock);
            completed += 1;

            debug!(
                pid = %record.pid(),
                priority = record.priority(),
                effective_priority = record.effective_priority(),
                start = clock - ran,
                end = clock,
                "Dispatched"
            );
        }

        Ok(Simulation { timeline, records })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::Workload;

    fn starving_workload() -> Workload {
        // LOW waits behind a steady stream of urgent jobs
        Workload::from_tuples([
            ("A", 0, 3, 1),
            ("LOW", 0, 2, 9),
            ("B", 2, 3, 1),
            ("C", 5, 3, 1),
            ("D", 8, 3, 1),
        ])
        .unwrap()
    }

    #[test]
    fn test_priority_order_without_aging() {
        let engine = PriorityScheduler::new(AgingConfig::disabled());
        let sim = engine.simulate(starving_workload().fresh_records()).unwrap();

        let order: Vec<&str> = sim.timeline.iter().map(|s| s.subject.as_str()).collect();
        assert_eq!(order, vec!["A", "B", "C", "D", "LOW"]);
        let low = sim.record("LOW").unwrap();
        assert_eq!(low.effective_priority(), 9);
        assert_eq!(low.waiting_time(), Some(12));
        assert_eq!(low.starvation_risk(), Some(true));
    }

    #[test]
    fn test_aging_promotes_waiting_process() {
        let aging = AgingConfig::new(true, 1, 2, 10).unwrap();
        let engine = PriorityScheduler::new(aging);
        let sim = engine.simulate(starving_workload().fresh_records()).unwrap();

        // t=3: LOW has aged to 9 - 3*2 = 3, B (waited 1) is already at 0.
        // t=6: LOW reaches 0 and ties with C, winning on earlier arrival.
        let order: Vec<&str> = sim.timeline.iter().map(|s| s.subject.as_str()).collect();
        assert_eq!(order, vec!["A", "B", "LOW", "C", "D"]);

        let low = sim.record("LOW").unwrap();
        assert_eq!(low.effective_priority(), 0);
        assert_eq!(low.start_time(), Some(6));
        assert_eq!(low.starvation_risk(), Some(false));
    }

    #[test]
    fn test_idle_jumps_to_next_arrival() {
        let workload = Workload::from_tuples([("P1", 4, 2, 3), ("P2", 20, 1, 0)]).unwrap();
        let engine = PriorityScheduler::default();
        let sim = engine.simulate(workload.fresh_records()).unwrap();

        let idle: Vec<(u64, u64)> = sim
            .timeline
            .iter()
            .filter(|s| s.subject.is_idle())
            .map(|s| (s.start, s.end))
            .collect();
        assert_eq!(idle, vec![(0, 4), (6, 20)]);
    }

    #[test]
    fn test_zero_threshold_flags_everyone() {
        let workload = Workload::from_tuples([("P1", 0, 2, 0), ("P2", 0, 2, 1)]).unwrap();
        let engine = PriorityScheduler::new(AgingConfig::disabled().with_starvation_threshold(0));
        let sim = engine.simulate(workload.fresh_records()).unwrap();
        assert!(sim.records.iter().all(|r| r.starvation_risk() == Some(true)));
    }
}
