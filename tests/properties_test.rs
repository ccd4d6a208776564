/*!
 * Property Tests
 * Timing and timeline invariants that must hold for every policy
 */

use cpu_sched_sim::{AgingConfig, Engine, Policy, SchedulingEngine, Simulation, TimeQuantum, Workload};
use proptest::prelude::*;
use std::collections::HashMap;

fn workload_strategy() -> impl Strategy<Value = Workload> {
    prop::collection::vec((0i64..30, 1i64..12, 0i64..15), 0..12).prop_map(|jobs| {
        let tuples = jobs
            .into_iter()
            .enumerate()
            .map(|(i, (arrival, burst, priority))| (format!("P{}", i), arrival, burst, priority));
        Workload::from_tuples(tuples).expect("generated jobs are valid")
    })
}

fn engine_strategy() -> impl Strategy<Value = Engine> {
    (0usize..Policy::ALL.len(), 1i64..6, any::<bool>(), 1i64..4, 0i64..4).prop_map(
        |(policy, quantum, aging, interval, boost)| {
            let quantum = TimeQuantum::new(quantum).expect("positive quantum");
            let aging = AgingConfig::new(aging, interval, boost, 10).expect("valid aging");
            Engine::for_policy(Policy::ALL[policy], quantum, aging)
        },
    )
}

fn check_invariants(workload: &Workload, sim: &Simulation) -> Result<(), TestCaseError> {
    prop_assert_eq!(sim.records.len(), workload.len());

    let mut clock = 0;
    for slice in &sim.timeline {
        prop_assert_eq!(slice.start, clock, "timeline has a gap or overlap");
        prop_assert!(slice.end > slice.start);
        clock = slice.end;
    }

    let mut busy: HashMap<&str, u64> = HashMap::new();
    for slice in &sim.timeline {
        if let Some(pid) = slice.subject.pid() {
            *busy.entry(pid.as_str()).or_default() += slice.duration();
        }
    }

    let mut latest_completion = 0;
    for record in &sim.records {
        let start = record.start_time().expect("started");
        let completion = record.completion_time().expect("completed");
        let waiting = record.waiting_time().expect("waiting");
        let turnaround = record.turnaround_time().expect("turnaround");

        prop_assert!(start >= record.arrival_time());
        prop_assert!(completion > start);
        prop_assert_eq!(turnaround, completion - record.arrival_time());
        prop_assert_eq!(turnaround, waiting + record.burst_time());
        prop_assert_eq!(record.response_time(), Some(start - record.arrival_time()));
        prop_assert_eq!(record.remaining_time(), 0);
        prop_assert_eq!(
            busy.get(record.pid().as_str()).copied(),
            Some(record.burst_time())
        );
        latest_completion = latest_completion.max(completion);
    }
    prop_assert_eq!(sim.timeline.makespan(), latest_completion);
    Ok(())
}

proptest! {
    #[test]
    fn prop_every_policy_keeps_timing_invariants(
        workload in workload_strategy(),
        engine in engine_strategy(),
    ) {
        let sim = engine.simulate(workload.fresh_records()).unwrap();
        check_invariants(&workload, &sim)?;
    }

    #[test]
    fn prop_non_preemptive_policies_run_each_job_once(
        workload in workload_strategy(),
        aging in any::<bool>(),
    ) {
        let aging = if aging { AgingConfig::enabled() } else { AgingConfig::disabled() };
        for engine in [Engine::fcfs(), Engine::sjf(), Engine::priority(aging)] {
            let sim = engine.simulate(workload.fresh_records()).unwrap();
            for record in &sim.records {
                prop_assert_eq!(sim.timeline.slices_of(record.pid()).count(), 1);
            }
        }
    }

    #[test]
    fn prop_fcfs_starts_in_arrival_order(workload in workload_strategy()) {
        let sim = Engine::fcfs().simulate(workload.fresh_records()).unwrap();
        let starts: Vec<u64> = sim.records.iter().filter_map(|r| r.start_time()).collect();
        prop_assert!(starts.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn prop_effective_priority_never_increases(
        priority in 0u32..1000,
        interval in 1i64..10,
        boost in 0i64..10,
        waited in 0u64..500,
        extra in 0u64..500,
    ) {
        let aging = AgingConfig::new(true, interval, boost, 10).unwrap();
        let now = aging.effective_priority(priority, waited);
        let later = aging.effective_priority(priority, waited + extra);
        prop_assert!(later <= now);
        prop_assert!(now <= priority);
    }

    #[test]
    fn prop_round_robin_wait_is_bounded(
        workload in workload_strategy(),
        quantum in 1i64..6,
    ) {
        let quantum = TimeQuantum::new(quantum).unwrap();
        let sim = Engine::round_robin(quantum).simulate(workload.fresh_records()).unwrap();
        let last_arrival = workload
            .records()
            .iter()
            .map(|r| r.arrival_time())
            .max()
            .unwrap_or_default();
        let bound = (workload.len() as u64).saturating_sub(1) * quantum.ticks();

        // Once every job has arrived, a preempted job waits at most one
        // quantum per other job before running again.
        for record in &sim.records {
            let slices: Vec<_> = sim.timeline.slices_of(record.pid()).collect();
            for pair in slices.windows(2) {
                if pair[0].end >= last_arrival {
                    prop_assert!(pair[1].start - pair[0].end <= bound);
                }
            }
        }
    }
}
