/*!
 * Scheduler Tests
 * Worked examples and cross-policy behavior for every engine
 */

use cpu_sched_sim::{
    simulate, AgingConfig, Engine, MetricsCalculator, Pid, Policy, SchedulerError, SchedulingEngine,
    Simulation, TimeQuantum, Workload,
};
use pretty_assertions::assert_eq;

fn spans(sim: &Simulation) -> Vec<(String, u64, u64)> {
    sim.timeline
        .iter()
        .map(|s| (s.subject.as_str().to_string(), s.start, s.end))
        .collect()
}

fn expected(slices: &[(&str, u64, u64)]) -> Vec<(String, u64, u64)> {
    slices
        .iter()
        .map(|&(pid, start, end)| (pid.to_string(), start, end))
        .collect()
}

fn three_jobs() -> Workload {
    Workload::from_tuples([("P1", 0, 5, 0), ("P2", 1, 3, 0), ("P3", 2, 1, 0)]).unwrap()
}

fn waiting(sim: &Simulation, pid: &str) -> Option<u64> {
    sim.record(pid).and_then(|r| r.waiting_time())
}

#[test]
fn test_fcfs_worked_example() {
    let sim = simulate(three_jobs().fresh_records(), &Engine::fcfs()).unwrap();

    assert_eq!(
        spans(&sim),
        expected(&[("P1", 0, 5), ("P2", 5, 8), ("P3", 8, 9)])
    );
    assert_eq!(waiting(&sim, "P1"), Some(0));
    assert_eq!(waiting(&sim, "P2"), Some(4));
    assert_eq!(waiting(&sim, "P3"), Some(6));
}

#[test]
fn test_fcfs_equal_arrival_uses_pid_order() {
    let workload = Workload::from_tuples([("B", 0, 2, 0), ("A", 0, 2, 0), ("C", 0, 1, 0)]).unwrap();
    let sim = simulate(workload.fresh_records(), &Engine::fcfs()).unwrap();

    assert_eq!(
        spans(&sim),
        expected(&[("A", 0, 2), ("B", 2, 4), ("C", 4, 5)])
    );
}

#[test]
fn test_sjf_worked_example() {
    let sim = simulate(three_jobs().fresh_records(), &Engine::sjf()).unwrap();

    assert_eq!(
        spans(&sim),
        expected(&[("P1", 0, 5), ("P3", 5, 6), ("P2", 6, 9)])
    );
}

#[test]
fn test_sjf_never_preempts() {
    // P2 is much shorter and arrives while P1 runs; P1 still finishes first
    let workload = Workload::from_tuples([("P1", 0, 10, 0), ("P2", 1, 1, 0)]).unwrap();
    let sim = simulate(workload.fresh_records(), &Engine::sjf()).unwrap();

    assert_eq!(spans(&sim), expected(&[("P1", 0, 10), ("P2", 10, 11)]));
}

#[test]
fn test_round_robin_worked_example() {
    let workload = Workload::from_tuples([("P1", 0, 4, 0), ("P2", 1, 3, 0)]).unwrap();
    let engine = Engine::round_robin(TimeQuantum::new(2).unwrap());
    let sim = simulate(workload.fresh_records(), &engine).unwrap();

    assert_eq!(
        spans(&sim),
        expected(&[("P1", 0, 2), ("P2", 2, 4), ("P1", 4, 6), ("P2", 6, 7)])
    );
    let p1 = sim.record("P1").unwrap();
    assert_eq!(p1.response_time(), Some(0));
    assert_eq!(p1.waiting_time(), Some(2));
    let p2 = sim.record("P2").unwrap();
    assert_eq!(p2.response_time(), Some(1));
    assert_eq!(p2.waiting_time(), Some(3));
}

#[test]
fn test_round_robin_large_quantum_matches_fcfs() {
    let workload = three_jobs();
    let rr = Engine::round_robin(TimeQuantum::new(100).unwrap());

    let fcfs_sim = simulate(workload.fresh_records(), &Engine::fcfs()).unwrap();
    let rr_sim = simulate(workload.fresh_records(), &rr).unwrap();
    assert_eq!(spans(&fcfs_sim), spans(&rr_sim));
}

#[test]
fn test_priority_lower_value_wins() {
    let workload =
        Workload::from_tuples([("P1", 0, 2, 5), ("P2", 0, 2, 1), ("P3", 0, 2, 3)]).unwrap();
    let sim = simulate(
        workload.fresh_records(),
        &Engine::priority(AgingConfig::disabled()),
    )
    .unwrap();

    assert_eq!(
        spans(&sim),
        expected(&[("P2", 0, 2), ("P3", 2, 4), ("P1", 4, 6)])
    );
}

#[test]
fn test_priority_aging_bounds_starvation() {
    // A long-lived low-priority job behind a stream of urgent arrivals
    let mut tuples = vec![("LOW".to_string(), 0, 1, 20)];
    for i in 0..10 {
        tuples.push((format!("U{}", i), i * 2, 2, 1));
    }
    let workload = Workload::from_tuples(tuples).unwrap();
    let calculator = MetricsCalculator::new(10);

    let no_aging = AgingConfig::disabled().with_starvation_threshold(10);
    let starved = simulate(workload.fresh_records(), &Engine::priority(no_aging)).unwrap();
    let starved_metrics = calculator.compute_simulation(&starved);
    assert_eq!(starved.record("LOW").unwrap().start_time(), Some(20));
    assert_eq!(starved_metrics.starved_pids, vec![Pid::from("LOW")]);

    let aging = AgingConfig::new(true, 1, 3, 10).unwrap();
    let aged = simulate(workload.fresh_records(), &Engine::priority(aging)).unwrap();
    let aged_metrics = calculator.compute_simulation(&aged);
    assert_eq!(aged.record("LOW").unwrap().start_time(), Some(8));
    assert!(aged_metrics.starved_pids.is_empty());
    assert!(aged_metrics.max_waiting < starved_metrics.max_waiting);
}

#[test]
fn test_invalid_inputs_rejected_before_simulation() {
    assert_eq!(
        Workload::from_tuples([("P1", 0, 2, 0), ("P1", 1, 2, 0)]).unwrap_err(),
        SchedulerError::DuplicatePid("P1".into())
    );
    assert!(matches!(
        Workload::from_tuples([("P1", 0, -1, 0)]),
        Err(SchedulerError::InvalidProcess { .. })
    ));
    assert_eq!(
        TimeQuantum::new(0).unwrap_err(),
        SchedulerError::InvalidQuantum(0)
    );
    assert_eq!(
        AgingConfig::new(true, 0, 1, 1).unwrap_err(),
        SchedulerError::InvalidAgingInterval(0)
    );
}

#[test]
fn test_empty_workload_every_policy() {
    let workload = Workload::new(Vec::new()).unwrap();
    for policy in Policy::ALL {
        let engine = Engine::for_policy(policy, TimeQuantum::default(), AgingConfig::enabled());
        let sim = engine.simulate(workload.fresh_records()).unwrap();
        assert!(sim.timeline.is_empty());
        assert!(sim.records.is_empty());

        let metrics = MetricsCalculator::default().compute_simulation(&sim);
        assert_eq!(metrics.avg_waiting, 0.0);
        assert_eq!(metrics.cpu_utilization, 0.0);
    }
}

#[test]
fn test_same_workload_gives_identical_results() {
    let workload =
        Workload::from_tuples([("P1", 0, 7, 2), ("P2", 2, 4, 1), ("P3", 4, 1, 3), ("P4", 5, 4, 2)])
            .unwrap();
    for policy in Policy::ALL {
        let engine = Engine::for_policy(policy, TimeQuantum::new(3).unwrap(), AgingConfig::enabled());
        let first = engine.simulate(workload.fresh_records()).unwrap();
        let second = engine.simulate(workload.fresh_records()).unwrap();
        assert_eq!(first, second);
    }
}
