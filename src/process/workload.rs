/*!
 * Workload
 * Validated job list and the clone-per-run discipline
 */

use super::record::ProcessRecord;
use crate::core::limits::MAX_TICKS;
use crate::core::{Pid, SchedResult, SchedulerError, Ticks};
use std::collections::HashSet;

/// Validated, immutable set of jobs
///
/// Holds pristine records only. Every simulation run receives its own fresh
/// copies so results from different policies never share state.
#[derive(Debug, Clone, Default)]
pub struct Workload {
    records: Vec<ProcessRecord>,
}

impl Workload {
    /// Build a workload, rejecting duplicate pids and reused records
    pub fn new(records: Vec<ProcessRecord>) -> SchedResult<Self> {
        validate_records(&records)?;
        Ok(Self { records })
    }

    /// Build from `(pid, arrival, burst, priority)` tuples
    pub fn from_tuples<I, P>(tuples: I) -> SchedResult<Self>
    where
        I: IntoIterator<Item = (P, i64, i64, i64)>,
        P: Into<Pid>,
    {
        let records = tuples
            .into_iter()
            .map(|(pid, arrival, burst, priority)| {
                ProcessRecord::from_signed(pid, arrival, burst, priority)
            })
            .collect::<SchedResult<Vec<_>>>()?;
        Self::new(records)
    }

    /// Independent record set for one engine run
    pub fn fresh_records(&self) -> Vec<ProcessRecord> {
        self.records.iter().map(ProcessRecord::fresh).collect()
    }

    pub fn records(&self) -> &[ProcessRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Reject duplicate pids, records that already carry results, and workloads
/// whose latest arrival plus total burst runs past [`MAX_TICKS`]
pub(crate) fn validate_records(records: &[ProcessRecord]) -> SchedResult<()> {
    let mut seen = HashSet::with_capacity(records.len());
    let mut latest_arrival: Ticks = 0;
    let mut total_burst: Ticks = 0;

    for record in records {
        if !seen.insert(record.pid()) {
            return Err(SchedulerError::DuplicatePid(record.pid().to_string()));
        }
        if !record.is_pristine() {
            return Err(SchedulerError::RecordReused(record.pid().to_string()));
        }

        latest_arrival = latest_arrival.max(record.arrival_time());
        total_burst = total_burst
            .checked_add(record.burst_time())
            .ok_or_else(|| past_horizon(record))?;
        let end = latest_arrival
            .checked_add(total_burst)
            .ok_or_else(|| past_horizon(record))?;
        if end > MAX_TICKS {
            return Err(past_horizon(record));
        }
    }
    Ok(())
}

fn past_horizon(record: &ProcessRecord) -> SchedulerError {
    SchedulerError::invalid_process(
        record.pid().as_str(),
        format!("workload would run past the simulation horizon of {} ticks", MAX_TICKS),
    )
}
