/*!
 * Workload Loader
 * Reads process lists from JSON
 *
 * Expected shape:
 * [
 *   {"pid": "P1", "arrival_time": 0, "burst_time": 8, "priority": 2},
 *   ...
 * ]
 */

use super::record::ProcessRecord;
use super::workload::Workload;
use crate::core::limits::DEFAULT_PRIORITY;
use crate::core::SchedResult;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Raw process entry as it appears in the input file
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProcessSpec {
    pub pid: String,
    pub arrival_time: i64,
    pub burst_time: i64,
    #[serde(default)]
    pub priority: Option<i64>,
}

impl ProcessSpec {
    fn into_record(self) -> SchedResult<ProcessRecord> {
        let priority = self.priority.unwrap_or(i64::from(DEFAULT_PRIORITY));
        ProcessRecord::from_signed(self.pid, self.arrival_time, self.burst_time, priority)
    }
}

/// Parse a workload from a JSON string
pub fn parse_workload(json: &str) -> SchedResult<Workload> {
    let specs: Vec<ProcessSpec> = serde_json::from_str(json)?;
    debug!(count = specs.len(), "Parsed process specs");

    let records = specs
        .into_iter()
        .map(ProcessSpec::into_record)
        .collect::<SchedResult<Vec<_>>>()?;
    Workload::new(records)
}

/// Load a workload from a JSON file
pub fn load_workload(path: impl AsRef<Path>) -> SchedResult<Workload> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let workload = parse_workload(&contents)?;
    info!(path = %path.display(), processes = workload.len(), "Workload loaded");
    Ok(workload)
}
