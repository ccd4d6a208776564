/*!
 * Arrival Admission
 * Shared ordering and arrival cursor used by every engine
 */

use crate::core::{SchedResult, Ticks};
use crate::process::workload::validate_records;
use crate::process::ProcessRecord;

/// Validate and sort records into admission order `(arrival_time, pid)`
pub(crate) fn prepare(mut records: Vec<ProcessRecord>) -> SchedResult<Vec<ProcessRecord>> {
    validate_records(&records)?;
    records.sort_by(|a, b| {
        a.arrival_time()
            .cmp(&b.arrival_time())
            .then_with(|| a.pid().cmp(b.pid()))
    });
    Ok(records)
}

/// Cursor over records sorted by arrival
///
/// Arrivals are contiguous in the sorted slice, so admission is a single forward scan.
#[derive(Debug, Default)]
pub(crate) struct Arrivals {
    cursor: usize,
}

impl Arrivals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand every record with `arrival_time <= clock` to `admit`, in order
    pub fn admit_until(
        &mut self,
        records: &[ProcessRecord],
        clock: Ticks,
        mut admit: impl FnMut(usize),
    ) {
        while let Some(record) = records.get(self.cursor) {
            if record.arrival_time() > clock {
                break;
            }
            admit(self.cursor);
            self.cursor += 1;
        }
    }

    /// Arrival time of the next record not yet admitted
    pub fn next_arrival(&self, records: &[ProcessRecord]) -> Option<Ticks> {
        records.get(self.cursor).map(ProcessRecord::arrival_time)
    }
}
