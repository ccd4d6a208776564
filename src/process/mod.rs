/*!
 * Process Module
 * Process records, validated workloads, and input loading
 */

pub mod loader;
pub mod record;
pub mod workload;

// Re-export public API
pub use loader::{load_workload, parse_workload, ProcessSpec};
pub use record::ProcessRecord;
pub use workload::Workload;
