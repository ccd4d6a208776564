/*!
 * Scheduler Module
 * Single-CPU policy engines and the timeline they produce
 */

mod arrivals;
pub mod engine;
pub mod fcfs;
pub mod priority;
pub mod round_robin;
pub mod sjf;
pub mod timeline;
pub mod traits;
pub mod types;

// Re-export public API
pub use engine::{simulate, Engine};
pub use fcfs::Fcfs;
pub use priority::PriorityScheduler;
pub use round_robin::RoundRobin;
pub use sjf::Sjf;
pub use timeline::{Slice, Subject, Timeline};
pub use traits::{SchedulingEngine, Simulation};
pub use types::{AgingConfig, Policy, TimeQuantum};
