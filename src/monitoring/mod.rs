/*!
 * Monitoring Module
 * Run metrics and structured tracing setup
 */

pub mod metrics;
pub mod tracer;

pub use metrics::{Metrics, MetricsCalculator};
pub use tracer::init_tracing;
