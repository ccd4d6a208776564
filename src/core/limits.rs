/*!
 * Simulation Defaults and Constants
 *
 * Centralized location for default configuration values and reserved labels.
 */

use super::types::{Priority, Ticks};

// =============================================================================
// PROCESS INPUT
// =============================================================================

/// Priority assigned when the input omits one (lowest urgency)
pub const DEFAULT_PRIORITY: Priority = 999;

/// Label reserved for idle timeline slices; not usable as a pid
pub const IDLE_LABEL: &str = "IDLE";

// =============================================================================
// ROUND ROBIN
// =============================================================================

/// Default time quantum (ticks)
pub const DEFAULT_QUANTUM: Ticks = 2;

// =============================================================================
// PRIORITY AGING
// =============================================================================

/// Ticks of waiting per aging step
pub const DEFAULT_AGING_INTERVAL: Ticks = 1;

/// Priority levels gained per aging step
pub const DEFAULT_AGING_BOOST: Priority = 1;

/// Waiting time at which a ready process is flagged as at risk of starvation
pub const DEFAULT_STARVATION_THRESHOLD: Ticks = 10;

// =============================================================================
// SIMULATION HORIZON
// =============================================================================

/// Latest tick a simulation may reach (latest arrival plus total burst)
pub const MAX_TICKS: Ticks = i64::MAX as Ticks;
