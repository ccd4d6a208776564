/*!
 * Core Types
 * Common types used across the simulator
 */

use serde::{Deserialize, Serialize};
use smartstring::alias::String as SmartString;
use std::fmt;

/// Simulated time unit (discrete ticks)
pub type Ticks = u64;

/// Priority level (lower value = higher priority)
pub type Priority = u32;

/// Common result type for simulator operations
pub type SchedResult<T> = Result<T, super::errors::SchedulerError>;

/// Process identifier
///
/// Opaque label supplied by the input provider. Ordering is lexicographic and
/// serves as the final tie-break key in every policy.
///
/// # Performance
/// - Short labels (≤23 bytes, e.g. "P1") are stored inline without allocation
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Pid(SmartString);

impl Pid {
    /// Create a pid from any string-like value
    #[inline]
    pub fn new(label: impl AsRef<str>) -> Self {
        Self(SmartString::from(label.as_ref()))
    }

    #[inline(always)]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Pid {
    #[inline]
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Pid {
    #[inline]
    fn from(s: String) -> Self {
        Self(SmartString::from(s))
    }
}

impl AsRef<str> for Pid {
    #[inline(always)]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
