/*!
 * Scheduler Types
 * Policy tags and validated policy configuration
 */

use crate::core::limits::{
    DEFAULT_AGING_BOOST, DEFAULT_AGING_INTERVAL, DEFAULT_QUANTUM, DEFAULT_STARVATION_THRESHOLD,
};
use crate::core::{Priority, SchedResult, SchedulerError, Ticks};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Scheduling policy tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// First come, first served
    Fcfs,
    /// Shortest job first (non-preemptive)
    Sjf,
    /// Static priority (non-preemptive) with optional aging
    Priority,
    /// Round robin with fixed time quantum
    RoundRobin,
}

impl Policy {
    pub const ALL: [Policy; 4] = [Self::Fcfs, Self::Sjf, Self::Priority, Self::RoundRobin];

    /// Parse from string representation
    pub fn from_str(s: &str) -> SchedResult<Self> {
        match s.to_lowercase().as_str() {
            "fcfs" | "fifo" => Ok(Self::Fcfs),
            "sjf" | "shortest_job_first" => Ok(Self::Sjf),
            "priority" | "prio" => Ok(Self::Priority),
            "round_robin" | "roundrobin" | "rr" => Ok(Self::RoundRobin),
            _ => Err(SchedulerError::InvalidPolicy(s.to_string())),
        }
    }

    /// Convert to string representation
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::Priority => "priority",
            Self::RoundRobin => "round_robin",
        }
    }

    pub const fn is_preemptive(&self) -> bool {
        matches!(self, Self::RoundRobin)
    }
}

impl Serialize for Policy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Policy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Round robin time slice, always at least one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TimeQuantum(Ticks);

impl TimeQuantum {
    /// Create new time quantum
    pub fn new(ticks: i64) -> SchedResult<Self> {
        if ticks <= 0 {
            return Err(SchedulerError::InvalidQuantum(ticks));
        }
        Ok(Self(ticks as Ticks))
    }

    #[inline(always)]
    pub const fn ticks(&self) -> Ticks {
        self.0
    }
}

impl Default for TimeQuantum {
    fn default() -> Self {
        Self(DEFAULT_QUANTUM)
    }
}

impl<'de> Deserialize<'de> for TimeQuantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ticks = i64::deserialize(deserializer)?;
        Self::new(ticks).map_err(serde::de::Error::custom)
    }
}

/// Priority policy configuration
///
/// Aging lowers a waiting process's scheduling key by `aging_boost` for every
/// full `aging_interval` ticks waited, floored at 0. `starvation_threshold`
/// only drives the observational `starvation_risk` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgingConfig {
    enable_aging: bool,
    aging_interval: Ticks,
    aging_boost: Priority,
    starvation_threshold: Ticks,
}

impl AgingConfig {
    /// Create validated aging configuration
    pub fn new(
        enable_aging: bool,
        aging_interval: i64,
        aging_boost: i64,
        starvation_threshold: i64,
    ) -> SchedResult<Self> {
        if aging_interval <= 0 {
            return Err(SchedulerError::InvalidAgingInterval(aging_interval));
        }
        let aging_boost = Priority::try_from(aging_boost).map_err(|_| {
            SchedulerError::InvalidConfig(format!(
                "aging_boost must be a non-negative 32-bit value (got {})",
                aging_boost
            ))
        })?;
        if starvation_threshold < 0 {
            return Err(SchedulerError::InvalidConfig(format!(
                "starvation_threshold must be non-negative (got {})",
                starvation_threshold
            )));
        }

        Ok(Self {
            enable_aging,
            aging_interval: aging_interval as Ticks,
            aging_boost,
            starvation_threshold: starvation_threshold as Ticks,
        })
    }

    /// Aging off, default starvation threshold
    pub fn disabled() -> Self {
        Self {
            enable_aging: false,
            ..Self::default()
        }
    }

    /// Aging on with default interval and boost
    pub fn enabled() -> Self {
        Self {
            enable_aging: true,
            ..Self::default()
        }
    }

    pub fn with_starvation_threshold(mut self, threshold: Ticks) -> Self {
        self.starvation_threshold = threshold;
        self
    }

    pub fn aging_enabled(&self) -> bool {
        self.enable_aging
    }

    pub fn aging_interval(&self) -> Ticks {
        self.aging_interval
    }

    pub fn aging_boost(&self) -> Priority {
        self.aging_boost
    }

    pub fn starvation_threshold(&self) -> Ticks {
        self.starvation_threshold
    }

    /// Scheduling key for a process that has waited `waited` ticks
    ///
    /// Non-increasing in `waited`.
    #[inline]
    pub fn effective_priority(&self, priority: Priority, waited: Ticks) -> Priority {
        if !self.enable_aging {
            return priority;
        }
        let steps = waited / self.aging_interval;
        let boost = steps.saturating_mul(Ticks::from(self.aging_boost));
        Ticks::from(priority).saturating_sub(boost) as Priority
    }

    #[inline]
    pub fn is_starving(&self, waited: Ticks) -> bool {
        waited >= self.starvation_threshold
    }
}

impl Default for AgingConfig {
    fn default() -> Self {
        Self {
            enable_aging: false,
            aging_interval: DEFAULT_AGING_INTERVAL,
            aging_boost: DEFAULT_AGING_BOOST,
            starvation_threshold: DEFAULT_STARVATION_THRESHOLD,
        }
    }
}
