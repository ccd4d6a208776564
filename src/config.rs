/*!
 * Simulation Configuration
 *
 * Raw settings come from an optional JSON file, then environment overrides.
 * Validation turns them into typed engine settings before any run starts.
 */

use crate::core::limits::{
    DEFAULT_AGING_BOOST, DEFAULT_AGING_INTERVAL, DEFAULT_QUANTUM, DEFAULT_STARVATION_THRESHOLD,
};
use crate::core::{SchedResult, SchedulerError};
use crate::scheduler::{AgingConfig, TimeQuantum};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Unvalidated configuration as written by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Round robin time quantum (default: 2)
    pub quantum: i64,

    /// Enable priority aging (default: false)
    pub enable_aging: bool,

    /// Ticks of waiting per aging step (default: 1)
    pub aging_interval: i64,

    /// Priority levels gained per aging step (default: 1)
    pub aging_boost: i64,

    /// Waiting time that flags starvation risk (default: 10)
    pub starvation_threshold: i64,
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM as i64,
            enable_aging: false,
            aging_interval: DEFAULT_AGING_INTERVAL as i64,
            aging_boost: i64::from(DEFAULT_AGING_BOOST),
            starvation_threshold: DEFAULT_STARVATION_THRESHOLD as i64,
        }
    }

    /// Read configuration from a JSON file; missing keys keep their defaults
    pub fn from_file(path: impl AsRef<Path>) -> SchedResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        info!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    /// Apply `SCHED_*` environment overrides
    ///
    /// - SCHED_QUANTUM
    /// - SCHED_AGING (1/true/0/false)
    /// - SCHED_AGING_INTERVAL
    /// - SCHED_AGING_BOOST
    /// - SCHED_STARVATION_THRESHOLD
    pub fn with_env_overrides(self) -> SchedResult<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup (environment, tests)
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> SchedResult<Self> {
        if let Some(v) = lookup("SCHED_QUANTUM") {
            self.quantum = parse_int("SCHED_QUANTUM", &v)?;
        }
        if let Some(v) = lookup("SCHED_AGING") {
            self.enable_aging = parse_bool("SCHED_AGING", &v)?;
        }
        if let Some(v) = lookup("SCHED_AGING_INTERVAL") {
            self.aging_interval = parse_int("SCHED_AGING_INTERVAL", &v)?;
        }
        if let Some(v) = lookup("SCHED_AGING_BOOST") {
            self.aging_boost = parse_int("SCHED_AGING_BOOST", &v)?;
        }
        if let Some(v) = lookup("SCHED_STARVATION_THRESHOLD") {
            self.starvation_threshold = parse_int("SCHED_STARVATION_THRESHOLD", &v)?;
        }
        debug!(config = ?self, "Configuration after overrides");
        Ok(self)
    }

    /// Validated round robin quantum
    pub fn quantum(&self) -> SchedResult<TimeQuantum> {
        TimeQuantum::new(self.quantum)
    }

    /// Validated aging settings, honoring `enable_aging`
    pub fn aging(&self) -> SchedResult<AgingConfig> {
        AgingConfig::new(
            self.enable_aging,
            self.aging_interval,
            self.aging_boost,
            self.starvation_threshold,
        )
    }

    /// Validate everything at once
    pub fn validate(&self) -> SchedResult<(TimeQuantum, AgingConfig)> {
        Ok((self.quantum()?, self.aging()?))
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_int(key: &str, value: &str) -> SchedResult<i64> {
    value.trim().parse::<i64>().map_err(|_| {
        SchedulerError::InvalidConfig(format!("{} must be an integer (got '{}')", key, value))
    })
}

fn parse_bool(key: &str, value: &str) -> SchedResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(SchedulerError::InvalidConfig(format!(
            "{} must be a boolean (got '{}')",
            key, value
        ))),
    }
}
