/*!
 * Process Record
 * Per-job inputs and the timing results a policy writes back
 */

use crate::core::limits::IDLE_LABEL;
use crate::core::{Pid, Priority, SchedResult, SchedulerError, Ticks};
use serde::Serialize;

/// One simulated job
///
/// Static inputs (`pid`, `arrival_time`, `burst_time`, `priority`) are fixed at
/// construction. Derived fields start unset and are written by exactly one
/// engine run; reuse across runs goes through [`ProcessRecord::fresh`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessRecord {
    pid: Pid,
    arrival_time: Ticks,
    burst_time: Ticks,
    priority: Priority,

    pub(crate) start_time: Option<Ticks>,
    pub(crate) completion_time: Option<Ticks>,
    pub(crate) waiting_time: Option<Ticks>,
    pub(crate) turnaround_time: Option<Ticks>,
    pub(crate) response_time: Option<Ticks>,

    pub(crate) remaining_time: Ticks,
    pub(crate) effective_priority: Priority,
    /// `None` when the policy does not track starvation
    pub(crate) starvation_risk: Option<bool>,
}

impl ProcessRecord {
    /// Create a validated record
    pub fn new(
        pid: impl Into<Pid>,
        arrival_time: Ticks,
        burst_time: Ticks,
        priority: Priority,
    ) -> SchedResult<Self> {
        let pid = pid.into();
        if pid.is_empty() {
            return Err(SchedulerError::invalid_process("<empty>", "pid must not be empty"));
        }
        if pid.as_str() == IDLE_LABEL {
            return Err(SchedulerError::invalid_process(
                pid.as_str(),
                "pid is reserved for idle slices",
            ));
        }
        if burst_time == 0 {
            return Err(SchedulerError::invalid_process(
                pid.as_str(),
                "burst_time must be positive (got 0)",
            ));
        }

        Ok(Self {
            pid,
            arrival_time,
            burst_time,
            priority,
            start_time: None,
            completion_time: None,
            waiting_time: None,
            turnaround_time: None,
            response_time: None,
            remaining_time: burst_time,
            effective_priority: priority,
            starvation_risk: None,
        })
    }

    /// Create a record from signed input values, rejecting negatives
    pub fn from_signed(
        pid: impl Into<Pid>,
        arrival_time: i64,
        burst_time: i64,
        priority: i64,
    ) -> SchedResult<Self> {
        let pid = pid.into();
        if arrival_time < 0 {
            return Err(SchedulerError::invalid_process(
                pid.as_str(),
                format!("arrival_time must be non-negative (got {})", arrival_time),
            ));
        }
        if burst_time <= 0 {
            return Err(SchedulerError::invalid_process(
                pid.as_str(),
                format!("burst_time must be positive (got {})", burst_time),
            ));
        }
        let priority = Priority::try_from(priority).map_err(|_| {
            SchedulerError::invalid_process(
                pid.as_str(),
                format!("priority must be a non-negative 32-bit value (got {})", priority),
            )
        })?;

        Self::new(pid, arrival_time as Ticks, burst_time as Ticks, priority)
    }

    /// Independent copy with all derived fields cleared
    pub fn fresh(&self) -> Self {
        Self {
            pid: self.pid.clone(),
            arrival_time: self.arrival_time,
            burst_time: self.burst_time,
            priority: self.priority,
            start_time: None,
            completion_time: None,
            waiting_time: None,
            turnaround_time: None,
            response_time: None,
            remaining_time: self.burst_time,
            effective_priority: self.priority,
            starvation_risk: None,
        }
    }

    /// True if no engine has touched this record yet
    pub fn is_pristine(&self) -> bool {
        self.start_time.is_none()
            && self.completion_time.is_none()
            && self.remaining_time == self.burst_time
    }

    pub fn pid(&self) -> &Pid {
        &self.pid
    }

    pub fn arrival_time(&self) -> Ticks {
        self.arrival_time
    }

    pub fn burst_time(&self) -> Ticks {
        self.burst_time
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn start_time(&self) -> Option<Ticks> {
        self.start_time
    }

    pub fn completion_time(&self) -> Option<Ticks> {
        self.completion_time
    }

    pub fn waiting_time(&self) -> Option<Ticks> {
        self.waiting_time
    }

    pub fn turnaround_time(&self) -> Option<Ticks> {
        self.turnaround_time
    }

    pub fn response_time(&self) -> Option<Ticks> {
        self.response_time
    }

    pub fn remaining_time(&self) -> Ticks {
        self.remaining_time
    }

    pub fn effective_priority(&self) -> Priority {
        self.effective_priority
    }

    pub fn starvation_risk(&self) -> Option<bool> {
        self.starvation_risk
    }

    pub fn is_complete(&self) -> bool {
        self.completion_time.is_some()
    }

    /// Ticks spent waiting since arrival at `clock`
    #[inline]
    pub(crate) fn waited_at(&self, clock: Ticks) -> Ticks {
        clock.saturating_sub(self.arrival_time)
    }

    /// Record a dispatch; only the first one sets start and response time
    pub(crate) fn dispatch(&mut self, clock: Ticks) {
        debug_assert!(clock >= self.arrival_time, "{} dispatched before arrival", self.pid);
        if self.start_time.is_none() {
            self.start_time = Some(clock);
            self.response_time = Some(clock - self.arrival_time);
        }
    }

    /// Consume CPU time, returning the amount actually run
    pub(crate) fn run_for(&mut self, ticks: Ticks) -> Ticks {
        let run = ticks.min(self.remaining_time);
        self.remaining_time -= run;
        run
    }

    /// Finalize completion-derived fields
    pub(crate) fn complete(&mut self, clock: Ticks) {
        debug_assert!(self.completion_time.is_none(), "{} completed twice", self.pid);
        let turnaround = clock - self.arrival_time;
        self.remaining_time = 0;
        self.completion_time = Some(clock);
        self.turnaround_time = Some(turnaround);
        self.waiting_time = Some(turnaround - self.burst_time);
    }
}
