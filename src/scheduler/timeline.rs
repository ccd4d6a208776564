/*!
 * Timeline Builder
 * Ordered CPU allocation slices (the Gantt record of a run)
 */

use crate::core::limits::IDLE_LABEL;
use crate::core::{Pid, Ticks};
use serde::{Serialize, Serializer};

/// Who holds the CPU during a slice
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Subject {
    Process(Pid),
    Idle,
}

impl Subject {
    pub fn pid(&self) -> Option<&Pid> {
        match self {
            Self::Process(pid) => Some(pid),
            Self::Idle => None,
        }
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Process(pid) => pid.as_str(),
            Self::Idle => IDLE_LABEL,
        }
    }
}

impl Serialize for Subject {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// One contiguous allocation `[start, end)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slice {
    pub subject: Subject,
    pub start: Ticks,
    pub end: Ticks,
}

impl Slice {
    #[inline]
    pub fn duration(&self) -> Ticks {
        self.end - self.start
    }
}

/// Append-only sequence of slices covering `[0, makespan)` without gaps
///
/// Slices are kept exactly as the engine emitted them; [`Timeline::coalesced`]
/// gives the merged view for display consumers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Timeline {
    slices: Vec<Slice>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slices: Vec::with_capacity(capacity),
        }
    }

    /// Append a process slice
    pub(crate) fn push_run(&mut self, pid: &Pid, start: Ticks, end: Ticks) {
        self.push(Subject::Process(pid.clone()), start, end);
    }

    /// Append an idle gap
    pub(crate) fn push_idle(&mut self, start: Ticks, end: Ticks) {
        self.push(Subject::Idle, start, end);
    }

    fn push(&mut self, subject: Subject, start: Ticks, end: Ticks) {
        // Zero-length slices carry no information
        if start >= end {
            return;
        }
        debug_assert_eq!(
            start,
            self.makespan(),
            "slice for {} must start where the timeline ends",
            subject.as_str()
        );
        self.slices.push(Slice {
            subject,
            start,
            end,
        });
    }

    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slice> {
        self.slices.iter()
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// End of the last slice (0 for an empty timeline)
    pub fn makespan(&self) -> Ticks {
        self.slices.last().map_or(0, |s| s.end)
    }

    /// Total non-idle time
    pub fn busy_time(&self) -> Ticks {
        self.slices
            .iter()
            .filter(|s| !s.subject.is_idle())
            .map(Slice::duration)
            .sum()
    }

    /// Total CPU time granted to one process
    pub fn busy_time_of(&self, pid: &Pid) -> Ticks {
        self.slices
            .iter()
            .filter(|s| s.subject.pid() == Some(pid))
            .map(Slice::duration)
            .sum()
    }

    /// Slices belonging to one process, in order
    pub fn slices_of<'a>(&'a self, pid: &'a Pid) -> impl Iterator<Item = &'a Slice> + 'a {
        self.slices.iter().filter(move |s| s.subject.pid() == Some(pid))
    }

    /// Number of hand-overs between two different processes
    ///
    /// Idle gaps are skipped, so `A, IDLE, B` counts once and `A, IDLE, A` not at all.
    pub fn context_switches(&self) -> usize {
        let mut switches = 0;
        let mut last: Option<&Pid> = None;
        for pid in self.slices.iter().filter_map(|s| s.subject.pid()) {
            if let Some(prev) = last {
                if prev != pid {
                    switches += 1;
                }
            }
            last = Some(pid);
        }
        switches
    }

    /// Merge adjacent slices with the same subject
    pub fn coalesced(&self) -> Vec<Slice> {
        let mut merged: Vec<Slice> = Vec::with_capacity(self.slices.len());
        for slice in &self.slices {
            match merged.last_mut() {
                Some(last) if last.subject == slice.subject && last.end == slice.start => {
                    last.end = slice.end;
                }
                _ => merged.push(slice.clone()),
            }
        }
        merged
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a Slice;
    type IntoIter = std::slice::Iter<'a, Slice>;

    fn into_iter(self) -> Self::IntoIter {
        self.slices.iter()
    }
}
