//! Simulation output records.
//!
//! Everything in this module is produced by the simulator and handed to
//! presentation code as immutable data.

use serde::{Deserialize, Serialize};

use super::Ticks;

/// Finished timing metrics for one process.
///
/// `start` is fixed at first dispatch; `end`, `turnaround` and `waiting`
/// are final once the process's remaining burst reaches zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Process ID.
    pub id: String,
    /// Arrival tick (copied from the process).
    pub arrival: Ticks,
    /// Burst length (copied from the process).
    pub burst: Ticks,
    /// Tick of first dispatch.
    pub start: Ticks,
    /// Completion tick.
    pub end: Ticks,
    /// Ready-but-not-running time: `turnaround - burst`.
    pub waiting: Ticks,
    /// `end - arrival`.
    pub turnaround: Ticks,
    /// `start - arrival`.
    pub response: Ticks,
}

impl ResultRecord {
    /// Opens a record at first dispatch.
    pub(crate) fn dispatched(id: &str, arrival: Ticks, burst: Ticks, start: Ticks) -> Self {
        Self {
            id: id.to_string(),
            arrival,
            burst,
            start,
            end: start,
            waiting: 0,
            turnaround: 0,
            response: start - arrival,
        }
    }

    /// Finalizes completion-derived fields.
    pub(crate) fn complete(&mut self, end: Ticks) {
        self.end = end;
        self.turnaround = end - self.arrival;
        self.waiting = self.turnaround - self.burst;
    }
}

/// Ready-queue contents at one decision point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadyQueueSnapshot {
    pub time: Ticks,
    pub queue: Vec<String>,
}

/// A contiguous interval during which one process held the CPU.
///
/// Half-open: `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchSlice {
    pub id: String,
    pub start: Ticks,
    pub end: Ticks,
}

impl DispatchSlice {
    /// Creates a slice covering `[start, end)`.
    pub fn new(id: impl Into<String>, start: Ticks, end: Ticks) -> Self {
        Self {
            id: id.into(),
            start,
            end,
        }
    }

    /// Slice length in ticks.
    #[inline]
    pub fn len(&self) -> Ticks {
        self.end - self.start
    }

    /// Whether the slice covers no ticks.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_lifecycle() {
        let mut r = ResultRecord::dispatched("B", 1, 3, 5);
        assert_eq!(r.start, 5);
        assert_eq!(r.response, 4);

        r.complete(8);
        assert_eq!(r.end, 8);
        assert_eq!(r.turnaround, 7);
        assert_eq!(r.waiting, 4);
    }

    #[test]
    fn test_slice_len() {
        let s = DispatchSlice::new("A", 2, 6);
        assert_eq!(s.len(), 4);
        assert!(!s.is_empty());
        assert!(DispatchSlice::new("A", 3, 3).is_empty());
    }
}
