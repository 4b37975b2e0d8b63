//! Simulation outcome.
//!
//! The complete, immutable result of one `simulate` call: per-process
//! records, the ready-queue timeline and the CPU dispatch timeline.

use serde::{Deserialize, Serialize};

use super::{DispatchSlice, PolicyKind, ReadyQueueSnapshot, ResultRecord, Ticks};
use crate::scheduler::AggregateMetrics;

/// Output of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Policy the run used.
    pub policy: PolicyKind,
    /// One record per process, in first-dispatch order.
    pub records: Vec<ResultRecord>,
    /// Ready-queue contents at every decision point, chronological.
    pub snapshots: Vec<ReadyQueueSnapshot>,
    /// CPU occupancy intervals, chronological.
    pub slices: Vec<DispatchSlice>,
}

impl SimulationOutcome {
    /// Finds the record for a process.
    pub fn record(&self, id: &str) -> Option<&ResultRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Returns all dispatch slices for a process.
    pub fn slices_for(&self, id: &str) -> Vec<&DispatchSlice> {
        self.slices.iter().filter(|s| s.id == id).collect()
    }

    /// Latest snapshot taken at or before `time`.
    pub fn snapshot_at(&self, time: Ticks) -> Option<&ReadyQueueSnapshot> {
        self.snapshots.iter().rev().find(|s| s.time <= time)
    }

    /// Makespan: latest completion tick.
    pub fn makespan(&self) -> Ticks {
        self.records.iter().map(|r| r.end).max().unwrap_or(0)
    }

    /// Ticks during which some process held the CPU.
    pub fn busy_ticks(&self) -> Ticks {
        self.slices.iter().map(|s| s.len()).sum()
    }

    /// Number of times the CPU switched from one process to another.
    pub fn context_switches(&self) -> usize {
        self.slices
            .windows(2)
            .filter(|w| w[0].id != w[1].id)
            .count()
    }

    /// Aggregate metrics over all records.
    pub fn metrics(&self) -> AggregateMetrics {
        AggregateMetrics::calculate(self)
    }
}
