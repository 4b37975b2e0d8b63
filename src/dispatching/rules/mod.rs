//! Built-in selection rules.
//!
//! # Categories
//!
//! - **Queue order**: QUEUE (ready-queue position)
//! - **Time-based**: SRT (least remaining burst), ARRIVAL (earliest arrival)
//! - **Priority**: PRIORITY (highest value first)
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{ReadyEntry, RuleScore, SelectionRule};

/// Ready-queue position.
///
/// Head of the queue scores 0. Gives FCFS and Round-Robin order.
#[derive(Debug, Clone, Copy)]
pub struct QueueOrder;

impl SelectionRule for QueueOrder {
    fn name(&self) -> &'static str {
        "QUEUE"
    }

    fn evaluate(&self, entry: &ReadyEntry<'_>) -> RuleScore {
        entry.position as RuleScore
    }

    fn description(&self) -> &'static str {
        "Ready Queue Order"
    }
}

/// Shortest Remaining Time.
///
/// Scores by ticks still outstanding. Before a process first runs this
/// equals its burst, so the same rule serves SJF and SRTF.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl SelectionRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn evaluate(&self, entry: &ReadyEntry<'_>) -> RuleScore {
        RuleScore::from(entry.remaining)
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time"
    }
}

/// Earliest Arrival.
#[derive(Debug, Clone, Copy)]
pub struct EarliestArrival;

impl SelectionRule for EarliestArrival {
    fn name(&self) -> &'static str {
        "ARRIVAL"
    }

    fn evaluate(&self, entry: &ReadyEntry<'_>) -> RuleScore {
        RuleScore::from(entry.process.arrival)
    }

    fn description(&self) -> &'static str {
        "Earliest Arrival"
    }
}

/// Highest priority value.
///
/// (Negated because lower score = runs first.)
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl SelectionRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, entry: &ReadyEntry<'_>) -> RuleScore {
        -RuleScore::from(entry.process.effective_priority())
    }

    fn description(&self) -> &'static str {
        "Highest Priority"
    }
}
