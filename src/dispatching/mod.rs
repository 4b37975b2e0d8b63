//! Process selection for each scheduling policy.
//!
//! Each policy is a [`Strategy`]: a rule chain that picks one process out
//! of the ready queue, plus an [`Execution`] mode saying how long the
//! chosen process runs before the next decision.
//!
//! # Usage
//!
//! ```
//! use cpu_sched_sim::dispatching::{SimulationContext, Strategy};
//! use cpu_sched_sim::models::{PolicyKind, Process};
//!
//! let processes = vec![Process::new("A", 0, 5), Process::new("B", 0, 2)];
//! let mut ctx = SimulationContext::new(&processes);
//! ctx.admit_arrivals();
//!
//! let sjf = Strategy::for_policy(PolicyKind::Sjf, 2);
//! assert_eq!(sjf.select_next(&ctx), Some(1));
//! ```

mod context;
mod engine;
pub mod rules;

pub use context::{ReadyEntry, SimulationContext};
pub use engine::Selector;

use crate::models::{PolicyKind, Ticks};
use std::fmt::Debug;

/// Score returned by a selection rule.
///
/// Lower scores = selected first. Wide enough to hold any tick count
/// or negated priority without wrapping.
pub type RuleScore = i128;

/// A rule that ranks ready processes.
///
/// # Score Convention
/// **Lower score = runs first.** Rules should return smaller values
/// for processes that should be dispatched first.
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SRT", "PRIORITY").
    fn name(&self) -> &'static str;

    /// Scores one ready process.
    fn evaluate(&self, entry: &ReadyEntry<'_>) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// How long a dispatched process holds the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Execution {
    /// Runs until its remaining burst is zero.
    ToCompletion,
    /// Runs one tick, then selection is repeated.
    SingleTick,
    /// Leaves the queue, runs up to the quantum, and re-enters at the tail
    /// if unfinished.
    Quantum(Ticks),
}

impl Execution {
    /// Ticks to run given the process's remaining burst.
    pub fn slice(&self, remaining: Ticks) -> Ticks {
        match self {
            Execution::ToCompletion => remaining,
            Execution::SingleTick => remaining.min(1),
            Execution::Quantum(q) => remaining.min(*q),
        }
    }
}

/// Selection and execution behavior of one policy.
#[derive(Debug, Clone)]
pub struct Strategy {
    policy: PolicyKind,
    selector: Selector,
    execution: Execution,
}

impl Strategy {
    /// Builds the strategy for a policy.
    ///
    /// | Policy | Rule chain | Execution |
    /// |--------|------------|-----------|
    /// | FCFS | queue order | to completion |
    /// | SJF | SRT → ARRIVAL | to completion |
    /// | SRTF | SRT → ARRIVAL | single tick |
    /// | RR | queue order | quantum |
    /// | Priority | PRIORITY → ARRIVAL | to completion |
    pub fn for_policy(policy: PolicyKind, quantum: Ticks) -> Self {
        let (selector, execution) = match policy {
            PolicyKind::Fcfs => (
                Selector::new().with_rule(rules::QueueOrder),
                Execution::ToCompletion,
            ),
            PolicyKind::Sjf => (
                Selector::new()
                    .with_rule(rules::ShortestRemaining)
                    .with_tie_breaker(rules::EarliestArrival),
                Execution::ToCompletion,
            ),
            PolicyKind::Srtf => (
                Selector::new()
                    .with_rule(rules::ShortestRemaining)
                    .with_tie_breaker(rules::EarliestArrival),
                Execution::SingleTick,
            ),
            PolicyKind::RoundRobin => (
                Selector::new().with_rule(rules::QueueOrder),
                Execution::Quantum(quantum),
            ),
            PolicyKind::Priority => (
                Selector::new()
                    .with_rule(rules::HighestPriority)
                    .with_tie_breaker(rules::EarliestArrival),
                Execution::ToCompletion,
            ),
        };
        Self {
            policy,
            selector,
            execution,
        }
    }

    /// The policy this strategy implements.
    pub fn policy(&self) -> PolicyKind {
        self.policy
    }

    /// How long a selected process runs.
    pub fn execution(&self) -> Execution {
        self.execution
    }

    /// The rule chain used to pick from the ready queue.
    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Picks the next process from the ready queue.
    ///
    /// Returns its index in the simulated process slice, or `None` when
    /// the queue is empty. Reads the context without modifying it.
    pub fn select_next(&self, ctx: &SimulationContext<'_>) -> Option<usize> {
        let entries = ctx.ready_entries();
        self.selector.select(&entries).map(|i| entries[i].index)
    }
}
