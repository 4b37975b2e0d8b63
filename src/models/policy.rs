//! Scheduling policy selector.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SimError;

/// The five supported scheduling policies.
///
/// | Policy | Selection | Granularity |
/// |--------|-----------|-------------|
/// | FCFS | Earliest admitted | To completion |
/// | SJF | Least remaining burst | To completion |
/// | SRTF | Least remaining burst | One tick |
/// | RR | Queue head, re-enqueued at tail | One quantum |
/// | Priority | Highest priority value | To completion |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyKind {
    /// First-Come-First-Served.
    #[serde(rename = "FCFS")]
    Fcfs,
    /// Shortest-Job-First (non-preemptive).
    #[serde(rename = "SJF")]
    Sjf,
    /// Shortest-Remaining-Time-First (preemptive SJF).
    #[serde(rename = "SRTF")]
    Srtf,
    /// Round-Robin with a fixed time quantum.
    #[serde(rename = "RR")]
    RoundRobin,
    /// Non-preemptive static priority (higher value wins).
    Priority,
}

impl PolicyKind {
    /// All policies, in comparison order.
    pub const ALL: [PolicyKind; 5] = [
        PolicyKind::Fcfs,
        PolicyKind::Sjf,
        PolicyKind::Srtf,
        PolicyKind::RoundRobin,
        PolicyKind::Priority,
    ];

    /// Short policy name (e.g., "FCFS", "RR").
    pub fn name(&self) -> &'static str {
        match self {
            PolicyKind::Fcfs => "FCFS",
            PolicyKind::Sjf => "SJF",
            PolicyKind::Srtf => "SRTF",
            PolicyKind::RoundRobin => "RR",
            PolicyKind::Priority => "Priority",
        }
    }

    /// Whether a running process can be interrupted before completion.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, PolicyKind::Srtf | PolicyKind::RoundRobin)
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcfs" | "fifo" => Ok(PolicyKind::Fcfs),
            "sjf" => Ok(PolicyKind::Sjf),
            "srtf" => Ok(PolicyKind::Srtf),
            "rr" | "roundrobin" | "round-robin" => Ok(PolicyKind::RoundRobin),
            "priority" => Ok(PolicyKind::Priority),
            _ => Err(SimError::UnknownPolicy(s.to_string())),
        }
    }
}
