//! Side-by-side policy comparison.
//!
//! Runs the same batch under every policy, each on its own simulation
//! context, and ranks the results.

use serde::{Deserialize, Serialize};

use super::{AggregateMetrics, SimulationConfig, Simulator};
use crate::error::SimError;
use crate::models::{PolicyKind, Process, SimulationOutcome};

/// One policy's result in a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyComparison {
    pub policy: PolicyKind,
    pub metrics: AggregateMetrics,
    pub outcome: SimulationOutcome,
}

/// Simulates `processes` under every policy in [`PolicyKind::ALL`] order.
///
/// Priority is left out unless every process has a priority. Fails with
/// the first error any run reports; input errors are policy-independent,
/// so in practice that is the first run.
pub fn compare_policies(
    processes: &[Process],
    config: SimulationConfig,
) -> Result<Vec<PolicyComparison>, SimError> {
    let simulator = Simulator::new().with_config(config);
    let prioritized = processes.iter().all(|p| p.priority.is_some());
    PolicyKind::ALL
        .iter()
        .filter(|&&policy| policy != PolicyKind::Priority || prioritized)
        .map(|&policy| -> Result<PolicyComparison, SimError> {
            let outcome = simulator.simulate(processes, policy)?;
            Ok(PolicyComparison {
                policy,
                metrics: outcome.metrics(),
                outcome,
            })
        })
        .collect()
}

/// The policy with the lowest average waiting time.
///
/// Ties go to the policy listed first in [`PolicyKind::ALL`].
pub fn suggest_policy(comparisons: &[PolicyComparison]) -> Option<PolicyKind> {
    comparisons
        .iter()
        .min_by(|a, b| {
            a.metrics
                .avg_waiting
                .partial_cmp(&b.metrics.avg_waiting)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|c| c.policy)
}
