//! Simulation driver and performance evaluation.
//!
//! Provides the discrete-tick simulator, aggregate metrics and
//! side-by-side comparison of policies.
//!
//! # Algorithm
//!
//! `Simulator` advances an integer clock, admitting arrivals, recording
//! ready-queue snapshots and dispatching one process at a time under the
//! chosen policy. It is a pure function of (processes, policy, config).
//!
//! # KPI
//!
//! `AggregateMetrics` computes mean completion, turnaround, waiting and
//! response times plus makespan and CPU utilization.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 7

mod compare;
mod kpi;
mod simulator;

pub use compare::{compare_policies, suggest_policy, PolicyComparison};
pub use kpi::AggregateMetrics;
pub use simulator::{SimulationConfig, SimulationRequest, Simulator, DEFAULT_QUANTUM};
