//! Discrete-tick scheduling simulator.
//!
//! # Algorithm
//!
//! Starting at t=0, each iteration:
//! 1. Admits processes with `arrival <= t` to the ready queue.
//! 2. Records a ready-queue snapshot.
//! 3. If the queue is empty, idles one tick.
//! 4. Otherwise selects a process per the policy, opens its record on
//!    first dispatch, and runs it for the policy's slice.
//! 5. Finalizes the record when the remaining burst reaches zero.
//!
//! Terminates once every process has finished.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};

use crate::dispatching::{Execution, SimulationContext, Strategy};
use crate::error::SimError;
use crate::models::{PolicyKind, Process, SimulationOutcome, Ticks};
use crate::validation::validate_processes;

/// Default Round-Robin time quantum (ticks).
pub const DEFAULT_QUANTUM: Ticks = 2;

/// Simulator configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Round-Robin time quantum in ticks. Must be positive.
    pub quantum: Ticks,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
        }
    }
}

impl SimulationConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the Round-Robin quantum.
    pub fn with_quantum(mut self, quantum: Ticks) -> Self {
        self.quantum = quantum;
        self
    }

    /// Checks that the configuration is usable.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.quantum == 0 {
            return Err(SimError::InvalidConfig(
                "round-robin quantum must be at least 1 tick".into(),
            ));
        }
        Ok(())
    }
}

/// Input container for a simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to schedule.
    pub processes: Vec<Process>,
    /// Policy to schedule them under.
    pub policy: PolicyKind,
    /// Simulator settings.
    #[serde(default)]
    pub config: SimulationConfig,
}

impl SimulationRequest {
    /// Creates a request with the default configuration.
    pub fn new(processes: Vec<Process>, policy: PolicyKind) -> Self {
        Self {
            processes,
            policy,
            config: SimulationConfig::default(),
        }
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }
}

/// Uniprocessor scheduling simulator.
///
/// Stateless between runs: every call to [`simulate`](Self::simulate)
/// builds its own [`SimulationContext`], so one simulator can serve many
/// independent (or concurrent) simulations.
///
/// # Example
///
/// ```
/// use cpu_sched_sim::models::{PolicyKind, Process};
/// use cpu_sched_sim::scheduler::{SimulationConfig, Simulator};
///
/// let processes = vec![Process::new("A", 0, 5), Process::new("B", 1, 3)];
/// let simulator = Simulator::new().with_config(SimulationConfig::new().with_quantum(2));
///
/// let outcome = simulator.simulate(&processes, PolicyKind::RoundRobin).unwrap();
/// assert_eq!(outcome.record("A").unwrap().end, 8);
/// assert_eq!(outcome.record("B").unwrap().end, 7);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    /// Creates a simulator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs a simulation to completion.
    ///
    /// # Errors
    /// - [`SimError::NoProcesses`] if `processes` is empty
    /// - [`SimError::InvalidConfig`] if the quantum is zero
    /// - [`SimError::InvalidProcesses`] on empty IDs, zero bursts or duplicate IDs
    /// - [`SimError::MissingPriority`] if `policy` is Priority and a process
    ///   has no priority
    ///
    /// All checks run before any simulation state exists.
    pub fn simulate(
        &self,
        processes: &[Process],
        policy: PolicyKind,
    ) -> Result<SimulationOutcome, SimError> {
        if processes.is_empty() {
            return Err(SimError::NoProcesses);
        }
        self.config.validate()?;
        validate_processes(processes).map_err(SimError::InvalidProcesses)?;
        if policy == PolicyKind::Priority {
            if let Some(p) = processes.iter().find(|p| p.priority.is_none()) {
                return Err(SimError::MissingPriority { id: p.id.clone() });
            }
        }

        log::debug!(
            "simulating {} processes under {} (quantum={})",
            processes.len(),
            policy,
            self.config.quantum
        );

        let strategy = Strategy::for_policy(policy, self.config.quantum);
        let mut ctx = SimulationContext::new(processes);

        while !ctx.is_finished() {
            ctx.admit_arrivals();
            ctx.record_snapshot();

            let Some(index) = strategy.select_next(&ctx) else {
                ctx.idle_tick();
                continue;
            };

            self.step(&strategy, &mut ctx, index);
        }

        let (records, snapshots, slices) = ctx.into_parts();
        let outcome = SimulationOutcome {
            policy,
            records,
            snapshots,
            slices,
        };
        log::debug!(
            "{} finished: makespan={}, {} records, {} snapshots",
            policy,
            outcome.makespan(),
            outcome.records.len(),
            outcome.snapshots.len()
        );
        Ok(outcome)
    }

    /// Runs a simulation from a request, using the request's configuration.
    pub fn simulate_request(
        &self,
        request: &SimulationRequest,
    ) -> Result<SimulationOutcome, SimError> {
        let simulator = Self {
            config: request.config,
        };
        simulator.simulate(&request.processes, request.policy)
    }

    /// Dispatches one selected process and runs it for its slice.
    fn step(&self, strategy: &Strategy, ctx: &mut SimulationContext<'_>, index: usize) {
        let execution = strategy.execution();
        let Some(remaining) = ctx.remaining(index) else {
            return;
        };
        let slice = execution.slice(remaining);

        ctx.dispatch(index);
        log::trace!(
            "t={} dispatch {} for {} tick(s)",
            ctx.now(),
            ctx.process(index).id,
            slice
        );

        if let Execution::Quantum(_) = execution {
            ctx.dequeue(index);
        }

        let finished = ctx.run(index, slice);
        if finished {
            log::trace!("t={} {} complete", ctx.now(), ctx.process(index).id);
        } else if let Execution::Quantum(_) = execution {
            // Arrivals during the slice queue ahead of the preempted process.
            ctx.admit_arrivals();
            ctx.requeue(index);
        }
    }
}
