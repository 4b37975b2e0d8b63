//! Synthetic workload generation.
//!
//! Produces reproducible process batches from a seed, for demos,
//! benchmarks and property tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::error::SimError;
use crate::models::{Process, Ticks};

/// Parameters for a generated batch.
///
/// Arrivals are cumulative: each process arrives `arrival_gap` ticks after
/// the previous one, starting from t=0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadSpec {
    /// Number of processes.
    pub count: usize,
    /// Gap between consecutive arrivals (inclusive range).
    pub arrival_gap: RangeInclusive<Ticks>,
    /// Burst length (inclusive range, lower bound at least 1).
    pub burst: RangeInclusive<Ticks>,
    /// Priority (inclusive range).
    pub priority: RangeInclusive<i32>,
    /// RNG seed.
    pub seed: u64,
}

impl Default for WorkloadSpec {
    fn default() -> Self {
        Self {
            count: 5,
            arrival_gap: 0..=3,
            burst: 1..=8,
            priority: 0..=5,
            seed: 0,
        }
    }
}

impl WorkloadSpec {
    /// Creates a workload of `count` processes with default ranges.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Default::default()
        }
    }

    /// Sets the arrival gap range.
    pub fn with_arrival_gap(mut self, gap: RangeInclusive<Ticks>) -> Self {
        self.arrival_gap = gap;
        self
    }

    /// Sets the burst range.
    pub fn with_burst(mut self, burst: RangeInclusive<Ticks>) -> Self {
        self.burst = burst;
        self
    }

    /// Sets the priority range.
    pub fn with_priority(mut self, priority: RangeInclusive<i32>) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Generates the batch. Processes are named `P1..Pn`.
    ///
    /// # Errors
    /// [`SimError::InvalidConfig`] if a range is empty or the burst range
    /// admits zero.
    pub fn generate(&self) -> Result<Vec<Process>, SimError> {
        if self.arrival_gap.is_empty() || self.burst.is_empty() || self.priority.is_empty() {
            return Err(SimError::InvalidConfig("workload range is empty".into()));
        }
        if *self.burst.start() == 0 {
            return Err(SimError::InvalidConfig(
                "workload burst range must start at 1 or more".into(),
            ));
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut arrival: Ticks = 0;
        let mut processes = Vec::with_capacity(self.count);

        for n in 1..=self.count {
            if n > 1 {
                arrival += rng.random_range(self.arrival_gap.clone());
            }
            let burst = rng.random_range(self.burst.clone());
            let priority = rng.random_range(self.priority.clone());
            processes.push(Process::new(format!("P{n}"), arrival, burst).with_priority(priority));
        }

        log::debug!(
            "generated {} processes (seed={}, last arrival={})",
            processes.len(),
            self.seed,
            arrival
        );
        Ok(processes)
    }
}
