//! Aggregate simulation metrics (KPIs).
//!
//! Computes standard CPU-scheduling performance indicators from a
//! completed simulation outcome.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Completion | Mean of `end` |
//! | Avg Turnaround | Mean of `end - arrival` |
//! | Avg Waiting | Mean of `turnaround - burst` |
//! | Avg Response | Mean of `start - arrival` |
//! | Makespan | Latest completion tick |
//! | CPU Utilization | Busy ticks / makespan |
//! | Throughput | Processes completed per tick |
//!
//! Values are stored unrounded; `Display` rounds to two decimals.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{ResultRecord, SimulationOutcome, Ticks};

/// Aggregate performance indicators for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateMetrics {
    /// Number of records averaged over.
    pub process_count: usize,
    /// Mean completion tick.
    pub avg_completion: f64,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Mean response time.
    pub avg_response: f64,
    /// Latest completion tick.
    pub makespan: Ticks,
    /// Ticks during which the CPU ran a process.
    pub busy_ticks: Ticks,
    /// Ticks during which the CPU idled before the makespan.
    pub idle_ticks: Ticks,
    /// Fraction of the makespan the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per tick of makespan.
    pub throughput: f64,
}

impl AggregateMetrics {
    /// Computes metrics from a simulation outcome.
    pub fn calculate(outcome: &SimulationOutcome) -> Self {
        let records = &outcome.records;
        let count = records.len();

        let mean = |f: fn(&ResultRecord) -> Ticks| -> f64 {
            if count == 0 {
                0.0
            } else {
                records.iter().map(|r| f(r) as f64).sum::<f64>() / count as f64
            }
        };

        let makespan = outcome.makespan();
        let busy_ticks = outcome.busy_ticks();
        let (cpu_utilization, throughput) = if makespan == 0 {
            (0.0, 0.0)
        } else {
            (
                busy_ticks as f64 / makespan as f64,
                count as f64 / makespan as f64,
            )
        };

        Self {
            process_count: count,
            avg_completion: mean(|r| r.end),
            avg_turnaround: mean(|r| r.turnaround),
            avg_waiting: mean(|r| r.waiting),
            avg_response: mean(|r| r.response),
            makespan,
            busy_ticks,
            idle_ticks: makespan.saturating_sub(busy_ticks),
            cpu_utilization,
            throughput,
        }
    }
}

impl fmt::Display for AggregateMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Avg Completion Time: {:.2}", self.avg_completion)?;
        writeln!(f, "Avg Turnaround Time: {:.2}", self.avg_turnaround)?;
        writeln!(f, "Avg Waiting Time: {:.2}", self.avg_waiting)?;
        writeln!(f, "Avg Response Time: {:.2}", self.avg_response)?;
        writeln!(f, "Makespan: {}", self.makespan)?;
        write!(f, "CPU Utilization: {:.2}%", self.cpu_utilization * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DispatchSlice, PolicyKind};

    fn record(id: &str, arrival: Ticks, burst: Ticks, start: Ticks, end: Ticks) -> ResultRecord {
        let mut r = ResultRecord::dispatched(id, arrival, burst, start);
        r.complete(end);
        r
    }

    fn outcome(records: Vec<ResultRecord>, slices: Vec<DispatchSlice>) -> SimulationOutcome {
        SimulationOutcome {
            policy: PolicyKind::Fcfs,
            records,
            snapshots: Vec::new(),
            slices,
        }
    }

    #[test]
    fn test_fcfs_hand_computed() {
        // A(0,5) B(1,3) C(2,8) under FCFS.
        let o = outcome(
            vec![
                record("A", 0, 5, 0, 5),
                record("B", 1, 3, 5, 8),
                record("C", 2, 8, 8, 16),
            ],
            vec![
                DispatchSlice::new("A", 0, 5),
                DispatchSlice::new("B", 5, 8),
                DispatchSlice::new("C", 8, 16),
            ],
        );
        let m = AggregateMetrics::calculate(&o);
        assert_eq!(m.process_count, 3);
        // (5 + 8 + 16) / 3
        assert!((m.avg_completion - 29.0 / 3.0).abs() < 1e-10);
        // (5 + 7 + 14) / 3
        assert!((m.avg_turnaround - 26.0 / 3.0).abs() < 1e-10);
        // (0 + 4 + 6) / 3
        assert!((m.avg_waiting - 10.0 / 3.0).abs() < 1e-10);
        assert!((m.avg_response - 10.0 / 3.0).abs() < 1e-10);
        assert_eq!(m.makespan, 16);
        assert!((m.cpu_utilization - 1.0).abs() < 1e-10);
        assert!((m.throughput - 3.0 / 16.0).abs() < 1e-10);
    }

    #[test]
    fn test_idle_time() {
        let o = outcome(
            vec![record("A", 4, 2, 4, 6)],
            vec![DispatchSlice::new("A", 4, 6)],
        );
        let m = AggregateMetrics::calculate(&o);
        assert_eq!(m.busy_ticks, 2);
        assert_eq!(m.idle_ticks, 4);
        assert!((m.cpu_utilization - 2.0 / 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty_outcome() {
        let m = AggregateMetrics::calculate(&outcome(Vec::new(), Vec::new()));
        assert_eq!(m.process_count, 0);
        assert_eq!(m.makespan, 0);
        assert!((m.avg_waiting - 0.0).abs() < 1e-10);
        assert!((m.cpu_utilization - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_display_rounds_to_two_decimals() {
        let o = outcome(
            vec![
                record("A", 0, 5, 0, 5),
                record("B", 1, 3, 5, 8),
                record("C", 2, 8, 8, 16),
            ],
            vec![DispatchSlice::new("A", 0, 16)],
        );
        let text = AggregateMetrics::calculate(&o).to_string();
        assert!(text.contains("Avg Completion Time: 9.67"));
        assert!(text.contains("Avg Turnaround Time: 8.67"));
        assert!(text.contains("Avg Waiting Time: 3.33"));
        assert!(text.contains("CPU Utilization: 100.00%"));
    }
}
