//! Uniprocessor CPU scheduling simulator.
//!
//! Simulates classical scheduling policies over a batch of synthetic
//! processes, advancing time in discrete integer ticks, and reports
//! per-process timing metrics plus a timeline of ready-queue occupancy.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `ProcessInput`, `ResultRecord`,
//!   `ReadyQueueSnapshot`, `DispatchSlice`, `PolicyKind`
//! - **`registry`**: The process registry (add / remove / list)
//! - **`validation`**: Input integrity checks (empty IDs, zero bursts, duplicates)
//! - **`dispatching`**: Selection rules and the per-run simulation context
//! - **`scheduler`**: The discrete-event simulator, aggregate metrics and
//!   side-by-side policy comparison
//! - **`workload`**: Seeded synthetic workload generation
//!
//! # Example
//!
//! ```
//! use cpu_sched_sim::models::{PolicyKind, Process};
//! use cpu_sched_sim::scheduler::Simulator;
//!
//! let processes = vec![
//!     Process::new("A", 0, 5),
//!     Process::new("B", 1, 3),
//!     Process::new("C", 2, 8),
//! ];
//! let outcome = Simulator::new().simulate(&processes, PolicyKind::Fcfs).unwrap();
//! assert_eq!(outcome.record("C").unwrap().end, 16);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 7-9

pub mod dispatching;
pub mod error;
pub mod models;
pub mod registry;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{ErrorKind, SimError};
