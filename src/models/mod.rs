//! Simulator domain models.
//!
//! Input types (`Process`, `ProcessInput`), the policy selector
//! (`PolicyKind`) and the output records handed to presentation code
//! (`ResultRecord`, `ReadyQueueSnapshot`, `DispatchSlice`, `SimulationOutcome`).
//!
//! # Terminology
//!
//! | Type | Textbook term |
//! |------|---------------|
//! | Process | Job / PCB |
//! | PolicyKind | Short-term scheduler |
//! | DispatchSlice | Gantt chart block |
//! | ResultRecord | Per-job timing row |

mod outcome;
mod policy;
mod process;
mod record;

pub use outcome::SimulationOutcome;
pub use policy::PolicyKind;
pub use process::{Process, ProcessInput};
pub use record::{DispatchSlice, ReadyQueueSnapshot, ResultRecord};

/// Simulated time, in whole ticks.
pub type Ticks = u64;
