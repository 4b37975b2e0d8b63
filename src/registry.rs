//! Process registry.
//!
//! Holds the ordered list of process definitions a simulation runs over.
//! Registration order is preserved; it is the final tie-breaker for
//! processes that arrive on the same tick.

use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::models::{PolicyKind, Process, ProcessInput};

/// Ordered, ID-unique collection of processes.
///
/// # Example
/// ```
/// use cpu_sched_sim::models::Process;
/// use cpu_sched_sim::registry::ProcessRegistry;
///
/// let mut registry = ProcessRegistry::new();
/// registry.add(Process::new("A", 0, 5)).unwrap();
/// registry.add(Process::new("B", 1, 3)).unwrap();
/// registry.remove("A");
/// assert_eq!(registry.list().len(), 1);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessRegistry {
    processes: Vec<Process>,
}

impl ProcessRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a process.
    ///
    /// Surrounding whitespace is stripped from the ID. Rejects empty IDs
    /// and zero bursts as malformed, and IDs that are already registered
    /// as duplicates.
    pub fn add(&mut self, mut process: Process) -> Result<(), SimError> {
        process.id = process.id.trim().to_string();
        if process.id.is_empty() {
            return Err(SimError::MalformedProcess {
                field: "id",
                value: process.id,
            });
        }
        if process.burst == 0 {
            return Err(SimError::MalformedProcess {
                field: "burst",
                value: process.burst.to_string(),
            });
        }
        if self.get(&process.id).is_some() {
            return Err(SimError::DuplicateId(process.id));
        }

        log::trace!(
            "registered process {} (arrival={}, burst={}, priority={:?})",
            process.id,
            process.arrival,
            process.burst,
            process.priority
        );
        self.processes.push(process);
        Ok(())
    }

    /// Parses raw fields and appends the result.
    ///
    /// `policy` is the policy currently selected by the caller; Priority
    /// makes the priority field mandatory.
    pub fn add_input(
        &mut self,
        input: &ProcessInput,
        policy: Option<PolicyKind>,
    ) -> Result<(), SimError> {
        let process = input.parse(policy)?;
        self.add(process)
    }

    /// Removes the process with the given ID. No-op if absent.
    ///
    /// Returns the removed process.
    pub fn remove(&mut self, id: &str) -> Option<Process> {
        let index = self.processes.iter().position(|p| p.id == id)?;
        Some(self.processes.remove(index))
    }

    /// Current processes in registration order.
    pub fn list(&self) -> &[Process] {
        &self.processes
    }

    /// Finds a process by ID.
    pub fn get(&self, id: &str) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Iterates processes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Process> {
        self.processes.iter()
    }

    /// Number of registered processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Removes all processes.
    pub fn clear(&mut self) {
        self.processes.clear();
    }
}
