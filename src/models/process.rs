//! Process (job) model.
//!
//! A process is a unit of CPU work with an arrival tick, a burst length
//! and a static priority. Processes are immutable once a simulation starts.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.1

use serde::{Deserialize, Serialize};

use super::{PolicyKind, Ticks};
use crate::error::SimError;

/// A process to be scheduled.
///
/// # Time Representation
/// All times are integer ticks relative to the simulation epoch (t=0).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: String,
    /// Tick at which the process becomes eligible to run.
    pub arrival: Ticks,
    /// Total CPU ticks needed to complete.
    pub burst: Ticks,
    /// Scheduling priority (higher = more important).
    ///
    /// `None` when unspecified. Only the Priority policy requires it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

impl Process {
    /// Creates a process with no priority.
    pub fn new(id: impl Into<String>, arrival: Ticks, burst: Ticks) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
            priority: None,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Priority used for ranking; 0 when unspecified.
    pub fn effective_priority(&self) -> i32 {
        self.priority.unwrap_or(0)
    }
}

/// Unparsed process fields as collected by a form or CLI.
///
/// Converted into a [`Process`] by [`ProcessInput::parse`], which is where
/// malformed numeric text is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessInput {
    pub id: String,
    pub arrival: String,
    pub burst: String,
    #[serde(default)]
    pub priority: Option<String>,
}

impl ProcessInput {
    /// Creates an input with no priority field.
    pub fn new(
        id: impl Into<String>,
        arrival: impl Into<String>,
        burst: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            arrival: arrival.into(),
            burst: burst.into(),
            priority: None,
        }
    }

    /// Sets the raw priority field.
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Parses the raw fields into a [`Process`].
    ///
    /// `policy` is the policy the process is being entered for, if known.
    /// An absent or non-numeric priority is left unset (ranked as 0),
    /// unless the policy is [`PolicyKind::Priority`].
    pub fn parse(&self, policy: Option<PolicyKind>) -> Result<Process, SimError> {
        let id = self.id.trim();
        if id.is_empty() {
            return Err(SimError::MalformedProcess {
                field: "id",
                value: self.id.clone(),
            });
        }

        let arrival = parse_ticks("arrival", &self.arrival)?;
        let burst = parse_ticks("burst", &self.burst)?;
        if burst == 0 {
            return Err(SimError::MalformedProcess {
                field: "burst",
                value: self.burst.clone(),
            });
        }

        let parsed_priority = self
            .priority
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i32>().ok());
        if parsed_priority.is_none() && policy == Some(PolicyKind::Priority) {
            return Err(SimError::MissingPriority { id: id.to_string() });
        }

        Ok(Process {
            id: id.to_string(),
            arrival,
            burst,
            priority: parsed_priority,
        })
    }
}

fn parse_ticks(field: &'static str, raw: &str) -> Result<Ticks, SimError> {
    raw.trim()
        .parse::<Ticks>()
        .map_err(|_| SimError::MalformedProcess {
            field,
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_process_builder() {
        let p = Process::new("P1", 3, 7).with_priority(5);
        assert_eq!(p.id, "P1");
        assert_eq!(p.arrival, 3);
        assert_eq!(p.burst, 7);
        assert_eq!(p.priority, Some(5));
        assert_eq!(Process::new("P2", 0, 1).effective_priority(), 0);
    }

    #[test]
    fn test_parse_valid_input() {
        let input = ProcessInput::new(" P1 ", "0", " 5").with_priority("3");
        let p = input.parse(None).unwrap();
        assert_eq!(p, Process::new("P1", 0, 5).with_priority(3));
    }

    #[test]
    fn test_parse_priority_defaults_to_zero() {
        let missing = ProcessInput::new("P1", "0", "5");
        let p = missing.parse(Some(PolicyKind::Fcfs)).unwrap();
        assert_eq!(p.priority, None);
        assert_eq!(p.effective_priority(), 0);

        let garbage = ProcessInput::new("P1", "0", "5").with_priority("high");
        assert_eq!(garbage.parse(None).unwrap().effective_priority(), 0);
    }

    #[test]
    fn test_parse_priority_required_for_priority_policy() {
        let input = ProcessInput::new("P1", "0", "5").with_priority("");
        let err = input.parse(Some(PolicyKind::Priority)).unwrap_err();
        assert_eq!(err, SimError::MissingPriority { id: "P1".into() });
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_parse_rejects_malformed_numbers() {
        let cases = [
            ProcessInput::new("P1", "abc", "5"),
            ProcessInput::new("P1", "-1", "5"),
            ProcessInput::new("P1", "0", "2.5"),
            ProcessInput::new("P1", "0", "0"),
            ProcessInput::new("  ", "0", "5"),
        ];
        for input in &cases {
            let err = input.parse(None).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MalformedProcess, "{input:?}");
        }
    }

    #[test]
    fn test_parse_reports_offending_field() {
        let err = ProcessInput::new("P1", "0", "x").parse(None).unwrap_err();
        assert_eq!(
            err,
            SimError::MalformedProcess {
                field: "burst",
                value: "x".into()
            }
        );
    }

    #[test]
    fn test_process_deserialize_without_priority() {
        let p: Process = serde_json::from_str(r#"{"id":"A","arrival":1,"burst":4}"#).unwrap();
        assert_eq!(p, Process::new("A", 1, 4));
        assert_eq!(p.priority, None);

        let p: Process =
            serde_json::from_str(r#"{"id":"B","arrival":0,"burst":2,"priority":-1}"#).unwrap();
        assert_eq!(p.priority, Some(-1));
    }
}
