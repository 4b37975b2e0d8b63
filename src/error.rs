//! Simulator errors.
//!
//! Every error is scoped to one registry call or one simulation attempt;
//! none leaves partial state behind.

use std::fmt;

use crate::validation::ValidationError;

/// Broad error category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected before simulation starts (empty batch, bad config, etc.).
    InvalidInput,
    /// Non-numeric or out-of-range process fields, rejected at registry admission.
    MalformedProcess,
}

/// Errors reported by the registry and the simulator.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// `simulate` was called with an empty process list.
    NoProcesses,
    /// Priority scheduling was requested but the process has no usable priority.
    MissingPriority { id: String },
    /// A policy name that does not match any supported policy.
    UnknownPolicy(String),
    /// Simulator configuration is unusable (e.g., zero quantum).
    InvalidConfig(String),
    /// The process list failed structural validation.
    InvalidProcesses(Vec<ValidationError>),
    /// A raw process field could not be parsed.
    MalformedProcess { field: &'static str, value: String },
    /// The registry already holds a process with this ID.
    DuplicateId(String),
}

impl SimError {
    /// Maps the error onto its category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SimError::MalformedProcess { .. } => ErrorKind::MalformedProcess,
            SimError::NoProcesses
            | SimError::MissingPriority { .. }
            | SimError::UnknownPolicy(_)
            | SimError::InvalidConfig(_)
            | SimError::InvalidProcesses(_)
            | SimError::DuplicateId(_) => ErrorKind::InvalidInput,
        }
    }
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::NoProcesses => f.write_str("no processes to schedule"),
            SimError::MissingPriority { id } => {
                write!(f, "priority value is required for priority scheduling (process '{id}')")
            }
            SimError::UnknownPolicy(name) => write!(f, "unknown scheduling policy '{name}'"),
            SimError::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
            SimError::InvalidProcesses(errors) => {
                f.write_str("invalid process list: ")?;
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    f.write_str(&e.message)?;
                }
                Ok(())
            }
            SimError::MalformedProcess { field, value } => {
                write!(f, "malformed process field '{field}': {value:?}")
            }
            SimError::DuplicateId(id) => write!(f, "duplicate process ID: {id}"),
        }
    }
}

impl std::error::Error for SimError {}
