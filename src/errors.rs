// src/errors.rs

//! Crate-wide error aliases and structured errors.
//!
//! Most of the crate propagates `anyhow` errors with context; the one case
//! callers are expected to match on (a build profile name that doesn't exist
//! in the source set) gets its own type.

pub use anyhow::{Error, Result};

use thiserror::Error as ThisError;

/// Errors with meaning beyond "something failed".
#[derive(Debug, ThisError)]
pub enum TaskError {
    /// A profile was requested by name but no matching source file exists.
    #[error("unknown build profile '{name}'; available: {}", format_available(.available))]
    UnknownBuildProfile {
        name: String,
        available: Vec<String>,
    },
}

fn format_available(available: &[String]) -> String {
    if available.is_empty() {
        "(none)".to_string()
    } else {
        available.join(", ")
    }
}
