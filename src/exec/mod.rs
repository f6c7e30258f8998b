// src/exec/mod.rs

//! Process execution layer.
//!
//! This module runs the delegate commands (build script, dependency sync)
//! using `tokio::process::Command` through the platform shell.
//!
//! - [`command`] owns `run_delegate` (one-shot targets) and the background
//!   rebuild worker used by the dev loop.
//! - [`backend`] abstracts how the dev runtime requests rebuilds, so tests
//!   can substitute a fake that doesn't spawn processes.

pub mod backend;
pub mod command;

pub use backend::{RebuildBackend, ShellRebuildBackend};
pub use command::{run_delegate, spawn_rebuilder, RebuildRequest};
