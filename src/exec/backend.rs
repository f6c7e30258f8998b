// src/exec/backend.rs

//! Pluggable rebuild backend abstraction.
//!
//! The dev runtime talks to a `RebuildBackend` instead of a raw mpsc sender.
//! This makes it easy to swap in a fake backend in tests while keeping the
//! production implementation in [`command`].
//!
//! - `ShellRebuildBackend` is the default implementation. It wraps the
//!   background worker from [`spawn_rebuilder`] and just forwards requests
//!   over an mpsc channel.
//! - Tests can provide their own `RebuildBackend` that, for example, counts
//!   requests and emits `RebuildCompleted` events directly.

use std::future::Future;
use std::pin::Pin;

use tokio::sync::mpsc;

use crate::engine::RuntimeEvent;
use crate::errors::{Error, Result};

use super::command::{spawn_rebuilder, RebuildRequest};

/// Trait abstracting how a rebuild is started.
///
/// Production code uses [`ShellRebuildBackend`]; tests can provide their own
/// implementation that doesn't spawn real processes.
pub trait RebuildBackend: Send {
    /// Request one rebuild. Completion is reported asynchronously via a
    /// `RuntimeEvent::RebuildCompleted` on the runtime channel.
    fn start_rebuild(&mut self) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>>;
}

/// Real backend used in production.
///
/// Construction spawns the background rebuild worker immediately; requests
/// are queued to it over an mpsc channel and executed one at a time.
pub struct ShellRebuildBackend {
    tx: mpsc::Sender<RebuildRequest>,
}

impl ShellRebuildBackend {
    /// Create a backend running `cmd_line` for every rebuild, reporting
    /// completions to `runtime_tx`.
    pub fn new(cmd_line: String, runtime_tx: mpsc::Sender<RuntimeEvent>) -> Self {
        let tx = spawn_rebuilder(cmd_line, runtime_tx);
        Self { tx }
    }
}

impl RebuildBackend for ShellRebuildBackend {
    fn start_rebuild(&mut self) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        // Clone the sender so the future doesn't borrow `self` across `await`.
        let tx = self.tx.clone();

        Box::pin(async move {
            tx.send(RebuildRequest).await.map_err(Error::from)?;
            Ok(())
        })
    }
}
