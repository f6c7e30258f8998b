// src/engine/runtime.rs

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::exec::RebuildBackend;
use crate::watch::ChangeGate;

/// Reason why a rebuild was triggered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerReason {
    /// Initial build when the dev loop starts.
    Startup,
    /// A watched source file changed.
    FileWatch { path: String },
}

/// Result of one rebuild run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebuildOutcome {
    Success,
    Failed(i32), // exit code
}

/// Events sent into the runtime from the watcher, the rebuild worker, or
/// external signals.
///
/// - the watcher sends `RebuildTriggered { FileWatch }`
/// - startup seeding sends `RebuildTriggered { Startup }`
/// - the rebuild worker sends `RebuildCompleted`
/// - Ctrl-C handling sends `ShutdownRequested`
#[derive(Debug, Clone)]
pub enum RuntimeEvent {
    RebuildTriggered { reason: TriggerReason },
    RebuildCompleted { outcome: RebuildOutcome },
    ShutdownRequested,
}

/// The dev-loop orchestration runtime.
///
/// Responsibilities:
/// - Consume `RuntimeEvent`s from the watcher/worker/signal handler.
/// - Keep at most one rebuild in flight; triggers arriving during a rebuild
///   collapse into a single pending follow-up run.
/// - Optionally gate file-watch triggers on an actual content change.
/// - Keep watching after failed rebuilds; only shutdown ends the loop.
pub struct Runtime<B: RebuildBackend> {
    backend: B,
    gate: Option<ChangeGate>,

    /// Unified event stream from all producers.
    events_rx: mpsc::Receiver<RuntimeEvent>,

    /// A rebuild is currently in flight.
    rebuilding: bool,
    /// At least one trigger arrived while rebuilding.
    pending: bool,
}

impl<B: RebuildBackend> Runtime<B> {
    pub fn new(
        backend: B,
        gate: Option<ChangeGate>,
        events_rx: mpsc::Receiver<RuntimeEvent>,
    ) -> Self {
        Self {
            backend,
            gate,
            events_rx,
            rebuilding: false,
            pending: false,
        }
    }

    /// Main event loop. Returns when shutdown is requested or every event
    /// producer has gone away.
    pub async fn run(mut self) -> Result<()> {
        info!("dev runtime started");

        while let Some(event) = self.events_rx.recv().await {
            debug!(?event, "runtime received event");

            let keep_running = match event {
                RuntimeEvent::RebuildTriggered { reason } => {
                    self.handle_trigger(reason).await?
                }
                RuntimeEvent::RebuildCompleted { outcome } => {
                    self.handle_completion(outcome).await?
                }
                RuntimeEvent::ShutdownRequested => {
                    info!("shutdown requested, stopping dev runtime");
                    false
                }
            };

            if !keep_running {
                break;
            }
        }

        info!("dev runtime exiting");
        Ok(())
    }

    async fn handle_trigger(&mut self, reason: TriggerReason) -> Result<bool> {
        match reason {
            TriggerReason::Startup => {
                info!("startup trigger, running initial build");
            }
            TriggerReason::FileWatch { ref path } => {
                if let Some(gate) = self.gate.as_mut() {
                    if !gate.should_rebuild() {
                        debug!(path = %path, "source content unchanged, skipping rebuild");
                        return Ok(true);
                    }
                }
                info!(path = %path, "source changed, rebuilding");
            }
        }

        self.request_rebuild().await?;
        Ok(true)
    }

    async fn handle_completion(&mut self, outcome: RebuildOutcome) -> Result<bool> {
        match outcome {
            RebuildOutcome::Success => info!("rebuild completed successfully"),
            RebuildOutcome::Failed(code) => {
                warn!(exit_code = code, "rebuild failed, still watching for changes");
            }
        }

        self.rebuilding = false;

        if self.pending {
            self.pending = false;
            debug!("draining pending trigger into follow-up rebuild");
            self.request_rebuild().await?;
        }

        Ok(true)
    }

    /// Start a rebuild now, or mark one pending if a rebuild is in flight.
    async fn request_rebuild(&mut self) -> Result<()> {
        if self.rebuilding {
            self.pending = true;
            return Ok(());
        }

        self.rebuilding = true;
        self.backend.start_rebuild().await
    }
}
