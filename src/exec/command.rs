// src/exec/command.rs

use anyhow::{Context, Result};
use tokio::process::Command;
use tokio::sync::mpsc;
use tracing::{error, info};

use crate::engine::{RebuildOutcome, RuntimeEvent};

/// Request for one rebuild, consumed by the worker spawned in
/// [`spawn_rebuilder`]. The command line is fixed per dev session, so the
/// request carries no payload.
#[derive(Debug, Clone, Copy)]
pub struct RebuildRequest;

/// Run a delegate command line through the platform shell and return its
/// exit code.
///
/// Stdio is inherited: the delegate's output is the user-facing output of
/// the target, exactly as with the original shell aliases. A signal-killed
/// delegate maps to exit code -1.
pub async fn run_delegate(cmd_line: &str) -> Result<i32> {
    info!(cmd = %cmd_line, "starting delegate");

    // Build a shell command appropriate for the platform.
    let mut cmd = if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(cmd_line);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(cmd_line);
        c
    };

    let status = cmd
        .kill_on_drop(true)
        .status()
        .await
        .with_context(|| format!("spawning delegate '{cmd_line}'"))?;

    let code = status.code().unwrap_or(-1);
    info!(
        cmd = %cmd_line,
        exit_code = code,
        success = status.success(),
        "delegate exited"
    );

    Ok(code)
}

/// Spawn the background rebuild worker for the dev loop.
///
/// The worker consumes [`RebuildRequest`]s strictly in order and runs the
/// delegate inline, so at most one delegate process is ever in flight. Each
/// completed run (including spawn failures, reported as exit code -1) is
/// turned into a `RuntimeEvent::RebuildCompleted` for the runtime.
pub fn spawn_rebuilder(
    cmd_line: String,
    runtime_tx: mpsc::Sender<RuntimeEvent>,
) -> mpsc::Sender<RebuildRequest> {
    let (tx, mut rx) = mpsc::channel::<RebuildRequest>(8);

    tokio::spawn(async move {
        info!("rebuild worker started");
        while let Some(RebuildRequest) = rx.recv().await {
            let outcome = match run_delegate(&cmd_line).await {
                Ok(0) => RebuildOutcome::Success,
                Ok(code) => RebuildOutcome::Failed(code),
                Err(err) => {
                    error!(error = %err, "rebuild execution error");
                    RebuildOutcome::Failed(-1)
                }
            };

            if runtime_tx
                .send(RuntimeEvent::RebuildCompleted { outcome })
                .await
                .is_err()
            {
                // Runtime is gone; nothing left to rebuild for.
                break;
            }
        }
        info!("rebuild worker finished (channel closed)");
    });

    tx
}
