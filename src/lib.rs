// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod sources;
pub mod targets;
pub mod watch;

use std::path::Path;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::info;

use crate::cli::{CliArgs, Command};
use crate::config::loader::load_or_default;
use crate::config::ConfigFile;
use crate::engine::{Runtime, RuntimeEvent, TriggerReason};
use crate::exec::ShellRebuildBackend;
use crate::sources::SourceProfile;
use crate::watch::ChangeGate;

/// High-level entry point used by `main.rs`.
///
/// Dispatches the selected target and returns the process exit code: the
/// delegate's code for delegated targets, 0 for the local ones, 0 when the
/// dev loop is shut down.
pub async fn run(args: CliArgs) -> Result<i32> {
    let dir = Path::new(".");
    let cfg = load_or_default(dir, args.config.as_deref())?;

    match args.command {
        Command::Build { profile } => targets::run_build(dir, &cfg, profile.as_deref()).await,
        Command::Install => targets::run_install(&cfg).await,
        Command::Monk => targets::run_monk(&cfg).await,
        Command::Clean => targets::run_clean(dir, &cfg),
        Command::List => targets::run_list(dir, &cfg),
        Command::Dev { profile } => run_dev(dir, &cfg, profile.as_deref()).await,
    }
}

/// `dev`: initial build, then watch the sources and rebuild on change.
///
/// This wires together:
/// - the source profile
/// - the rebuild worker
/// - the file watcher
/// - Ctrl-C handling
/// - the coalescing runtime
pub async fn run_dev(dir: &Path, cfg: &ConfigFile, profile: Option<&str>) -> Result<i32> {
    let sources = SourceProfile::from_config(&cfg.sources)?;

    if let Some(name) = profile {
        targets::ensure_known_profile(dir, &sources, name)?;
    }

    // Runtime event channel.
    let (rt_tx, rt_rx) = mpsc::channel::<RuntimeEvent>(64);

    // Rebuild worker running the build delegate.
    let cmd_line = targets::build_command(cfg, profile);
    let backend = ShellRebuildBackend::new(cmd_line, rt_tx.clone());

    // File watcher over the working directory.
    let _watcher_handle = watch::spawn_watcher(dir, sources.clone(), rt_tx.clone())?;

    // Ctrl-C -> graceful shutdown.
    {
        let tx = rt_tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            let _ = tx.send(RuntimeEvent::ShutdownRequested).await;
        });
    }

    // Seed the initial build.
    info!("dev mode: building once, then watching for changes");
    rt_tx
        .send(RuntimeEvent::RebuildTriggered {
            reason: TriggerReason::Startup,
        })
        .await?;

    let gate = cfg
        .dev
        .use_hash
        .then(|| ChangeGate::new(dir, sources));

    let runtime = Runtime::new(backend, gate, rt_rx);
    runtime.run().await?;

    Ok(0)
}
