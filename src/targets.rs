// src/targets.rs

//! The runnable targets.
//!
//! One function per target. The build/install/monk targets delegate to the
//! external commands from `[delegate]` and surface their exit codes
//! verbatim; `clean` and `list` do their filesystem work locally and exit 0.

use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::ConfigFile;
use crate::errors::TaskError;
use crate::exec::run_delegate;
use crate::sources::{build_names, SourceProfile};

/// The featured build profile behind the `monk` target.
pub const MONK_PROFILE: &str = "monk-sunwuko-tr";

/// Compose the build delegate command line.
///
/// Without a profile the delegate runs bare and applies its own default;
/// with one, `--build <profile>` is appended.
pub fn build_command(cfg: &ConfigFile, profile: Option<&str>) -> String {
    match profile {
        Some(p) => format!("{} --build {}", cfg.delegate.build, p),
        None => cfg.delegate.build.clone(),
    }
}

/// Command line for the `monk` target: the build delegate with exactly
/// `--build monk-sunwuko-tr`.
pub fn monk_command(cfg: &ConfigFile) -> String {
    build_command(cfg, Some(MONK_PROFILE))
}

/// `build`: render the guide, optionally for an explicitly named profile.
///
/// An explicitly requested profile is checked against the source set before
/// anything is spawned; the delegate's own default profile is left to the
/// delegate.
pub async fn run_build(dir: &Path, cfg: &ConfigFile, profile: Option<&str>) -> Result<i32> {
    if let Some(name) = profile {
        let sources = SourceProfile::from_config(&cfg.sources)?;
        ensure_known_profile(dir, &sources, name)?;
    }
    run_delegate(&build_command(cfg, profile)).await
}

/// `install`: sync the build script's dependencies.
pub async fn run_install(cfg: &ConfigFile) -> Result<i32> {
    run_delegate(&cfg.delegate.sync).await
}

/// `monk`: render the featured profile.
pub async fn run_monk(cfg: &ConfigFile) -> Result<i32> {
    run_delegate(&monk_command(cfg)).await
}

/// `clean`: remove the generated output files.
///
/// Idempotent: files that are already absent are skipped without error.
pub fn run_clean(dir: &Path, cfg: &ConfigFile) -> Result<i32> {
    for file in &cfg.output.files {
        let path = dir.join(file);
        match std::fs::remove_file(&path) {
            Ok(()) => info!(file = %file, "removed output file"),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(file = %file, "output file already absent");
            }
            Err(err) => {
                return Err(err).with_context(|| format!("removing output file {:?}", path));
            }
        }
    }
    Ok(0)
}

/// `list`: print the available build profile names, one per line.
///
/// Zero matching files yields empty output, not an error.
pub fn run_list(dir: &Path, cfg: &ConfigFile) -> Result<i32> {
    let sources = SourceProfile::from_config(&cfg.sources)?;
    for name in build_names(dir, &sources)? {
        println!("{name}");
    }
    Ok(0)
}

/// Fail with [`TaskError::UnknownBuildProfile`] if `name` has no matching
/// source file under `dir`.
pub fn ensure_known_profile(dir: &Path, sources: &SourceProfile, name: &str) -> Result<()> {
    let available = build_names(dir, sources)?;
    if available.iter().any(|n| n == name) {
        return Ok(());
    }
    Err(TaskError::UnknownBuildProfile {
        name: name.to_string(),
        available,
    }
    .into())
}
