// src/config/validate.rs

use anyhow::{anyhow, Context, Result};

use crate::config::model::ConfigFile;
use crate::sources::SourceProfile;

/// Run basic semantic validation against a loaded configuration.
///
/// This checks:
/// - delegate command lines are non-empty
/// - there is at least one `sources.watch` pattern
/// - every glob pattern compiles
/// - output file names are non-empty
pub fn validate_config(cfg: &ConfigFile) -> Result<()> {
    validate_delegates(cfg)?;
    validate_sources(cfg)?;
    validate_outputs(cfg)?;
    Ok(())
}

fn validate_delegates(cfg: &ConfigFile) -> Result<()> {
    if cfg.delegate.build.trim().is_empty() {
        return Err(anyhow!("[delegate].build must not be empty"));
    }
    if cfg.delegate.sync.trim().is_empty() {
        return Err(anyhow!("[delegate].sync must not be empty"));
    }
    Ok(())
}

fn validate_sources(cfg: &ConfigFile) -> Result<()> {
    if cfg.sources.watch.is_empty() {
        return Err(anyhow!(
            "[sources].watch must contain at least one pattern"
        ));
    }

    // Compiling the profile exercises every glob pattern.
    SourceProfile::from_config(&cfg.sources)
        .context("invalid [sources] glob patterns")?;

    Ok(())
}

fn validate_outputs(cfg: &ConfigFile) -> Result<()> {
    for file in &cfg.output.files {
        if file.trim().is_empty() {
            return Err(anyhow!("[output].files must not contain empty names"));
        }
    }
    Ok(())
}
