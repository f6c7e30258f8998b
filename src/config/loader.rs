// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::model::ConfigFile;
use crate::config::validate::validate_config;

/// Load a configuration file from a given path and return the raw `ConfigFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading config file at {:?}", path))?;

    let config: ConfigFile = toml::from_str(&contents)
        .with_context(|| format!("parsing TOML config from {:?}", path))?;

    Ok(config)
}

/// Load a configuration file from path and run basic validation.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let config = load_from_path(&path)?;
    validate_config(&config)?;
    Ok(config)
}

/// Resolve the configuration for a run.
///
/// - With an explicit `--config` path, the file must exist and parse.
/// - Without one, `Guidedev.toml` under `dir` is used when present; otherwise
///   the built-in defaults apply (the common case for this project).
pub fn load_or_default(dir: &Path, explicit: Option<&str>) -> Result<ConfigFile> {
    match explicit {
        Some(path) => load_and_validate(path),
        None => {
            let path = dir.join(default_config_path());
            if path.is_file() {
                load_and_validate(path)
            } else {
                Ok(ConfigFile::default())
            }
        }
    }
}

/// Default config file name, looked up in the working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Guidedev.toml")
}
