// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! The target set is closed: every runnable target is a subcommand below, so
//! an unknown target name is rejected by the parser before anything runs.
//! `guidedev help` (and `--help`) come from clap's generated help.

use clap::{Parser, Subcommand, ValueEnum};

/// Command-line arguments for `guidedev`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "guidedev",
    version,
    about = "Task runner for the season guide generator.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// If omitted, `Guidedev.toml` in the current working directory is used
    /// when present; built-in defaults otherwise.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `GUIDEDEV_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

/// The runnable targets.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Render the guide with the build script's default profile.
    Build {
        /// Build profile to render (a source file name without extension).
        #[arg(value_name = "PROFILE")]
        profile: Option<String>,
    },

    /// Sync the build script's dependencies.
    Install,

    /// Render the monk-sunwuko-tr build profile.
    Monk,

    /// Remove the generated HTML files.
    Clean,

    /// Watch the YAML sources and rebuild on every change.
    Dev {
        /// Build profile to render on each rebuild.
        #[arg(value_name = "PROFILE")]
        profile: Option<String>,
    },

    /// List the available build profiles.
    List,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
