// src/config/mod.rs

//! Configuration loading and validation.
//!
//! The config file (`Guidedev.toml`) is optional: every field has a default
//! matching the stock project layout, so most invocations run without one.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path, load_or_default};
pub use model::{ConfigFile, DelegateSection, DevSection, OutputSection, SourcesSection};
