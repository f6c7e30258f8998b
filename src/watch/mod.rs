// src/watch/mod.rs

//! File watching and change detection.
//!
//! This module is responsible for:
//! - Wiring up a cross-platform filesystem watcher (`notify`).
//! - Filtering events through the source profile.
//! - (Optionally) content hashing, so events that did not change any
//!   watched byte can be ignored.
//!
//! It does **not** run anything; it only turns filesystem changes into
//! runtime triggers.

pub mod hash;
pub mod watcher;

pub use hash::{compute_sources_hash, ChangeGate};
pub use watcher::{spawn_watcher, WatcherHandle};
