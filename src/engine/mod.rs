// src/engine/mod.rs

//! The dev-loop runtime.
//!
//! Turns triggers (startup, file changes) into rebuild requests while
//! keeping at most one rebuild active and coalescing change bursts that
//! arrive mid-rebuild into a single follow-up run.

pub mod runtime;

pub use runtime::{RebuildOutcome, Runtime, RuntimeEvent, TriggerReason};
