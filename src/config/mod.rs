//! Configuration for the Timesheet Engine.
//!
//! This module provides the shift-window and hour-policy configuration
//! types and the YAML loader.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, HourPolicy, PolicyConfig, ShiftWindow};
