//! Command-line driver for the progression runtime.
pub mod autopilot;
pub mod config;

pub use autopilot::{Autopilot, Step};
pub use config::CliConfig;
