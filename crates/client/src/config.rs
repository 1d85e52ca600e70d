//! Autopilot configuration.
use std::env;

/// Settings for the command-line autopilot.
///
/// Runtime concerns (content directory, seed) live in
/// [`RuntimeConfig`](ascension_runtime::RuntimeConfig); this only shapes the loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    /// Number of policy steps to run.
    pub steps: u32,
    /// Length of each cultivation session in minutes.
    pub session_minutes: u32,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            steps: 50,
            session_minutes: 120,
        }
    }
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ASCENSION_SIM_STEPS` - Number of autopilot steps (default: 50)
    /// - `ASCENSION_SIM_MINUTES` - Minutes per cultivation session (default: 120)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(steps) = read_env::<u32>("ASCENSION_SIM_STEPS") {
            config.steps = steps;
        }
        if let Some(minutes) = read_env::<u32>("ASCENSION_SIM_MINUTES") {
            config.session_minutes = minutes;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
