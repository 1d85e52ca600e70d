//! Ascension command-line entry point.
//!
//! Builds the runtime from the environment, runs the autopilot and prints the
//! final player state as JSON on stdout. Logs go to stderr.
//!
//! ```bash
//! ASCENSION_GAME_SEED=7 ASCENSION_SIM_STEPS=200 cargo run -p ascension-cli
//! ```

use anyhow::Result;
use ascension_cli::{Autopilot, CliConfig};
use ascension_core::PlayerState;
use ascension_runtime::{Runtime, RuntimeConfig};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let runtime_config = RuntimeConfig::from_env();
    let cli_config = CliConfig::from_env();

    tracing::info!(
        content_dir = %runtime_config.content_dir.display(),
        steps = cli_config.steps,
        minutes = cli_config.session_minutes,
        "starting autopilot"
    );

    let runtime = Runtime::builder().config(runtime_config).build()?;
    let player = Autopilot::new(&runtime, cli_config).run(PlayerState::new())?;

    tracing::info!(
        realm = player.realm,
        actions = runtime.actions_taken(),
        game_seed = runtime.game_seed(),
        "autopilot finished"
    );
    println!("{}", serde_json::to_string_pretty(&player)?);

    Ok(())
}
