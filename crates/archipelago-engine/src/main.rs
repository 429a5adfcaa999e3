//! Terminal front end for the Archipelago game.
//!
//! This is the main entry point that wires configuration, logging, and a
//! [`Session`] to the terminal. Views are written to stdout; logs go to
//! stderr so the two never interleave.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `archipelago-config.yaml` (or the file named
//!    by `ARCHIPELAGO_CONFIG`)
//! 2. Initialize structured logging (tracing)
//! 3. Build the avatar roster and the session
//! 4. Run the tick/command loop until `quit` or end of input

mod command;
mod error;
mod game;
mod render;

use std::path::PathBuf;

use anyhow::Context as _;
use archipelago_core::config::{CONFIG_PATH_ENV, DEFAULT_CONFIG_FILE, LogFormat};
use archipelago_core::{GameConfig, Session};
use tokio::io::BufReader;
use tracing::{Subscriber, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

use crate::error::EngineError;

/// Where the configuration came from.
#[derive(Debug)]
enum ConfigSource {
    /// Read from this file.
    File(PathBuf),
    /// No file found; built-in defaults.
    Defaults,
}

/// Application entry point.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or the terminal
/// fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let (config, source) = load_config().context("failed to load configuration")?;
    // RUST_LOG wins over the configured level when set.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    let subscriber = build_subscriber(filter, config.logging.format, std::io::stderr);
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install the tracing subscriber")?;

    info!("archipelago-engine starting");
    match &source {
        ConfigSource::File(path) => info!(
            path = %path.display(),
            title = config.game.title,
            avatars = config.avatars.images.len(),
            "Configuration loaded"
        ),
        ConfigSource::Defaults => info!("Config file not found, using defaults"),
    }

    let roster = config.roster().context("invalid avatar roster")?;
    let mut session = Session::new(roster, config.game.title.clone());
    info!(
        session = %session.id(),
        avatars = session.roster().len(),
        "Session ready, waiting for commands"
    );

    let input = BufReader::new(tokio::io::stdin());
    let mut output = std::io::stdout();
    game::run(&mut session, input, &mut output)
        .await
        .context("game loop failed")?;

    info!(
        session = %session.id(),
        phase = %session.phase(),
        day = session.state().day,
        started_at = %session.started_at(),
        "archipelago-engine shutdown complete"
    );
    Ok(())
}

/// Build the tracing subscriber for the configured format.
fn build_subscriber<W>(
    filter: EnvFilter,
    format: LogFormat,
    writer: W,
) -> Box<dyn Subscriber + Send + Sync>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(writer);
    match format {
        LogFormat::Json => Box::new(builder.json().finish()),
        LogFormat::Pretty => Box::new(builder.pretty().finish()),
    }
}

/// Load the game configuration.
///
/// A path given in `ARCHIPELAGO_CONFIG` must exist. Otherwise
/// `archipelago-config.yaml` in the working directory is used when present,
/// and built-in defaults when it is not.
fn load_config() -> Result<(GameConfig, ConfigSource), EngineError> {
    let (path, required) = std::env::var_os(CONFIG_PATH_ENV).map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        |path| (PathBuf::from(path), true),
    );

    if required || path.exists() {
        let config = GameConfig::from_file(&path)?;
        Ok((config, ConfigSource::File(path)))
    } else {
        let mut config = GameConfig::default();
        config.logging.apply_env_overrides();
        Ok((config, ConfigSource::Defaults))
    }
}
