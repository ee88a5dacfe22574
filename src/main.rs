//! lobby-console - drive a lobby from stdin against the in-memory platform.
//!
//! Useful for trying out command handling without a game server.

mod console;

use crate::console::Console;
use lobby_commands::Config;
use lobby_commands::config::validation;
use std::path::Path;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_PATH: &str = "lobby.toml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration; an explicit path must exist, the default one may not
    let explicit = std::env::args().nth(1);
    let config = match explicit.as_deref() {
        Some(path) => load(path)?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => load(DEFAULT_CONFIG_PATH)?,
        None => {
            info!("No {DEFAULT_CONFIG_PATH} found, using built-in defaults");
            Config::default()
        }
    };

    if let Err(errors) = validation::validate(&config) {
        for e in &errors {
            error!(error = %e, "Invalid configuration");
        }
        anyhow::bail!("configuration has {} error(s)", errors.len());
    }

    info!(
        prefix = %config.commands.prefix,
        feedback = ?config.feedback.style,
        "Starting lobby console"
    );

    let mut console = Console::new(&config);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if let Err(e) = console.run_line(&line).await {
            warn!(line = %line, error = %e, "Console command failed");
        }
    }

    info!("Input closed, shutting down");
    Ok(())
}

fn load(path: &str) -> anyhow::Result<Config> {
    Config::load(path).map_err(|e| {
        error!(path = %path, error = %e, "Failed to load config");
        e.into()
    })
}
