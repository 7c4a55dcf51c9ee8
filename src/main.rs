mod client;
mod engine;
mod impls;

use std::{env, io};

use color_eyre::{eyre::eyre, Result};
use log::{info, LevelFilter};

use client::Client;
use engine::{config::StrategyConfig, game::Game};

const LOG_LEVEL_VAR: &str = "DESK_BOT_LOG";

fn main() -> Result<()> {
    color_eyre::install()?;

    // stdout carries our commands, so diagnostics go to stderr
    let level = log_level(env::var(LOG_LEVEL_VAR).ok())?;
    simple_logging::log_to_stderr(level);

    let config = StrategyConfig::from_env()?;
    info!("main: starting with {:?}", config);

    let game = Game::new(config);
    let stdin = io::stdin();
    let mut client = Client::new(stdin.lock(), io::stdout());
    client.run(&game)
}

/// `Info` unless overridden.
fn log_level(raw: Option<String>) -> Result<LevelFilter> {
    match raw {
        Some(raw) => raw
            .trim()
            .parse::<LevelFilter>()
            .map_err(|e| eyre!("reading {LOG_LEVEL_VAR}: {e}")),
        None => Ok(LevelFilter::Info),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_defaults_to_info() {
        assert_eq!(log_level(None).unwrap(), LevelFilter::Info);
        assert_eq!(log_level(Some("trace".into())).unwrap(), LevelFilter::Trace);
    }

    #[test]
    fn bad_log_level_names_the_variable() {
        let err = log_level(Some("chatty".into())).unwrap_err();
        assert!(err.to_string().contains(LOG_LEVEL_VAR));
    }
}
