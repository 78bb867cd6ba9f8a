mod cli;
mod commands;
mod prompter;

use std::path::Path;

use anyhow::{Context, Result};
use bmsget_core::Config;
use clap::Parser;
use cli::{Args, Command};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_FILE: &str = "bmsget.toml";

fn main() -> Result<()> {
    let args = Args::parse();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("bmsget_cli=info,bmsget_core=info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = load_config(args.config.as_deref())?;

    match args.command {
        Command::Search { word } => commands::search::run(&config, &word),
        Command::Download { word, destdir } => {
            commands::download::run(&config, &word, destdir.as_deref())
        }
        Command::Install { path, destdir } => {
            commands::install::run(&config, &path, destdir.as_deref())
        }
        Command::Amplify { dir } => commands::amplify::run(&config, &dir),
    }
}

/// An explicitly named config file must load; the implicit one may be
/// absent, in which case built-in defaults apply.
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            Config::load(path).with_context(|| format!("Failed to load config {:?}", path))
        }
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if default.is_file() {
                debug!("loading config from {:?}", default);
                Config::load(default)
                    .with_context(|| format!("Failed to load config {:?}", default))
            } else {
                debug!("no config file, using defaults");
                Ok(Config::default())
            }
        }
    }
}
