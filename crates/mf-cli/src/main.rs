//! mf - movie catalog client
//!
//! Register, log in, browse movies, and keep a list of favorites against
//! the movie API. Output is JSON on stdout.
//!
//! # Examples
//!
//! ```bash
//! # Log in (stores the session under ~/.myflix/session)
//! mf login --username alice --password secret
//!
//! # Browse
//! mf movies list --pretty
//! mf movies get "The Matrix"
//!
//! # Favorites
//! mf favorites add 5f1e...
//! mf favorites check 5f1e...
//! ```

use mf_cli::{Client, cli::Cli, dispatch, logger};
use mf_config::Config;
use mf_session::SessionStore;

use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.api_url.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let log_file = match config.log_file_path() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logger::initialize(&config.logging, log_file) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    info!("Starting mf v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let session_dir = match config.session_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let client = match Client::from_config(&config, SessionStore::open(session_dir)) {
        Ok(client) => client,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e.user_message());
            return ExitCode::FAILURE;
        }
    };

    match dispatch::run(&client, cli.command).await {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

/// Load and validate configuration; `--api-url` wins over file and env.
fn load_config(api_url: Option<&str>) -> mf_config::ConfigErrorResult<Config> {
    let mut config = Config::load()?;
    if let Some(url) = api_url {
        config.api.base_url = url.to_string();
    }
    config.validate()?;
    Ok(config)
}
