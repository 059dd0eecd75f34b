//! application entry point

use std::env;
use std::path::Path;
use std::str::FromStr;
use anyhow::Context;
use clap::Parser;
use derive_more::Display;
use log::{info, warn};
use barney_client::client::model::config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_SESSION_PATH, DEFAULT_TIMEOUT_SECS};

mod cli;

const TIMEOUT_PARSING_FAILED_MSG: &str = "failed to parse API_TIMEOUT_SECS";

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // bootstrap
    // a. env
    let env = env::var("APP_ENV")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(Env::Dev); // default dev env if absent

    let dotenv_result = match env {
        Env::Prod | Env::Stg => Ok(()), // set by the shell
        Env::Dev => dotenvy::from_path(Path::new(".env.dev")),
    };

    // b. logging
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    if let Err(e) = dotenv_result {
        warn!("no envs loaded from .env.dev, using defaults, {}", e);
    }

    // c. config
    let timeout_secs = match env::var("API_TIMEOUT_SECS") {
        Ok(v) => v.parse().context(TIMEOUT_PARSING_FAILED_MSG)?,
        Err(_) => DEFAULT_TIMEOUT_SECS,
    };
    let config = ClientConfig::new(
        env::var("API_BASE_URL").unwrap_or(DEFAULT_BASE_URL.to_string()),
        timeout_secs,
        env::var("SESSION_PATH").unwrap_or(DEFAULT_SESSION_PATH.to_string()),
    );

    info!("client is starting in env={}, backend={}", env, config.base_url);

    // d. run
    cli::run(cli::Cli::parse(), config).await
}

#[derive(Debug, Display)]
#[non_exhaustive]
enum Env {
    Dev,
    Stg,
    Prod,
}

impl FromStr for Env {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" => Ok(Self::Dev),
            "stg" => Ok(Self::Stg),
            "prod" => Ok(Self::Prod),
            s => Err(format!("Invalid Env: {s}")),
        }
    }
}
