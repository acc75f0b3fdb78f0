#![allow(clippy::print_stdout)]

pub mod args;
pub mod commands;

use crate::args::{Cli, Command};
use anyhow::{Context, Result};
use clap::Parser;
use evohub::domain::config::{AppConfig, LoggingConfig};
use evohub::kernel::config::load_config;
use evohub_logger::{Logger, parse_level};
use std::process::ExitCode;

/// Exit status for a quota check that does not fit.
const EXIT_DENIED: u8 = 2;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config: AppConfig = load_config(cli.config.as_ref()).with_context(|| {
        cli.config.as_ref().map_or_else(
            || "Failed to load configuration".to_owned(),
            |path| format!("Failed to load {}", path.display()),
        )
    })?;

    let _logger = init_logger(&config.logging)?;
    tracing::debug!(file = ?cli.config, boundary = ?config.boundary, "Configuration loaded");

    let state = evohub::init(&config)?;

    let output = match cli.command {
        Command::Resolve(target) => commands::resolve(&state, &target)?,
        Command::Check { target, used, requested } => {
            let (decision, output) = commands::check(&state, &target, used, requested)?;
            println!("{output}");
            return Ok(if decision.is_allowed() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(EXIT_DENIED)
            });
        },
        Command::Table { feature } => commands::table(feature.as_deref())?,
    };

    println!("{output}");

    Ok(ExitCode::SUCCESS)
}

fn init_logger(config: &LoggingConfig) -> Result<Logger> {
    let mut builder = Logger::builder().name("evohub").level(parse_level(&config.level)?);
    if let Some(filter) = &config.env_filter {
        builder = builder.env_filter(filter);
    }

    let logger = match &config.path {
        Some(path) => builder.path(path).json(config.json).init()?,
        None => builder.init()?,
    };

    Ok(logger)
}
