//! `rulesplit`: fetch adblock rule lists, deduplicate them and split the
//! result into three parts.
mod cli;
mod config;
mod run;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use rulesplit_logging::{level_for_verbosity, rules_error, LogDestination};

use cli::Cli;
use config::{load_config, AppConfig};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let destination = match &cli.log_file {
        Some(path) => LogDestination::Both(path.clone()),
        None => LogDestination::Terminal,
    };
    rulesplit_logging::initialize(destination, level_for_verbosity(cli.verbose));

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    cli.apply(&mut config);
    config.validate()?;

    if cli.print_config {
        println!("{}", config.to_ron().context("serializing config")?);
        return Ok(ExitCode::SUCCESS);
    }

    let report = run::run(&config).await;
    if !cli.quiet {
        print!("{}", report.status);
    }

    if report.success {
        Ok(ExitCode::SUCCESS)
    } else {
        rules_error!("No output parts could be produced for {:?}", config.base_name);
        Ok(ExitCode::FAILURE)
    }
}
