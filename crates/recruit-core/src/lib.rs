pub mod calendar;
pub mod candidate;
pub mod cli;
pub mod commands;
pub mod config;
pub mod datetime;
pub mod filter;
pub mod interviewer;
pub mod messaging;
pub mod render;
pub mod schedule;
pub mod seed;
pub mod stats;
pub mod store;
pub mod template;

use std::ffi::OsString;

use clap::Parser;
use tracing::{debug, info};

#[tracing::instrument(skip_all)]
pub fn run(raw_args: Vec<OsString>) -> anyhow::Result<()> {
    let cli = cli::GlobalCli::parse_from(raw_args);
    cli::init_tracing(cli.verbose, cli.quiet)?;

    info!(
        verbose = cli.verbose,
        quiet = cli.quiet,
        "starting recruit CLI"
    );

    let cfg = config::Config::load(cli.config.as_deref())?;
    datetime::init_timezone(cfg.timezone.as_deref());

    let mut ws = seed::seed_workspace();
    let mut renderer = render::Renderer::new(&cfg);

    let command = cli.command.unwrap_or(cli::Command::Stats);
    debug!("workspace seeded, dispatching");
    commands::dispatch(&mut ws, &mut renderer, command)?;

    info!("done");
    Ok(())
}
