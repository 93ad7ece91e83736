mod cli;
mod command;
mod config;
mod report;

use crate::config::{Config, load_config};

use std::io::stderr;

use anyhow::Result;
use clap::Parser;
use tracing::{Level, debug};

fn main() -> Result<()> {
    let args = cli::Arguments::parse();
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).with_writer(stderr).init();

    let config = match &args.config {
        Some(path) => {
            debug!("loading config from {}", path.display());
            load_config(path)?
        }
        None => Config::default(),
    };
    let format = args.output.unwrap_or(config.output);

    let report = command::execute(&args.command, &config)?;
    println!("{}", report.render(format)?);
    Ok(())
}
