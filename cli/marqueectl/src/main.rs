//! marqueectl (mq) - offline CLI for the marquee dataset
//!
//! Loads the same CSV files as the API server and answers the same queries
//! locally, which is handy for checking a dataset before deploying it.

use anyhow::Result;
use clap::Parser;

mod commands;
mod error;
mod output;

use commands::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = cli.run() {
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
