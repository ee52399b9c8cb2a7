//! CLI commands.

mod actor;
mod actors;
mod check;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use marquee_dataset::{DatasetPaths, DatasetStore};

use crate::output::OutputFormat;

/// marquee CLI - query actor returns from a local dataset.
#[derive(Debug, Parser)]
#[command(name = "mq")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, default_value = "table")]
    format: String,

    /// Directory holding the dataset CSV files.
    #[arg(long, global = true, env = "MARQUEE_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the return summary of one actor.
    Actor(actor::ActorCommand),

    /// List every actor in the directory.
    Actors,

    /// Load the dataset and report what it contains.
    Check,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let ctx = CommandContext {
            format: OutputFormat::parse(&self.format),
            data_dir: self.data_dir,
        };

        match self.command {
            Commands::Actor(cmd) => cmd.run(ctx),
            Commands::Actors => actors::run(ctx),
            Commands::Check => check::run(ctx),
        }
    }
}

/// Context shared by all commands.
#[derive(Debug)]
pub struct CommandContext {
    pub format: OutputFormat,
    pub data_dir: PathBuf,
}

impl CommandContext {
    /// Load the dataset from the configured directory.
    pub fn load_store(&self) -> Result<Arc<DatasetStore>> {
        let store = DatasetStore::load(&DatasetPaths::in_dir(&self.data_dir))
            .with_context(|| format!("loading dataset from {}", self.data_dir.display()))?;
        Ok(Arc::new(store))
    }
}

#[cfg(test)]
impl CommandContext {
    /// Context over the sample dataset shipped in `data/`.
    pub fn sample(format: OutputFormat) -> Self {
        Self {
            format,
            data_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data"),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_actor_with_global_flags() {
        let cli = Cli::try_parse_from([
            "mq",
            "actor",
            "Tom Hanks",
            "--format",
            "json",
            "--data-dir",
            "/srv/marquee",
        ])
        .unwrap();
        assert_eq!(cli.format, "json");
        assert_eq!(cli.data_dir, PathBuf::from("/srv/marquee"));
        assert!(matches!(cli.command, Commands::Actor(_)));
    }

    #[test]
    fn test_load_store_reads_sample_dataset() {
        let store = CommandContext::sample(OutputFormat::Table).load_store().unwrap();
        assert_eq!(store.stats().directory_entries, 9);
    }

    #[test]
    fn test_load_store_missing_dir_is_dataset_error() {
        let ctx = CommandContext {
            format: OutputFormat::Table,
            data_dir: PathBuf::from("/nonexistent/marquee"),
        };
        let err = ctx.load_store().unwrap_err();
        assert!(err.downcast_ref::<marquee_dataset::DatasetError>().is_some());
    }

    #[rstest]
    #[case(OutputFormat::Table)]
    #[case(OutputFormat::Json)]
    fn test_actors_and_check_run_on_sample_dataset(#[case] format: OutputFormat) {
        actors::run(CommandContext::sample(format)).unwrap();
        check::run(CommandContext::sample(format)).unwrap();
    }

    #[test]
    fn test_actor_requires_name() {
        assert!(Cli::try_parse_from(["mq", "actor"]).is_err());
    }
}
