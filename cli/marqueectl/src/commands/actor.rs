//! Actor return summary command.

use anyhow::Result;
use clap::Args;
use marquee_returns::{ActorReturnCalculator, ActorReturnSummary};
use serde::Serialize;
use tabled::Tabled;

use crate::output::print_single;

use super::CommandContext;

#[derive(Debug, Args)]
pub struct ActorCommand {
    /// Actor name (case-insensitive).
    name: String,
}

#[derive(Debug, Serialize, Tabled)]
struct ActorReturnRow {
    #[tabled(rename = "Actor")]
    actor: String,

    #[tabled(rename = "Movies")]
    movies: usize,

    #[tabled(rename = "Zero return")]
    zero_return: usize,

    #[tabled(rename = "Total")]
    total_return: String,

    #[tabled(rename = "Average")]
    average_return: String,

    #[tabled(rename = "Average (with zeros)")]
    average_return_with_zeros: String,
}

impl From<ActorReturnSummary> for ActorReturnRow {
    fn from(summary: ActorReturnSummary) -> Self {
        Self {
            actor: summary.actor,
            movies: summary.total_appearances,
            zero_return: summary.zero_return_count,
            total_return: summary.total_return,
            average_return: summary.average_return,
            average_return_with_zeros: summary.average_return_with_zeros,
        }
    }
}

impl ActorCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let calculator = ActorReturnCalculator::new(ctx.load_store()?);
        let summary = calculator.compute(&self.name)?;
        print_single(&ActorReturnRow::from(summary), ctx.format);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use marquee_returns::ReturnError;

    use super::*;
    use crate::output::OutputFormat;

    #[test]
    fn test_actor_runs_on_sample_dataset() {
        let cmd = ActorCommand {
            name: "leonardo dicaprio".to_string(),
        };
        cmd.run(CommandContext::sample(OutputFormat::Json)).unwrap();
    }

    #[test]
    fn test_actor_row_from_summary() {
        let store = CommandContext::sample(OutputFormat::Table).load_store().unwrap();
        let summary = ActorReturnCalculator::new(store).compute("Tom Hanks").unwrap();
        let row = ActorReturnRow::from(summary);
        assert_eq!(row.movies, 3);
        assert_eq!(row.zero_return, 0);
        assert_eq!(row.total_return, "3,070.43%");
        assert_eq!(row.average_return_with_zeros, "1,023.48%");
    }

    #[test]
    fn test_unknown_actor_surfaces_not_found() {
        let cmd = ActorCommand {
            name: "Meryl Streep".to_string(),
        };
        let err = cmd.run(CommandContext::sample(OutputFormat::Table)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ReturnError>(),
            Some(ReturnError::NotFound { .. })
        ));
    }
}
