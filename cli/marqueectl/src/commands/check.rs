//! Dataset sanity check.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{print_single, print_warning};

use super::CommandContext;

#[derive(Debug, Serialize, Tabled)]
struct CheckReport {
    #[tabled(rename = "Cast rows")]
    cast_appearances: usize,

    #[tabled(rename = "Return rows")]
    movie_returns: usize,

    #[tabled(rename = "Directory rows")]
    directory_entries: usize,

    #[tabled(rename = "Cast actors")]
    distinct_cast_actors: usize,

    #[tabled(rename = "Not in directory")]
    directory_mismatches: usize,
}

pub fn run(ctx: CommandContext) -> Result<()> {
    let store = ctx.load_store()?;
    let stats = store.stats();
    let report = CheckReport {
        cast_appearances: stats.cast_appearances,
        movie_returns: stats.movie_returns,
        directory_entries: stats.directory_entries,
        distinct_cast_actors: stats.distinct_cast_actors,
        directory_mismatches: store.directory_mismatches(),
    };

    print_single(&report, ctx.format);
    if report.directory_mismatches > 0 {
        print_warning(&format!(
            "{} cast actor(s) are missing from the actor directory",
            report.directory_mismatches
        ));
    }
    Ok(())
}
