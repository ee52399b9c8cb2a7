//! Actor directory listing.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use crate::output::print_output;

use super::CommandContext;

#[derive(Debug, Serialize, Tabled)]
struct ActorRow {
    #[tabled(rename = "Name")]
    name: String,
}

pub fn run(ctx: CommandContext) -> Result<()> {
    let store = ctx.load_store()?;
    let rows: Vec<ActorRow> = store
        .all_actor_names()
        .into_iter()
        .map(|name| ActorRow { name })
        .collect();
    print_output(&rows, ctx.format);
    Ok(())
}
