use anyhow::Context;

use fl_workflow::ActionBar;

use crate::cli::GlobalFlags;
use crate::commands::shared::notify::ConsoleNotifier;
use crate::context::AppContext;
use crate::output::output;

/// Show the session actor's capabilities and the actions offered on `id`.
pub async fn run(id: u64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let actor = ctx.actor()?.clone();
    let bar = ActionBar::load(&ctx.client, ConsoleNotifier::new(flags.quiet), actor, id)
        .await
        .with_context(|| format!("failed to load ticket {id}"))?;
    output(&bar.describe(), flags.format)
}
