use anyhow::Context;

use fl_core::requests::ActionRequest;
use fl_workflow::ActionBar;

use crate::cli::GlobalFlags;
use crate::commands::shared::notify::{ConsoleNotifier, into_cli_error};
use crate::context::AppContext;
use crate::output::output;

/// Load the ticket, dispatch one action, print the reloaded ticket.
pub async fn run(
    id: u64,
    request: &ActionRequest,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let actor = ctx.actor()?.clone();
    let bar = ActionBar::load(&ctx.client, ConsoleNotifier::new(flags.quiet), actor, id)
        .await
        .with_context(|| format!("failed to load ticket {id}"))?;

    let result = bar.dispatch(request).await.map_err(into_cli_error)?;
    output(&result, flags.format)
}
