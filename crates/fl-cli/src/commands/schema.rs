use schemars::schema_for;

use fl_core::entities::{Activity, Ticket};
use fl_core::identity::Actor;
use fl_core::requests::ActionRequest;
use fl_core::responses::TicketActionsResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `fln schema <name>`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = match args.name.as_str() {
        "ticket" => schema_for!(Ticket),
        "activity" => schema_for!(Activity),
        "actor" => schema_for!(Actor),
        "action-request" => schema_for!(ActionRequest),
        "ticket-actions" => schema_for!(TicketActionsResponse),
        other => anyhow::bail!(
            "unknown schema '{other}' (expected ticket, activity, actor, action-request, ticket-actions)"
        ),
    };
    output(&schema, flags.format)
}
