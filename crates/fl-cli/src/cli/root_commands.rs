use clap::{Args, Subcommand};

use crate::cli::subcommands::{AuthCommands, TicketCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Service tickets and their workflow actions.
    Ticket {
        #[command(subcommand)]
        action: TicketCommands,
    },
    /// Authentication and acting user.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Dump the JSON schema of a response or payload type.
    Schema(SchemaArgs),
}

/// Arguments for `fln schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Type name: ticket, activity, actor, action-request, ticket-actions
    pub name: String,
}
