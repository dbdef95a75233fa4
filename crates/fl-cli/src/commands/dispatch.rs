use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Ticket { action } => commands::ticket::handle(&action, ctx, flags).await,
        Commands::Auth { .. } | Commands::Schema(_) => {
            unreachable!("auth/schema are pre-dispatched in main")
        }
    }
}
