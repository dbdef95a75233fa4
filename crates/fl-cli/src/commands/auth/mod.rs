mod login;
mod logout;
mod status;

use fl_config::FieldlineConfig;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;

/// Handle `fln auth <subcommand>`.
pub fn handle(
    action: &AuthCommands,
    flags: &GlobalFlags,
    config: &FieldlineConfig,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login::handle(args, flags),
        AuthCommands::Logout => logout::handle(flags),
        AuthCommands::Status => status::handle(flags, config),
    }
}
