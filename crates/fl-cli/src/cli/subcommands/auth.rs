use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Store a bearer token and the acting user.
    Login(AuthLoginArgs),
    /// Clear stored credentials and session.
    Logout,
    /// Show current auth status.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    /// Bearer token issued by the ticket service.
    #[arg(long)]
    pub token: String,
    /// Acting user id (defaults to the token's claims).
    #[arg(long, requires = "role")]
    pub user_id: Option<u64>,
    /// Acting user role: admin, zone-user, service-person.
    #[arg(long, requires = "user_id")]
    pub role: Option<String>,
}
