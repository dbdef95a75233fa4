use serde::Serialize;

use fl_auth::TokenSource;

use fl_core::enums::UserRole;
use fl_core::identity::Actor;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::commands::shared::parse::parse_enum;
use crate::output::output;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    actor: Option<Actor>,
    token_source: Option<TokenSource>,
    note: Option<String>,
}

pub fn handle(args: &AuthLoginArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let explicit = explicit_actor(args)?;
    let actor = fl_auth::login(&args.token, explicit)?;

    let note = actor.is_none().then(|| {
        String::from(
            "token carries no user id/role; pass --user-id and --role to act on tickets",
        )
    });

    output(
        &AuthLoginResponse {
            authenticated: true,
            actor,
            token_source: fl_auth::token_store::detect_token_source(),
            note,
        },
        flags.format,
    )
}

fn explicit_actor(args: &AuthLoginArgs) -> anyhow::Result<Option<Actor>> {
    match (args.user_id, args.role.as_deref()) {
        (Some(0), _) => anyhow::bail!("--user-id must be a positive user id"),
        (Some(id), Some(role)) => Ok(Some(Actor::new(id, parse_enum::<UserRole>(role, "role")?))),
        (None, None) => Ok(None),
        _ => anyhow::bail!("--user-id and --role must be given together"),
    }
}
