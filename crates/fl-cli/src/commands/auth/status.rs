use serde::Serialize;

use fl_auth::{ActorSource, TokenSource};
use fl_config::FieldlineConfig;
use fl_core::identity::Actor;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    token_source: Option<TokenSource>,
    expires_at: Option<String>,
    expired: bool,
    actor: Option<Actor>,
    actor_source: Option<ActorSource>,
    api_configured: bool,
    note: Option<String>,
}

pub fn handle(flags: &GlobalFlags, config: &FieldlineConfig) -> anyhow::Result<()> {
    let token = fl_auth::resolve_token(config);
    let claims = token
        .as_deref()
        .and_then(|jwt| fl_auth::decode_claims(jwt).ok());
    let token_source = fl_auth::token_store::detect_token_source()
        .or_else(|| config.auth.has_token().then_some(TokenSource::Config));

    let (actor, actor_source, note) = match fl_auth::resolve_session(config) {
        Ok(session) => (Some(session.actor), Some(session.actor_source), None),
        Err(error) => (None, None, Some(error.to_string())),
    };

    output(
        &AuthStatusResponse {
            authenticated: token.is_some(),
            token_source,
            expires_at: claims
                .as_ref()
                .and_then(|c| c.expires_at)
                .map(|at| at.to_rfc3339()),
            expired: claims.as_ref().is_some_and(|c| c.is_near_expiry(0)),
            actor,
            actor_source,
            api_configured: config.api.is_configured(),
            note,
        },
        flags.format,
    )
}
