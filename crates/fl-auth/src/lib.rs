//! # fl-auth
//!
//! Bearer token storage and session resolution for the `fln` CLI.
//!
//! Tokens live in the OS keychain (`keyring`) with env and file fallbacks.
//! The acting user (id + role) is resolved once into a [`SessionContext`] and
//! passed explicitly to everything that needs it.

pub mod claims;
pub mod error;
pub mod session;
pub mod token_store;

pub use claims::{TokenClaims, decode_claims};
pub use error::AuthError;
pub use token_store::TokenSource;

use fl_config::FieldlineConfig;
use fl_core::identity::Actor;
use serde::Serialize;

/// Where the acting user was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorSource {
    Session,
    Token,
    Config,
}

/// Explicit per-session auth state.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub token: Option<String>,
    pub actor: Actor,
    pub actor_source: ActorSource,
}

/// Resolve the token and acting user from storage and config.
///
/// Token priority: keyring → env → file → `[auth].token`.
/// Actor priority: session file → token claims → `[auth].user_id`/`role`.
///
/// # Errors
///
/// Returns `AuthError::NoSession` when no acting user can be determined.
pub fn resolve_session(config: &FieldlineConfig) -> Result<SessionContext, AuthError> {
    resolve_with(resolve_token(config), session::load(), config)
}

/// Bearer token from storage, falling back to `[auth].token`.
#[must_use]
pub fn resolve_token(config: &FieldlineConfig) -> Option<String> {
    token_store::load().or_else(|| {
        config
            .auth
            .has_token()
            .then(|| config.auth.token.trim().to_string())
    })
}

/// Pure resolution step behind [`resolve_session`].
///
/// # Errors
///
/// Same as [`resolve_session`].
pub fn resolve_with(
    token: Option<String>,
    stored: Option<Actor>,
    config: &FieldlineConfig,
) -> Result<SessionContext, AuthError> {
    let claims = token.as_deref().and_then(|jwt| match decode_claims(jwt) {
        Ok(claims) => Some(claims),
        Err(error) => {
            // Opaque API tokens are fine; they just carry no claims.
            tracing::debug!(%error, "bearer token is not a readable JWT");
            None
        }
    });

    if claims.as_ref().is_some_and(|c| c.is_near_expiry(0)) {
        tracing::warn!("bearer token has expired; the ticket service will reject it");
    }
    if token.is_none() {
        tracing::warn!("no bearer token configured; requests will be sent unauthenticated");
    }

    let (actor, actor_source) = if let Some(actor) = stored {
        (actor, ActorSource::Session)
    } else if let Some(actor) = claims.as_ref().and_then(TokenClaims::actor) {
        (actor, ActorSource::Token)
    } else if let Some(actor) = config.auth.actor() {
        (actor, ActorSource::Config)
    } else {
        return Err(AuthError::NoSession);
    };

    Ok(SessionContext {
        token,
        actor,
        actor_source,
    })
}

/// Store credentials and, when known, the acting user.
///
/// An explicit `actor` wins over the token's claims.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` or `AuthError::SessionStoreError` if
/// persisting fails.
pub fn login(token: &str, actor: Option<Actor>) -> Result<Option<Actor>, AuthError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(AuthError::NotAuthenticated);
    }
    token_store::store(token)?;

    let actor = actor.or_else(|| decode_claims(token).ok().and_then(|c| c.actor()));
    match &actor {
        Some(actor) => session::store(actor)?,
        None => session::delete()?,
    }
    Ok(actor)
}

/// Clear stored credentials and the persisted session.
///
/// # Errors
///
/// Returns `AuthError` if either file cannot be removed.
pub fn logout() -> Result<(), AuthError> {
    token_store::delete()?;
    session::delete()
}
