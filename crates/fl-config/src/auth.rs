//! Fallback credentials and session actor.
//!
//! Used only when no token or session was stored through `fln auth login`.

use serde::{Deserialize, Serialize};

use fl_core::enums::UserRole;
use fl_core::identity::Actor;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Bearer token for the ticket service.
    #[serde(default)]
    pub token: String,

    /// Acting user id.
    #[serde(default)]
    pub user_id: Option<u64>,

    /// Acting user role.
    #[serde(default)]
    pub role: Option<UserRole>,
}

impl AuthConfig {
    pub fn has_token(&self) -> bool {
        !self.token.trim().is_empty()
    }

    /// The configured actor, when both id and role are set.
    pub fn actor(&self) -> Option<Actor> {
        match (self.user_id, self.role) {
            (Some(id), Some(role)) if id > 0 => Some(Actor::new(id, role)),
            _ => None,
        }
    }
}
