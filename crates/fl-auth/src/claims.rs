//! Unverified JWT payload decoding.
//!
//! The ticket service issues JWTs carrying the user id and role. The client
//! reads them only to pick the acting user and to warn about expiry; the
//! signature is checked by the service.

use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde_json::Value;

use fl_core::enums::UserRole;
use fl_core::identity::Actor;

use crate::error::AuthError;

/// Claims read from a bearer token payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    pub user_id: Option<u64>,
    pub role: Option<UserRole>,
    pub name: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl TokenClaims {
    /// The acting user, when the token names both id and role.
    #[must_use]
    pub fn actor(&self) -> Option<Actor> {
        match (self.user_id, self.role) {
            (Some(id), Some(role)) => Some(Actor {
                id,
                role,
                name: self.name.clone(),
            }),
            _ => None,
        }
    }

    /// Check if the token is expired or expires within `buffer_secs`.
    /// Tokens without `exp` never expire from the client's point of view.
    #[must_use]
    pub fn is_near_expiry(&self, buffer_secs: i64) -> bool {
        self.expires_at
            .is_some_and(|at| at <= Utc::now() + chrono::TimeDelta::seconds(buffer_secs))
    }
}

/// Decode the payload segment of a JWT.
///
/// # Errors
///
/// Returns `AuthError::InvalidClaims` if the token is not three dot-separated
/// segments or the payload is not base64url JSON.
pub fn decode_claims(jwt: &str) -> Result<TokenClaims, AuthError> {
    let parts: Vec<&str> = jwt.split('.').collect();
    if parts.len() != 3 {
        return Err(AuthError::InvalidClaims("invalid JWT format".into()));
    }
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(parts[1].trim_end_matches('='))
        .map_err(|e| AuthError::InvalidClaims(format!("base64 decode failed: {e}")))?;
    let value: Value = serde_json::from_slice(&payload)
        .map_err(|e| AuthError::InvalidClaims(format!("JSON parse failed: {e}")))?;

    let user_id = ["id", "userId", "sub"]
        .iter()
        .find_map(|key| numeric_claim(&value[*key]));
    let role = value["role"]
        .as_str()
        .and_then(|raw| serde_json::from_value(Value::String(raw.to_ascii_uppercase())).ok());
    let name = value["name"].as_str().map(String::from);
    let expires_at = value["exp"]
        .as_i64()
        .and_then(|exp| DateTime::from_timestamp(exp, 0));

    Ok(TokenClaims {
        user_id,
        role,
        name,
        expires_at,
    })
}

fn numeric_claim(value: &Value) -> Option<u64> {
    value
        .as_u64()
        .or_else(|| value.as_str().and_then(|s| s.parse().ok()))
}
