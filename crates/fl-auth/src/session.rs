//! Persisted acting user.
//!
//! `fln auth login` records who is acting; every later command reads it back
//! and hands it to the capability resolver as an explicit [`Actor`].

use std::fs;
use std::path::{Path, PathBuf};

use fl_core::identity::Actor;

use crate::error::AuthError;
use crate::token_store::{state_dir, write_private};

const SESSION_FILE_NAME: &str = "session.json";

/// Persist the acting user to `~/.fieldline/session.json`.
///
/// # Errors
///
/// Returns `AuthError::SessionStoreError` if the file cannot be written.
pub fn store(actor: &Actor) -> Result<(), AuthError> {
    store_at(&session_path()?, actor)
}

/// Load the persisted acting user, if any.
#[must_use]
pub fn load() -> Option<Actor> {
    session_path().ok().and_then(|path| load_at(&path))
}

/// Remove the persisted acting user.
///
/// # Errors
///
/// Returns `AuthError::SessionStoreError` if the file exists but cannot be removed.
pub fn delete() -> Result<(), AuthError> {
    let path = session_path()?;
    if path.exists() {
        fs::remove_file(&path).map_err(|e| {
            AuthError::SessionStoreError(format!("failed to delete {}: {e}", path.display()))
        })?;
    }
    Ok(())
}

fn session_path() -> Result<PathBuf, AuthError> {
    state_dir()
        .map(|dir| dir.join(SESSION_FILE_NAME))
        .map_err(|e| AuthError::SessionStoreError(e.to_string()))
}

pub(crate) fn store_at(path: &Path, actor: &Actor) -> Result<(), AuthError> {
    let json = serde_json::to_string_pretty(actor)
        .map_err(|e| AuthError::SessionStoreError(format!("serialize session: {e}")))?;
    write_private(path, &json).map_err(AuthError::SessionStoreError)
}

pub(crate) fn load_at(path: &Path) -> Option<Actor> {
    let raw = fs::read_to_string(path).ok()?;
    match serde_json::from_str::<Actor>(&raw) {
        Ok(actor) => Some(actor),
        Err(error) => {
            tracing::warn!(%error, path = %path.display(), "ignoring unreadable session file");
            None
        }
    }
}
