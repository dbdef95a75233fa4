//! Bearer token persistence.
//!
//! A token is looked up in three tiers, first hit wins:
//!
//! | Tier | Location |
//! |---|---|
//! | keyring | service `fieldline-cli` (or `FIELDLINE_KEYRING_SERVICE`), entry `bearer-token` |
//! | env | `FIELDLINE_AUTH__TOKEN` |
//! | file | `~/.fieldline/credentials`, mode 0600 |
//!
//! `fln auth login` writes to the keyring and only uses the file when no
//! keychain is reachable (headless Linux, containers).

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::AuthError;

const KEYRING_ENTRY: &str = "bearer-token";
const TOKEN_ENV: &str = "FIELDLINE_AUTH__TOKEN";

/// Where the active bearer token came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenSource {
    Keyring,
    Env,
    File,
    /// `[auth].token` in the config files.
    Config,
}

fn keyring_entry() -> Option<keyring::Entry> {
    let service =
        std::env::var("FIELDLINE_KEYRING_SERVICE").unwrap_or_else(|_| "fieldline-cli".into());
    match keyring::Entry::new(&service, KEYRING_ENTRY) {
        Ok(entry) => Some(entry),
        Err(error) => {
            tracing::debug!(%error, "keyring unavailable");
            None
        }
    }
}

fn non_blank(raw: String) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// First stored token and the tier it was found in.
fn lookup() -> Option<(TokenSource, String)> {
    let tiers: [(TokenSource, fn() -> Option<String>); 3] = [
        (TokenSource::Keyring, || {
            keyring_entry()?.get_password().ok().and_then(non_blank)
        }),
        (TokenSource::Env, || std::env::var(TOKEN_ENV).ok().and_then(non_blank)),
        (TokenSource::File, || read_token_file(&credentials_path().ok()?)),
    ];
    tiers
        .into_iter()
        .find_map(|(source, read)| read().map(|token| (source, token)))
}

/// Persist `token`, preferring the OS keychain.
///
/// # Errors
///
/// Returns [`AuthError::TokenStoreError`] when the keychain is unusable and
/// the credentials file cannot be written either.
pub fn store(token: &str) -> Result<(), AuthError> {
    if let Some(entry) = keyring_entry() {
        match entry.set_password(token) {
            Ok(()) => return Ok(()),
            Err(error) => tracing::warn!(%error, "keyring write failed, using credentials file"),
        }
    }
    write_private(&credentials_path()?, token).map_err(AuthError::TokenStoreError)
}

/// The stored bearer token, if any tier has one.
#[must_use]
pub fn load() -> Option<String> {
    lookup().map(|(_, token)| token)
}

/// Tier the current token would be loaded from.
#[must_use]
pub fn detect_token_source() -> Option<TokenSource> {
    lookup().map(|(source, _)| source)
}

/// Forget the stored token in the keychain and the credentials file.
///
/// # Errors
///
/// Returns [`AuthError::TokenStoreError`] if the credentials file exists but
/// cannot be removed.
pub fn delete() -> Result<(), AuthError> {
    if let Some(entry) = keyring_entry()
        && let Err(error) = entry.delete_credential()
    {
        tracing::debug!(%error, "no keyring credential to delete");
    }

    let path = credentials_path()?;
    match fs::remove_file(&path) {
        Ok(()) => Ok(()),
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(error) => Err(AuthError::TokenStoreError(format!(
            "remove {}: {error}",
            path.display()
        ))),
    }
}

/// `~/.fieldline`, home of the credentials and session files.
pub(crate) fn state_dir() -> Result<PathBuf, AuthError> {
    dirs::home_dir()
        .map(|home| home.join(".fieldline"))
        .ok_or_else(|| AuthError::TokenStoreError("cannot locate the home directory".into()))
}

fn credentials_path() -> Result<PathBuf, AuthError> {
    state_dir().map(|dir| dir.join("credentials"))
}

/// Write `contents` to `path`, owner-only on Unix.
pub(crate) fn write_private(path: &Path, contents: &str) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("mkdir {}: {e}", parent.display()))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(error) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                tracing::warn!(%error, dir = %parent.display(), "could not restrict state dir");
            }
        }
    }
    fs::write(path, contents).map_err(|e| format!("write {}: {e}", path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))
            .map_err(|e| format!("chmod {}: {e}", path.display()))?;
    }

    Ok(())
}

fn read_token_file(path: &Path) -> Option<String> {
    fs::read_to_string(path).ok().and_then(non_blank)
}
