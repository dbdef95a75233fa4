use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated: run `fln auth login`")]
    NotAuthenticated,

    #[error("no acting user: run `fln auth login --user-id <id> --role <role>`")]
    NoSession,

    #[error("invalid token claims: {0}")]
    InvalidClaims(String),

    #[error("token store error: {0}")]
    TokenStoreError(String),

    #[error("session store error: {0}")]
    SessionStoreError(String),
}
