use anyhow::Context;

use fl_auth::{AuthError, SessionContext};
use fl_client::TicketClient;
use fl_config::FieldlineConfig;
use fl_core::identity::Actor;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: FieldlineConfig,
    pub client: TicketClient,
    pub session: Option<SessionContext>,
}

impl AppContext {
    /// Resolve the session and build the ticket service client.
    pub fn init(config: FieldlineConfig) -> anyhow::Result<Self> {
        let session = match fl_auth::resolve_session(&config) {
            Ok(session) => Some(session),
            Err(AuthError::NoSession) => {
                tracing::debug!("no acting user resolved; read-only commands still work");
                None
            }
            Err(error) => return Err(error.into()),
        };

        let token = session
            .as_ref()
            .map_or_else(|| fl_auth::resolve_token(&config), |s| s.token.clone());

        let client = TicketClient::new(&config.api, token).context(
            "failed to build ticket service client (set FIELDLINE_API__BASE_URL or [api].base_url)",
        )?;

        Ok(Self {
            config,
            client,
            session,
        })
    }

    /// The acting user, required by every workflow command.
    pub fn actor(&self) -> anyhow::Result<&Actor> {
        self.session
            .as_ref()
            .map(|session| &session.actor)
            .ok_or_else(|| AuthError::NoSession.into())
    }
}
