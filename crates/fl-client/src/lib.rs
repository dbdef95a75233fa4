//! # fl-client
//!
//! HTTP client for the ticket service REST API.
//!
//! Reads:
//! - `GET /tickets/{id}`
//! - `GET /tickets?status=&priority=&page=&limit=`
//! - `GET /tickets/{id}/activities`
//!
//! Workflow writes:
//! - `PUT /tickets/{id}/status`
//! - `POST /tickets/{id}/assign`
//! - `POST /tickets/{id}/plan-onsite-visit`
//!
//! Every request carries `Authorization: Bearer <token>` when a token is
//! known. Non-2xx answers all surface as [`ClientError`]; nothing is retried.

pub mod actions;
pub mod activities;
pub mod api;
pub mod tickets;

mod error;
mod http;

pub use actions::{Verb, WireCall, wire_call};
pub use api::TicketApi;
pub use error::ClientError;
pub use tickets::{Pagination, TicketPage, TicketQuery};

use std::time::Duration;

use fl_config::ApiConfig;

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for one ticket service.
#[derive(Debug, Clone)]
pub struct TicketClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl TicketClient {
    /// Build a client from `[api]` configuration and an optional bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if the base URL is missing or malformed
    /// and [`ClientError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(api: &ApiConfig, token: Option<String>) -> Result<Self, ClientError> {
        let base_url = api.normalized_base_url()?;
        let http = reqwest::Client::builder()
            .user_agent(api.user_agent.as_str())
            .timeout(Duration::from_secs(api.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url,
            token: token.filter(|t| !t.trim().is_empty()),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub const fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        tracing::debug!(%method, path, "ticket service request");
        let builder = self.http.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    #[test]
    fn new_normalizes_base_url() {
        let client = TicketClient::new(&api("https://svc.example.com/api/"), None).unwrap();
        assert_eq!(client.base_url(), "https://svc.example.com/api");
        assert_eq!(client.url("/tickets/5"), "https://svc.example.com/api/tickets/5");
    }

    #[test]
    fn new_requires_base_url() {
        let err = TicketClient::new(&ApiConfig::default(), None).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn blank_token_is_dropped() {
        let client = TicketClient::new(&api("http://localhost:5000"), Some("  ".into())).unwrap();
        assert!(!client.has_token());
    }

    #[test]
    fn bearer_header_is_attached() {
        let client =
            TicketClient::new(&api("http://localhost:5000"), Some("tok_abc".into())).unwrap();
        let request = client
            .request(reqwest::Method::GET, "/tickets/1")
            .build()
            .unwrap();
        assert_eq!(
            request.headers()[reqwest::header::AUTHORIZATION],
            "Bearer tok_abc"
        );
        assert_eq!(request.url().as_str(), "http://localhost:5000/tickets/1");
    }
}
