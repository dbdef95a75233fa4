//! Ticket reads.

use serde::{Deserialize, Serialize};

use fl_core::entities::{Ticket, TicketId};
use fl_core::enums::{Priority, TicketStatus};

use crate::http::{check_response, decode};
use crate::{ClientError, TicketClient};

/// Filters for `GET /tickets`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketQuery {
    pub status: Option<TicketStatus>,
    pub priority: Option<Priority>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl TicketQuery {
    /// Query string including the leading `?`, or empty when no filter is set.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut pairs = Vec::new();
        if let Some(status) = self.status {
            pairs.push(format!("status={}", status.as_str()));
        }
        if let Some(priority) = self.priority {
            pairs.push(format!("priority={}", priority.as_str()));
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.trim().is_empty()) {
            pairs.push(format!("search={}", urlencoding::encode(search.trim())));
        }
        if let Some(page) = self.page {
            pairs.push(format!("page={page}"));
        }
        if let Some(limit) = self.limit {
            pairs.push(format!("limit={limit}"));
        }
        if pairs.is_empty() {
            String::new()
        } else {
            format!("?{}", pairs.join("&"))
        }
    }
}

/// Paging metadata returned alongside a ticket list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    #[serde(default)]
    pub total_pages: u32,
}

/// One page of tickets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketPage {
    pub tickets: Vec<Ticket>,
    pub pagination: Option<Pagination>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TicketListBody {
    Paged {
        tickets: Vec<Ticket>,
        #[serde(default)]
        pagination: Option<Pagination>,
    },
    List(Vec<Ticket>),
}

impl From<TicketListBody> for TicketPage {
    fn from(body: TicketListBody) -> Self {
        match body {
            TicketListBody::Paged {
                tickets,
                pagination,
            } => Self {
                tickets,
                pagination,
            },
            TicketListBody::List(tickets) => Self {
                tickets,
                pagination: None,
            },
        }
    }
}

impl TicketClient {
    /// Fetch one ticket.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the service answers with
    /// a non-success status, or the body is not a ticket.
    pub async fn get_ticket(&self, id: TicketId) -> Result<Ticket, ClientError> {
        let path = format!("/tickets/{id}");
        let resp = check_response(self.request(reqwest::Method::GET, &path).send().await?).await?;
        decode(resp).await
    }

    /// List tickets matching `query`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the service answers with
    /// a non-success status, or the body is not a ticket list.
    pub async fn list_tickets(&self, query: &TicketQuery) -> Result<TicketPage, ClientError> {
        let path = format!("/tickets{}", query.to_query_string());
        let resp = check_response(self.request(reqwest::Method::GET, &path).send().await?).await?;
        let body: TicketListBody = decode(resp).await?;
        Ok(body.into())
    }
}
