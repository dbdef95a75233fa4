use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::parties::{AssetRef, ContactRef, CustomerRef, UserRef, ZoneRef};
use crate::enums::{Priority, TicketStatus};

pub type TicketId = u64;
pub type UserId = u64;

/// A unit of service work moving through the status lifecycle.
///
/// Tickets are never deleted; they end in `CLOSED` or `CANCELLED`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: TicketId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: TicketStatus,
    pub priority: Priority,
    pub customer: CustomerRef,
    #[serde(default)]
    pub asset: Option<AssetRef>,
    #[serde(default)]
    pub contact: Option<ContactRef>,
    #[serde(default)]
    pub assigned_to: Option<UserRef>,
    #[serde(default)]
    pub zone: Option<ZoneRef>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Ticket {
    /// Id of the assigned service person, if any.
    #[must_use]
    pub fn assignee_id(&self) -> Option<UserId> {
        self.assigned_to.as_ref().map(|user| user.id)
    }
}
