use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Ticket, UserId};
use crate::enums::UserRole;

/// The user acting on tickets in this session.
///
/// Built once at session start by `fl-auth` and passed explicitly to the
/// capability resolver. Nothing in the workflow reads the role from ambient
/// state.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    pub id: UserId,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Actor {
    #[must_use]
    pub const fn new(id: UserId, role: UserRole) -> Self {
        Self {
            id,
            role,
            name: None,
        }
    }

    /// Whether this actor is the ticket's assigned service person.
    ///
    /// False when the ticket has no assignee.
    #[must_use]
    pub fn is_assignee_of(&self, ticket: &Ticket) -> bool {
        ticket.assignee_id() == Some(self.id)
    }
}
