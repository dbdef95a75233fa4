//! Response types rendered by `fln` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Activity, Ticket, TicketId};
use crate::enums::TicketStatus;
use crate::identity::Actor;
use crate::permissions::Capabilities;
use crate::transitions::{NextStatus, WorkflowAction, resulting_status};

/// One visible action button.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ActionOption {
    pub action: WorkflowAction,
    pub label: String,
    pub next: NextStatus,
}

/// Response from `fln ticket actions`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TicketActionsResponse {
    pub ticket_id: TicketId,
    pub status: TicketStatus,
    pub actor: Actor,
    pub capabilities: Capabilities,
    pub actions: Vec<ActionOption>,
}

impl TicketActionsResponse {
    /// Resolve capabilities and the visible actions for `actor` on `ticket`.
    #[must_use]
    pub fn build(actor: &Actor, ticket: &Ticket) -> Self {
        let capabilities = Capabilities::resolve(actor, ticket);
        let actions = crate::transitions::available_actions(ticket.status, capabilities)
            .into_iter()
            .map(|action| ActionOption {
                action,
                label: action.label().to_string(),
                next: resulting_status(action, ticket.status).unwrap_or(NextStatus::Opaque),
            })
            .collect();

        Self {
            ticket_id: ticket.id,
            status: ticket.status,
            actor: actor.clone(),
            capabilities,
            actions,
        }
    }
}

/// Response from an action command: the reloaded ticket.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ActionResultResponse {
    pub action: WorkflowAction,
    pub previous_status: TicketStatus,
    pub ticket: Ticket,
}

/// Response from `fln ticket activity`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ActivityListResponse {
    pub ticket_id: TicketId,
    pub activities: Vec<Activity>,
    pub total: usize,
}
