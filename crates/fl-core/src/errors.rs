//! Cross-cutting error types for Fieldline.
//!
//! Transport errors live in `fl-client` and dispatch errors in `fl-workflow`.
//! The binary folds everything into `anyhow`.

use thiserror::Error;

use crate::enums::TicketStatus;
use crate::transitions::WorkflowAction;

#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// The action is not offered for the ticket's current status and the
    /// acting user's capabilities.
    #[error("Action '{action}' is not available for ticket {ticket_id} in status {status}")]
    InvalidTransition {
        ticket_id: u64,
        action: WorkflowAction,
        status: TicketStatus,
    },

    /// Data failed validation (payload shape, ranges, blank text).
    #[error("Validation error: {0}")]
    Validation(String),
}
