use thiserror::Error;

use fl_client::ClientError;
use fl_core::entities::TicketId;
use fl_core::errors::CoreError;
use fl_core::transitions::WorkflowAction;

#[derive(Debug, Error)]
pub enum DispatchError {
    /// Another action on the same ticket has not settled yet.
    #[error("an action is already in flight for ticket {ticket_id}")]
    Busy { ticket_id: TicketId },

    /// The action is not offered to this actor in the ticket's status.
    #[error(transparent)]
    NotPermitted(CoreError),

    /// The payload failed validation before any request was sent.
    #[error("Failed to {}", .action.failure_phrase())]
    InvalidRequest {
        action: WorkflowAction,
        #[source]
        source: CoreError,
    },

    /// The ticket service rejected the request or could not be reached.
    #[error("Failed to {}", .action.failure_phrase())]
    Request {
        action: WorkflowAction,
        #[source]
        source: ClientError,
    },

    /// The action went through but the ticket could not be fetched again.
    #[error("Failed to reload ticket {ticket_id}")]
    Reload {
        ticket_id: TicketId,
        #[source]
        source: ClientError,
    },
}

impl DispatchError {
    /// Whether the ticket service may have applied the action.
    #[must_use]
    pub const fn request_was_sent(&self) -> bool {
        matches!(self, Self::Request { .. } | Self::Reload { .. })
    }

    /// Whether the dispatcher already raised a failure notification for
    /// this error. Only a busy rejection is silent.
    #[must_use]
    pub const fn was_notified(&self) -> bool {
        !matches!(self, Self::Busy { .. })
    }
}
