//! The seam between the dispatcher and the ticket service.

use std::future::Future;

use fl_core::entities::{Ticket, TicketId};
use fl_core::requests::ActionRequest;

use crate::{ClientError, TicketClient};

/// Operations the action dispatcher needs from the ticket service.
///
/// [`TicketClient`] is the production implementation; tests substitute an
/// in-memory fake.
pub trait TicketApi: Send + Sync {
    /// Fetch the current state of one ticket.
    fn fetch_ticket(&self, id: TicketId)
    -> impl Future<Output = Result<Ticket, ClientError>> + Send;

    /// Issue the single request for `request` against `ticket`.
    fn execute(
        &self,
        ticket: &Ticket,
        request: &ActionRequest,
    ) -> impl Future<Output = Result<(), ClientError>> + Send;
}

impl TicketApi for TicketClient {
    async fn fetch_ticket(&self, id: TicketId) -> Result<Ticket, ClientError> {
        self.get_ticket(id).await
    }

    async fn execute(&self, ticket: &Ticket, request: &ActionRequest) -> Result<(), ClientError> {
        self.send_action(ticket.id, ticket.status, request).await
    }
}

impl<T: TicketApi> TicketApi for &T {
    fn fetch_ticket(
        &self,
        id: TicketId,
    ) -> impl Future<Output = Result<Ticket, ClientError>> + Send {
        (**self).fetch_ticket(id)
    }

    fn execute(
        &self,
        ticket: &Ticket,
        request: &ActionRequest,
    ) -> impl Future<Output = Result<(), ClientError>> + Send {
        (**self).execute(ticket, request)
    }
}
