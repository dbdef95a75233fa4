//! Activity trail reads.

use fl_core::entities::{Activity, ActivityTrail, TicketId};

use crate::http::{check_response, decode};
use crate::{ClientError, TicketClient};

impl TicketClient {
    /// Fetch a ticket's activity trail, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the service answers with
    /// a non-success status, or the body is not a valid list of activities
    /// for this ticket.
    pub async fn list_activities(&self, ticket_id: TicketId) -> Result<ActivityTrail, ClientError> {
        let path = format!("/tickets/{ticket_id}/activities");
        let resp = check_response(self.request(reqwest::Method::GET, &path).send().await?).await?;
        let entries: Vec<Activity> = decode(resp).await?;
        ActivityTrail::from_entries(entries)
            .map_err(|error| ClientError::Parse(error.to_string()))
    }
}
