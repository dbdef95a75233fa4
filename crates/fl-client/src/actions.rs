//! Workflow writes.
//!
//! Assign and Plan Visit have dedicated endpoints; every other action is a
//! `PUT /tickets/{id}/status` carrying the requested status and the notes as
//! `comments`.

use chrono::SecondsFormat;
use serde_json::{Value, json};

use fl_core::entities::TicketId;
use fl_core::enums::TicketStatus;
use fl_core::requests::ActionRequest;

use crate::http::check_response;
use crate::{ClientError, TicketClient};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Put,
    Post,
}

impl From<Verb> for reqwest::Method {
    fn from(verb: Verb) -> Self {
        match verb {
            Verb::Put => Self::PUT,
            Verb::Post => Self::POST,
        }
    }
}

/// The single request an action turns into.
#[derive(Debug, Clone, PartialEq)]
pub struct WireCall {
    pub verb: Verb,
    pub path: String,
    pub body: Value,
}

/// Map an action onto its endpoint and JSON body.
///
/// `current` is the ticket's last fetched status; Add Note resubmits it.
#[must_use]
pub fn wire_call(ticket_id: TicketId, current: TicketStatus, request: &ActionRequest) -> WireCall {
    match request {
        ActionRequest::Assign { assigned_to_id } => WireCall {
            verb: Verb::Post,
            path: format!("/tickets/{ticket_id}/assign"),
            body: json!({ "assignedToId": assigned_to_id }),
        },
        ActionRequest::PlanVisit {
            service_person_id,
            visit_date,
            ..
        } => {
            let mut body = json!({
                "servicePersonId": service_person_id,
                "visitDate": visit_date.to_rfc3339_opts(SecondsFormat::Secs, true),
            });
            if let Some(notes) = request.notes() {
                body["notes"] = json!(notes);
            }
            WireCall {
                verb: Verb::Post,
                path: format!("/tickets/{ticket_id}/plan-onsite-visit"),
                body,
            }
        }
        _ => {
            let status = request.requested_status(current).unwrap_or(current);
            let mut body = json!({ "status": status });
            if let Some(notes) = request.notes() {
                body["comments"] = json!(notes);
            }
            WireCall {
                verb: Verb::Put,
                path: format!("/tickets/{ticket_id}/status"),
                body,
            }
        }
    }
}

impl TicketClient {
    /// Send one workflow action. The response body is not read; callers
    /// re-fetch the ticket afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the service answers
    /// with a non-success status.
    pub async fn send_action(
        &self,
        ticket_id: TicketId,
        current: TicketStatus,
        request: &ActionRequest,
    ) -> Result<(), ClientError> {
        let call = wire_call(ticket_id, current, request);
        check_response(
            self.request(call.verb.into(), &call.path)
                .json(&call.body)
                .send()
                .await?,
        )
        .await?;
        tracing::debug!(ticket_id, action = %request.action(), "action accepted by ticket service");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use fl_core::enums::{PartsStage, VisitOutcome};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn assign_posts_assignee() {
        let call = wire_call(
            12,
            TicketStatus::Open,
            &ActionRequest::Assign { assigned_to_id: 42 },
        );
        assert_eq!(call.verb, Verb::Post);
        assert_eq!(call.path, "/tickets/12/assign");
        assert_eq!(call.body, json!({ "assignedToId": 42 }));
    }

    #[test]
    fn plan_visit_posts_schedule() {
        let request = ActionRequest::PlanVisit {
            service_person_id: 42,
            visit_date: Utc.with_ymd_and_hms(2026, 4, 1, 9, 30, 0).unwrap(),
            notes: Some(" bring spare relay ".into()),
        };
        let call = wire_call(12, TicketStatus::Assigned, &request);
        assert_eq!(call.path, "/tickets/12/plan-onsite-visit");
        assert_eq!(
            call.body,
            json!({
                "servicePersonId": 42,
                "visitDate": "2026-04-01T09:30:00Z",
                "notes": "bring spare relay",
            })
        );
    }

    #[test]
    fn status_actions_put_requested_status() {
        let cases = [
            (ActionRequest::StartWork { notes: None }, "IN_PROGRESS"),
            (ActionRequest::MarkResolved { notes: None }, "RESOLVED"),
            (ActionRequest::ApprovePo { notes: None }, "PO_APPROVED"),
            (ActionRequest::Close { notes: None }, "CLOSED"),
            (
                ActionRequest::CompleteVisit {
                    outcome: VisitOutcome::NeedsFollowUp,
                    notes: None,
                },
                "ONSITE_VISIT_PENDING",
            ),
            (
                ActionRequest::UpdateParts {
                    stage: PartsStage::Booked,
                    notes: None,
                },
                "SPARE_PARTS_BOOKED",
            ),
        ];
        for (request, status) in cases {
            let call = wire_call(3, TicketStatus::InProgress, &request);
            assert_eq!(call.verb, Verb::Put);
            assert_eq!(call.path, "/tickets/3/status");
            assert_eq!(call.body, json!({ "status": status }), "{request:?}");
        }
    }

    #[test]
    fn add_note_resubmits_current_status_with_comment() {
        let call = wire_call(
            3,
            TicketStatus::Closed,
            &ActionRequest::AddNote {
                note: "customer confirmed fix".into(),
            },
        );
        assert_eq!(
            call.body,
            json!({ "status": "CLOSED", "comments": "customer confirmed fix" })
        );
    }

    #[test]
    fn notes_travel_as_comments() {
        let call = wire_call(
            3,
            TicketStatus::Resolved,
            &ActionRequest::Close {
                notes: Some("signed off".into()),
            },
        );
        assert_eq!(
            call.body,
            json!({ "status": "CLOSED", "comments": "signed off" })
        );
    }
}
