//! Typed payloads for each workflow action.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::UserId;
use crate::enums::{PartsStage, TicketStatus, VisitOutcome};
use crate::errors::CoreError;
use crate::transitions::WorkflowAction;

/// A chosen action together with the data it needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "action", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionRequest {
    Assign {
        assigned_to_id: UserId,
    },
    StartWork {
        notes: Option<String>,
    },
    PlanVisit {
        service_person_id: UserId,
        visit_date: DateTime<Utc>,
        notes: Option<String>,
    },
    CompleteVisit {
        outcome: VisitOutcome,
        notes: Option<String>,
    },
    MarkResolved {
        notes: Option<String>,
    },
    ApprovePo {
        notes: Option<String>,
    },
    UpdateParts {
        stage: PartsStage,
        notes: Option<String>,
    },
    Close {
        notes: Option<String>,
    },
    AddNote {
        note: String,
    },
}

impl ActionRequest {
    #[must_use]
    pub const fn action(&self) -> WorkflowAction {
        match self {
            Self::Assign { .. } => WorkflowAction::Assign,
            Self::StartWork { .. } => WorkflowAction::StartWork,
            Self::PlanVisit { .. } => WorkflowAction::PlanVisit,
            Self::CompleteVisit { .. } => WorkflowAction::CompleteVisit,
            Self::MarkResolved { .. } => WorkflowAction::MarkResolved,
            Self::ApprovePo { .. } => WorkflowAction::ApprovePo,
            Self::UpdateParts { .. } => WorkflowAction::UpdateParts,
            Self::Close { .. } => WorkflowAction::Close,
            Self::AddNote { .. } => WorkflowAction::AddNote,
        }
    }

    /// Free text sent alongside the request, trimmed, `None` when blank.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        let raw = match self {
            Self::Assign { .. } => None,
            Self::AddNote { note } => Some(note.as_str()),
            Self::StartWork { notes }
            | Self::PlanVisit { notes, .. }
            | Self::CompleteVisit { notes, .. }
            | Self::MarkResolved { notes }
            | Self::ApprovePo { notes }
            | Self::UpdateParts { notes, .. }
            | Self::Close { notes } => notes.as_deref(),
        };
        raw.map(str::trim).filter(|text| !text.is_empty())
    }

    /// Status submitted through the status endpoint.
    ///
    /// `None` for Assign and Plan Visit, which have endpoints of their own.
    /// Add Note resubmits `current` so the status stays put.
    #[must_use]
    pub const fn requested_status(&self, current: TicketStatus) -> Option<TicketStatus> {
        match self {
            Self::Assign { .. } | Self::PlanVisit { .. } => None,
            Self::StartWork { .. } => Some(TicketStatus::InProgress),
            Self::CompleteVisit { outcome, .. } => Some(outcome.requested_status()),
            Self::MarkResolved { .. } => Some(TicketStatus::Resolved),
            Self::ApprovePo { .. } => Some(TicketStatus::PoApproved),
            Self::UpdateParts { stage, .. } => Some(stage.requested_status()),
            Self::Close { .. } => Some(TicketStatus::Closed),
            Self::AddNote { .. } => Some(current),
        }
    }

    /// Reject payloads that can never succeed, before any network call.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] for a zero user id or a blank note.
    pub fn validate(&self) -> Result<(), CoreError> {
        match self {
            Self::Assign { assigned_to_id: 0 } => Err(CoreError::Validation(
                "assignee id must be a positive user id".into(),
            )),
            Self::PlanVisit {
                service_person_id: 0,
                ..
            } => Err(CoreError::Validation(
                "service person id must be a positive user id".into(),
            )),
            Self::AddNote { note } if note.trim().is_empty() => {
                Err(CoreError::Validation("note must not be blank".into()))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_matches_variant() {
        let request = ActionRequest::UpdateParts {
            stage: PartsStage::Delivered,
            notes: None,
        };
        assert_eq!(request.action(), WorkflowAction::UpdateParts);
        assert_eq!(
            request.requested_status(TicketStatus::SparePartsBooked),
            Some(TicketStatus::SparePartsDelivered)
        );
    }

    #[test]
    fn add_note_keeps_current_status() {
        let request = ActionRequest::AddNote {
            note: "customer asked for a call back".into(),
        };
        assert_eq!(
            request.requested_status(TicketStatus::Closed),
            Some(TicketStatus::Closed)
        );
        assert_eq!(request.notes(), Some("customer asked for a call back"));
    }

    #[test]
    fn assign_and_plan_visit_have_no_status() {
        let assign = ActionRequest::Assign { assigned_to_id: 4 };
        let plan = ActionRequest::PlanVisit {
            service_person_id: 4,
            visit_date: Utc::now(),
            notes: None,
        };
        assert_eq!(assign.requested_status(TicketStatus::Open), None);
        assert_eq!(plan.requested_status(TicketStatus::Assigned), None);
    }

    #[test]
    fn validate_rejects_blank_note_and_zero_ids() {
        assert!(ActionRequest::AddNote { note: "  ".into() }.validate().is_err());
        assert!(ActionRequest::Assign { assigned_to_id: 0 }.validate().is_err());
        assert!(
            ActionRequest::PlanVisit {
                service_person_id: 0,
                visit_date: Utc::now(),
                notes: None,
            }
            .validate()
            .is_err()
        );
        assert!(ActionRequest::Close { notes: None }.validate().is_ok());
    }

    #[test]
    fn blank_notes_are_dropped() {
        let request = ActionRequest::MarkResolved {
            notes: Some("   ".into()),
        };
        assert_eq!(request.notes(), None);
    }
}
