//! Status transition table.
//!
//! For each ticket status, the ordered workflow actions it offers and the
//! status each action leads to. Actions are then filtered by the capability
//! flags from [`crate::permissions`]. The table only hides what a role could
//! never do; the ticket service re-validates every request.
//!
//! ```text
//! OPEN                   assign                                → ASSIGNED
//! ASSIGNED               start work | plan visit               → IN_PROGRESS | ONSITE_VISIT_PLANNED
//! IN_PROGRESS            plan visit | resolve                  → ONSITE_VISIT_PLANNED | RESOLVED
//! ONSITE_VISIT_PLANNED   complete visit                        → (decided by the service)
//! RESOLVED               close                                 → CLOSED
//! PO_NEEDED              approve po                            → (decided by the service)
//! SPARE_PARTS_NEEDED     update parts                          → (decided by the service)
//! any                    add note                              → unchanged
//! ```

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entities::Ticket;
use crate::enums::TicketStatus;
use crate::enums::TicketStatus as S;
use crate::identity::Actor;
use crate::permissions::{Capabilities, Capability};

use WorkflowAction as A;

// ---------------------------------------------------------------------------
// WorkflowAction
// ---------------------------------------------------------------------------

/// A user-triggerable step in the ticket workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkflowAction {
    Assign,
    StartWork,
    PlanVisit,
    CompleteVisit,
    MarkResolved,
    ApprovePo,
    UpdateParts,
    Close,
    AddNote,
}

impl WorkflowAction {
    pub const ALL: [Self; 9] = [
        Self::Assign,
        Self::StartWork,
        Self::PlanVisit,
        Self::CompleteVisit,
        Self::MarkResolved,
        Self::ApprovePo,
        Self::UpdateParts,
        Self::Close,
        Self::AddNote,
    ];

    /// Capability gating this action. `None` means always offered.
    #[must_use]
    pub const fn required_capability(self) -> Option<Capability> {
        match self {
            Self::Assign => Some(Capability::Assign),
            Self::StartWork | Self::CompleteVisit | Self::MarkResolved => {
                Some(Capability::CompleteVisit)
            }
            Self::PlanVisit => Some(Capability::PlanVisit),
            Self::ApprovePo => Some(Capability::ApprovePo),
            Self::UpdateParts => Some(Capability::UpdateSpareParts),
            Self::Close => Some(Capability::Close),
            Self::AddNote => None,
        }
    }

    /// Button label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Assign => "Assign",
            Self::StartWork => "Start Work",
            Self::PlanVisit => "Plan Visit",
            Self::CompleteVisit => "Complete Visit",
            Self::MarkResolved => "Mark Resolved",
            Self::ApprovePo => "Approve PO",
            Self::UpdateParts => "Update Parts",
            Self::Close => "Close",
            Self::AddNote => "Add Note",
        }
    }

    /// Completes the sentence "Failed to ...".
    #[must_use]
    pub const fn failure_phrase(self) -> &'static str {
        match self {
            Self::Assign => "assign ticket",
            Self::StartWork => "start work",
            Self::PlanVisit => "plan onsite visit",
            Self::CompleteVisit => "complete onsite visit",
            Self::MarkResolved => "mark ticket resolved",
            Self::ApprovePo => "approve PO",
            Self::UpdateParts => "update spare parts",
            Self::Close => "close ticket",
            Self::AddNote => "add note",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Assign => "ASSIGN",
            Self::StartWork => "START_WORK",
            Self::PlanVisit => "PLAN_VISIT",
            Self::CompleteVisit => "COMPLETE_VISIT",
            Self::MarkResolved => "MARK_RESOLVED",
            Self::ApprovePo => "APPROVE_PO",
            Self::UpdateParts => "UPDATE_PARTS",
            Self::Close => "CLOSE",
            Self::AddNote => "ADD_NOTE",
        }
    }
}

impl fmt::Display for WorkflowAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// NextStatus / Transition
// ---------------------------------------------------------------------------

/// Where an action leads, as far as the client can tell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", content = "status", rename_all = "snake_case")]
pub enum NextStatus {
    /// The action requests this exact status.
    Known(TicketStatus),
    /// The status does not change.
    Unchanged,
    /// The service picks the resulting status; re-fetch to learn it.
    Opaque,
}

/// One row of the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub action: WorkflowAction,
    pub next: NextStatus,
}

const fn to(action: WorkflowAction, status: TicketStatus) -> Transition {
    Transition {
        action,
        next: NextStatus::Known(status),
    }
}

const fn opaque(action: WorkflowAction) -> Transition {
    Transition {
        action,
        next: NextStatus::Opaque,
    }
}

const ADD_NOTE: Transition = Transition {
    action: WorkflowAction::AddNote,
    next: NextStatus::Unchanged,
};

const FROM_OPEN: &[Transition] = &[to(A::Assign, S::Assigned)];
const FROM_ASSIGNED: &[Transition] = &[
    to(A::StartWork, S::InProgress),
    to(A::PlanVisit, S::OnsiteVisitPlanned),
];
const FROM_IN_PROGRESS: &[Transition] = &[
    to(A::PlanVisit, S::OnsiteVisitPlanned),
    to(A::MarkResolved, S::Resolved),
];
const FROM_VISIT_UNDERWAY: &[Transition] = &[opaque(A::CompleteVisit)];
const FROM_VISIT_PENDING: &[Transition] = &[to(A::PlanVisit, S::OnsiteVisitPlanned)];
const FROM_VISIT_COMPLETED: &[Transition] = &[
    to(A::PlanVisit, S::OnsiteVisitPlanned),
    to(A::MarkResolved, S::Resolved),
];
const FROM_RESOLVED: &[Transition] = &[to(A::Close, S::Closed)];
const FROM_PO_NEEDED: &[Transition] = &[opaque(A::ApprovePo)];
const FROM_PARTS_PENDING: &[Transition] = &[opaque(A::UpdateParts)];
const RESUME_WORK: &[Transition] = &[to(A::StartWork, S::InProgress)];

/// Status-changing transitions defined for `status`, in display order.
///
/// Add Note is not listed here; it is appended for every status by
/// [`available_actions`].
#[must_use]
pub const fn transitions_from(status: TicketStatus) -> &'static [Transition] {
    match status {
        S::Open => FROM_OPEN,
        S::Assigned => FROM_ASSIGNED,
        S::InProgress => FROM_IN_PROGRESS,
        S::OnsiteVisitPlanned
        | S::OnsiteVisitStarted
        | S::OnsiteVisitReached
        | S::OnsiteVisitInProgress => FROM_VISIT_UNDERWAY,
        S::OnsiteVisitPending => FROM_VISIT_PENDING,
        S::OnsiteVisitCompleted => FROM_VISIT_COMPLETED,
        S::OnsiteVisitResolved | S::Resolved => FROM_RESOLVED,
        S::PoNeeded => FROM_PO_NEEDED,
        S::PoApproved | S::SparePartsDelivered => RESUME_WORK,
        S::SparePartsNeeded | S::SparePartsBooked => FROM_PARTS_PENDING,
        S::Closed | S::Cancelled => &[],
    }
}

/// Every row offered for `status`, Add Note last, before capability filtering.
pub fn table_rows(status: TicketStatus) -> impl Iterator<Item = Transition> {
    transitions_from(status)
        .iter()
        .copied()
        .chain(std::iter::once(ADD_NOTE))
}

/// Ordered actions available for `status` under `capabilities`.
#[must_use]
pub fn available_actions(status: TicketStatus, capabilities: Capabilities) -> Vec<WorkflowAction> {
    table_rows(status)
        .filter(|row| {
            row.action
                .required_capability()
                .is_none_or(|capability| capabilities.allows(capability))
        })
        .map(|row| row.action)
        .collect()
}

/// Resolve capabilities and list the actions `actor` may see on `ticket`.
#[must_use]
pub fn actions_for(actor: &Actor, ticket: &Ticket) -> Vec<WorkflowAction> {
    available_actions(ticket.status, Capabilities::resolve(actor, ticket))
}

/// Outcome of `action` from `current`, or `None` when the table has no such
/// row.
#[must_use]
pub fn resulting_status(action: WorkflowAction, current: TicketStatus) -> Option<NextStatus> {
    table_rows(current)
        .find(|row| row.action == action)
        .map(|row| row.next)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::enums::UserRole;

    fn all_caps() -> Capabilities {
        Capabilities {
            can_assign: true,
            can_plan_visit: true,
            can_complete_visit: true,
            can_request_po: true,
            can_approve_po: true,
            can_update_spare_parts: true,
            can_close: true,
        }
    }

    #[test]
    fn add_note_is_always_last() {
        for status in TicketStatus::ALL {
            let actions = available_actions(status, Capabilities::default());
            assert_eq!(actions.last(), Some(&WorkflowAction::AddNote), "{status}");
        }
    }

    #[test]
    fn terminal_statuses_offer_only_add_note() {
        for status in [TicketStatus::Closed, TicketStatus::Cancelled] {
            assert_eq!(
                available_actions(status, all_caps()),
                vec![WorkflowAction::AddNote]
            );
        }
    }

    #[test]
    fn no_capabilities_means_only_add_note() {
        for status in TicketStatus::ALL {
            assert_eq!(
                available_actions(status, Capabilities::default()),
                vec![WorkflowAction::AddNote]
            );
        }
    }

    #[test]
    fn in_progress_order_follows_table() {
        assert_eq!(
            available_actions(TicketStatus::InProgress, all_caps()),
            vec![
                WorkflowAction::PlanVisit,
                WorkflowAction::MarkResolved,
                WorkflowAction::AddNote,
            ]
        );
    }

    #[test]
    fn request_po_flag_alone_exposes_nothing() {
        let caps = Capabilities {
            can_request_po: true,
            ..Capabilities::default()
        };
        for status in TicketStatus::ALL {
            assert_eq!(available_actions(status, caps), vec![WorkflowAction::AddNote]);
        }
    }

    #[test]
    fn open_cannot_jump_to_closed() {
        for status in [TicketStatus::Open, TicketStatus::Assigned, TicketStatus::InProgress] {
            assert_eq!(resulting_status(WorkflowAction::Close, status), None);
        }
    }

    #[test]
    fn resulting_status_classifies_rows() {
        assert_eq!(
            resulting_status(WorkflowAction::Assign, TicketStatus::Open),
            Some(NextStatus::Known(TicketStatus::Assigned))
        );
        assert_eq!(
            resulting_status(WorkflowAction::CompleteVisit, TicketStatus::OnsiteVisitPlanned),
            Some(NextStatus::Opaque)
        );
        assert_eq!(
            resulting_status(WorkflowAction::ApprovePo, TicketStatus::PoNeeded),
            Some(NextStatus::Opaque)
        );
        assert_eq!(
            resulting_status(WorkflowAction::AddNote, TicketStatus::Closed),
            Some(NextStatus::Unchanged)
        );
    }

    #[test]
    fn every_row_capability_is_consistent() {
        // Each action maps to one capability regardless of the source status.
        for status in TicketStatus::ALL {
            for row in transitions_from(status) {
                assert!(row.action.required_capability().is_some(), "{status}");
            }
        }
    }

    #[test]
    fn zone_user_sees_close_on_resolved() {
        let caps = Capabilities::for_role(UserRole::ZoneUser, false);
        assert_eq!(
            available_actions(TicketStatus::Resolved, caps),
            vec![WorkflowAction::Close, WorkflowAction::AddNote]
        );
    }
}
