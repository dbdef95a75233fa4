//! Status, priority, role, and activity enums for Fieldline.
//!
//! Wire-facing enums serialize as `SCREAMING_SNAKE_CASE`, matching the ticket
//! service's JSON. `as_str()` returns the same form for display and request
//! bodies.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// TicketStatus
// ---------------------------------------------------------------------------

/// Lifecycle status of a service ticket.
///
/// ```text
/// open → assigned → in_progress → resolved → closed
///                 → onsite_visit_planned → onsite_visit_{started,reached,in_progress}
///                                        → onsite_visit_{resolved,pending,completed}
///        in_progress → po_needed → po_approved → in_progress
///        spare_parts_needed → spare_parts_booked → spare_parts_delivered → in_progress
/// any → cancelled
/// ```
///
/// The graph is an affordance only. The ticket service decides the status a
/// request actually lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    Open,
    Assigned,
    InProgress,
    OnsiteVisitPlanned,
    OnsiteVisitStarted,
    OnsiteVisitReached,
    OnsiteVisitInProgress,
    OnsiteVisitResolved,
    OnsiteVisitPending,
    OnsiteVisitCompleted,
    PoNeeded,
    PoApproved,
    SparePartsNeeded,
    SparePartsBooked,
    SparePartsDelivered,
    Resolved,
    Closed,
    Cancelled,
}

impl TicketStatus {
    pub const ALL: [Self; 18] = [
        Self::Open,
        Self::Assigned,
        Self::InProgress,
        Self::OnsiteVisitPlanned,
        Self::OnsiteVisitStarted,
        Self::OnsiteVisitReached,
        Self::OnsiteVisitInProgress,
        Self::OnsiteVisitResolved,
        Self::OnsiteVisitPending,
        Self::OnsiteVisitCompleted,
        Self::PoNeeded,
        Self::PoApproved,
        Self::SparePartsNeeded,
        Self::SparePartsBooked,
        Self::SparePartsDelivered,
        Self::Resolved,
        Self::Closed,
        Self::Cancelled,
    ];

    /// Closed and cancelled tickets never move again.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Closed | Self::Cancelled)
    }

    #[must_use]
    pub const fn is_onsite_visit(self) -> bool {
        matches!(
            self,
            Self::OnsiteVisitPlanned
                | Self::OnsiteVisitStarted
                | Self::OnsiteVisitReached
                | Self::OnsiteVisitInProgress
                | Self::OnsiteVisitResolved
                | Self::OnsiteVisitPending
                | Self::OnsiteVisitCompleted
        )
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Assigned => "ASSIGNED",
            Self::InProgress => "IN_PROGRESS",
            Self::OnsiteVisitPlanned => "ONSITE_VISIT_PLANNED",
            Self::OnsiteVisitStarted => "ONSITE_VISIT_STARTED",
            Self::OnsiteVisitReached => "ONSITE_VISIT_REACHED",
            Self::OnsiteVisitInProgress => "ONSITE_VISIT_IN_PROGRESS",
            Self::OnsiteVisitResolved => "ONSITE_VISIT_RESOLVED",
            Self::OnsiteVisitPending => "ONSITE_VISIT_PENDING",
            Self::OnsiteVisitCompleted => "ONSITE_VISIT_COMPLETED",
            Self::PoNeeded => "PO_NEEDED",
            Self::PoApproved => "PO_APPROVED",
            Self::SparePartsNeeded => "SPARE_PARTS_NEEDED",
            Self::SparePartsBooked => "SPARE_PARTS_BOOKED",
            Self::SparePartsDelivered => "SPARE_PARTS_DELIVERED",
            Self::Resolved => "RESOLVED",
            Self::Closed => "CLOSED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Ticket urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// UserRole
// ---------------------------------------------------------------------------

/// Role of a dashboard user.
///
/// The role decides which workflow actions are shown, not which ones the
/// ticket service finally accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    ZoneUser,
    ServicePerson,
}

impl UserRole {
    pub const ALL: [Self; 3] = [Self::Admin, Self::ZoneUser, Self::ServicePerson];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::ZoneUser => "ZONE_USER",
            Self::ServicePerson => "SERVICE_PERSON",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ActivityKind
// ---------------------------------------------------------------------------

/// What an activity entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityKind {
    StatusChange,
    Note,
    Assignment,
    VisitPlanned,
}

impl ActivityKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StatusChange => "STATUS_CHANGE",
            Self::Note => "NOTE",
            Self::Assignment => "ASSIGNMENT",
            Self::VisitPlanned => "VISIT_PLANNED",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// VisitOutcome
// ---------------------------------------------------------------------------

/// Result reported when an onsite visit is completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VisitOutcome {
    Resolved,
    NeedsFollowUp,
}

impl VisitOutcome {
    /// Status submitted to the ticket service for this outcome.
    #[must_use]
    pub const fn requested_status(self) -> TicketStatus {
        match self {
            Self::Resolved => TicketStatus::OnsiteVisitResolved,
            Self::NeedsFollowUp => TicketStatus::OnsiteVisitPending,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Resolved => "RESOLVED",
            Self::NeedsFollowUp => "NEEDS_FOLLOW_UP",
        }
    }
}

impl fmt::Display for VisitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PartsStage
// ---------------------------------------------------------------------------

/// Progress reported by an "Update Parts" action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PartsStage {
    Booked,
    Delivered,
}

impl PartsStage {
    #[must_use]
    pub const fn requested_status(self) -> TicketStatus {
        match self {
            Self::Booked => TicketStatus::SparePartsBooked,
            Self::Delivered => TicketStatus::SparePartsDelivered,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Booked => "BOOKED",
            Self::Delivered => "DELIVERED",
        }
    }
}

impl fmt::Display for PartsStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
