//! Role permission resolver.
//!
//! Maps an acting user and a ticket to the capability flags that gate the
//! workflow actions. Pure and deterministic; safe to call on every render.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entities::Ticket;
use crate::enums::UserRole;
use crate::identity::Actor;

/// A single gate in the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum Capability {
    Assign,
    PlanVisit,
    CompleteVisit,
    RequestPo,
    ApprovePo,
    UpdateSpareParts,
    Close,
}

impl Capability {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Assign => "canAssign",
            Self::PlanVisit => "canPlanVisit",
            Self::CompleteVisit => "canCompleteVisit",
            Self::RequestPo => "canRequestPO",
            Self::ApprovePo => "canApprovePO",
            Self::UpdateSpareParts => "canUpdateSpareParts",
            Self::Close => "canClose",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability flags for one (actor, ticket) pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct Capabilities {
    pub can_assign: bool,
    pub can_plan_visit: bool,
    pub can_complete_visit: bool,
    #[serde(rename = "canRequestPO")]
    pub can_request_po: bool,
    #[serde(rename = "canApprovePO")]
    pub can_approve_po: bool,
    pub can_update_spare_parts: bool,
    pub can_close: bool,
}

impl Capabilities {
    /// Resolve the flags for `actor` acting on `ticket`.
    #[must_use]
    pub fn resolve(actor: &Actor, ticket: &Ticket) -> Self {
        Self::for_role(actor.role, actor.is_assignee_of(ticket))
    }

    /// Flag table keyed by role and ticket ownership.
    ///
    /// `is_assignee` must be false when the ticket has no assignee; every
    /// ownership-dependent flag is then false too.
    #[must_use]
    pub const fn for_role(role: UserRole, is_assignee: bool) -> Self {
        let admin = matches!(role, UserRole::Admin);
        let zone_user = matches!(role, UserRole::ZoneUser);
        let service_person = matches!(role, UserRole::ServicePerson);

        let can_assign = admin || zone_user;
        let can_complete_visit = service_person && is_assignee;

        Self {
            can_assign,
            can_plan_visit: can_assign || service_person,
            can_complete_visit,
            can_request_po: can_complete_visit,
            can_approve_po: admin,
            can_update_spare_parts: service_person || admin,
            can_close: zone_user || admin,
        }
    }

    #[must_use]
    pub const fn allows(self, capability: Capability) -> bool {
        match capability {
            Capability::Assign => self.can_assign,
            Capability::PlanVisit => self.can_plan_visit,
            Capability::CompleteVisit => self.can_complete_visit,
            Capability::RequestPo => self.can_request_po,
            Capability::ApprovePo => self.can_approve_po,
            Capability::UpdateSpareParts => self.can_update_spare_parts,
            Capability::Close => self.can_close,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn admin_flags() {
        assert_eq!(
            Capabilities::for_role(UserRole::Admin, false),
            Capabilities {
                can_assign: true,
                can_plan_visit: true,
                can_complete_visit: false,
                can_request_po: false,
                can_approve_po: true,
                can_update_spare_parts: true,
                can_close: true,
            }
        );
    }

    #[test]
    fn zone_user_flags() {
        assert_eq!(
            Capabilities::for_role(UserRole::ZoneUser, false),
            Capabilities {
                can_assign: true,
                can_plan_visit: true,
                can_complete_visit: false,
                can_request_po: false,
                can_approve_po: false,
                can_update_spare_parts: false,
                can_close: true,
            }
        );
    }

    #[test]
    fn service_person_ownership_gates_completion() {
        let owner = Capabilities::for_role(UserRole::ServicePerson, true);
        let other = Capabilities::for_role(UserRole::ServicePerson, false);

        assert!(owner.can_complete_visit);
        assert!(owner.can_request_po);
        assert!(!other.can_complete_visit);
        assert!(!other.can_request_po);

        // Planning is open to any service person.
        assert!(owner.can_plan_visit);
        assert!(other.can_plan_visit);
        assert!(!other.can_assign);
        assert!(!other.can_close);
        assert!(!other.can_approve_po);
    }

    #[test]
    fn ownership_never_grants_completion_to_managers() {
        assert!(!Capabilities::for_role(UserRole::Admin, true).can_complete_visit);
        assert!(!Capabilities::for_role(UserRole::ZoneUser, true).can_complete_visit);
    }

    #[test]
    fn allows_matches_fields() {
        let caps = Capabilities::for_role(UserRole::ServicePerson, true);
        assert!(caps.allows(Capability::CompleteVisit));
        assert!(caps.allows(Capability::UpdateSpareParts));
        assert!(!caps.allows(Capability::Close));
    }

    #[test]
    fn serializes_with_flag_names() {
        let json = serde_json::to_value(Capabilities::for_role(UserRole::Admin, false)).unwrap();
        assert_eq!(json["canApprovePO"], true);
        assert_eq!(json["canRequestPO"], false);
        assert_eq!(json["canUpdateSpareParts"], true);
    }
}
