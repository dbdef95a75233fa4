//! Entity structs for the Fieldline ticket domain.
//!
//! Field names follow the ticket service's camelCase JSON. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for roundtrip and schema checks.

mod activity;
mod parties;
mod ticket;

pub use activity::{Activity, ActivityTrail, GeoPoint};
pub use parties::{AssetRef, ContactRef, CustomerRef, UserRef, ZoneRef};
pub use ticket::{Ticket, TicketId, UserId};
