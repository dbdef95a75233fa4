//! # fl-core
//!
//! Core types for Fieldline, the field-service ticket workflow client.
//!
//! - Entity structs for tickets, users, and the activity trail
//! - Status, priority, and role enums
//! - The role permission resolver (capability flags per actor and ticket)
//! - The status transition table that turns flags into visible actions
//! - Typed action payloads and CLI response types
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;
pub mod permissions;
pub mod requests;
pub mod responses;
pub mod transitions;
