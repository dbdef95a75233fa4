//! # fl-workflow
//!
//! Executes workflow actions against the ticket service and reconciles the
//! local ticket snapshot.
//!
//! An [`ActionBar`] owns one ticket's last fetched state. Dispatching an
//! action issues exactly one request, then re-fetches on success. Nothing is
//! applied optimistically, so a failure leaves the snapshot as it was.

mod dispatcher;
mod error;
pub mod notify;

pub use dispatcher::ActionBar;
pub use error::DispatchError;
pub use notify::{Notification, Notifier};
