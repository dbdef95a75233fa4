use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use fl_client::TicketApi;
use fl_core::entities::{Ticket, TicketId};
use fl_core::errors::CoreError;
use fl_core::identity::Actor;
use fl_core::permissions::Capabilities;
use fl_core::requests::ActionRequest;
use fl_core::responses::{ActionResultResponse, TicketActionsResponse};
use fl_core::transitions::{WorkflowAction, actions_for};

use crate::error::DispatchError;
use crate::notify::{Notification, Notifier};

/// The action controls for one ticket.
///
/// Holds the acting user and the last successfully fetched ticket. At most
/// one action is in flight at a time; a second dispatch while one is pending
/// is refused without touching the network.
pub struct ActionBar<A, N> {
    api: A,
    notifier: N,
    actor: Actor,
    ticket: Mutex<Ticket>,
    busy: AtomicBool,
}

impl<A: TicketApi, N: Notifier> ActionBar<A, N> {
    pub const fn new(api: A, notifier: N, actor: Actor, ticket: Ticket) -> Self {
        Self {
            api,
            notifier,
            actor,
            ticket: Mutex::new(ticket),
            busy: AtomicBool::new(false),
        }
    }

    /// Fetch `ticket_id` and build a bar around it.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Reload`] if the ticket cannot be fetched.
    pub async fn load(
        api: A,
        notifier: N,
        actor: Actor,
        ticket_id: TicketId,
    ) -> Result<Self, DispatchError> {
        let ticket = api
            .fetch_ticket(ticket_id)
            .await
            .map_err(|source| DispatchError::Reload { ticket_id, source })?;
        Ok(Self::new(api, notifier, actor, ticket))
    }

    /// Copy of the last successfully fetched ticket.
    pub fn ticket(&self) -> Ticket {
        self.snapshot().clone()
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities::resolve(&self.actor, &self.snapshot())
    }

    /// Actions currently visible to the actor, in table order.
    pub fn actions(&self) -> Vec<WorkflowAction> {
        actions_for(&self.actor, &self.snapshot())
    }

    pub fn describe(&self) -> TicketActionsResponse {
        TicketActionsResponse::build(&self.actor, &self.snapshot())
    }

    /// Whether a request is outstanding. Controls should be disabled while true.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Run one action: check it is offered, send it, then re-fetch.
    ///
    /// Every outcome except [`DispatchError::Busy`] raises exactly one
    /// notification. The snapshot changes only after a successful re-fetch.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::Busy`] if another action is pending.
    /// - [`DispatchError::NotPermitted`] if the action is not visible.
    /// - [`DispatchError::InvalidRequest`] if the payload fails validation.
    /// - [`DispatchError::Request`] if the ticket service call fails.
    /// - [`DispatchError::Reload`] if the follow-up fetch fails.
    pub async fn dispatch(
        &self,
        request: &ActionRequest,
    ) -> Result<ActionResultResponse, DispatchError> {
        let action = request.action();
        let current = self.ticket();

        let Some(_guard) = BusyGuard::acquire(&self.busy) else {
            tracing::debug!(ticket_id = current.id, %action, "dispatch refused while busy");
            return Err(DispatchError::Busy {
                ticket_id: current.id,
            });
        };

        if !actions_for(&self.actor, &current).contains(&action) {
            let error = CoreError::InvalidTransition {
                ticket_id: current.id,
                action,
                status: current.status,
            };
            self.fail(action, &error);
            return Err(DispatchError::NotPermitted(error));
        }

        if let Err(source) = request.validate() {
            self.fail(action, &source);
            return Err(DispatchError::InvalidRequest { action, source });
        }

        if let Err(source) = self.api.execute(&current, request).await {
            self.fail(action, &source);
            return Err(DispatchError::Request { action, source });
        }

        let reloaded = match self.api.fetch_ticket(current.id).await {
            Ok(ticket) => ticket,
            Err(source) => {
                tracing::warn!(ticket_id = current.id, %action, %source, "reload after action failed");
                self.notifier.notify(Notification::Failure(
                    "Failed to reload ticket".to_string(),
                ));
                return Err(DispatchError::Reload {
                    ticket_id: current.id,
                    source,
                });
            }
        };

        *self.snapshot() = reloaded.clone();
        tracing::info!(
            ticket_id = current.id,
            %action,
            from = %current.status,
            to = %reloaded.status,
            "action applied"
        );
        self.notifier.notify(Notification::Success(format!(
            "{action}: ticket {} is now {}",
            reloaded.id, reloaded.status
        )));

        Ok(ActionResultResponse {
            action,
            previous_status: current.status,
            ticket: reloaded,
        })
    }

    fn fail(&self, action: WorkflowAction, cause: &dyn std::error::Error) {
        tracing::warn!(%action, error = %cause, "action failed");
        self.notifier.notify(Notification::Failure(format!(
            "Failed to {}",
            action.failure_phrase()
        )));
    }

    fn snapshot(&self) -> MutexGuard<'_, Ticket> {
        // A panic mid-update cannot leave a half-written ticket; take it as is.
        self.ticket.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Holds the busy flag for the duration of one dispatch.
struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
