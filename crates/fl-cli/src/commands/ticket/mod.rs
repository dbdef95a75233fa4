mod act;
mod actions;
mod activity;
mod get;
mod list;

use fl_core::enums::{PartsStage, VisitOutcome};
use fl_core::requests::ActionRequest;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TicketCommands;
use crate::commands::shared::parse::{parse_datetime, parse_enum};
use crate::context::AppContext;

/// Handle `fln ticket <subcommand>`.
pub async fn handle(
    action: &TicketCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TicketCommands::Get { id } => get::run(*id, ctx, flags).await,
        TicketCommands::List {
            status,
            priority,
            search,
            page,
        } => {
            list::run(
                list::Params {
                    status: status.clone(),
                    priority: priority.clone(),
                    search: search.clone(),
                    page: *page,
                },
                ctx,
                flags,
            )
            .await
        }
        TicketCommands::Actions { id } => actions::run(*id, ctx, flags).await,
        TicketCommands::Activity { id } => activity::run(*id, ctx, flags).await,
        other => {
            let (id, request) = action_request(other)?;
            act::run(id, &request, ctx, flags).await
        }
    }
}

/// Turn a workflow subcommand into the ticket id and typed request.
fn action_request(command: &TicketCommands) -> anyhow::Result<(u64, ActionRequest)> {
    let pair = match command {
        TicketCommands::Assign { id, to } => (*id, ActionRequest::Assign { assigned_to_id: *to }),
        TicketCommands::PlanVisit {
            id,
            service_person,
            date,
            notes,
        } => (
            *id,
            ActionRequest::PlanVisit {
                service_person_id: *service_person,
                visit_date: parse_datetime(date, "date")?,
                notes: notes.clone(),
            },
        ),
        TicketCommands::Start { id, notes } => (
            *id,
            ActionRequest::StartWork {
                notes: notes.clone(),
            },
        ),
        TicketCommands::Resolve { id, notes } => (
            *id,
            ActionRequest::MarkResolved {
                notes: notes.clone(),
            },
        ),
        TicketCommands::ApprovePo { id, notes } => (
            *id,
            ActionRequest::ApprovePo {
                notes: notes.clone(),
            },
        ),
        TicketCommands::Close { id, notes } => (
            *id,
            ActionRequest::Close {
                notes: notes.clone(),
            },
        ),
        TicketCommands::CompleteVisit { id, outcome, notes } => (
            *id,
            ActionRequest::CompleteVisit {
                outcome: parse_enum::<VisitOutcome>(outcome, "outcome")?,
                notes: notes.clone(),
            },
        ),
        TicketCommands::UpdateParts { id, stage, notes } => (
            *id,
            ActionRequest::UpdateParts {
                stage: parse_enum::<PartsStage>(stage, "stage")?,
                notes: notes.clone(),
            },
        ),
        TicketCommands::Note { id, text } => (*id, ActionRequest::AddNote { note: text.clone() }),
        TicketCommands::Get { .. }
        | TicketCommands::List { .. }
        | TicketCommands::Actions { .. }
        | TicketCommands::Activity { .. } => {
            anyhow::bail!("not a workflow action command")
        }
    };
    Ok(pair)
}

#[cfg(test)]
mod tests {
    use fl_core::transitions::WorkflowAction;

    use super::*;

    #[test]
    fn complete_visit_parses_outcome() {
        let (id, request) = action_request(&TicketCommands::CompleteVisit {
            id: 5,
            outcome: "needs-follow-up".into(),
            notes: None,
        })
        .expect("should build");
        assert_eq!(id, 5);
        assert_eq!(
            request,
            ActionRequest::CompleteVisit {
                outcome: VisitOutcome::NeedsFollowUp,
                notes: None,
            }
        );
    }

    #[test]
    fn update_parts_rejects_unknown_stage() {
        let err = action_request(&TicketCommands::UpdateParts {
            id: 5,
            stage: "shipped".into(),
            notes: None,
        })
        .expect_err("should fail");
        assert!(err.to_string().contains("invalid stage 'shipped'"));
    }

    #[test]
    fn plan_visit_requires_rfc3339_date() {
        let bad = TicketCommands::PlanVisit {
            id: 5,
            service_person: 42,
            date: "next tuesday".into(),
            notes: None,
        };
        assert!(action_request(&bad).is_err());
    }

    #[test]
    fn each_action_command_maps_to_its_action() {
        let cases = [
            (TicketCommands::Assign { id: 1, to: 2 }, WorkflowAction::Assign),
            (TicketCommands::Start { id: 1, notes: None }, WorkflowAction::StartWork),
            (TicketCommands::Resolve { id: 1, notes: None }, WorkflowAction::MarkResolved),
            (TicketCommands::ApprovePo { id: 1, notes: None }, WorkflowAction::ApprovePo),
            (TicketCommands::Close { id: 1, notes: None }, WorkflowAction::Close),
            (
                TicketCommands::Note {
                    id: 1,
                    text: "hi".into(),
                },
                WorkflowAction::AddNote,
            ),
        ];
        for (command, expected) in cases {
            let (_, request) = action_request(&command).expect("should build");
            assert_eq!(request.action(), expected);
        }
    }

    #[test]
    fn read_commands_are_not_actions() {
        assert!(action_request(&TicketCommands::Get { id: 1 }).is_err());
    }
}
