use serde::Serialize;

use fl_client::TicketQuery;
use fl_core::entities::Ticket;
use fl_core::enums::{Priority, TicketStatus};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub search: Option<String>,
    pub page: Option<u32>,
}

/// One line of `fln ticket list --format table`.
#[derive(Debug, Serialize)]
struct TicketRow {
    id: u64,
    title: String,
    status: String,
    priority: String,
    customer: String,
    assignee: String,
}

impl From<&Ticket> for TicketRow {
    fn from(ticket: &Ticket) -> Self {
        Self {
            id: ticket.id,
            title: ticket.title.clone(),
            status: ticket.status.to_string(),
            priority: ticket.priority.to_string(),
            customer: ticket.customer.company_name.clone(),
            assignee: ticket.assigned_to.as_ref().map_or_else(
                || String::from("-"),
                |user| user.name.clone().unwrap_or_else(|| user.id.to_string()),
            ),
        }
    }
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let query = TicketQuery {
        status: params
            .status
            .as_deref()
            .map(|raw| parse_enum::<TicketStatus>(raw, "status"))
            .transpose()?,
        priority: params
            .priority
            .as_deref()
            .map(|raw| parse_enum::<Priority>(raw, "priority"))
            .transpose()?,
        search: params.search,
        page: params.page,
        limit: Some(ctx.config.general.effective_limit(flags.limit)),
    };

    let page = ctx.client.list_tickets(&query).await?;
    if flags.format == OutputFormat::Table {
        let rows: Vec<TicketRow> = page.tickets.iter().map(TicketRow::from).collect();
        return output(&rows, flags.format);
    }
    output(&page, flags.format)
}
