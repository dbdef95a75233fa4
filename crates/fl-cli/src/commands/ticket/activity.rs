use serde::Serialize;

use fl_core::entities::Activity;
use fl_core::responses::ActivityListResponse;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

/// One line of `fln ticket activity --format table`.
#[derive(Debug, Serialize)]
struct ActivityRow {
    at: String,
    kind: String,
    user: String,
    change: String,
    description: String,
}

impl From<&Activity> for ActivityRow {
    fn from(entry: &Activity) -> Self {
        let change = match (entry.from_status, entry.to_status) {
            (Some(from), Some(to)) => format!("{from} → {to}"),
            (None, Some(to)) => to.to_string(),
            _ => String::from("-"),
        };
        Self {
            at: entry.created_at.format("%Y-%m-%d %H:%M").to_string(),
            kind: entry.kind.to_string(),
            user: entry
                .user
                .name
                .clone()
                .unwrap_or_else(|| entry.user.id.to_string()),
            change,
            description: entry.description.clone().unwrap_or_default(),
        }
    }
}

pub async fn run(id: u64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let trail = ctx.client.list_activities(id).await?;
    if flags.format == OutputFormat::Table {
        let rows: Vec<ActivityRow> = trail.iter().map(ActivityRow::from).collect();
        return output(&rows, flags.format);
    }
    output(
        &ActivityListResponse {
            ticket_id: id,
            total: trail.len(),
            activities: trail.as_slice().to_vec(),
        },
        flags.format,
    )
}
