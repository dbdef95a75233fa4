use clap::Subcommand;

/// Ticket commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TicketCommands {
    /// Get a ticket by ID.
    Get { id: u64 },
    /// List tickets.
    List {
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        page: Option<u32>,
    },
    /// Show capabilities and the actions offered to the acting user.
    Actions { id: u64 },
    /// Assign the ticket to a service person.
    Assign {
        id: u64,
        /// User id of the assignee.
        #[arg(long)]
        to: u64,
    },
    /// Schedule an onsite visit.
    PlanVisit {
        id: u64,
        #[arg(long)]
        service_person: u64,
        /// Visit time, RFC 3339 (e.g. 2026-04-01T09:30:00Z).
        #[arg(long)]
        date: String,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Start work on the ticket.
    Start {
        id: u64,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Mark the ticket resolved.
    Resolve {
        id: u64,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Approve a pending purchase order.
    ApprovePo {
        id: u64,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Close a resolved ticket.
    Close {
        id: u64,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Report the outcome of an onsite visit.
    CompleteVisit {
        id: u64,
        /// resolved | needs-follow-up
        #[arg(long)]
        outcome: String,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Report spare parts progress.
    UpdateParts {
        id: u64,
        /// booked | delivered
        #[arg(long)]
        stage: String,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Add a note without changing status.
    Note { id: u64, text: String },
    /// Show the activity trail.
    Activity { id: u64 },
}
