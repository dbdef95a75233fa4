pub mod auth;
pub mod ticket;

pub use auth::AuthCommands;
pub use ticket::TicketCommands;
