pub mod auth;
pub mod dispatch;
pub mod schema;
pub mod shared;
pub mod ticket;
