pub mod notify;
pub mod parse;
