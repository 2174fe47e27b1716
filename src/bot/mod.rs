pub mod handlers;
pub mod sink;
