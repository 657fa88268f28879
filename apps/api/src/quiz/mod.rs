pub mod flow;
pub mod handlers;
pub mod questions;
