pub mod filter;
pub mod handlers;
pub mod source;
