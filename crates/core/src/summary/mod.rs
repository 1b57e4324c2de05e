//! Aggregate summary calculations.

pub mod service;
pub mod types;


pub use service::summarize;
pub use types::{CategoryShare, ExpenseSummary};
