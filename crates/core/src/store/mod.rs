//! File-backed expense store.

pub mod error;
pub mod service;


pub use error::StoreError;
pub use service::ExpenseStore;
