//! CSV export of the expense collection.

pub mod service;


pub use service::to_csv;
