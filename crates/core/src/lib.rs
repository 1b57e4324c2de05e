//! Core business logic for Outgo.
//!
//! This crate contains the expense store and everything with a real
//! behavioral contract, with ZERO web dependencies.
//!
//! # Modules
//!
//! - `expense` - Expense record, category enumeration, filters
//! - `store` - File-backed expense collection (CRUD + persistence)
//! - `summary` - Aggregate summary calculations
//! - `export` - CSV export

pub mod expense;
pub mod export;
pub mod store;
pub mod summary;
