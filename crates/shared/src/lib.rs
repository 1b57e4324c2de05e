//! Shared errors and configuration for Outgo.
//!
//! This crate provides common pieces used across all other crates:
//! - Application-wide error types with HTTP mappings
//! - Configuration management

pub mod config;
pub mod error;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
