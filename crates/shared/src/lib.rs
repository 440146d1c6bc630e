//! Shared types, errors, and configuration for Compta.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for record references
//! - Euro amount formatting
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AirtableConfig, AppConfig, CotisationConfig, DashboardConfig, ServerConfig};
pub use error::{AppError, AppResult};
pub use types::{TransactionId, format_amount};
