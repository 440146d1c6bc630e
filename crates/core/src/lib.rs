//! Core business logic for Compta.
//!
//! This crate contains pure business logic with ZERO web or HTTP dependencies.
//! Transactions, the quarter calendar, summaries and milestone rules live here;
//! the record store is reached only through the `TransactionSource` trait.
//!
//! # Modules
//!
//! - `transaction` - Transactions, derived status and milestone transitions
//! - `fiscal` - Declaration quarters and selectable years
//! - `summary` - Quarter and year summaries, contribution estimate
//! - `search` - Free-text transaction filter
//! - `source` - Record source trait and in-memory implementation
//! - `service` - Summary service used by the API
//! - `clock` - Wall-clock boundary
//! - `format` - French date and month formatting

pub mod clock;
pub mod fiscal;
pub mod format;
pub mod search;
pub mod service;
pub mod source;
pub mod summary;
pub mod transaction;
