//! Data models representing database entities.
//!
//! This module contains all data structures that map to database tables,
//! together with the JSON shapes returned to API clients.

/// Bank account owned by a user
pub mod account;
/// Monthly statement metadata
pub mod statement;
/// Deposit and withdrawal records
pub mod transaction;
/// Authenticated user model
pub mod user;
