//! Business logic services.
//!
//! Services contain core business logic separated from HTTP handlers.
//! They take the caller's identity and the store explicitly.

pub mod activity_service;
pub mod statement_service;
pub mod transaction_service;
