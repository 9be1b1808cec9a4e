//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, query params, auth context)
//! 2. Calls into a service with the caller's identity
//! 3. Returns HTTP response (JSON, status code)

/// Account lookup endpoint
pub mod accounts;
/// Activity summary endpoint
pub mod dashboard;
/// Liveness and database connectivity
pub mod health;
/// Statement listing endpoint
pub mod statements;
/// Deposit, withdrawal and history endpoints
pub mod transactions;
