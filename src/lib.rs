//! Bank ledger server.
//!
//! A REST API over a personal banking ledger: each user owns one account,
//! records deposits and withdrawals against it, and reads back the
//! transaction history, a dashboard summary of recent activity and the
//! list of generated monthly statements.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx, behind the [`store::LedgerStore`] trait
//! - **Authentication**: per-user bearer token with SHA-256 hashing
//! - **Format**: JSON requests/responses

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

pub use config::Config;
pub use error::AppError;
pub use routes::create_router;
