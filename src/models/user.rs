//! User model for authentication.
//!
//! Users are provisioned outside this service. Each one carries the SHA-256
//! hash of the bearer token used to call the API; the plaintext token is
//! never stored.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Represents a user record from the database.
///
/// # Database Table
///
/// Maps to the `users` table with columns:
/// - `id`: Unique identifier (UUID)
/// - `email`: Contact address, unique per user
/// - `token_hash`: SHA-256 hash of the user's bearer token
/// - `created_at`: When the user was provisioned
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique identifier for this user
    pub id: Uuid,

    /// Email address of the user
    pub email: String,

    /// SHA-256 hash of the bearer token (64 hex characters)
    ///
    /// When a request comes in with "Bearer abc123", we:
    /// 1. Hash "abc123" with SHA-256
    /// 2. Look up this hash in the database
    /// 3. If found, authenticate the request as this user
    pub token_hash: String,

    /// Timestamp when this user was created
    pub created_at: DateTime<Utc>,
}
