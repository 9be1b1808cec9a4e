//! Bank account model and its API response type.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Represents an account record from the database.
///
/// # Database Table
///
/// Maps to the `accounts` table. Each account:
/// - Belongs to exactly one user (via `user_id`, unique)
/// - Is addressed by customers through its `account_no`
/// - Has a running balance stored in cents
///
/// The balance is maintained by the transaction service whenever a deposit
/// or withdrawal is recorded. It is never negative (CHECK constraint).
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Account {
    /// Internal identifier, referenced by transactions
    pub id: Uuid,

    /// Owner of this account
    pub user_id: Uuid,

    /// Customer-facing account number
    pub account_no: i64,

    /// Current balance in cents (not dollars)
    pub balance_cents: i64,

    /// Timestamp when account was opened
    pub created_at: DateTime<Utc>,

    /// Timestamp of last balance update
    pub updated_at: DateTime<Utc>,
}

/// Response body for account endpoints.
///
/// # JSON Example
///
/// ```json
/// {
///   "account_no": 100200300,
///   "balance_cents": 125000,
///   "created_at": "2026-01-04T10:00:00Z",
///   "updated_at": "2026-10-14T08:12:44Z"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub account_no: i64,
    pub balance_cents: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Strips internal identifiers (`id`, `user_id`) before the account leaves the service.
impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            account_no: account.account_no,
            balance_cents: account.balance_cents,
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}
