//! Transaction data models and API request/response types.
//!
//! This module defines:
//! - `TransactionType`: Deposit or withdrawal
//! - `Transaction`: Database entity representing one ledger entry
//! - `NewTransaction`: What the service hands the store to record
//! - Request types for deposits, withdrawals and history queries
//! - `TransactionResponse`: Response body returned to clients

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Largest amount, and largest balance, an account can hold: 9,999,999,999.99
/// (twelve digits, two of them after the decimal point).
pub const MAX_AMOUNT_CENTS: i64 = 999_999_999_999;

/// Direction of a transaction.
///
/// Stored as a SMALLINT: `1` for deposits, `2` for withdrawals. Any other
/// value is rejected by a CHECK constraint on the `transactions` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[repr(i16)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money added to the account
    Deposit = 1,
    /// Money removed from the account
    Withdrawal = 2,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Deposit => "deposit",
            TransactionType::Withdrawal => "withdrawal",
        }
    }
}

/// Represents a transaction record from the database.
///
/// # Database Table
///
/// Maps to the `transactions` table. Each transaction:
/// - References exactly one account
/// - Stores amount and resulting balance in cents (never floats!)
/// - Gets its `timestamp` from the database at insertion; it never changes
///
/// Listings are ordered by `timestamp` ascending unless stated otherwise.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize)]
pub struct Transaction {
    /// Unique identifier for this transaction
    pub id: Uuid,

    /// Account this transaction belongs to
    pub account_id: Uuid,

    /// Amount in cents
    ///
    /// Always positive; the direction comes from `transaction_type`.
    pub amount_cents: i64,

    /// Account balance right after this transaction was applied
    pub balance_after_transaction_cents: i64,

    /// Deposit or withdrawal
    pub transaction_type: TransactionType,

    /// Human-readable description
    pub description: Option<String>,

    /// When the transaction was recorded
    pub timestamp: DateTime<Utc>,
}

/// A transaction the store has not recorded yet.
///
/// The store assigns `id`, `timestamp` and the balance snapshot.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub account_id: Uuid,
    pub transaction_type: TransactionType,
    pub amount_cents: i64,
    pub description: Option<String>,
}

/// Request to deposit money into, or withdraw money from, the caller's account.
///
/// # JSON Example
///
/// ```json
/// {
///   "amount_cents": 100000,
///   "description": "Salary"
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct AmountRequest {
    /// Amount in cents, must be positive
    pub amount_cents: i64,

    /// Optional description
    pub description: Option<String>,
}

/// Query parameters for `GET /api/v1/transactions`.
#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    /// Maximum number of transactions to return (newest first)
    pub limit: Option<i64>,
}

/// Response returned for transaction operations.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "770e8400-e29b-41d4-a716-446655440002",
///   "transaction_type": "deposit",
///   "amount_cents": 25000,
///   "balance_after_transaction_cents": 125000,
///   "description": "Salary",
///   "timestamp": "2026-10-14T16:00:00Z"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionResponse {
    pub id: Uuid,
    pub transaction_type: TransactionType,
    pub amount_cents: i64,
    pub balance_after_transaction_cents: i64,
    pub description: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Convert database Transaction to API TransactionResponse.
///
/// The internal `account_id` is dropped; callers only ever see their own account.
impl From<Transaction> for TransactionResponse {
    fn from(transaction: Transaction) -> Self {
        Self {
            id: transaction.id,
            transaction_type: transaction.transaction_type,
            amount_cents: transaction.amount_cents,
            balance_after_transaction_cents: transaction.balance_after_transaction_cents,
            description: transaction.description,
            timestamp: transaction.timestamp,
        }
    }
}
