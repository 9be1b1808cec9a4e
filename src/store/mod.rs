//! Storage layer.
//!
//! Services talk to persistence only through [`LedgerStore`], so request
//! handling can run against Postgres in production and against the
//! in-memory store in tests.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{
    account::Account,
    statement::Statement,
    transaction::{MAX_AMOUNT_CENTS, NewTransaction, Transaction, TransactionType},
    user::User,
};

pub mod memory;
pub mod postgres;

pub use memory::MemoryLedgerStore;
pub use postgres::PgLedgerStore;

/// Store shared across handlers through axum `State`.
pub type SharedStore = Arc<dyn LedgerStore>;

/// Storage collaborator for the ledger.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Verify the backing store is reachable.
    async fn ping(&self) -> Result<(), AppError>;

    /// Look up the user owning a bearer token, by the token's SHA-256 hash.
    async fn find_user_by_token_hash(&self, token_hash: &str) -> Result<Option<User>, AppError>;

    /// The bank account owned by `user_id`, if one has been opened.
    async fn fetch_account_for_user(&self, user_id: Uuid) -> Result<Option<Account>, AppError>;

    /// Every transaction of the account, ordered by timestamp ascending.
    async fn fetch_transactions(&self, account_id: Uuid) -> Result<Vec<Transaction>, AppError>;

    /// At most `limit` transactions of the account, newest first.
    async fn fetch_recent_transactions(
        &self,
        account_id: Uuid,
        limit: i64,
    ) -> Result<Vec<Transaction>, AppError>;

    /// Apply `entry` to its account balance and record it, atomically.
    ///
    /// # Errors
    ///
    /// - `NoAccountFound`: the account does not exist
    /// - `InsufficientBalance`: a withdrawal exceeds the current balance
    /// - `InvalidRequest`: the resulting balance would overflow
    async fn record_transaction(&self, entry: NewTransaction) -> Result<Transaction, AppError>;

    /// Statements generated for `user_id`, newest first, undated last.
    async fn list_statements(&self, user_id: Uuid) -> Result<Vec<Statement>, AppError>;
}

/// Balance after applying a transaction of `amount_cents` in `direction`.
///
/// Shared by both store implementations so they agree on the ledger rules.
pub(crate) fn apply_to_balance(
    balance_cents: i64,
    direction: TransactionType,
    amount_cents: i64,
) -> Result<i64, AppError> {
    match direction {
        TransactionType::Deposit => balance_cents
            .checked_add(amount_cents)
            .filter(|balance| *balance <= MAX_AMOUNT_CENTS)
            .ok_or_else(|| {
                AppError::InvalidRequest("Balance would exceed the account limit".to_string())
            }),
        TransactionType::Withdrawal => {
            if balance_cents < amount_cents {
                Err(AppError::InsufficientBalance)
            } else {
                Ok(balance_cents - amount_cents)
            }
        }
    }
}
