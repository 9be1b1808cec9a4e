//! In-memory [`LedgerStore`] used by the test suite and local experiments.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use uuid::Uuid;

use super::{LedgerStore, apply_to_balance};
use crate::{
    error::AppError,
    middleware::auth::hash_token,
    models::{
        account::Account,
        statement::Statement,
        transaction::{NewTransaction, Transaction, TransactionType},
        user::User,
    },
};

#[derive(Debug, Default)]
struct MemoryState {
    users: Vec<User>,
    accounts: Vec<Account>,
    transactions: Vec<Transaction>,
    statements: Vec<Statement>,
}

#[derive(Debug, Default)]
pub struct MemoryLedgerStore {
    state: Mutex<MemoryState>,
}

impl MemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Provision a user authenticating with `token`.
    pub fn add_user(&self, email: &str, token: &str) -> User {
        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            token_hash: hash_token(token),
            created_at: Utc::now(),
        };
        self.state().users.push(user.clone());
        user
    }

    /// Open the bank account of `user_id`.
    pub fn open_account(&self, user_id: Uuid, account_no: i64, balance_cents: i64) -> Account {
        let now = Utc::now();
        let account = Account {
            id: Uuid::new_v4(),
            user_id,
            account_no,
            balance_cents,
            created_at: now,
            updated_at: now,
        };
        self.state().accounts.push(account.clone());
        account
    }

    /// Record a transaction with an explicit timestamp, e.g. to seed old history.
    ///
    /// History must be seeded in chronological order so balance snapshots
    /// read as a running balance: a timestamp earlier than the account's
    /// latest transaction is rejected with `InvalidRequest`.
    pub fn insert_transaction_at(
        &self,
        account_id: Uuid,
        transaction_type: TransactionType,
        amount_cents: i64,
        timestamp: DateTime<Utc>,
    ) -> Result<Transaction, AppError> {
        let mut state = self.state();
        if latest_timestamp(&state, account_id).is_some_and(|latest| timestamp < latest) {
            return Err(AppError::InvalidRequest(
                "Transactions must be inserted in timestamp order".to_string(),
            ));
        }
        insert_locked(
            &mut state,
            NewTransaction {
                account_id,
                transaction_type,
                amount_cents,
                description: None,
            },
            timestamp,
        )
    }

    pub fn add_statement(
        &self,
        user_id: Uuid,
        date: Option<DateTime<Utc>>,
        document_path: &str,
    ) -> Statement {
        let statement = Statement {
            id: Uuid::new_v4(),
            user_id,
            date,
            document_path: document_path.to_string(),
        };
        self.state().statements.push(statement.clone());
        statement
    }
}

fn latest_timestamp(state: &MemoryState, account_id: Uuid) -> Option<DateTime<Utc>> {
    state
        .transactions
        .iter()
        .filter(|t| t.account_id == account_id)
        .map(|t| t.timestamp)
        .max()
}

fn insert_locked(
    state: &mut MemoryState,
    entry: NewTransaction,
    timestamp: DateTime<Utc>,
) -> Result<Transaction, AppError> {
    let account = state
        .accounts
        .iter_mut()
        .find(|account| account.id == entry.account_id)
        .ok_or(AppError::NoAccountFound)?;

    let new_balance = apply_to_balance(
        account.balance_cents,
        entry.transaction_type,
        entry.amount_cents,
    )?;
    account.balance_cents = new_balance;
    account.updated_at = Utc::now();

    let transaction = Transaction {
        id: Uuid::new_v4(),
        account_id: entry.account_id,
        amount_cents: entry.amount_cents,
        balance_after_transaction_cents: new_balance,
        transaction_type: entry.transaction_type,
        description: entry.description,
        timestamp,
    };
    state.transactions.push(transaction.clone());
    Ok(transaction)
}

#[async_trait]
impl LedgerStore for MemoryLedgerStore {
    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn find_user_by_token_hash(&self, token_hash: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .state()
            .users
            .iter()
            .find(|user| user.token_hash == token_hash)
            .cloned())
    }

    async fn fetch_account_for_user(&self, user_id: Uuid) -> Result<Option<Account>, AppError> {
        Ok(self
            .state()
            .accounts
            .iter()
            .find(|account| account.user_id == user_id)
            .cloned())
    }

    async fn fetch_transactions(&self, account_id: Uuid) -> Result<Vec<Transaction>, AppError> {
        let mut transactions: Vec<Transaction> = self
            .state()
            .transactions
            .iter()
            .filter(|t| t.account_id == account_id)
            .cloned()
            .collect();
        // Stable: equal timestamps keep insertion order
        transactions.sort_by_key(|t| t.timestamp);
        Ok(transactions)
    }

    async fn fetch_recent_transactions(
        &self,
        account_id: Uuid,
        limit: i64,
    ) -> Result<Vec<Transaction>, AppError> {
        let mut transactions = self.fetch_transactions(account_id).await?;
        transactions.reverse();
        transactions.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(transactions)
    }

    async fn record_transaction(&self, entry: NewTransaction) -> Result<Transaction, AppError> {
        let mut state = self.state();
        // Never hand out a timestamp earlier than the account's latest one
        let latest = latest_timestamp(&state, entry.account_id);
        let now = Utc::now();
        let timestamp = match latest {
            Some(latest) if latest >= now => latest + TimeDelta::microseconds(1),
            _ => now,
        };
        insert_locked(&mut state, entry, timestamp)
    }

    async fn list_statements(&self, user_id: Uuid) -> Result<Vec<Statement>, AppError> {
        let mut statements: Vec<Statement> = self
            .state()
            .statements
            .iter()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect();
        // Newest first; `None` sorts below any date, so undated land last
        statements.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(statements)
    }
}
