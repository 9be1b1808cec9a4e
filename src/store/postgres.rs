//! PostgreSQL-backed [`LedgerStore`].
//!
//! Balance updates happen within PostgreSQL transactions: the account row is
//! locked with `FOR UPDATE`, the new balance written, and the transaction row
//! inserted before commit. The database ensures all-or-nothing execution.

use async_trait::async_trait;
use uuid::Uuid;

use super::{LedgerStore, apply_to_balance};
use crate::{
    db::DbPool,
    error::AppError,
    models::{
        account::Account,
        statement::Statement,
        transaction::{NewTransaction, Transaction},
        user::User,
    },
};

#[derive(Debug, Clone)]
pub struct PgLedgerStore {
    pool: DbPool,
}

impl PgLedgerStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LedgerStore for PgLedgerStore {
    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn find_user_by_token_hash(&self, token_hash: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, token_hash, created_at FROM users WHERE token_hash = $1",
        )
        .bind(token_hash)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn fetch_account_for_user(&self, user_id: Uuid) -> Result<Option<Account>, AppError> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, user_id, account_no, balance_cents, created_at, updated_at
            FROM accounts
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    async fn fetch_transactions(&self, account_id: Uuid) -> Result<Vec<Transaction>, AppError> {
        let transactions = sqlx::query_as::<_, Transaction>(
            r#"
            SELECT id, account_id, amount_cents, balance_after_transaction_cents,
                   transaction_type, description, timestamp
            FROM transactions
            WHERE account_id = $1
            ORDER BY timestamp ASC
            "#,
        )
        .bind(account_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(transactions)
    }

    async fn fetch_recent_transactions(
        &self,
        account_id: Uuid,
        limit: i64,
    ) -> Result<Vec<Transaction>, AppError> {
        let transactions = sqlx::query_as::<_, Transaction>(
            r#"
            SELECT id, account_id, amount_cents, balance_after_transaction_cents,
                   transaction_type, description, timestamp
            FROM transactions
            WHERE account_id = $1
            ORDER BY timestamp DESC
            LIMIT $2
            "#,
        )
        .bind(account_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(transactions)
    }

    async fn record_transaction(&self, entry: NewTransaction) -> Result<Transaction, AppError> {
        let mut tx = self.pool.begin().await?;

        // FOR UPDATE ensures no other transaction can modify this row until commit
        let balance_cents: i64 =
            sqlx::query_scalar("SELECT balance_cents FROM accounts WHERE id = $1 FOR UPDATE")
                .bind(entry.account_id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or(AppError::NoAccountFound)?;

        let new_balance =
            match apply_to_balance(balance_cents, entry.transaction_type, entry.amount_cents) {
                Ok(balance) => balance,
                Err(err) => {
                    tx.rollback().await?;
                    return Err(err);
                }
            };

        sqlx::query(
            r#"
            UPDATE accounts
            SET balance_cents = $1,
                updated_at = NOW()
            WHERE id = $2
            "#,
        )
        .bind(new_balance)
        .bind(entry.account_id)
        .execute(&mut *tx)
        .await?;

        let transaction = sqlx::query_as::<_, Transaction>(
            r#"
            INSERT INTO transactions (
                account_id,
                amount_cents,
                balance_after_transaction_cents,
                transaction_type,
                description
            )
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, account_id, amount_cents, balance_after_transaction_cents,
                      transaction_type, description, timestamp
            "#,
        )
        .bind(entry.account_id)
        .bind(entry.amount_cents)
        .bind(new_balance)
        .bind(entry.transaction_type)
        .bind(entry.description)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(transaction)
    }

    async fn list_statements(&self, user_id: Uuid) -> Result<Vec<Statement>, AppError> {
        let statements = sqlx::query_as::<_, Statement>(
            r#"
            SELECT id, user_id, date, document_path
            FROM statements
            WHERE user_id = $1
            ORDER BY date DESC NULLS LAST
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(statements)
    }
}
