//! Transaction service - deposits, withdrawals and history.
//!
//! This service handles:
//! - Amount validation
//! - Resolving the caller's account
//! - Delegating the atomic balance update to the store
//!
//! # Atomicity Guarantees
//!
//! The store applies the balance change and inserts the transaction row in
//! one unit: either both happen or neither does.

use uuid::Uuid;

use crate::{
    error::AppError,
    models::{
        account::Account,
        transaction::{MAX_AMOUNT_CENTS, NewTransaction, Transaction, TransactionType},
    },
    store::LedgerStore,
};

/// Page size when the client does not ask for one.
pub const DEFAULT_HISTORY_LIMIT: i64 = 50;

/// Largest page the history endpoint will return.
pub const MAX_HISTORY_LIMIT: i64 = 500;

/// Deposit money into the account of `user_id`.
///
/// # Errors
///
/// - `InvalidRequest`: Amount is zero, negative or above [`MAX_AMOUNT_CENTS`]
/// - `NoAccountFound`: User has no account
/// - `Database`: Database error occurred
pub async fn deposit(
    store: &dyn LedgerStore,
    user_id: Uuid,
    amount_cents: i64,
    description: Option<String>,
) -> Result<Transaction, AppError> {
    execute(store, user_id, TransactionType::Deposit, amount_cents, description).await
}

/// Withdraw money from the account of `user_id`.
///
/// # Errors
///
/// Same as [`deposit`], plus `InsufficientBalance` when the amount exceeds
/// the current balance.
pub async fn withdraw(
    store: &dyn LedgerStore,
    user_id: Uuid,
    amount_cents: i64,
    description: Option<String>,
) -> Result<Transaction, AppError> {
    execute(
        store,
        user_id,
        TransactionType::Withdrawal,
        amount_cents,
        description,
    )
    .await
}

async fn execute(
    store: &dyn LedgerStore,
    user_id: Uuid,
    transaction_type: TransactionType,
    amount_cents: i64,
    description: Option<String>,
) -> Result<Transaction, AppError> {
    if amount_cents <= 0 {
        return Err(AppError::InvalidRequest(
            "Amount must be positive".to_string(),
        ));
    }
    if amount_cents > MAX_AMOUNT_CENTS {
        return Err(AppError::InvalidRequest(format!(
            "Amount must not exceed {} cents",
            MAX_AMOUNT_CENTS
        )));
    }

    let account = account_for_user(store, user_id).await?;

    let transaction = store
        .record_transaction(NewTransaction {
            account_id: account.id,
            transaction_type,
            amount_cents,
            description,
        })
        .await?;

    tracing::info!(
        account_no = account.account_no,
        transaction_id = %transaction.id,
        transaction_type = transaction_type.as_str(),
        amount_cents,
        balance_cents = transaction.balance_after_transaction_cents,
        "transaction recorded"
    );

    Ok(transaction)
}

/// The account owned by `user_id`.
pub async fn account_for_user(store: &dyn LedgerStore, user_id: Uuid) -> Result<Account, AppError> {
    store
        .fetch_account_for_user(user_id)
        .await?
        .ok_or(AppError::NoAccountFound)
}

/// Most recent transactions of the caller's account, newest first.
///
/// `limit` defaults to [`DEFAULT_HISTORY_LIMIT`] and is capped at
/// [`MAX_HISTORY_LIMIT`]; zero or negative values are rejected.
pub async fn history(
    store: &dyn LedgerStore,
    user_id: Uuid,
    limit: Option<i64>,
) -> Result<Vec<Transaction>, AppError> {
    let limit = match limit {
        None => DEFAULT_HISTORY_LIMIT,
        Some(limit) if limit <= 0 => {
            return Err(AppError::InvalidRequest(
                "limit must be positive".to_string(),
            ));
        }
        Some(limit) => limit.min(MAX_HISTORY_LIMIT),
    };

    let account = account_for_user(store, user_id).await?;
    store.fetch_recent_transactions(account.id, limit).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryLedgerStore;

    fn store_with_account(balance_cents: i64) -> (MemoryLedgerStore, Uuid) {
        let store = MemoryLedgerStore::new();
        let user = store.add_user("svc@example.com", "token");
        store.open_account(user.id, 777, balance_cents);
        (store, user.id)
    }

    #[tokio::test]
    async fn deposit_snapshots_new_balance() {
        let (store, user_id) = store_with_account(1_000);

        let tx = deposit(&store, user_id, 500, Some("Cash".into())).await.unwrap();

        assert_eq!(tx.transaction_type, TransactionType::Deposit);
        assert_eq!(tx.balance_after_transaction_cents, 1_500);
        assert_eq!(tx.description.as_deref(), Some("Cash"));
    }

    #[tokio::test]
    async fn non_positive_amounts_are_rejected() {
        let (store, user_id) = store_with_account(1_000);

        for amount in [0, -5] {
            let result = withdraw(&store, user_id, amount, None).await;
            assert!(matches!(result, Err(AppError::InvalidRequest(_))));
        }
    }

    #[tokio::test]
    async fn amounts_above_the_limit_are_rejected() {
        let (store, user_id) = store_with_account(0);

        let result = deposit(&store, user_id, MAX_AMOUNT_CENTS + 1, None).await;
        assert!(matches!(result, Err(AppError::InvalidRequest(_))));

        let tx = deposit(&store, user_id, MAX_AMOUNT_CENTS, None).await.unwrap();
        assert_eq!(tx.balance_after_transaction_cents, MAX_AMOUNT_CENTS);
    }

    #[tokio::test]
    async fn overdraft_leaves_balance_untouched() {
        let (store, user_id) = store_with_account(1_000);

        let result = withdraw(&store, user_id, 1_001, None).await;

        assert!(matches!(result, Err(AppError::InsufficientBalance)));
        let account = account_for_user(&store, user_id).await.unwrap();
        assert_eq!(account.balance_cents, 1_000);
        assert!(history(&store, user_id, None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn user_without_account_cannot_deposit() {
        let store = MemoryLedgerStore::new();
        let user = store.add_user("none@example.com", "token");

        let result = deposit(&store, user.id, 100, None).await;

        assert!(matches!(result, Err(AppError::NoAccountFound)));
    }

    #[tokio::test]
    async fn history_is_newest_first_and_validates_limit() {
        let (store, user_id) = store_with_account(0);
        deposit(&store, user_id, 100, None).await.unwrap();
        deposit(&store, user_id, 200, None).await.unwrap();
        withdraw(&store, user_id, 50, None).await.unwrap();

        let all = history(&store, user_id, None).await.unwrap();
        let amounts: Vec<i64> = all.iter().map(|t| t.amount_cents).collect();
        assert_eq!(amounts, vec![50, 200, 100]);

        let one = history(&store, user_id, Some(1)).await.unwrap();
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].transaction_type, TransactionType::Withdrawal);

        assert!(matches!(
            history(&store, user_id, Some(0)).await,
            Err(AppError::InvalidRequest(_))
        ));
    }
}
