//! Account activity summary shown on the dashboard.
//!
//! Two figures and two short lists are derived from an account's history:
//! - money in / money out over the trailing 30 days
//! - the last five transactions, split into deposits and withdrawals

use chrono::{DateTime, TimeDelta, Utc};
use uuid::Uuid;

use crate::{
    error::AppError,
    models::{
        account::Account,
        transaction::{Transaction, TransactionType},
    },
    store::LedgerStore,
};

/// Length of the trailing window the totals cover.
pub const ACTIVITY_WINDOW_DAYS: i64 = 30;

/// Number of most recent transactions split into the deposit/withdrawal lists.
pub const RECENT_TRANSACTION_COUNT: usize = 5;

/// Result of summarizing one account's history.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivitySummary {
    /// Sum of deposits within the window, in cents
    pub money_in_cents: i64,

    /// Sum of withdrawals within the window, in cents
    pub money_out_cents: i64,

    /// Deposits among the last [`RECENT_TRANSACTION_COUNT`] transactions, oldest first
    pub recent_deposits: Vec<Transaction>,

    /// Withdrawals among the same recent window, oldest first
    pub recent_withdrawals: Vec<Transaction>,
}

/// The caller's account together with its activity summary.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub account: Account,
    pub summary: ActivitySummary,
}

/// Summarize `transactions` (ordered by timestamp ascending) as of `now`.
///
/// A transaction counts towards the totals when its timestamp is strictly
/// after `now - 30 days`; totals saturate at `i64::MAX`. The recent lists are taken from the last five
/// transactions overall, not the last five of each type.
pub fn summarize(transactions: &[Transaction], now: DateTime<Utc>) -> ActivitySummary {
    let window_start = now - TimeDelta::days(ACTIVITY_WINDOW_DAYS);
    let mut summary = ActivitySummary::default();

    for transaction in transactions.iter().filter(|t| t.timestamp > window_start) {
        match transaction.transaction_type {
            TransactionType::Deposit => {
                summary.money_in_cents = summary.money_in_cents.saturating_add(transaction.amount_cents)
            }
            TransactionType::Withdrawal => {
                summary.money_out_cents =
                    summary.money_out_cents.saturating_add(transaction.amount_cents)
            }
        }
    }

    let recent_start = transactions.len().saturating_sub(RECENT_TRANSACTION_COUNT);
    for transaction in &transactions[recent_start..] {
        match transaction.transaction_type {
            TransactionType::Deposit => summary.recent_deposits.push(transaction.clone()),
            TransactionType::Withdrawal => summary.recent_withdrawals.push(transaction.clone()),
        }
    }

    summary
}

/// Load the account of `user_id` and summarize its history as of `now`.
///
/// # Errors
///
/// - `NoAccountFound`: the user has not opened an account
/// - `Database`: the store failed
pub async fn summarize_for_user(
    store: &dyn LedgerStore,
    user_id: Uuid,
    now: DateTime<Utc>,
) -> Result<Dashboard, AppError> {
    let account = store
        .fetch_account_for_user(user_id)
        .await?
        .ok_or(AppError::NoAccountFound)?;

    let transactions = store.fetch_transactions(account.id).await?;
    let summary = summarize(&transactions, now);

    tracing::debug!(
        account_no = account.account_no,
        transactions = transactions.len(),
        money_in_cents = summary.money_in_cents,
        money_out_cents = summary.money_out_cents,
        "summarized account activity"
    );

    Ok(Dashboard { account, summary })
}
