//! Dashboard HTTP handler.
//!
//! - GET /api/v1/dashboard - 30-day money in/out and the latest activity

use crate::{
    error::AppError,
    middleware::auth::AuthContext,
    models::{account::AccountResponse, transaction::TransactionResponse},
    services::activity_service,
    store::SharedStore,
};
use axum::{Extension, Json, extract::State};
use chrono::Utc;
use serde::Serialize;

/// Response body for the dashboard.
///
/// # JSON Example
///
/// ```json
/// {
///   "account": { "account_no": 100200300, "balance_cents": 125000, ... },
///   "money_in_cents": 300000,
///   "money_out_cents": 175000,
///   "recent_deposits": [ { "transaction_type": "deposit", ... } ],
///   "recent_withdrawals": [ { "transaction_type": "withdrawal", ... } ]
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub account: AccountResponse,
    pub money_in_cents: i64,
    pub money_out_cents: i64,
    pub recent_deposits: Vec<TransactionResponse>,
    pub recent_withdrawals: Vec<TransactionResponse>,
}

/// Summarize the caller's account activity as of now.
///
/// # Response
///
/// - **Success (200 OK)**: summary (zeroes and empty lists for a new account)
/// - **Error (404)**: the user has no account
/// - **Error (401)**: invalid token
pub async fn get_dashboard(
    State(store): State<SharedStore>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<DashboardResponse>, AppError> {
    let dashboard =
        activity_service::summarize_for_user(store.as_ref(), auth.user_id, Utc::now()).await?;
    let summary = dashboard.summary;

    Ok(Json(DashboardResponse {
        account: dashboard.account.into(),
        money_in_cents: summary.money_in_cents,
        money_out_cents: summary.money_out_cents,
        recent_deposits: summary.recent_deposits.into_iter().map(Into::into).collect(),
        recent_withdrawals: summary
            .recent_withdrawals
            .into_iter()
            .map(Into::into)
            .collect(),
    }))
}
