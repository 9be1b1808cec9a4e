//! Transaction HTTP handlers.
//!
//! This module implements transaction-related API endpoints:
//! - POST /api/v1/transactions/deposit - Add money to the caller's account
//! - POST /api/v1/transactions/withdraw - Remove money from the caller's account
//! - GET /api/v1/transactions - Transaction history, newest first

use crate::{
    error::AppError,
    middleware::auth::AuthContext,
    models::transaction::{AmountRequest, HistoryQuery, TransactionResponse},
    services::transaction_service,
    store::SharedStore,
};
use axum::{
    Extension, Json,
    extract::{Query, State},
    http::StatusCode,
};

/// Deposit into the caller's account.
///
/// # Request Body
///
/// ```json
/// {
///   "amount_cents": 100000,
///   "description": "Salary"
/// }
/// ```
///
/// # Response (201)
///
/// The recorded transaction, including the resulting balance.
pub async fn create_deposit(
    State(store): State<SharedStore>,
    Extension(auth): Extension<AuthContext>,
    Json(request): Json<AmountRequest>,
) -> Result<(StatusCode, Json<TransactionResponse>), AppError> {
    let transaction = transaction_service::deposit(
        store.as_ref(),
        auth.user_id,
        request.amount_cents,
        request.description,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(transaction.into())))
}

/// Withdraw from the caller's account.
///
/// # Validation
///
/// - Amount must be positive
/// - Account must have sufficient balance (422 otherwise)
pub async fn create_withdrawal(
    State(store): State<SharedStore>,
    Extension(auth): Extension<AuthContext>,
    Json(request): Json<AmountRequest>,
) -> Result<(StatusCode, Json<TransactionResponse>), AppError> {
    let transaction = transaction_service::withdraw(
        store.as_ref(),
        auth.user_id,
        request.amount_cents,
        request.description,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(transaction.into())))
}

/// List the caller's transactions, newest first.
///
/// # Query Parameters
///
/// - `limit` - optional page size (default 50, capped at 500)
pub async fn list_transactions(
    State(store): State<SharedStore>,
    Extension(auth): Extension<AuthContext>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<TransactionResponse>>, AppError> {
    let transactions =
        transaction_service::history(store.as_ref(), auth.user_id, query.limit).await?;

    Ok(Json(transactions.into_iter().map(Into::into).collect()))
}
