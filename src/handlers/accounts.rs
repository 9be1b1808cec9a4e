//! Account HTTP handler.
//!
//! - GET /api/v1/account - The authenticated user's bank account

use crate::{
    error::AppError, middleware::auth::AuthContext, models::account::AccountResponse,
    services::transaction_service, store::SharedStore,
};
use axum::{Extension, Json, extract::State};

/// Get the caller's account.
///
/// # Response
///
/// - **Success (200 OK)**: account number and balance
/// - **Error (404)**: the user has no account
/// - **Error (401)**: invalid token
pub async fn get_account(
    State(store): State<SharedStore>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<AccountResponse>, AppError> {
    let account = transaction_service::account_for_user(store.as_ref(), auth.user_id).await?;

    Ok(Json(account.into()))
}
