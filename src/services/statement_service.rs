//! Statement listing.

use uuid::Uuid;

use crate::{error::AppError, models::statement::Statement, store::LedgerStore};

/// Statements generated for `user_id`, newest first.
pub async fn list_statements(
    store: &dyn LedgerStore,
    user_id: Uuid,
) -> Result<Vec<Statement>, AppError> {
    store.list_statements(user_id).await
}
