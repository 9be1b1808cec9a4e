//! Statement HTTP handler.
//!
//! - GET /api/v1/statements - Statements generated for the caller

use crate::{
    error::AppError, middleware::auth::AuthContext, models::statement::StatementResponse,
    services::statement_service, store::SharedStore,
};
use axum::{Extension, Json, extract::State};

pub async fn list_statements(
    State(store): State<SharedStore>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<Vec<StatementResponse>>, AppError> {
    let statements = statement_service::list_statements(store.as_ref(), auth.user_id).await?;

    Ok(Json(statements.into_iter().map(Into::into).collect()))
}
