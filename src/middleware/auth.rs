//! Bearer token authentication middleware.
//!
//! This middleware intercepts every protected request to:
//! 1. Extract the token from the Authorization header
//! 2. Hash it and resolve the user it belongs to
//! 3. Inject authentication context into the request
//! 4. Reject unauthorized requests with HTTP 401

use crate::{error::AppError, store::SharedStore};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Authentication context attached to authenticated requests.
///
/// Handlers extract it with `Extension<AuthContext>` and pass the user id
/// explicitly to the services they call.
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// ID of the authenticated user
    pub user_id: Uuid,
}

/// SHA-256 hex digest of a bearer token, as stored in `users.token_hash`.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}

/// Token authentication middleware function.
///
/// # Flow
///
/// 1. Extract `Authorization: Bearer <token>` header from request
/// 2. Hash the `<token>` using SHA-256
/// 3. Look the hash up through the store
/// 4. If found: inject `AuthContext` into request, call next handler
/// 5. If not found: return 401 Unauthorized error
pub async fn auth_middleware(
    State(store): State<SharedStore>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::InvalidToken)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AppError::InvalidToken)?;

    let user = store
        .find_user_by_token_hash(&hash_token(token))
        .await?
        .ok_or_else(|| {
            tracing::debug!("rejected request with unknown token");
            AppError::InvalidToken
        })?;

    request
        .extensions_mut()
        .insert(AuthContext { user_id: user.id });

    Ok(next.run(request).await)
}
