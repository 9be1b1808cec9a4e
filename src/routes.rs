//! HTTP router assembly.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{handlers, middleware, store::SharedStore};

/// Build the application router on top of `store`.
///
/// `/health` is public; everything under `/api/v1` requires a bearer token.
pub fn create_router(store: SharedStore) -> Router {
    let authenticated_routes = Router::new()
        .route("/api/v1/dashboard", get(handlers::dashboard::get_dashboard))
        .route("/api/v1/account", get(handlers::accounts::get_account))
        .route(
            "/api/v1/transactions",
            get(handlers::transactions::list_transactions),
        )
        .route(
            "/api/v1/transactions/deposit",
            post(handlers::transactions::create_deposit),
        )
        .route(
            "/api/v1/transactions/withdraw",
            post(handlers::transactions::create_withdrawal),
        )
        .route(
            "/api/v1/statements",
            get(handlers::statements::list_statements),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            store.clone(),
            middleware::auth::auth_middleware,
        ));

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .merge(authenticated_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}
