#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use bank_ledger_server::{
    create_router,
    models::{account::Account, user::User},
    store::MemoryLedgerStore,
};
use tower::ServiceExt;

pub const TOKEN: &str = "test-token-123";

/// Router backed by an in-memory store the test can seed directly.
pub struct TestApp {
    pub store: Arc<MemoryLedgerStore>,
    pub app: Router,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(MemoryLedgerStore::new());
        let app = create_router(store.clone());
        Self { store, app }
    }

    /// A user authenticating with [`TOKEN`] and owning an account.
    pub fn with_account(balance_cents: i64) -> (Self, User, Account) {
        let harness = Self::new();
        let user = harness.store.add_user("owner@example.com", TOKEN);
        let account = harness.store.open_account(user.id, 100200300, balance_cents);
        (harness, user, account)
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        let request = match body {
            Some(json) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        self.request(Method::GET, uri, Some(TOKEN), None).await
    }

    pub async fn post(&self, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        self.request(Method::POST, uri, Some(TOKEN), Some(body)).await
    }
}
