mod common;

use axum::http::{Method, StatusCode};
use bank_ledger_server::models::transaction::MAX_AMOUNT_CENTS;
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn test_deposit_updates_balance() {
    let (harness, _, _) = TestApp::with_account(1_000);

    let (status, body) = harness
        .post(
            "/api/v1/transactions/deposit",
            json!({ "amount_cents": 2_500, "description": "Paycheck" }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["transaction_type"], "deposit");
    assert_eq!(body["amount_cents"], 2_500);
    assert_eq!(body["balance_after_transaction_cents"], 3_500);
    assert_eq!(body["description"], "Paycheck");

    let (status, account) = harness.get("/api/v1/account").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(account["balance_cents"], 3_500);
    assert!(account.get("user_id").is_none());
}

#[tokio::test]
async fn test_withdrawal_beyond_balance_is_rejected() {
    let (harness, _, _) = TestApp::with_account(1_000);

    let (status, body) = harness
        .post(
            "/api/v1/transactions/withdraw",
            json!({ "amount_cents": 1_001 }),
        )
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "insufficient_balance");

    let (_, account) = harness.get("/api/v1/account").await;
    assert_eq!(account["balance_cents"], 1_000);
}

#[tokio::test]
async fn test_non_positive_amount_is_bad_request() {
    let (harness, _, _) = TestApp::with_account(1_000);

    let (status, body) = harness
        .post("/api/v1/transactions/deposit", json!({ "amount_cents": 0 }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "invalid_request");
    assert_eq!(body["error"]["message"], "Amount must be positive");
}

#[tokio::test]
async fn test_amount_above_limit_is_bad_request() {
    let (harness, _, _) = TestApp::with_account(0);

    for kind in ["deposit", "withdraw"] {
        let (status, body) = harness
            .post(
                &format!("/api/v1/transactions/{}", kind),
                json!({ "amount_cents": i64::MAX }),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "invalid_request");
    }

    let (status, _) = harness
        .post(
            "/api/v1/transactions/deposit",
            json!({ "amount_cents": MAX_AMOUNT_CENTS }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = harness
        .post("/api/v1/transactions/deposit", json!({ "amount_cents": 1 }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = harness.get("/api/v1/dashboard").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["money_in_cents"], MAX_AMOUNT_CENTS);
    assert_eq!(body["account"]["balance_cents"], MAX_AMOUNT_CENTS);
}

#[tokio::test]
async fn test_history_is_newest_first_with_limit() {
    let (harness, _, _) = TestApp::with_account(0);
    for amount in [100, 200, 300] {
        harness
            .post(
                "/api/v1/transactions/deposit",
                json!({ "amount_cents": amount }),
            )
            .await;
    }
    harness
        .post(
            "/api/v1/transactions/withdraw",
            json!({ "amount_cents": 50 }),
        )
        .await;

    let (status, body) = harness.get("/api/v1/transactions").await;
    assert_eq!(status, StatusCode::OK);
    let amounts: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["amount_cents"].as_i64().unwrap())
        .collect();
    assert_eq!(amounts, vec![50, 300, 200, 100]);
    assert_eq!(body[0]["balance_after_transaction_cents"], 550);

    let (status, body) = harness.get("/api/v1/transactions?limit=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (status, _) = harness.get("/api/v1/transactions?limit=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_users_only_see_their_own_account() {
    let (harness, _, _) = TestApp::with_account(1_000);
    let other = harness.store.add_user("other@example.com", "other-token");
    harness.store.open_account(other.id, 900800700, 42);

    harness
        .post(
            "/api/v1/transactions/deposit",
            json!({ "amount_cents": 10 }),
        )
        .await;

    let (status, body) = harness
        .request(
            Method::GET,
            "/api/v1/transactions",
            Some("other-token"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());

    let (_, account) = harness.get("/api/v1/account").await;
    assert_eq!(account["account_no"], 100200300);
    assert_eq!(account["balance_cents"], 1_010);
}
