//! API Integration Tests
//!
//! Drives the full router (auth, CORS, routing, handlers) through
//! `tower::ServiceExt::oneshot` against the seeded demo state. Generated
//! records vary call to call, so assertions target shape and invariants.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use chrono::{Duration, Utc};
use serde_json::json;
use tower::util::ServiceExt;

mod common;

// =========================================================================
// Authentication
// =========================================================================

#[tokio::test]
async fn test_missing_credentials_rejected() {
    let app = common::test_app();

    let req = Request::builder()
        .method("GET")
        .uri("/v1/info")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = common::body_json(response).await;
    assert_eq!(body["error"], "Invalid client credentials");
}

#[tokio::test]
async fn test_wrong_secret_rejected() {
    let app = common::test_app();

    let req = Request::builder()
        .method("GET")
        .uri("/v1/info")
        .header("X-Client-ID", common::CLIENT_ID)
        .header("X-Client-Secret", "secret_wrong")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_auth_precedes_routing() {
    let app = common::test_app();

    // Unroutable path without credentials answers 401, not 404
    let req = Request::builder()
        .method("GET")
        .uri("/v1/no/such/endpoint")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Same for a path outside the base path entirely
    let req = Request::builder()
        .method("GET")
        .uri("/outside")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_preflight_bypasses_auth() {
    let app = common::test_app();

    let req = Request::builder()
        .method("OPTIONS")
        .uri("/v1/transactions/get")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn test_unmatched_path_with_valid_credentials() {
    let app = common::test_app();

    let response = app
        .oneshot(common::authed_request("GET", "/no/such/endpoint", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = common::body_json(response).await;
    assert_eq!(body["error"], "Endpoint not found");
}

// =========================================================================
// GET /info
// =========================================================================

#[tokio::test]
async fn test_info() {
    let app = common::test_app();

    let response = app
        .oneshot(common::authed_request("GET", "/info", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert!(body["name"].is_string());
    assert!(body["version"].is_string());
    assert!(body["description"].is_string());
    assert!(body["documentation"].is_string());
    assert_eq!(body["endpoints"].as_array().unwrap().len(), 6);
}

// =========================================================================
// POST /link/token/create
// =========================================================================

#[tokio::test]
async fn test_create_link_token() {
    let app = common::test_app();

    let response = app
        .oneshot(common::authed_request(
            "POST",
            "/link/token/create",
            json!({"user": {"client_user_id": "user42"}}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;

    let link_token = body["link_token"].as_str().unwrap();
    assert!(link_token.starts_with("link-client_123456-user42-"));

    let expiration = body["expiration"].as_i64().unwrap();
    assert!(expiration > Utc::now().timestamp());
    assert!(expiration <= Utc::now().timestamp() + 1800);

    assert!(body["request_id"].as_str().unwrap().starts_with("req_"));
}

#[tokio::test]
async fn test_create_link_token_missing_user() {
    let app = common::test_app();

    for body in [json!({}), json!({"user": {}})] {
        let response = app
            .clone()
            .oneshot(common::authed_request("POST", "/link/token/create", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = common::body_json(response).await;
        assert_eq!(body["error"], "Missing user.client_user_id");
    }
}

// =========================================================================
// POST /item/public_token/exchange
// =========================================================================

#[tokio::test]
async fn test_exchange_mints_fresh_tokens() {
    let app = common::test_app();
    let request_body = json!({"public_token": "public-sandbox-123"});

    let first = app
        .clone()
        .oneshot(common::authed_request(
            "POST",
            "/item/public_token/exchange",
            request_body.clone(),
        ))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);
    let first = common::body_json(first).await;

    let second = app
        .oneshot(common::authed_request(
            "POST",
            "/item/public_token/exchange",
            request_body,
        ))
        .await
        .unwrap();
    let second = common::body_json(second).await;

    assert!(first["access_token"].as_str().unwrap().starts_with("access-"));
    assert!(first["item_id"].as_str().unwrap().starts_with("item-"));
    // Non-idempotent by design: every exchange mints fresh identifiers
    assert_ne!(first["access_token"], second["access_token"]);
    assert_ne!(first["item_id"], second["item_id"]);
}

#[tokio::test]
async fn test_exchange_missing_public_token() {
    let app = common::test_app();

    let response = app
        .oneshot(common::authed_request(
            "POST",
            "/item/public_token/exchange",
            json!({}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(response).await;
    assert_eq!(body["error"], "Missing public_token");
}

#[tokio::test]
async fn test_exchanged_token_resolves_to_nothing() {
    let app = common::test_app();

    let response = app
        .clone()
        .oneshot(common::authed_request(
            "POST",
            "/item/public_token/exchange",
            json!({"public_token": "public-sandbox-123"}),
        ))
        .await
        .unwrap();
    let grant = common::body_json(response).await;
    let access_token = grant["access_token"].as_str().unwrap();

    // Freshly minted tokens are not registered in the catalog
    let response = app
        .oneshot(common::authed_request(
            "POST",
            "/auth/get",
            json!({"access_token": access_token}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["accounts"].as_array().unwrap().len(), 0);
}

// =========================================================================
// POST /auth/get
// =========================================================================

#[tokio::test]
async fn test_auth_get() {
    let app = common::test_app();

    let response = app
        .oneshot(common::authed_request(
            "POST",
            "/auth/get",
            json!({"access_token": "access-token-1"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;

    let accounts = body["accounts"].as_array().unwrap();
    assert_eq!(accounts.len(), 2);
    assert_eq!(accounts[0]["account_id"], "acc_1");
    assert_eq!(accounts[0]["type"], "depository");
    assert_eq!(accounts[0]["subtype"], "checking");
    assert!(accounts[0]["balances"]["available"].is_number());
    assert!(accounts[0]["balances"]["limit"].is_null());

    let ach = body["numbers"]["ach"].as_array().unwrap();
    assert_eq!(ach.len(), 2);
    assert_eq!(ach[0]["account_id"], "acc_1");
    assert!(ach[0]["routing"].is_string());
    assert!(ach[0]["wire_routing"].is_string());

    assert!(body["request_id"].as_str().unwrap().starts_with("req_"));
}

#[tokio::test]
async fn test_auth_get_credit_card_has_no_numbers() {
    let app = common::test_app();

    let response = app
        .oneshot(common::authed_request(
            "POST",
            "/auth/get",
            json!({"access_token": "access-token-2"}),
        ))
        .await
        .unwrap();

    let body = common::body_json(response).await;
    let accounts = body["accounts"].as_array().unwrap();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0]["account_id"], "acc_3");
    assert_eq!(accounts[0]["subtype"], "credit card");
    assert!(accounts[0]["balances"]["limit"].is_number());
    assert_eq!(body["numbers"]["ach"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_auth_get_unknown_token_is_empty_not_error() {
    let app = common::test_app();

    let response = app
        .oneshot(common::authed_request(
            "POST",
            "/auth/get",
            json!({"access_token": "access-unknown"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["accounts"].as_array().unwrap().len(), 0);
    assert_eq!(body["numbers"]["ach"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_auth_get_missing_access_token() {
    let app = common::test_app();

    let response = app
        .oneshot(common::authed_request("POST", "/auth/get", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(response).await;
    assert_eq!(body["error"], "Missing access_token");
}

// =========================================================================
// POST /transactions/get
// =========================================================================

#[tokio::test]
async fn test_transactions_default_window() {
    let app = common::test_app();

    let response = app
        .oneshot(common::authed_request(
            "POST",
            "/transactions/get",
            json!({"access_token": "access-token-1"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;

    assert_eq!(body["accounts"].as_array().unwrap().len(), 2);

    let transactions = body["transactions"].as_array().unwrap();
    // 20 per account, none filtered by the default trailing-30-day window
    assert_eq!(transactions.len(), 40);
    assert_eq!(body["total_transactions"], 40);

    let today = Utc::now().date_naive();
    let floor = today - Duration::days(30);
    let mut seen_accounts = std::collections::HashSet::new();
    let mut previous: Option<String> = None;
    for t in transactions {
        let date = t["date"].as_str().unwrap().to_string();
        assert!(date.as_str() <= today.to_string().as_str());
        assert!(date.as_str() >= floor.to_string().as_str());
        if let Some(prev) = &previous {
            assert!(prev.as_str() >= date.as_str(), "not sorted descending");
        }
        previous = Some(date);

        seen_accounts.insert(t["account_id"].as_str().unwrap().to_string());
        assert_eq!(t["pending"], false);
        assert!(t["amount"].is_number());
        assert_eq!(t["category"].as_array().unwrap().len(), 2);
        assert_eq!(t["name"], t["merchant_name"]);
    }
    assert!(seen_accounts.contains("acc_1"));
    assert!(seen_accounts.contains("acc_2"));
}

#[tokio::test]
async fn test_transactions_explicit_range_inclusive() {
    let app = common::test_app();

    let today = Utc::now().date_naive();
    let start = (today - Duration::days(14)).to_string();
    let end = (today - Duration::days(7)).to_string();

    let response = app
        .oneshot(common::authed_request(
            "POST",
            "/transactions/get",
            json!({
                "access_token": "access-token-1",
                "start_date": start,
                "end_date": end,
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;

    let transactions = body["transactions"].as_array().unwrap();
    assert_eq!(body["total_transactions"], transactions.len());
    for t in transactions {
        let date = t["date"].as_str().unwrap();
        assert!(date >= start.as_str() && date <= end.as_str());
    }
}

#[tokio::test]
async fn test_transactions_unknown_token_is_empty() {
    let app = common::test_app();

    let response = app
        .oneshot(common::authed_request(
            "POST",
            "/transactions/get",
            json!({"access_token": "access-unknown"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["accounts"].as_array().unwrap().len(), 0);
    assert_eq!(body["transactions"].as_array().unwrap().len(), 0);
    assert_eq!(body["total_transactions"], 0);
}

#[tokio::test]
async fn test_transactions_missing_access_token() {
    let app = common::test_app();

    let response = app
        .oneshot(common::authed_request(
            "POST",
            "/transactions/get",
            json!({}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(response).await;
    assert_eq!(body["error"], "Missing access_token");
}

// =========================================================================
// POST /statements/get
// =========================================================================

#[tokio::test]
async fn test_statements() {
    let app = common::test_app();

    let response = app
        .oneshot(common::authed_request(
            "POST",
            "/statements/get",
            json!({"access_token": "access-token-1"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;

    assert_eq!(body["accounts"].as_array().unwrap().len(), 2);

    let statements = body["statements"].as_array().unwrap();
    // 6 monthly statements per account
    assert_eq!(statements.len(), 12);
    assert_eq!(body["total_statements"], 12);

    let mut previous: Option<String> = None;
    for s in statements {
        let end_date = s["end_date"].as_str().unwrap().to_string();
        if let Some(prev) = &previous {
            assert!(prev.as_str() >= end_date.as_str(), "not sorted descending");
        }
        previous = Some(end_date.clone());

        assert!(s["start_date"].as_str().unwrap() < end_date.as_str());
        assert!(s["starting_balance"].is_number());
        assert!(s["ending_balance"].is_number());
        assert!(s["total_deposits"].is_number());
        assert!(s["total_withdrawals"].is_number());

        let account_id = s["account_id"].as_str().unwrap();
        let pdf_url = s["pdf_url"].as_str().unwrap();
        assert!(pdf_url.contains(account_id));
        assert!(pdf_url.ends_with(&format!("{}.pdf", &end_date[..7])));
    }
}

#[tokio::test]
async fn test_statements_unknown_token_is_empty() {
    let app = common::test_app();

    let response = app
        .oneshot(common::authed_request(
            "POST",
            "/statements/get",
            json!({"access_token": "access-unknown"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["statements"].as_array().unwrap().len(), 0);
    assert_eq!(body["total_statements"], 0);
}

#[tokio::test]
async fn test_statements_missing_access_token() {
    let app = common::test_app();

    let response = app
        .oneshot(common::authed_request("POST", "/statements/get", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(response).await;
    assert_eq!(body["error"], "Missing access_token");
}
