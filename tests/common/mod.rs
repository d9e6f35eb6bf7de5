//! Shared helpers for integration tests.

use axum::body::{to_bytes, Body};
use axum::http::{Request, Response};
use axum::Router;
use sandbank::{api, AppState, Config};
use serde_json::Value;

/// Demo tenant used by the tests.
pub const CLIENT_ID: &str = "client_123456";
pub const CLIENT_SECRET: &str = "secret_abcdef123456";

/// Base path the test router serves under.
pub const BASE: &str = "/v1";

pub fn test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        base_path: BASE.to_string(),
        environment: "test".to_string(),
    }
}

/// The full production router over the seeded demo state.
pub fn test_app() -> Router {
    api::build_router(&test_config(), AppState::seeded())
}

/// A JSON request carrying valid tenant credentials.
pub fn authed_request(method: &str, path: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(format!("{}{}", BASE, path))
        .header("content-type", "application/json")
        .header("X-Client-ID", CLIENT_ID)
        .header("X-Client-Secret", CLIENT_SECRET)
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Read a response body as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
