//! API Middleware
//!
//! Tenant authentication and request logging.

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Method, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::error::AppError;
use crate::AppState;

/// Header carrying the tenant client ID.
pub const CLIENT_ID_HEADER: &str = "x-client-id";

/// Header carrying the tenant client secret.
pub const CLIENT_SECRET_HEADER: &str = "x-client-secret";

/// Tenant identity established by [`tenant_auth`].
#[derive(Debug, Clone)]
pub struct AuthenticatedTenant {
    pub client_id: String,
}

// =========================================================================
// Tenant Authentication Middleware
// =========================================================================

/// Validate tenant credentials from the client headers.
///
/// Runs before any routing decision, so unroutable paths still answer 401
/// without credentials. Preflight requests bypass authentication entirely
/// and return 204 with no body.
pub async fn tenant_auth(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    if request.method() == Method::OPTIONS {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let client_id = header_str(request.headers(), CLIENT_ID_HEADER);
    let client_secret = header_str(request.headers(), CLIENT_SECRET_HEADER);

    let client_id = match (client_id, client_secret) {
        (Some(id), Some(secret)) if state.credentials.validate(id, secret) => id.to_string(),
        _ => return Err(AppError::InvalidCredentials.into_response()),
    };

    request
        .extensions_mut()
        .insert(AuthenticatedTenant { client_id });

    Ok(next.run(request).await)
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

// =========================================================================
// Request Logging Middleware
// =========================================================================

/// Headers that should be masked in logs
const SENSITIVE_HEADERS: &[&str] = &[
    CLIENT_SECRET_HEADER,
    "authorization",
    "cookie",
    "set-cookie",
];

/// Mask sensitive headers for logging
pub fn mask_headers_for_logging(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            let name_lower = name.as_str().to_lowercase();
            let masked_value = if SENSITIVE_HEADERS.contains(&name_lower.as_str()) {
                "[REDACTED]".to_string()
            } else {
                value.to_str().unwrap_or("[invalid utf8]").to_string()
            };
            (name.to_string(), masked_value)
        })
        .collect()
}

/// Request logging middleware
pub async fn request_logging(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let correlation_id = Uuid::new_v4();

    let headers = mask_headers_for_logging(request.headers());

    let start = std::time::Instant::now();

    tracing::info!(
        method = %method,
        uri = %uri,
        correlation_id = %correlation_id,
        headers = ?headers,
        "Incoming request"
    );

    let response = next.run(request).await;

    let duration = start.elapsed();

    tracing::info!(
        method = %method,
        uri = %uri,
        status = %response.status(),
        duration_ms = %duration.as_millis(),
        correlation_id = %correlation_id,
        "Request completed"
    );

    response
}
