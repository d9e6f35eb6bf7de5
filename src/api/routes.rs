//! API Routes
//!
//! HTTP endpoint definitions.
//!
//! Request bodies are modeled with optional fields and validated before
//! dispatch, so a missing required field (or a missing body altogether)
//! answers 400 with the field named, matching the provider wire contract.

use axum::{
    extract::{Extension, State},
    routing::{get, post},
    Json, Router,
};
use chrono::{Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Account, Statement, Transaction};
use crate::error::AppError;
use crate::session;
use crate::tokens::{self, ExchangeGrant, LinkTokenGrant};
use crate::AppState;

use super::middleware::AuthenticatedTenant;

/// Routes advertised by the info endpoint.
const ENDPOINTS: &[&str] = &[
    "/link/token/create",
    "/item/public_token/exchange",
    "/auth/get",
    "/transactions/get",
    "/statements/get",
    "/info",
];

const DOCUMENTATION_URL: &str = "https://docs.sandbank.test";

/// Default transactions window: this many days back through today.
const DEFAULT_WINDOW_DAYS: i64 = 30;

// =========================================================================
// Request/Response types
// =========================================================================

#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub endpoints: Vec<&'static str>,
    pub documentation: &'static str,
}

#[derive(Debug, Default, Deserialize)]
pub struct LinkTokenCreateRequest {
    #[serde(default)]
    pub user: Option<LinkTokenUser>,
}

#[derive(Debug, Deserialize)]
pub struct LinkTokenUser {
    #[serde(default)]
    pub client_user_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PublicTokenExchangeRequest {
    #[serde(default)]
    pub public_token: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AuthGetRequest {
    #[serde(default)]
    pub access_token: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AuthGetResponse {
    pub accounts: Vec<Account>,
    pub numbers: session::AccountNumbers,
    pub request_id: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct TransactionsGetRequest {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct TransactionsGetResponse {
    pub accounts: Vec<Account>,
    pub transactions: Vec<Transaction>,
    pub total_transactions: usize,
    pub request_id: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct StatementsGetRequest {
    #[serde(default)]
    pub access_token: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StatementsGetResponse {
    pub accounts: Vec<Account>,
    pub statements: Vec<Statement>,
    pub total_statements: usize,
    pub request_id: String,
}

// =========================================================================
// API Router
// =========================================================================

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/info", get(info))
        .route("/link/token/create", post(create_link_token))
        .route("/item/public_token/exchange", post(exchange_public_token))
        .route("/auth/get", post(get_auth))
        .route("/transactions/get", post(get_transactions))
        .route("/statements/get", post(get_statements))
}

/// Fallback for unmatched paths. Authentication has already run by the
/// time this answers.
pub async fn endpoint_not_found() -> AppError {
    AppError::EndpointNotFound
}

// =========================================================================
// GET /info
// =========================================================================

/// Describe the simulated provider
async fn info() -> Json<InfoResponse> {
    Json(InfoResponse {
        name: "sandbank API",
        version: env!("CARGO_PKG_VERSION"),
        description: "Simulated Open-Banking provider for development and testing",
        endpoints: ENDPOINTS.to_vec(),
        documentation: DOCUMENTATION_URL,
    })
}

// =========================================================================
// POST /link/token/create
// =========================================================================

/// Issue a link token for the calling tenant's end user
async fn create_link_token(
    Extension(tenant): Extension<AuthenticatedTenant>,
    body: Option<Json<LinkTokenCreateRequest>>,
) -> Result<Json<LinkTokenGrant>, AppError> {
    let request = body.map(|Json(r)| r).unwrap_or_default();

    let client_user_id = request
        .user
        .and_then(|user| user.client_user_id)
        .ok_or(AppError::MissingField("user.client_user_id"))?;

    let grant = tokens::create_link_token(&mut rand::thread_rng(), &tenant.client_id, &client_user_id);

    Ok(Json(grant))
}

// =========================================================================
// POST /item/public_token/exchange
// =========================================================================

/// Exchange a public token for an access token
async fn exchange_public_token(
    body: Option<Json<PublicTokenExchangeRequest>>,
) -> Result<Json<ExchangeGrant>, AppError> {
    let request = body.map(|Json(r)| r).unwrap_or_default();

    let public_token = request
        .public_token
        .ok_or(AppError::MissingField("public_token"))?;

    let grant = tokens::exchange_public_token(&mut rand::thread_rng(), &public_token);

    Ok(Json(grant))
}

// =========================================================================
// POST /auth/get
// =========================================================================

/// Accounts and banking numbers for an access token
async fn get_auth(
    State(state): State<AppState>,
    body: Option<Json<AuthGetRequest>>,
) -> Result<Json<AuthGetResponse>, AppError> {
    let request = body.map(|Json(r)| r).unwrap_or_default();

    let access_token = request
        .access_token
        .ok_or(AppError::MissingField("access_token"))?;

    let view = session::auth(&state.catalog, &access_token);

    Ok(Json(AuthGetResponse {
        accounts: view.accounts,
        numbers: view.numbers,
        request_id: tokens::new_request_id(&mut rand::thread_rng()),
    }))
}

// =========================================================================
// POST /transactions/get
// =========================================================================

/// Transactions for an access token, defaulting to the trailing 30 days
async fn get_transactions(
    State(state): State<AppState>,
    body: Option<Json<TransactionsGetRequest>>,
) -> Result<Json<TransactionsGetResponse>, AppError> {
    let request = body.map(|Json(r)| r).unwrap_or_default();

    let access_token = request
        .access_token
        .ok_or(AppError::MissingField("access_token"))?;

    let today = Utc::now().date_naive();
    let start_date = request
        .start_date
        .unwrap_or_else(|| today - Duration::days(DEFAULT_WINDOW_DAYS));
    let end_date = request.end_date.unwrap_or(today);

    let mut rng = rand::thread_rng();
    let view = session::transactions(
        &state.catalog,
        &mut rng,
        &access_token,
        Some(start_date),
        Some(end_date),
    );

    Ok(Json(TransactionsGetResponse {
        accounts: view.accounts,
        transactions: view.transactions,
        total_transactions: view.total_transactions,
        request_id: tokens::new_request_id(&mut rng),
    }))
}

// =========================================================================
// POST /statements/get
// =========================================================================

/// Statements for an access token
async fn get_statements(
    State(state): State<AppState>,
    body: Option<Json<StatementsGetRequest>>,
) -> Result<Json<StatementsGetResponse>, AppError> {
    let request = body.map(|Json(r)| r).unwrap_or_default();

    let access_token = request
        .access_token
        .ok_or(AppError::MissingField("access_token"))?;

    let mut rng = rand::thread_rng();
    let view = session::statements(&state.catalog, &mut rng, &access_token);

    Ok(Json(StatementsGetResponse {
        accounts: view.accounts,
        statements: view.statements,
        total_statements: view.total_statements,
        request_id: tokens::new_request_id(&mut rng),
    }))
}
