//! Token lifecycle
//!
//! Link-token issuance and public-token exchange. Nothing minted here is
//! persisted or registered: link tokens are never looked up again, and the
//! exchange ignores its input and returns a fresh access token that does
//! not resolve to any catalog accounts. Only the seeded demo tokens do.
//! That mirrors a sandbox provider where the linking flow is cosmetic.

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Link tokens carry an expiration this many seconds after issuance.
/// Expiry is embedded for clients to display; nothing enforces it.
const LINK_TOKEN_TTL_SECS: i64 = 1800;

/// Length of the short identifiers derived from a nonce.
const SHORT_ID_LEN: usize = 8;

/// A freshly issued link token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkTokenGrant {
    pub link_token: String,
    /// Expiration as epoch seconds.
    pub expiration: i64,
    pub request_id: String,
}

/// The result of exchanging a public token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeGrant {
    pub access_token: String,
    pub item_id: String,
    pub request_id: String,
}

/// Issue a link token for a tenant's end user.
///
/// The token embeds the client ID, the user ID, the issuance timestamp,
/// and a random identifier; the request ID reuses the first 8 hex chars
/// of that identifier.
pub fn create_link_token<R: Rng + ?Sized>(
    rng: &mut R,
    client_id: &str,
    client_user_id: &str,
) -> LinkTokenGrant {
    let issued_at = Utc::now().timestamp();
    let nonce = nonce(rng);

    LinkTokenGrant {
        link_token: format!(
            "link-{}-{}-{}-{}",
            client_id, client_user_id, issued_at, nonce
        ),
        expiration: issued_at + LINK_TOKEN_TTL_SECS,
        request_id: format!("req_{}", &nonce[..SHORT_ID_LEN]),
    }
}

/// Exchange a public token for an access token and item ID.
///
/// The input is not validated and every call mints fresh identifiers, so
/// exchanging the same public token twice yields two different grants.
pub fn exchange_public_token<R: Rng + ?Sized>(rng: &mut R, _public_token: &str) -> ExchangeGrant {
    ExchangeGrant {
        access_token: format!("access-{}", nonce(rng)),
        item_id: format!("item-{}", &nonce(rng)[..SHORT_ID_LEN]),
        request_id: new_request_id(rng),
    }
}

/// Mint a per-response request identifier for tracing.
pub fn new_request_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("req_{}", &nonce(rng)[..SHORT_ID_LEN])
}

/// 16 random bytes, hex encoded.
fn nonce<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);
    hex::encode(bytes)
}
