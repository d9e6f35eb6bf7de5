//! Credential store
//!
//! Static tenant credentials gating access to the simulated provider API.
//! Tenants are API consumers (client ID/secret pairs), distinct from the
//! simulated banking customers.

use std::collections::HashMap;

/// Read-only mapping of tenant client IDs to client secrets.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    tenants: HashMap<String, String>,
}

impl CredentialStore {
    /// Build a store from explicit tenant pairs.
    pub fn new<I>(tenants: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            tenants: tenants.into_iter().collect(),
        }
    }

    /// The built-in demo tenants.
    pub fn seed() -> Self {
        Self::new([
            (
                "client_123456".to_string(),
                "secret_abcdef123456".to_string(),
            ),
            (
                "client_654321".to_string(),
                "secret_fedcba654321".to_string(),
            ),
        ])
    }

    /// Check a client ID/secret pair against the registered tenants.
    ///
    /// Unknown client IDs are simply invalid, never an error.
    pub fn validate(&self, client_id: &str, client_secret: &str) -> bool {
        self.tenants
            .get(client_id)
            .map(|secret| secret == client_secret)
            .unwrap_or(false)
    }
}
