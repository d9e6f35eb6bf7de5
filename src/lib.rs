//! sandbank library
//!
//! Re-exports modules for integration testing and external use.

use std::sync::Arc;

pub mod api;
pub mod catalog;
pub mod config;
pub mod credentials;
pub mod domain;
pub mod generator;
pub mod session;
pub mod tokens;

mod error;

pub use config::Config;
pub use error::{AppError, AppResult};

use catalog::Catalog;
use credentials::CredentialStore;

/// Shared application state.
///
/// Everything inside is read-only after construction, so cloning into
/// concurrent request handlers needs no synchronization.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub credentials: Arc<CredentialStore>,
}

impl AppState {
    /// State backed by the built-in demo catalog and tenants.
    pub fn seeded() -> Self {
        Self {
            catalog: Arc::new(Catalog::seed()),
            credentials: Arc::new(CredentialStore::seed()),
        }
    }
}
