//! Application state shared across handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use wayfarer_core::EntityStore;

use crate::config::ApiConfig;
use crate::gemini::GeminiClient;
use crate::models::{Tour, User};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The two entity stores are constructed here
/// once and injected into handlers through the router state, so tests run
/// against isolated instances instead of process-wide globals.
///
/// Each store sits behind its own `RwLock`; handlers never hold a lock
/// across an await point, so every store mutation is atomic per request.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    tours: RwLock<EntityStore<Tour>>,
    users: RwLock<EntityStore<User>>,
    gemini: GeminiClient,
}

impl AppState {
    /// Create a new application state with empty stores.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        let gemini = GeminiClient::new(&config.gemini);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                tours: RwLock::new(EntityStore::new()),
                users: RwLock::new(EntityStore::new()),
                gemini,
            }),
        }
    }

    /// Get a reference to the API configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get a reference to the tour store.
    #[must_use]
    pub fn tours(&self) -> &RwLock<EntityStore<Tour>> {
        &self.inner.tours
    }

    /// Get a reference to the user store.
    #[must_use]
    pub fn users(&self) -> &RwLock<EntityStore<User>> {
        &self.inner.users
    }

    /// Get a reference to the Gemini API client.
    #[must_use]
    pub fn gemini(&self) -> &GeminiClient {
        &self.inner.gemini
    }
}
