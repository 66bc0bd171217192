//! Service context for Multiverse Explorer.
//!
//! Session store, credential verifier and character source are built once in
//! `main` and handed to every component via use_context, so pages never reach
//! for global state directly.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(crate::get_services);
//!
//! // In child components
//! let services = use_services();
//! let signed_in = services.session.is_authenticated();
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use multiverse_core::{
    open_session_store, AppConfig, CharacterSource, CredentialVerifier, DemoCredentials,
    HttpCharacterSource, SessionStore,
};

/// Capabilities the pages need.
#[derive(Clone)]
pub struct AppServices {
    /// Persisted session flag
    pub session: Arc<dyn SessionStore>,
    /// Login credential check
    pub verifier: Arc<dyn CredentialVerifier>,
    /// Where character batches come from
    pub characters: Arc<dyn CharacterSource>,
}

impl AppServices {
    /// Wire up the production services for `config`.
    ///
    /// An unusable data directory degrades to a store that never holds a
    /// session, rather than failing startup.
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            session: open_session_store(config.session_db_path()),
            verifier: Arc::new(DemoCredentials::default()),
            characters: Arc::new(HttpCharacterSource::new(config.endpoint.clone())),
        }
    }
}

/// Hook to access the services from context.
pub fn use_services() -> AppServices {
    use_context::<AppServices>()
}
