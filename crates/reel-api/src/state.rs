//! Application state shared by every handler.

use crate::auth::{IdentityVerifier, JwtVerifier};
use reel_core::Config;
use reel_db::VideoStore;
use reel_storage::Storage;
use std::sync::Arc;

/// Handlers receive `Arc<AppState>`; each collaborator sits behind a trait
/// object so tests can swap in the memory store and a temp-dir blob store.
pub struct AppState {
    pub config: Config,
    pub videos: Arc<dyn VideoStore>,
    pub storage: Arc<dyn Storage>,
    pub verifier: Arc<dyn IdentityVerifier>,
}

impl AppState {
    /// Build state with an HS256 verifier derived from the config.
    pub fn new(config: Config, videos: Arc<dyn VideoStore>, storage: Arc<dyn Storage>) -> Self {
        let verifier = Arc::new(JwtVerifier::new(
            config.jwt_secret(),
            config.jwt_issuer.clone(),
        ));
        Self {
            config,
            videos,
            storage,
            verifier,
        }
    }
}
