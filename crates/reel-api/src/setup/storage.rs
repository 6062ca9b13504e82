//! Storage setup and initialization

use anyhow::{Context, Result};
use reel_core::Config;
use reel_storage::{create_storage, Storage};
use std::sync::Arc;

pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    tracing::info!("Initializing storage...");
    let storage = create_storage(config)
        .await
        .context("Failed to initialize thumbnail storage")?;
    tracing::info!(
        assets_root = %config.assets_root().display(),
        assets_base_url = %config.assets_base_url(),
        "Storage initialized successfully"
    );
    Ok(storage)
}
