use crate::{LocalStorage, Storage, StorageResult};
use reel_core::Config;
use std::sync::Arc;

/// Create the blob storage backend described by the configuration.
///
/// Only the local filesystem backend exists; the assets root is created if
/// it does not exist yet.
pub async fn create_storage(config: &Config) -> StorageResult<Arc<dyn Storage>> {
    let storage = LocalStorage::new(
        config.assets_root().to_path_buf(),
        config.assets_base_url().to_string(),
    )
    .await?;
    Ok(Arc::new(storage))
}
