//! Storage abstraction trait
//!
//! This module defines the Storage trait that all blob backends implement.

use async_trait::async_trait;
use thiserror::Error;
use tokio::io::AsyncRead;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// A blob that has been fully written and synced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredBlob {
    /// Key relative to the storage root
    pub key: String,
    /// Publicly reachable URL for the blob
    pub url: String,
    pub size_bytes: u64,
}

/// Storage abstraction trait
///
/// Handlers depend on this trait only, so a different blob backend can be
/// swapped in without touching request handling.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Stream `reader` into a new blob named `filename`.
    ///
    /// Bytes are copied verbatim in the order read. The destination handle is
    /// released before this returns, on success and on failure; a failed write
    /// leaves no partial blob behind.
    async fn upload_stream(
        &self,
        filename: &str,
        content_type: &str,
        reader: &mut (dyn AsyncRead + Send + Unpin),
    ) -> StorageResult<StoredBlob>;

    /// Download a blob by its storage key
    async fn download(&self, storage_key: &str) -> StorageResult<Vec<u8>>;

    /// Delete a blob by its storage key. Deleting a missing blob is not an error.
    async fn delete(&self, storage_key: &str) -> StorageResult<()>;

    /// Check if a blob exists
    async fn exists(&self, storage_key: &str) -> StorageResult<bool>;

    /// Size in bytes of a stored blob
    async fn content_length(&self, storage_key: &str) -> StorageResult<u64>;
}
