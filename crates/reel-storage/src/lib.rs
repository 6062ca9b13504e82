//! Reel Storage Library
//!
//! Blob storage for uploaded thumbnails. The `Storage` trait is the seam the
//! API depends on; `LocalStorage` writes blobs into a directory on local disk.
//!
//! # Storage key format
//!
//! Keys are plain filenames relative to the storage root, for example
//! `3q2-7w...Xg.png`. Keys must not contain `..` or a leading `/`. Filename
//! generation lives in the `keys` module.

pub mod factory;
pub mod keys;
pub mod local;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use local::LocalStorage;
pub use traits::{Storage, StorageError, StorageResult, StoredBlob};
