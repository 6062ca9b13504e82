//! Database repositories for the data access layer
//!
//! `store` holds the `VideoStore` trait handlers depend on; `video` is the
//! Postgres implementation and `memory` an in-process one for development and
//! tests.

pub mod memory;
pub mod store;
pub mod video;

pub use memory::MemoryVideoStore;
pub use store::VideoStore;
pub use video::PgVideoStore;
