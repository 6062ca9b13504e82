//! Reel DB Library
//!
//! Video record persistence: the `VideoStore` capability trait and its
//! Postgres and in-memory implementations.

pub mod db;

pub use db::{MemoryVideoStore, PgVideoStore, VideoStore};
