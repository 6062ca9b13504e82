//! Data models for the application

mod media_type;
mod video;

pub use media_type::*;
pub use video::*;
