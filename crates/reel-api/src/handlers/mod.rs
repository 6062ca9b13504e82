pub mod health;
pub mod path;
pub mod thumbnail_upload;
pub mod videos;
