//! Blob filename generation.
//!
//! Thumbnails are stored as `{token}.{extension}` where `token` is 32 random
//! bytes encoded as unpadded base64url. Random names keep concurrent uploads
//! for the same video from racing on one path and do not leak video ids
//! through the asset directory.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::RngCore;

/// Number of random bytes behind each blob token
pub const TOKEN_BYTES: usize = 32;

/// Generate a fresh random token (43 URL-safe characters).
pub fn random_token() -> String {
    let mut buf = [0u8; TOKEN_BYTES];
    rand::rng().fill_bytes(&mut buf);
    URL_SAFE_NO_PAD.encode(buf)
}

/// Generate a storage filename for a thumbnail with the given extension.
pub fn thumbnail_filename(extension: &str) -> String {
    format!("{}.{}", random_token(), extension)
}
