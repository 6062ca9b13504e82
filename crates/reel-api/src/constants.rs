//! Route and upload constants shared by the router, handlers and tests.

/// Prefix for all JSON API routes.
pub const API_PREFIX: &str = "/api";

/// Thumbnail upload route; also mounted under `API_PREFIX`.
pub const THUMBNAIL_UPLOAD_ROUTE: &str = "/videos/{video_id}/thumbnail";

/// Route under which the assets root is served.
pub const ASSETS_ROUTE: &str = "/assets";

/// Multipart part carrying the thumbnail image.
pub const THUMBNAIL_FIELD: &str = "thumbnail";

/// Upper bound on requests processed at once.
pub const MAX_CONCURRENT_REQUESTS: usize = 512;
