use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::error::AppError;

/// Content types accepted for thumbnails
pub const ALLOWED_THUMBNAIL_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

/// Media type of an accepted thumbnail image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbnailMediaType {
    Jpeg,
    Png,
}

impl ThumbnailMediaType {
    /// Parse the Content-Type declared on an uploaded part.
    ///
    /// Parameters (`; charset=...`) are ignored and type/subtype compare
    /// case-insensitively. A missing or unparseable value is a
    /// `MalformedMediaType`; a well-formed type outside the allow-list is an
    /// `UnsupportedMediaType`.
    pub fn parse(declared: Option<&str>) -> Result<Self, AppError> {
        let raw = declared.map(str::trim).unwrap_or_default();
        if raw.is_empty() {
            return Err(AppError::MalformedMediaType("no media type".to_string()));
        }

        let parsed: mime::Mime = raw
            .parse()
            .map_err(|e: mime::FromStrError| AppError::MalformedMediaType(e.to_string()))?;

        let type_ = parsed.type_().as_str().to_ascii_lowercase();
        let subtype = parsed.subtype().as_str().to_ascii_lowercase();
        match (type_.as_str(), subtype.as_str()) {
            ("image", "jpeg") => Ok(ThumbnailMediaType::Jpeg),
            ("image", "png") => Ok(ThumbnailMediaType::Png),
            _ => Err(AppError::UnsupportedMediaType(format!("{}/{}", type_, subtype))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThumbnailMediaType::Jpeg => "image/jpeg",
            ThumbnailMediaType::Png => "image/png",
        }
    }

    /// File extension for stored blobs: the subtype half of the media type.
    pub fn extension(&self) -> &'static str {
        match self {
            ThumbnailMediaType::Jpeg => "jpeg",
            ThumbnailMediaType::Png => "png",
        }
    }
}

impl Display for ThumbnailMediaType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}
