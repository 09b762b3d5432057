//! Image extension allow-list and media type lookup.

use std::path::Path;
use std::str::FromStr;

/// Media type used for anything outside the image table.
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Extensions the shell treats as images, without the leading dot.
pub const IMAGE_EXTENSIONS: [&str; 13] = [
    "jpg", "jpeg", "png", "gif", "webp", "bmp", "svg", "ico", "tiff", "tif", "heic", "heif",
    "avif",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Gif,
    WebP,
    Bmp,
    Svg,
    Ico,
    Tiff,
    Heic,
    Heif,
    Avif,
}

impl ImageFormat {
    /// Canonical IANA media type for this format
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Gif => "image/gif",
            Self::WebP => "image/webp",
            Self::Bmp => "image/bmp",
            Self::Svg => "image/svg+xml",
            Self::Ico => "image/x-icon",
            Self::Tiff => "image/tiff",
            Self::Heic => "image/heic",
            Self::Heif => "image/heif",
            Self::Avif => "image/avif",
        }
    }
}

impl FromStr for ImageFormat {
    type Err = ();

    fn from_str(ext: &str) -> Result<Self, Self::Err> {
        let ext = ext.to_ascii_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "png" => Ok(Self::Png),
            "gif" => Ok(Self::Gif),
            "webp" => Ok(Self::WebP),
            "bmp" => Ok(Self::Bmp),
            "svg" => Ok(Self::Svg),
            "ico" => Ok(Self::Ico),
            "tiff" | "tif" => Ok(Self::Tiff),
            "heic" => Ok(Self::Heic),
            "heif" => Ok(Self::Heif),
            "avif" => Ok(Self::Avif),
            _ => Err(()),
        }
    }
}

/// Resolves an extension token (no dot) to a media type.
///
/// Total: unknown or empty extensions map to [`FALLBACK_MIME`].
pub fn resolve_mime(ext: &str) -> &'static str {
    ext.parse::<ImageFormat>()
        .map(|f| f.mime_type())
        .unwrap_or(FALLBACK_MIME)
}

/// Media type for a path, based on its last extension.
pub fn mime_for_path(path: impl AsRef<Path>) -> &'static str {
    resolve_mime(&crate::utils::extension_of(path))
}

/// True when the path's extension is in [`IMAGE_EXTENSIONS`], ignoring case.
pub fn is_image_path(path: impl AsRef<Path>) -> bool {
    let ext = crate::utils::extension_of(path);
    IMAGE_EXTENSIONS.contains(&ext.as_str())
}
