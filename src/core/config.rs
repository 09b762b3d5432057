//! Static configuration of the shell.
//!
//! Nothing here is persisted. Runtime configuration is limited to the
//! session output folder and the `RUST_LOG` filter.

/// Product name shown in the window title and the about dialog.
pub const APP_NAME: &str = "ImageForge Pro";

/// Label of the single application window.
pub const MAIN_WINDOW: &str = "main";

pub const WINDOW_WIDTH: f64 = 1400.0;
pub const WINDOW_HEIGHT: f64 = 900.0;
pub const WINDOW_MIN_WIDTH: f64 = 1100.0;
pub const WINDOW_MIN_HEIGHT: f64 = 700.0;

/// `#020617`, matches the dark theme of the webview.
pub const WINDOW_BACKGROUND: (u8, u8, u8) = (0x02, 0x06, 0x17);

/// Deflate level used for every archive entry.
pub const ARCHIVE_COMPRESSION_LEVEL: i64 = 9;

/// Prefix of the suggested archive file name.
pub const ARCHIVE_NAME_PREFIX: &str = "converted-images";

pub const ABOUT_DETAIL: &str = "Professional offline image converter with batch processing, \
watermarks, resize, and format conversion.\n\nAll processing happens locally - your images \
never leave your computer.";

/// Suggested archive name: `converted-images-<unix-millis>.zip`.
pub fn default_archive_name(millis: u128) -> String {
    format!("{ARCHIVE_NAME_PREFIX}-{millis}.zip")
}

/// Text of the about dialog, including the crate version.
pub fn about_text() -> String {
    format!("{APP_NAME}\n\nVersion {}\n\n{ABOUT_DETAIL}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archive_name_pattern() {
        assert_eq!(default_archive_name(1700000000123), "converted-images-1700000000123.zip");
    }

    #[test]
    fn about_mentions_version() {
        assert!(about_text().contains(env!("CARGO_PKG_VERSION")));
    }
}
