pub mod error;
pub mod formats;
pub mod fs;

pub use error::{ShellError, ShellResult};
pub use formats::{IMAGE_EXTENSIONS, ImageFormat, is_image_path, mime_for_path, resolve_mime};
pub use fs::{extension_of, file_name_of, unique_names, unix_millis, validate_entry_name};
