//! Disk I/O behind the bridge: loading images, scanning folders, saving
//! converted buffers and building ZIP archives.

pub mod archive;
pub mod loader;
pub mod saver;
pub mod scanner;

pub use archive::{write_archive, write_archive_blocking};
pub use loader::{describe, load_file, load_files, load_files_settled};
pub use saver::{write_entries_to_folder, write_file};
pub use scanner::{list_images, scan_directory};
