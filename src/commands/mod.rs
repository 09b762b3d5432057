//! Tauri command handlers for the frontend.
//!
//! These are the whole bridge: the webview can invoke nothing else
//! (see `capabilities/default.json`). Handlers only unpack arguments and
//! forward to [`crate::shell::Shell`].
//! - [`open_file_dialog`], [`open_folder_dialog`]: load images
//! - [`save_file`], [`save_files_to_folder`], [`save_as_zip`]: persist results
//! - [`show_item_in_folder`]: reveal a saved file
//! - output folder and platform queries

mod files;
mod system;

pub use files::*;
pub use system::*;
