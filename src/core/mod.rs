//! Core application types and state management.
//!
//! - [`ShellSession`]: session state (the output folder) managed by Tauri
//! - [`FileDescriptor`]: a loaded image as handed to the webview
//! - [`ArchiveEntry`]: a named buffer to save or archive
//! - [`config`]: static window, archive and about settings

pub mod config;
mod state;
mod types;

pub use state::ShellSession;
pub use types::{
    ArchiveEntry, ArchiveSummary, FileDescriptor, FolderSaveResult, LoadOutcome, SaveFileResult,
    SaveRequest, ZipSaveResult,
};
