//! Tauri command handlers for loading and saving images.

use tauri::State;
use tracing::debug;

use crate::core::{
    ArchiveEntry, FileDescriptor, FolderSaveResult, SaveFileResult, SaveRequest, ZipSaveResult,
};
use crate::shell::AppShell;
use crate::utils::ShellResult;

/// Opens the image picker and loads the selection.
///
/// # Returns
/// The loaded files in selection order, or `null` when the dialog was cancelled.
#[tauri::command]
pub async fn open_file_dialog(
    state: State<'_, AppShell>,
) -> ShellResult<Option<Vec<FileDescriptor>>> {
    state.open_files().await
}

/// Opens the folder picker and loads every image directly inside it.
///
/// # Returns
/// The loaded files (possibly empty), or `null` when the dialog was cancelled.
#[tauri::command]
pub async fn open_folder_dialog(
    state: State<'_, AppShell>,
) -> ShellResult<Option<Vec<FileDescriptor>>> {
    state.open_folder().await
}

/// Saves one converted image through the save dialog.
#[tauri::command]
pub async fn save_file(
    state: State<'_, AppShell>,
    data: SaveRequest,
) -> ShellResult<SaveFileResult> {
    debug!("save_file: {} ({} bytes)", data.file_name, data.buffer.len());
    state.save_file(data).await
}

/// Writes converted images into the output folder, asking for one if unset.
#[tauri::command]
pub async fn save_files_to_folder(
    state: State<'_, AppShell>,
    files: Vec<ArchiveEntry>,
) -> ShellResult<FolderSaveResult> {
    debug!("save_files_to_folder: {} files", files.len());
    state.save_files_to_folder(files).await
}

/// Bundles converted images into a ZIP archive chosen through the save dialog.
///
/// Resolves only after the archive is closed on disk.
#[tauri::command]
pub async fn save_as_zip(
    state: State<'_, AppShell>,
    files: Vec<ArchiveEntry>,
) -> ShellResult<ZipSaveResult> {
    debug!("save_as_zip: {} files", files.len());
    state.save_as_zip(files).await
}
