use tauri::State;

use crate::shell::AppShell;
use crate::utils::ShellResult;

#[tauri::command]
pub fn show_item_in_folder(state: State<'_, AppShell>, path: String) {
    state.show_item_in_folder(path);
}

#[tauri::command]
pub fn get_output_folder(state: State<'_, AppShell>) -> Option<String> {
    state
        .output_folder()
        .map(|folder| folder.to_string_lossy().to_string())
}

/// Picks a new output folder. `null` when cancelled; the previous folder is kept.
#[tauri::command]
pub async fn set_output_folder(state: State<'_, AppShell>) -> ShellResult<Option<String>> {
    let folder = state.choose_output_folder().await?;
    Ok(folder.map(|f| f.to_string_lossy().to_string()))
}

#[tauri::command]
pub fn reset_output_folder(state: State<'_, AppShell>) {
    state.reset_output_folder();
}

/// Host OS name, as the webview has no direct access to it.
#[tauri::command]
pub fn platform() -> &'static str {
    tauri_plugin_os::platform()
}
