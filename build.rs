// Commands the webview may invoke. tauri-build generates an `allow-<command>`
// permission for each one; capabilities/default.json grants them to the main
// window and nothing else.
const BRIDGE_COMMANDS: &[&str] = &[
    "open_file_dialog",
    "open_folder_dialog",
    "save_file",
    "save_files_to_folder",
    "save_as_zip",
    "show_item_in_folder",
    "get_output_folder",
    "set_output_folder",
    "reset_output_folder",
    "platform",
];

fn main() {
    tauri_build::try_build(
        tauri_build::Attributes::new()
            .app_manifest(tauri_build::AppManifest::new().commands(BRIDGE_COMMANDS)),
    )
    .expect("error while running tauri-build");
}
