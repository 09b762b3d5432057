// Module declarations in dependency order
pub mod utils;
pub mod core;
pub mod files;
pub mod shell;
pub mod commands;

use anyhow::Context;
use tauri::Manager;
use tracing::{debug, info, warn};

use crate::core::ShellSession;
use crate::shell::{
    AppShell, MenuCommand, Shell, TauriDialogs, TauriEvents, build_menu, create_main_window,
};

// Public exports for external consumers
pub use crate::core::{ArchiveEntry, FileDescriptor};
pub use crate::files::{load_files, load_files_settled, scan_directory, write_archive};
pub use crate::shell::ShellEvent;
pub use crate::utils::{ShellError, ShellResult, resolve_mime};

/// Builds the Tauri application and runs its event loop.
///
/// Expects tracing to be initialised by the caller (see `main.rs`).
pub fn run() -> anyhow::Result<()> {
    let app = tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_os::init())
        .menu(|handle| build_menu(handle))
        .on_menu_event(|handle, event| {
            let Some(command) = MenuCommand::from_id(event.id().as_ref()) else {
                debug!("Ignoring menu event {:?}", event.id());
                return;
            };
            let shell = handle.state::<AppShell>().inner().clone();
            tauri::async_runtime::spawn(async move {
                if let Err(e) = shell.run_command(command).await {
                    warn!("Menu command {} failed: {}", command.id(), e);
                }
            });
        })
        .invoke_handler(tauri::generate_handler![
            commands::open_file_dialog,
            commands::open_folder_dialog,
            commands::save_file,
            commands::save_files_to_folder,
            commands::save_as_zip,
            commands::show_item_in_folder,
            commands::get_output_folder,
            commands::set_output_folder,
            commands::reset_output_folder,
            commands::platform,
        ])
        .setup(|app| {
            let handle = app.handle().clone();
            let shell: AppShell = Shell::new(
                TauriDialogs::new(handle.clone()),
                TauriEvents::new(handle),
                ShellSession::new(),
            );
            app.manage(shell);
            debug!("✓ Shell state initialized");

            create_main_window(app.handle())?;
            debug!("✓ Main window created");
            Ok(())
        })
        .build(tauri::generate_context!())
        .context("error while building tauri application")?;

    info!("Starting application event loop...");
    app.run(|_app_handle, event| {
        if let tauri::RunEvent::Exit = event {
            info!("Application exiting");
        }
    });
    Ok(())
}
