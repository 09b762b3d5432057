//! Tauri-backed implementations of the dialog and event seams.
//!
//! `tauri-plugin-dialog` reports results through callbacks; each picker hands
//! its callback a `oneshot` sender and awaits the receiver, so callers see a
//! plain async request/response.

use std::future::Future;
use std::path::{Path, PathBuf};
use tauri::{AppHandle, Emitter, Manager};
use tauri_plugin_dialog::{DialogExt, FileDialogBuilder, FilePath, MessageDialogKind};
use tauri_plugin_opener::OpenerExt;
use tokio::sync::oneshot;
use tracing::{debug, warn};

use crate::core::config::{APP_NAME, MAIN_WINDOW, about_text};
use crate::shell::dialogs::{Picked, SaveTarget, ShellDialogs};
use crate::shell::events::{EventSink, ShellEvent};
use crate::utils::{IMAGE_EXTENSIONS, ShellError, ShellResult};

/// Dialogs parented to the main window.
pub struct TauriDialogs {
    app: AppHandle,
}

impl TauriDialogs {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }

    fn file_dialog(&self) -> FileDialogBuilder<tauri::Wry> {
        let builder = self.app.dialog().file();
        match self.app.get_webview_window(MAIN_WINDOW) {
            Some(window) => builder.set_parent(&window),
            None => builder,
        }
    }
}

fn into_path(file: FilePath) -> ShellResult<PathBuf> {
    file.into_path().map_err(|e| ShellError::dialog(e.to_string()))
}

async fn receive<T>(rx: oneshot::Receiver<T>) -> ShellResult<T> {
    rx.await
        .map_err(|_| ShellError::dialog("dialog closed without reporting a result"))
}

impl ShellDialogs for TauriDialogs {
    fn pick_files(&self) -> impl Future<Output = ShellResult<Picked<Vec<PathBuf>>>> + Send {
        let (tx, rx) = oneshot::channel();
        self.file_dialog()
            .set_title("Select Images")
            .add_filter("Images", &IMAGE_EXTENSIONS)
            .add_filter("All Files", &["*"])
            .pick_files(move |files| {
                let _ = tx.send(files);
            });

        async move {
            match receive(rx).await? {
                Some(files) if !files.is_empty() => {
                    let paths = files
                        .into_iter()
                        .map(into_path)
                        .collect::<ShellResult<Vec<_>>>()?;
                    debug!("Picked {} files", paths.len());
                    Ok(Picked::Selected(paths))
                }
                _ => Ok(Picked::Cancelled),
            }
        }
    }

    fn pick_folder(&self, title: &str) -> impl Future<Output = ShellResult<Picked<PathBuf>>> + Send {
        let (tx, rx) = oneshot::channel();
        self.file_dialog()
            .set_title(title)
            .set_can_create_directories(true)
            .pick_folder(move |folder| {
                let _ = tx.send(folder);
            });

        async move {
            let folder = receive(rx).await?.map(into_path).transpose()?;
            Ok(Picked::from(folder))
        }
    }

    fn pick_save_target(
        &self,
        target: SaveTarget,
    ) -> impl Future<Output = ShellResult<Picked<PathBuf>>> + Send {
        let (tx, rx) = oneshot::channel();
        let mut builder = self
            .file_dialog()
            .set_title(&target.title)
            .set_file_name(target.file_name());
        if let Some(dir) = target.directory() {
            builder = builder.set_directory(dir);
        }
        if !target.extensions.is_empty() {
            let extensions: Vec<&str> = target.extensions.iter().map(String::as_str).collect();
            builder = builder.add_filter(&target.filter_name, &extensions);
        }
        builder.save_file(move |file| {
            let _ = tx.send(file);
        });

        async move {
            let file = receive(rx).await?.map(into_path).transpose()?;
            Ok(Picked::from(file))
        }
    }

    fn reveal_in_file_manager(&self, path: &Path) {
        if let Err(e) = self.app.opener().reveal_item_in_dir(path) {
            warn!("Could not reveal {}: {}", path.display(), e);
        }
    }

    fn show_about(&self) {
        self.app
            .dialog()
            .message(about_text())
            .title(format!("About {APP_NAME}"))
            .kind(MessageDialogKind::Info)
            .show(|_| {});
    }
}

/// Emits shell events to every webview of the app.
pub struct TauriEvents {
    app: AppHandle,
}

impl TauriEvents {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl EventSink for TauriEvents {
    fn emit(&self, event: &ShellEvent) -> ShellResult<()> {
        debug!("Emitting {}", event.name());
        self.app.emit(event.name(), event.payload()?)?;
        Ok(())
    }
}
