//! The operations behind the bridge and the menu.
//!
//! [`Shell`] ties the dialog seam, the event seam and the session together.
//! Tauri commands and menu handlers are thin wrappers around it.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

use crate::core::config::default_archive_name;
use crate::core::{
    ArchiveEntry, FileDescriptor, FolderSaveResult, SaveFileResult, SaveRequest, ShellSession,
    ZipSaveResult,
};
use crate::files::{load_files, scan_directory, write_archive, write_entries_to_folder, write_file};
use crate::shell::dialogs::{Picked, SaveTarget, ShellDialogs};
use crate::shell::events::{EventSink, ShellEvent};
use crate::shell::menu::{CommandAction, MenuCommand};
use crate::utils::{ShellResult, extension_of, unix_millis};

const OUTPUT_FOLDER_TITLE: &str = "Select Output Folder";

pub struct Shell<D, E> {
    dialogs: Arc<D>,
    events: Arc<E>,
    session: ShellSession,
}

impl<D, E> Clone for Shell<D, E> {
    fn clone(&self) -> Self {
        Self {
            dialogs: Arc::clone(&self.dialogs),
            events: Arc::clone(&self.events),
            session: self.session.clone(),
        }
    }
}

impl<D: ShellDialogs, E: EventSink> Shell<D, E> {
    pub fn new(dialogs: D, events: E, session: ShellSession) -> Self {
        Self {
            dialogs: Arc::new(dialogs),
            events: Arc::new(events),
            session,
        }
    }

    pub fn session(&self) -> &ShellSession {
        &self.session
    }

    /// Asks for image files and loads them. `None` when cancelled.
    pub async fn open_files(&self) -> ShellResult<Option<Vec<FileDescriptor>>> {
        let Picked::Selected(paths) = self.dialogs.pick_files().await? else {
            debug!("Open images cancelled");
            return Ok(None);
        };
        let files = load_files(&paths).await?;
        info!("Opened {} images", files.len());
        Ok(Some(files))
    }

    /// Asks for a folder and loads its images. `None` when cancelled;
    /// `Some(vec![])` when the folder holds no images.
    pub async fn open_folder(&self) -> ShellResult<Option<Vec<FileDescriptor>>> {
        let Picked::Selected(folder) = self.dialogs.pick_folder("Select Folder").await? else {
            debug!("Open folder cancelled");
            return Ok(None);
        };
        let files = scan_directory(&folder).await?;
        info!("Opened {} images from {}", files.len(), folder.display());
        Ok(Some(files))
    }

    /// Saves one buffer through the save dialog.
    ///
    /// The suggestion is `default_path`, else `<output folder>/<file name>`
    /// when an output folder is set, else the bare file name.
    pub async fn save_file(&self, request: SaveRequest) -> ShellResult<SaveFileResult> {
        let suggested = match (&request.default_path, self.session.output_folder()) {
            (Some(path), _) if !path.is_empty() => PathBuf::from(path),
            (_, Some(folder)) => folder.join(&request.file_name),
            (_, None) => PathBuf::from(&request.file_name),
        };
        let ext = extension_of(&request.file_name);
        let target = SaveTarget {
            title: "Save Image".into(),
            suggested,
            filter_name: "Images".into(),
            extensions: if ext.is_empty() { Vec::new() } else { vec![ext] },
        };

        let Picked::Selected(path) = self.dialogs.pick_save_target(target).await? else {
            return Ok(SaveFileResult::cancelled());
        };
        write_file(&path, &request.buffer).await?;
        Ok(SaveFileResult::saved(path.to_string_lossy()))
    }

    /// Writes every entry into the output folder, asking for one when the
    /// session has none.
    pub async fn save_files_to_folder(
        &self,
        entries: Vec<ArchiveEntry>,
    ) -> ShellResult<FolderSaveResult> {
        let folder = match self.session.output_folder() {
            Some(folder) => folder,
            None => match self.dialogs.pick_folder(OUTPUT_FOLDER_TITLE).await? {
                Picked::Selected(folder) => folder,
                Picked::Cancelled => return Ok(FolderSaveResult::cancelled()),
            },
        };

        let saved = write_entries_to_folder(&folder, &entries).await?;
        Ok(FolderSaveResult::saved(saved.len(), folder.to_string_lossy()))
    }

    /// Bundles every entry into a ZIP chosen through the save dialog.
    ///
    /// Returns once the archive is closed on disk, with its final size.
    pub async fn save_as_zip(&self, entries: Vec<ArchiveEntry>) -> ShellResult<ZipSaveResult> {
        let name = default_archive_name(unix_millis());
        let suggested = match self.session.output_folder() {
            Some(folder) => folder.join(&name),
            None => PathBuf::from(&name),
        };
        let target = SaveTarget {
            title: "Save as ZIP".into(),
            suggested,
            filter_name: "ZIP Archive".into(),
            extensions: vec!["zip".into()],
        };

        let Picked::Selected(path) = self.dialogs.pick_save_target(target).await? else {
            return Ok(ZipSaveResult::cancelled());
        };
        let summary = write_archive(entries, path).await?;
        Ok(ZipSaveResult::saved(&summary))
    }

    pub fn show_item_in_folder(&self, path: impl AsRef<Path>) {
        self.dialogs.reveal_in_file_manager(path.as_ref());
    }

    /// Asks for an output folder and stores it in the session. The session
    /// is untouched when cancelled.
    pub async fn choose_output_folder(&self) -> ShellResult<Option<PathBuf>> {
        match self.dialogs.pick_folder(OUTPUT_FOLDER_TITLE).await? {
            Picked::Selected(folder) => {
                self.session.set_output_folder(&folder);
                Ok(Some(folder))
            }
            Picked::Cancelled => Ok(None),
        }
    }

    pub fn output_folder(&self) -> Option<PathBuf> {
        self.session.output_folder()
    }

    pub fn reset_output_folder(&self) {
        self.session.reset_output_folder();
    }

    /// Runs a menu command, pushing its result to the webview.
    pub async fn run_command(&self, command: MenuCommand) -> ShellResult<()> {
        debug!("Menu command {}", command.id());
        match command.action() {
            CommandAction::Forward(event) => self.events.emit(&event),
            CommandAction::OpenImages => match self.open_files().await? {
                Some(files) => self.events.emit(&ShellEvent::FilesSelected(files)),
                None => Ok(()),
            },
            CommandAction::OpenFolder => match self.open_folder().await? {
                Some(files) => self.events.emit(&ShellEvent::FilesSelected(files)),
                None => Ok(()),
            },
            CommandAction::SetOutputFolder => match self.choose_output_folder().await? {
                Some(folder) => self
                    .events
                    .emit(&ShellEvent::OutputFolderSet(folder.to_string_lossy().to_string())),
                None => Ok(()),
            },
            CommandAction::ShowAbout => {
                self.dialogs.show_about();
                Ok(())
            }
        }
    }
}
