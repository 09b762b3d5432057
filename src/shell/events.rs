//! Events pushed from the shell to the webview.

use serde_json::Value;

use crate::core::FileDescriptor;
use crate::utils::ShellResult;

/// Every event the webview can subscribe to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    FilesSelected(Vec<FileDescriptor>),
    OutputFolderSet(String),
    SelectAll,
    Deselect,
    RemoveSelected,
    ClearAll,
    Convert,
    ConvertSelected,
    SaveAll,
    SaveZip,
    Shortcuts,
}

impl ShellEvent {
    /// Channel name the webview listens on.
    pub fn name(&self) -> &'static str {
        match self {
            Self::FilesSelected(_) => "files-selected",
            Self::OutputFolderSet(_) => "output-folder-set",
            Self::SelectAll => "menu-select-all",
            Self::Deselect => "menu-deselect",
            Self::RemoveSelected => "menu-remove-selected",
            Self::ClearAll => "menu-clear-all",
            Self::Convert => "menu-convert",
            Self::ConvertSelected => "menu-convert-selected",
            Self::SaveAll => "menu-save-all",
            Self::SaveZip => "menu-save-zip",
            Self::Shortcuts => "menu-shortcuts",
        }
    }

    /// JSON payload; `null` for the menu events.
    pub fn payload(&self) -> ShellResult<Value> {
        Ok(match self {
            Self::FilesSelected(files) => serde_json::to_value(files)
                .map_err(|e| crate::utils::ShellError::event(e.to_string()))?,
            Self::OutputFolderSet(folder) => Value::String(folder.clone()),
            _ => Value::Null,
        })
    }
}

/// Delivers events to the webview.
pub trait EventSink: Send + Sync + 'static {
    fn emit(&self, event: &ShellEvent) -> ShellResult<()>;
}
