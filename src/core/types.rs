//! Data exchanged between the shell and the webview.

use serde::{Deserialize, Serialize};

/// One loaded image file, ready to be used as an `<img>` source.
///
/// Created by the file loader; the webview owns it afterwards. There is no
/// link back to disk: re-reading means loading the path again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDescriptor {
    /// Basename of the file
    pub name: String,
    /// Absolute, OS-native path
    pub path: String,
    /// `data:<mime>;base64,<payload>`
    pub data_url: String,
    /// Exact byte length at load time
    pub size: u64,
}

/// Per-file result of a settled load, where one failure does not discard
/// the other files.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum LoadOutcome {
    Loaded(FileDescriptor),
    Failed { path: String, error: String },
}

impl LoadOutcome {
    pub fn descriptor(&self) -> Option<&FileDescriptor> {
        match self {
            Self::Loaded(d) => Some(d),
            Self::Failed { .. } => None,
        }
    }
}

/// Request to save one converted image through the save dialog.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRequest {
    pub buffer: Vec<u8>,
    pub file_name: String,
    #[serde(default)]
    pub default_path: Option<String>,
}

/// A named byte buffer destined for an archive or an output folder.
///
/// Names are relative (`a.png`, `nested/a.png`). Duplicates are renamed
/// before writing, see [`crate::utils::unique_names`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArchiveEntry {
    pub name: String,
    pub buffer: Vec<u8>,
}

impl ArchiveEntry {
    pub fn new(name: impl Into<String>, buffer: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            buffer: buffer.into(),
        }
    }
}

/// What the archive writer reports once the file is closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveSummary {
    pub path: String,
    /// On-disk size after the file was synced and closed
    pub size: u64,
    /// Entry names as written, after de-duplication
    pub entry_names: Vec<String>,
}

/// Result of `save_file`: `{success: false}` when the dialog was cancelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveFileResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl SaveFileResult {
    pub fn saved(path: impl Into<String>) -> Self {
        Self { success: true, path: Some(path.into()) }
    }

    pub fn cancelled() -> Self {
        Self { success: false, path: None }
    }
}

/// Result of `save_files_to_folder`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderSaveResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
}

impl FolderSaveResult {
    pub fn saved(count: usize, folder: impl Into<String>) -> Self {
        Self {
            success: true,
            count: Some(count),
            folder: Some(folder.into()),
        }
    }

    pub fn cancelled() -> Self {
        Self { success: false, count: None, folder: None }
    }
}

/// Result of `save_as_zip`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZipSaveResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

impl ZipSaveResult {
    pub fn saved(summary: &ArchiveSummary) -> Self {
        Self {
            success: true,
            path: Some(summary.path.clone()),
            size: Some(summary.size),
        }
    }

    pub fn cancelled() -> Self {
        Self { success: false, path: None, size: None }
    }
}
