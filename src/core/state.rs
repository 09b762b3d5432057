//! Session state shared by commands and menu handlers.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Session-scoped settings of the shell.
///
/// Holds the output folder chosen with "Set Output Folder...". Cloning is
/// cheap and every clone sees the same folder. Nothing is persisted; a new
/// process starts without an output folder.
#[derive(Debug, Clone, Default)]
pub struct ShellSession {
    output_folder: Arc<RwLock<Option<PathBuf>>>,
}

impl ShellSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current output folder, if one was set.
    pub fn output_folder(&self) -> Option<PathBuf> {
        match self.output_folder.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn set_output_folder(&self, folder: impl AsRef<Path>) {
        let folder = folder.as_ref().to_path_buf();
        debug!("Output folder set to {}", folder.display());
        *self.write_guard() = Some(folder);
    }

    pub fn reset_output_folder(&self) {
        debug!("Output folder reset");
        *self.write_guard() = None;
    }

    fn write_guard(&self) -> std::sync::RwLockWriteGuard<'_, Option<PathBuf>> {
        // The value is a plain Option, so a poisoned lock still holds usable data
        match self.output_folder.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
