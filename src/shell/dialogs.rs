//! Native dialog seam.
//!
//! [`ShellDialogs`] is what the service layer talks to. The Tauri
//! implementation lives in [`crate::shell::native`]; tests drive the service
//! with scripted fakes.

use std::future::Future;
use std::path::{Path, PathBuf};

use crate::utils::ShellResult;

/// Outcome of a picker. Cancelling is a normal answer, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Picked<T> {
    Selected(T),
    Cancelled,
}

impl<T> From<Option<T>> for Picked<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Cancelled, Self::Selected)
    }
}

/// What the save dialog should suggest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveTarget {
    pub title: String,
    /// Either a bare file name or a full suggested path
    pub suggested: PathBuf,
    pub filter_name: String,
    /// Extensions without dots; empty means no filter
    pub extensions: Vec<String>,
}

impl SaveTarget {
    /// Directory part of the suggestion, if it has one.
    pub fn directory(&self) -> Option<&Path> {
        self.suggested
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
    }

    /// File name part of the suggestion.
    pub fn file_name(&self) -> String {
        crate::utils::file_name_of(&self.suggested)
    }
}

/// Native interactions the shell needs. Every picker resolves to
/// [`Picked::Cancelled`] when the user dismisses it.
pub trait ShellDialogs: Send + Sync + 'static {
    /// Multi-select image picker. An empty selection counts as cancelled.
    fn pick_files(&self) -> impl Future<Output = ShellResult<Picked<Vec<PathBuf>>>> + Send;

    /// Single folder picker; the user may create a folder from it.
    fn pick_folder(&self, title: &str) -> impl Future<Output = ShellResult<Picked<PathBuf>>> + Send;

    fn pick_save_target(
        &self,
        target: SaveTarget,
    ) -> impl Future<Output = ShellResult<Picked<PathBuf>>> + Send;

    /// Shows `path` selected in the platform file manager. Fire-and-forget.
    fn reveal_in_file_manager(&self, path: &Path);

    /// Modal "About" message.
    fn show_about(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picked_from_option() {
        assert_eq!(Picked::from(Some(3)), Picked::Selected(3));
        assert_eq!(Picked::<i32>::from(None), Picked::Cancelled);
    }

    #[test]
    fn save_target_splits_suggestion() {
        let bare = SaveTarget {
            title: "Save".into(),
            suggested: PathBuf::from("a.png"),
            filter_name: "Images".into(),
            extensions: vec!["png".into()],
        };
        assert!(bare.directory().is_none());
        assert_eq!(bare.file_name(), "a.png");

        let full = SaveTarget { suggested: PathBuf::from("/out/a.png"), ..bare };
        assert_eq!(full.directory(), Some(Path::new("/out")));
        assert_eq!(full.file_name(), "a.png");
    }
}
