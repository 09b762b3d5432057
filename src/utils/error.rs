//! Error types for the ImageForge shell.
//!
//! Every failure that can reach the webview is converted to [`ShellError`].
//! It serializes as `{kind, message, path?}` so Tauri commands can return it
//! directly and the webview always finds `message` as a string.
//! Cancelling a dialog is not an error and never shows up here.

use std::io;
use std::path::Path;
use thiserror::Error;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Main error type for the shell.
#[derive(Error, Debug)]
pub enum ShellError {
    /// Reading or writing a file failed
    #[error("IO error{}: {message}", location(path))]
    Io { path: String, message: String },

    /// ZIP compression or finalisation failed
    #[error("Archive error: {0}")]
    Archive(String),

    /// An entry name cannot be written safely
    #[error("Invalid entry name: {0}")]
    InvalidEntry(String),

    /// The native dialog plugin failed (not a cancellation)
    #[error("Dialog error: {0}")]
    Dialog(String),

    /// Pushing an event to the webview failed
    #[error("Event error: {0}")]
    Event(String),

    /// A background task panicked or was cancelled
    #[error("Task error: {0}")]
    Task(String),
}

fn location(path: &str) -> String {
    if path.is_empty() {
        String::new()
    } else {
        format!(" on {path}")
    }
}

/// Convenience result type for shell operations.
pub type ShellResult<T> = Result<T, ShellError>;

impl ShellError {
    /// IO failure tied to a specific path.
    pub fn io(path: impl AsRef<Path>, err: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().display().to_string(),
            message: err.to_string(),
        }
    }

    pub fn archive<T: Into<String>>(msg: T) -> Self {
        Self::Archive(msg.into())
    }

    pub fn invalid_entry<T: Into<String>>(msg: T) -> Self {
        Self::InvalidEntry(msg.into())
    }

    pub fn dialog<T: Into<String>>(msg: T) -> Self {
        Self::Dialog(msg.into())
    }

    pub fn event<T: Into<String>>(msg: T) -> Self {
        Self::Event(msg.into())
    }
}

// Path-less conversion for `?` inside writers that already know their target
impl From<io::Error> for ShellError {
    fn from(err: io::Error) -> Self {
        Self::Io {
            path: String::new(),
            message: err.to_string(),
        }
    }
}

impl From<zip::result::ZipError> for ShellError {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => e.into(),
            other => Self::archive(other.to_string()),
        }
    }
}

impl Serialize for ShellError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (kind, message, path) = match self {
            Self::Io { path, message } => ("io", message, Some(path).filter(|p| !p.is_empty())),
            Self::Archive(message) => ("archive", message, None),
            Self::InvalidEntry(message) => ("invalidEntry", message, None),
            Self::Dialog(message) => ("dialog", message, None),
            Self::Event(message) => ("event", message, None),
            Self::Task(message) => ("task", message, None),
        };

        let mut state = serializer.serialize_struct("ShellError", 3)?;
        state.serialize_field("kind", kind)?;
        state.serialize_field("message", message)?;
        match path {
            Some(path) => state.serialize_field("path", path)?,
            None => state.skip_field("path")?,
        }
        state.end()
    }
}

impl From<tokio::task::JoinError> for ShellError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Task(err.to_string())
    }
}

impl From<tauri::Error> for ShellError {
    fn from(err: tauri::Error) -> Self {
        Self::Event(err.to_string())
    }
}
