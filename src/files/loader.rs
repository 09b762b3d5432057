//! Reads image files into [`FileDescriptor`]s with embedded data URIs.
//!
//! Reads are issued together and joined: `tokio::fs` hands each one to the
//! blocking pool, so a batch of files is read in parallel while the caller
//! awaits a single future.

use std::path::{Path, PathBuf};
use base64::{Engine as _, engine::general_purpose};
use futures::future::{join_all, try_join_all};
use tracing::{debug, warn};

use crate::core::{FileDescriptor, LoadOutcome};
use crate::utils::{ShellError, ShellResult, file_name_of, mime_for_path};

/// Builds a descriptor for bytes already read from `path`.
pub fn describe(path: &Path, bytes: &[u8]) -> FileDescriptor {
    let mime = mime_for_path(path);
    let payload = general_purpose::STANDARD.encode(bytes);

    FileDescriptor {
        name: file_name_of(path),
        path: path.to_string_lossy().to_string(),
        data_url: format!("data:{mime};base64,{payload}"),
        size: bytes.len() as u64,
    }
}

/// Loads one file.
pub async fn load_file(path: impl AsRef<Path>) -> ShellResult<FileDescriptor> {
    let path = absolute(path.as_ref());
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| ShellError::io(&path, e))?;
    debug!("Loaded {} ({} bytes)", path.display(), bytes.len());
    Ok(describe(&path, &bytes))
}

/// Loads every path, in input order.
///
/// All-or-nothing: if any read fails the whole call fails and no
/// descriptors are returned.
pub async fn load_files<I, P>(paths: I) -> ShellResult<Vec<FileDescriptor>>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let reads = paths.into_iter().map(|p| {
        let path = p.as_ref().to_path_buf();
        async move { load_file(path).await }
    });
    let files = try_join_all(reads).await?;
    debug!("Loaded batch of {} files", files.len());
    Ok(files)
}

/// Loads every path, in input order, keeping one outcome per path.
///
/// Successfully read files survive a failure elsewhere in the batch.
pub async fn load_files_settled<I, P>(paths: I) -> Vec<LoadOutcome>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let reads = paths.into_iter().map(|p| {
        let path = p.as_ref().to_path_buf();
        async move {
            match load_file(&path).await {
                Ok(descriptor) => LoadOutcome::Loaded(descriptor),
                Err(e) => {
                    warn!("Skipping {}: {}", path.display(), e);
                    LoadOutcome::Failed {
                        path: path.to_string_lossy().to_string(),
                        error: e.to_string(),
                    }
                }
            }
        }
    });
    join_all(reads).await
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
