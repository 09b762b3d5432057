//! Lists a folder's images and loads them.

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::FileDescriptor;
use crate::files::loader::load_files;
use crate::utils::{ShellError, ShellResult, file_name_of, is_image_path};

/// Image files directly inside `dir`, sorted by file name.
///
/// Not recursive. Entries are kept when their extension is in the image
/// allow-list (ignoring case) and they resolve to a regular file, so a
/// sub-folder called `shots.png` is skipped. Symlinks to files count.
pub async fn list_images(dir: impl AsRef<Path>) -> ShellResult<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut read_dir = tokio::fs::read_dir(dir)
        .await
        .map_err(|e| ShellError::io(dir, e))?;

    let mut images = Vec::new();
    let mut skipped = 0usize;
    while let Some(entry) = read_dir
        .next_entry()
        .await
        .map_err(|e| ShellError::io(dir, e))?
    {
        let path = entry.path();
        if !is_image_path(&path) {
            skipped += 1;
            continue;
        }
        match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => images.push(path),
            // Dangling links and folders named like images
            _ => skipped += 1,
        }
    }

    images.sort_by_key(|p| file_name_of(p));
    debug!(
        "Scanned {}: {} images, {} other entries",
        dir.display(),
        images.len(),
        skipped
    );
    Ok(images)
}

/// Lists and loads every image directly inside `dir`.
///
/// An empty folder yields an empty list. A missing path or a path that is
/// not a folder is an IO error.
pub async fn scan_directory(dir: impl AsRef<Path>) -> ShellResult<Vec<FileDescriptor>> {
    let images = list_images(dir).await?;
    load_files(images).await
}
