//! Writes converted buffers to individual files.

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::core::ArchiveEntry;
use crate::utils::{ShellError, ShellResult, unique_names, validate_entry_name};

/// Writes `bytes` to `path`, replacing any existing file.
pub async fn write_file(path: impl AsRef<Path>, bytes: &[u8]) -> ShellResult<()> {
    let path = path.as_ref();
    tokio::fs::write(path, bytes)
        .await
        .map_err(|e| ShellError::io(path, e))?;
    debug!("Wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

/// Writes each entry into `folder` under its name, in order.
///
/// Names are validated up front so a bad name aborts before anything is
/// written. Duplicate names within the batch, compared case-insensitively,
/// get a ` (n)` suffix; files already present in the folder are overwritten.
/// Nested names create their sub-folders. Returns the written paths.
pub async fn write_entries_to_folder(
    folder: impl AsRef<Path>,
    entries: &[ArchiveEntry],
) -> ShellResult<Vec<PathBuf>> {
    let folder = folder.as_ref();
    for entry in entries {
        validate_entry_name(&entry.name)?;
    }
    let names = unique_names(entries.iter().map(|e| e.name.as_str()));

    let mut saved = Vec::with_capacity(entries.len());
    for (entry, name) in entries.iter().zip(&names) {
        let target = folder.join(name);
        if let Some(parent) = target.parent() {
            if parent != folder {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| ShellError::io(parent, e))?;
            }
        }
        write_file(&target, &entry.buffer).await?;
        saved.push(target);
    }

    info!("Saved {} files to {}", saved.len(), folder.display());
    Ok(saved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[tokio::test]
    async fn write_file_replaces_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        fs::write(&path, b"old contents that are longer").unwrap();

        write_file(&path, b"new").await.unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"new");
    }

    #[tokio::test]
    async fn writes_every_entry_in_folder() {
        let dir = tempfile::tempdir().unwrap();
        let entries = vec![
            ArchiveEntry::new("a.png", b"A".to_vec()),
            ArchiveEntry::new("b.webp", b"B".to_vec()),
        ];

        let saved = write_entries_to_folder(dir.path(), &entries).await.unwrap();
        assert_eq!(saved, vec![dir.path().join("a.png"), dir.path().join("b.webp")]);
        assert_eq!(fs::read(dir.path().join("a.png")).unwrap(), b"A");
        assert_eq!(fs::read(dir.path().join("b.webp")).unwrap(), b"B");
    }

    #[tokio::test]
    async fn duplicate_names_do_not_overwrite_each_other() {
        let dir = tempfile::tempdir().unwrap();
        let entries = vec![
            ArchiveEntry::new("same.jpg", b"first".to_vec()),
            ArchiveEntry::new("same.jpg", b"second".to_vec()),
        ];

        write_entries_to_folder(dir.path(), &entries).await.unwrap();
        assert_eq!(fs::read(dir.path().join("same.jpg")).unwrap(), b"first");
        assert_eq!(fs::read(dir.path().join("same (2).jpg")).unwrap(), b"second");
    }

    #[tokio::test]
    async fn names_differing_only_in_case_are_kept_apart() {
        let dir = tempfile::tempdir().unwrap();
        let entries = vec![
            ArchiveEntry::new("Photo.png", b"upper".to_vec()),
            ArchiveEntry::new("photo.png", b"lower".to_vec()),
        ];

        let saved = write_entries_to_folder(dir.path(), &entries).await.unwrap();
        assert_eq!(
            saved,
            vec![dir.path().join("Photo.png"), dir.path().join("photo (2).png")]
        );
        assert_eq!(fs::read(dir.path().join("Photo.png")).unwrap(), b"upper");
        assert_eq!(fs::read(dir.path().join("photo (2).png")).unwrap(), b"lower");
    }

    #[tokio::test]
    async fn nested_names_create_subfolders() {
        let dir = tempfile::tempdir().unwrap();
        let entries = vec![ArchiveEntry::new("webp/a.webp", b"A".to_vec())];

        write_entries_to_folder(dir.path(), &entries).await.unwrap();
        assert_eq!(fs::read(dir.path().join("webp").join("a.webp")).unwrap(), b"A");
    }

    #[tokio::test]
    async fn traversal_name_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let entries = vec![
            ArchiveEntry::new("fine.png", b"ok".to_vec()),
            ArchiveEntry::new("../escape.png", b"bad".to_vec()),
        ];

        let result = write_entries_to_folder(dir.path(), &entries).await;
        assert!(matches!(result, Err(ShellError::InvalidEntry(_))));
        assert!(!dir.path().join("fine.png").exists());
    }

    #[tokio::test]
    async fn missing_folder_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let entries = vec![ArchiveEntry::new("a.png", b"A".to_vec())];

        let result = write_entries_to_folder(dir.path().join("gone"), &entries).await;
        assert!(matches!(result, Err(ShellError::Io { .. })));
    }
}
