//! Streams named buffers into a deflate-compressed ZIP file.
//!
//! The writer reports success only after the central directory is written,
//! the buffer is flushed, the file is synced and its handle dropped. The
//! size it returns is read back from the filesystem at that point, so a
//! caller can reveal or open the archive straight away. Entries are stamped
//! with the local time of the write.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use zip::CompressionMethod;
use zip::write::{SimpleFileOptions, ZipWriter};

use crate::core::config::ARCHIVE_COMPRESSION_LEVEL;
use crate::core::{ArchiveEntry, ArchiveSummary};
use crate::utils::{ShellError, ShellResult, unique_names, validate_entry_name};

/// Writes `entries` to `destination` on the blocking pool.
///
/// See [`write_archive_blocking`] for the exact guarantees.
pub async fn write_archive(
    entries: Vec<ArchiveEntry>,
    destination: PathBuf,
) -> ShellResult<ArchiveSummary> {
    tokio::task::spawn_blocking(move || write_archive_blocking(&entries, &destination)).await?
}

/// Writes `entries` to a new ZIP at `destination`, truncating any existing file.
///
/// - names are validated before the destination is touched
/// - duplicate names are renamed (`a.png`, `a (2).png`, ...)
/// - entries keep their input order and use deflate at the maximum level
/// - on error the partially written file is left in place
pub fn write_archive_blocking(
    entries: &[ArchiveEntry],
    destination: &Path,
) -> ShellResult<ArchiveSummary> {
    for entry in entries {
        validate_entry_name(&entry.name)?;
    }
    let names = unique_names(entries.iter().map(|e| e.name.as_str()));

    let file = File::create(destination).map_err(|e| ShellError::io(destination, e))?;
    let mut zip = ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(ARCHIVE_COMPRESSION_LEVEL));

    for (entry, name) in entries.iter().zip(&names) {
        if name != &entry.name {
            debug!("Renamed duplicate archive entry {} -> {}", entry.name, name);
        }
        zip.start_file(name.as_str(), options)?;
        zip.write_all(&entry.buffer)
            .map_err(|e| ShellError::io(destination, e))?;
    }

    let buffered = zip.finish()?;
    let file = buffered
        .into_inner()
        .map_err(|e| ShellError::io(destination, e.into_error()))?;
    file.sync_all().map_err(|e| ShellError::io(destination, e))?;
    drop(file);

    let size = std::fs::metadata(destination)
        .map_err(|e| ShellError::io(destination, e))?
        .len();

    info!(
        "Wrote archive {} ({} entries, {} bytes)",
        destination.display(),
        names.len(),
        size
    );

    Ok(ArchiveSummary {
        path: destination.to_string_lossy().to_string(),
        size,
        entry_names: names,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    fn read_back(path: &Path) -> Vec<(String, Vec<u8>)> {
        let mut archive = ZipArchive::new(File::open(path).unwrap()).unwrap();
        (0..archive.len())
            .map(|i| {
                let mut file = archive.by_index(i).unwrap();
                let mut buf = Vec::new();
                file.read_to_end(&mut buf).unwrap();
                (file.name().to_string(), buf)
            })
            .collect()
    }

    #[tokio::test]
    async fn archive_contains_exact_entries_and_reports_disk_size() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out.zip");
        let x: Vec<u8> = (0..4096u32).map(|i| (i % 251) as u8).collect();
        let y = b"second image".to_vec();

        let summary = write_archive(
            vec![ArchiveEntry::new("a.png", x.clone()), ArchiveEntry::new("b.png", y.clone())],
            dest.clone(),
        )
        .await
        .unwrap();

        assert_eq!(summary.size, std::fs::metadata(&dest).unwrap().len());
        assert_eq!(summary.path, dest.to_string_lossy());
        assert_eq!(
            read_back(&dest),
            vec![("a.png".to_string(), x), ("b.png".to_string(), y)]
        );
    }

    #[test]
    fn entries_are_deflated() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("deflated.zip");
        let repetitive = vec![7u8; 64 * 1024];

        let summary =
            write_archive_blocking(&[ArchiveEntry::new("flat.bmp", repetitive.clone())], &dest)
                .unwrap();
        assert!(summary.size < repetitive.len() as u64 / 10, "size {}", summary.size);

        let mut archive = ZipArchive::new(File::open(&dest).unwrap()).unwrap();
        let entry = archive.by_index(0).unwrap();
        assert_eq!(entry.compression(), CompressionMethod::Deflated);
    }

    #[test]
    fn entries_carry_the_write_time() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("stamped.zip");

        write_archive_blocking(&[ArchiveEntry::new("a.png", b"a".to_vec())], &dest).unwrap();

        let mut archive = ZipArchive::new(File::open(&dest).unwrap()).unwrap();
        let modified = archive.by_index(0).unwrap().last_modified().unwrap();
        assert_ne!(modified, zip::DateTime::default());
        assert!(modified.year() > 1980, "stamped {modified:?}");
    }

    #[test]
    fn duplicate_names_are_renamed() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("dupes.zip");

        let summary = write_archive_blocking(
            &[
                ArchiveEntry::new("img.webp", b"one".to_vec()),
                ArchiveEntry::new("img.webp", b"two".to_vec()),
            ],
            &dest,
        )
        .unwrap();

        assert_eq!(summary.entry_names, vec!["img.webp", "img (2).webp"]);
        assert_eq!(
            read_back(&dest),
            vec![
                ("img.webp".to_string(), b"one".to_vec()),
                ("img (2).webp".to_string(), b"two".to_vec()),
            ]
        );
    }

    #[test]
    fn empty_entry_list_writes_a_valid_archive() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("empty.zip");

        let summary = write_archive_blocking(&[], &dest).unwrap();
        assert!(summary.size > 0);
        assert!(read_back(&dest).is_empty());
    }

    #[test]
    fn existing_file_is_truncated() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("again.zip");
        std::fs::write(&dest, vec![0u8; 100_000]).unwrap();

        let summary =
            write_archive_blocking(&[ArchiveEntry::new("a.png", b"a".to_vec())], &dest).unwrap();
        assert!(summary.size < 100_000);
        assert_eq!(read_back(&dest).len(), 1);
    }

    #[test]
    fn invalid_name_fails_before_touching_disk() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("never.zip");

        let result =
            write_archive_blocking(&[ArchiveEntry::new("../evil.png", b"x".to_vec())], &dest);
        assert!(matches!(result, Err(ShellError::InvalidEntry(_))));
        assert!(!dest.exists());
    }

    #[test]
    fn unwritable_destination_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("no-such-dir").join("out.zip");

        let result =
            write_archive_blocking(&[ArchiveEntry::new("a.png", b"a".to_vec())], &dest);
        assert!(matches!(result, Err(ShellError::Io { .. })));
    }
}
