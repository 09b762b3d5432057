use std::collections::HashSet;
use std::path::{Component, Path};
use crate::utils::{ShellError, ShellResult};

/// Lowercased last extension of `path` without the dot, or an empty string.
pub fn extension_of(path: impl AsRef<Path>) -> String {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default()
}

/// Final path segment as a display string.
pub fn file_name_of(path: impl AsRef<Path>) -> String {
    path.as_ref()
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Rejects entry names that could escape the output location or are
/// ambiguous inside an archive.
pub fn validate_entry_name(name: &str) -> ShellResult<()> {
    if name.trim().is_empty() {
        return Err(ShellError::invalid_entry("entry name is empty"));
    }
    if name.contains('\\') {
        return Err(ShellError::invalid_entry(format!("{name}: backslashes are not allowed")));
    }
    let path = Path::new(name);
    if path.is_absolute() || name.starts_with('/') {
        return Err(ShellError::invalid_entry(format!("{name}: absolute paths are not allowed")));
    }
    for component in path.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            _ => {
                return Err(ShellError::invalid_entry(format!(
                    "{name}: parent or root components are not allowed"
                )));
            }
        }
    }
    Ok(())
}

/// Makes every name in `names` unique, keeping input order.
///
/// The first occurrence keeps its name; later ones get ` (2)`, ` (3)`, ...
/// inserted before the extension. Names are compared case-insensitively, so
/// `Photo.png` and `photo.png` stay apart on Windows and macOS volumes too.
/// A generated name never collides with a name that appears elsewhere in the
/// batch.
pub fn unique_names<'a, I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let names: Vec<&str> = names.into_iter().collect();
    let mut taken: HashSet<String> = HashSet::with_capacity(names.len());
    let reserved: HashSet<String> = names.iter().map(|n| n.to_lowercase()).collect();
    let mut out = Vec::with_capacity(names.len());

    for name in names {
        if taken.insert(name.to_lowercase()) {
            out.push(name.to_string());
            continue;
        }
        let (stem, ext) = split_name(name);
        let mut n = 2;
        loop {
            let candidate = format!("{stem} ({n}){ext}");
            let folded = candidate.to_lowercase();
            if !reserved.contains(&folded) && taken.insert(folded) {
                out.push(candidate);
                break;
            }
            n += 1;
        }
    }
    out
}

/// Splits `dir/photo.png` into (`dir/photo`, `.png`). Dotfiles keep their
/// leading dot in the stem.
fn split_name(name: &str) -> (&str, &str) {
    let file_start = name.rfind('/').map(|i| i + 1).unwrap_or(0);
    match name[file_start..].rfind('.') {
        Some(0) | None => (name, ""),
        Some(dot) => name.split_at(file_start + dot),
    }
}

/// Milliseconds since the Unix epoch, for default file names.
pub fn unix_millis() -> u128 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}
