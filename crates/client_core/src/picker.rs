//! File picker input: turns picked paths into descriptors and decides when a
//! pick counts as a change.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use shared::domain::FileDescriptor;

/// Describes a local file the way a browser file input would: name, size, and
/// a media type guessed from the extension.
pub fn describe_path(path: &Path) -> Result<FileDescriptor> {
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("failed to read metadata for '{}'", path.display()))?;
    if !metadata.is_file() {
        anyhow::bail!("'{}' is not a regular file", path.display());
    }

    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .with_context(|| format!("'{}' has no file name", path.display()))?;
    let media_type = mime_guess::from_path(path).first_raw().map(str::to_string);

    Ok(FileDescriptor {
        name,
        path: path.to_path_buf(),
        size_bytes: metadata.len(),
        media_type,
    })
}

/// Value held by the picker. Picking the file it already holds is not a change.
#[derive(Debug, Default, Clone)]
pub struct PickerInput {
    value: Option<PathBuf>,
}

impl PickerInput {
    /// Stores the new pick and reports whether it differs from the held value.
    pub fn change(&mut self, picked: Option<&FileDescriptor>) -> bool {
        match picked {
            Some(file) if self.value.as_deref() == Some(file.path.as_path()) => false,
            Some(file) => {
                self.value = Some(file.path.clone());
                true
            }
            None => {
                self.value = None;
                true
            }
        }
    }

    pub fn reset(&mut self) {
        self.value = None;
    }

    pub fn value(&self) -> Option<&Path> {
        self.value.as_deref()
    }
}
