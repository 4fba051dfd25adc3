//! Writing the generated document to disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::EmitError;

pub const EDITORCONFIG_FILE: &str = ".editorconfig";

/// Resolve a destination: a directory means `<dir>/.editorconfig`.
///
/// A path ending in a separator names a directory even if it doesn't exist yet.
pub fn resolve_target(path: &Path) -> PathBuf {
    let trailing_separator = path
        .as_os_str()
        .to_string_lossy()
        .chars()
        .last()
        .is_some_and(std::path::is_separator);

    if trailing_separator || path.is_dir() {
        path.join(EDITORCONFIG_FILE)
    } else {
        path.to_path_buf()
    }
}

/// Read the current file bytes, or `None` if it doesn't exist yet.
///
/// The bytes are only compared, never decoded or interpreted.
pub fn read_existing(path: &Path) -> Result<Option<Vec<u8>>, EmitError> {
    match fs::read(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(EmitError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Write `content` to `path`.
///
/// Returns an error if the file already exists and `force` is not set.
pub fn write_file(path: &Path, content: &str, force: bool) -> Result<(), EmitError> {
    if !force && path.exists() {
        return Err(EmitError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        if !dir.is_dir() {
            return Err(EmitError::MissingDirectory {
                dir: dir.to_path_buf(),
            });
        }
    }

    debug!(path = %path.display(), force, "writing file");
    fs::write(path, content)?;
    Ok(())
}
