//! Packaging a generated file map as a zip archive or a directory tree.

use std::collections::BTreeMap;
use std::io::{Cursor, Write};
use std::path::{Component, Path, PathBuf};

use thiserror::Error;
use tracing::debug;
use zip::write::{FileOptions, ZipWriter};

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Refusing to write outside the project root: {0}")]
    UnsafePath(String),
}

/// Zips `files` in path order, rejecting absolute and `..` paths.
pub fn zip_files(files: &BTreeMap<String, String>) -> Result<Vec<u8>, ArchiveError> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

    for (path, content) in files {
        check_relative(path)?;
        zip.start_file::<_, ()>(path.as_str(), FileOptions::default())?;
        zip.write_all(content.as_bytes())?;
    }

    let bytes = zip.finish()?.into_inner();
    debug!("Packed {} files into {} byte archive", files.len(), bytes.len());
    Ok(bytes)
}

/// Writes every file under `root`, creating parent directories. Returns the written paths.
pub fn write_to_dir(
    files: &BTreeMap<String, String>,
    root: impl AsRef<Path>,
) -> Result<Vec<PathBuf>, ArchiveError> {
    let root = root.as_ref();
    for path in files.keys() {
        check_relative(path)?;
    }

    let mut written = Vec::with_capacity(files.len());
    for (path, content) in files {
        let target = root.join(path);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&target, content)?;
        written.push(target);
    }

    debug!("Wrote {} files under {}", written.len(), root.display());
    Ok(written)
}

fn check_relative(path: &str) -> Result<&Path, ArchiveError> {
    let candidate = Path::new(path);
    let safe = !path.is_empty()
        && candidate
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    if safe {
        Ok(candidate)
    } else {
        Err(ArchiveError::UnsafePath(path.to_string()))
    }
}
