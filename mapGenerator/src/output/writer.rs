use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::render::document::MapDocument;
use crate::utils::logging::{self, OperationCategory, FileIOType};

#[derive(Debug)]
pub enum OutputError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for OutputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputError::IoError { path, source } => {
                write!(f, "Failed to write map to {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for OutputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OutputError::IoError { source, .. } => Some(source),
        }
    }
}

/// Resolves `path` against the working directory without touching the filesystem.
pub fn absolute_path(path: &Path) -> Result<PathBuf, OutputError> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .map_err(|source| OutputError::IoError { path: path.to_path_buf(), source })
}

/// Writes the document and returns the absolute path of the file.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn write_to_file<P: AsRef<Path>>(doc: &MapDocument, path: P) -> Result<PathBuf, OutputError> {
    let _timing = logging::start_timing("write_to_file",
        OperationCategory::FileIO { subcategory: FileIOType::DocumentSave });

    let path = path.as_ref();
    let absolute = absolute_path(path)?;

    debug!(path = %absolute.display(), bytes = doc.as_bytes().len(), "Writing map document");
    fs::write(&absolute, doc.as_bytes())
        .map_err(|source| OutputError::IoError { path: absolute.clone(), source })?;

    info!(path = %absolute.display(), "Map document saved");
    Ok(absolute)
}
