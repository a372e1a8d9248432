use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ProvisionError, ProvisionResult};

/// Copy the finished database file into `dir`, creating it if needed.
///
/// Returns the destination path. When `dir` already holds the file nothing
/// is copied.
pub fn deliver(database: &Path, dir: &Path) -> ProvisionResult<PathBuf> {
    let file_name = database
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("tikData.db"));
    let destination = dir.join(file_name);

    let export_err = |source| ProvisionError::Export {
        destination: destination.clone(),
        source,
    };

    fs::create_dir_all(dir).map_err(export_err)?;

    if same_file(database, &destination) {
        tracing::info!("{} is already in the export directory", database.display());
        return Ok(destination);
    }

    let bytes = fs::copy(database, &destination).map_err(export_err)?;
    tracing::info!("Exported {} bytes to {}", bytes, destination.display());
    Ok(destination)
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
