//! JSON serialization of rendered art collections

use crate::io::error::{ArtError, Result};
use crate::pipeline::ArtCollection;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a collection to `path` as a JSON array of image records
///
/// The file is created (or truncated), written once, and closed. Failures
/// surface to the caller; there are no retries and no partial-output
/// cleanup.
///
/// # Errors
///
/// Returns an error if the file cannot be created, the collection cannot be
/// serialized, or the final flush fails.
pub fn write_collection(collection: &ArtCollection, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| ArtError::FileSystem {
        path: path.to_path_buf(),
        operation: "create output file",
        source: e,
    })?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, collection).map_err(|e| ArtError::Serialize {
        path: path.to_path_buf(),
        source: e,
    })?;

    writer.flush().map_err(|e| ArtError::FileSystem {
        path: path.to_path_buf(),
        operation: "flush output file",
        source: e,
    })?;

    Ok(())
}
