//! Filesystem adapter: response stashing, CSV output, payload discovery
//!
//! Owns all on-disk concerns so the services stay I/O free: stashing raw
//! portal responses in the replicated-HTTP-message format, writing converted
//! tables as CSV through polars, and discovering WQX payload files for batch
//! conversion.

use std::fs;
use std::path::{Path, PathBuf};

use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::app::models::WqpResponse;
use crate::constants::{STASH_HTTP_SUFFIX, XML_EXTENSION};
use crate::{Error, Result};

/// Stash a portal response to disk as a replicated HTTP message
///
/// The file holds the serialized message head (status line and headers), a
/// blank line, then the raw body bytes. Unless the target name already ends
/// in `.xml`, the suffix `.xml.http` is appended. Returns the path written.
pub fn stash_response(response: &WqpResponse, target: &Path) -> Result<PathBuf> {
    let mut path = target.to_path_buf();
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    if !name.ends_with(&format!(".{}", XML_EXTENSION)) {
        let stashed = format!("{}.{}{}", name, XML_EXTENSION, STASH_HTTP_SUFFIX);
        path.set_file_name(stashed);
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::io("Failed to create stash directory", e))?;
        }
    }

    let mut contents = response.serialize_head().into_bytes();
    contents.push(b'\n');
    contents.extend_from_slice(&response.body);

    fs::write(&path, contents)
        .map_err(|e| Error::io(format!("Failed to stash response to {}", path.display()), e))?;

    info!("Stashed response to {}", path.display());
    Ok(path)
}

/// Write a dataframe as CSV, creating parent directories as needed
///
/// Returns the number of bytes written.
pub fn write_dataframe_csv(df: &mut DataFrame, path: &Path) -> Result<u64> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::io("Failed to create output directory", e))?;
        }
    }

    let mut file = fs::File::create(path)
        .map_err(|e| Error::io(format!("Failed to create {}", path.display()), e))?;

    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .map_err(|e| Error::dataframe(format!("Failed to write CSV to {}", path.display()), e))?;

    let bytes = fs::metadata(path).map(|m| m.len()).unwrap_or(0);
    debug!("Wrote {} bytes of CSV to {}", bytes, path.display());
    Ok(bytes)
}

/// Read a WQX payload file into memory
pub fn read_payload(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::file_not_found(path.display().to_string()));
    }
    fs::read_to_string(path)
        .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))
}

/// Discover `.xml` payload files under a directory, sorted by path
///
/// Walks the tree depth-first; traversal failures (unreadable entries,
/// broken symlinks) abort discovery rather than silently skipping files.
pub fn discover_xml_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = entry
            .map_err(|e| Error::directory_traversal(format!("Failed under {}", dir.display()), e))?;
        if entry.file_type().is_file()
            && entry
                .path()
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(XML_EXTENSION))
        {
            files.push(entry.path().to_path_buf());
        }
    }

    files.sort();
    debug!("Discovered {} XML files under {}", files.len(), dir.display());
    Ok(files)
}
