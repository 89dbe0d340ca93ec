//! File I/O utilities with atomic writes
//!
//! Reads and writes serde documents as JSON or YAML. Writes go to a temp
//! file that is renamed into place, so a crash never leaves half a file.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::config::BlueprintFormat;
use crate::error::PaydayError;

/// Pick the document format from a path's extension (`.yaml`/`.yml` is YAML,
/// anything else JSON)
pub fn format_for_path(path: &Path) -> BlueprintFormat {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
            BlueprintFormat::Yaml
        }
        _ => BlueprintFormat::Json,
    }
}

/// Read a document, returning the default value if the file doesn't exist
pub fn read_document<T, P>(path: P, format: BlueprintFormat) -> Result<T, PaydayError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path)
        .map_err(|e| PaydayError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;
    let reader = BufReader::new(file);

    match format {
        BlueprintFormat::Json => serde_json::from_reader(reader).map_err(|e| {
            PaydayError::Storage(format!("Failed to parse {}: {}", path.display(), e))
        }),
        BlueprintFormat::Yaml => serde_yaml::from_reader(reader).map_err(|e| {
            PaydayError::Storage(format!("Failed to parse {}: {}", path.display(), e))
        }),
    }
}

/// Write a document atomically (write to temp, then rename)
pub fn write_document_atomic<T, P>(path: P, data: &T, format: BlueprintFormat) -> Result<(), PaydayError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                PaydayError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    // Temp file in the same directory, so the rename stays atomic
    let temp_path = path.with_extension(format!("{}.tmp", format.extension()));

    let file = File::create(&temp_path)
        .map_err(|e| PaydayError::Storage(format!("Failed to create temp file: {}", e)))?;
    let mut writer = BufWriter::new(file);

    match format {
        BlueprintFormat::Json => serde_json::to_writer_pretty(&mut writer, data)
            .map_err(|e| PaydayError::Storage(format!("Failed to serialize data: {}", e)))?,
        BlueprintFormat::Yaml => serde_yaml::to_writer(&mut writer, data)
            .map_err(|e| PaydayError::Storage(format!("Failed to serialize data: {}", e)))?,
    }

    writer
        .flush()
        .map_err(|e| PaydayError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| PaydayError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        PaydayError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
