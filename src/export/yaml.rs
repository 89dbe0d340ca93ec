//! YAML export of an allocation worksheet

use std::io::Write;

use super::json::WorksheetExport;
use crate::error::{PaydayError, PaydayResult};

/// Write the export as YAML with a short header comment
pub fn export_worksheet_yaml<W: Write>(
    export: &WorksheetExport<'_>,
    writer: &mut W,
) -> PaydayResult<()> {
    writeln!(writer, "# Payday allocation worksheet")
        .map_err(|e| PaydayError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| PaydayError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, export).map_err(|e| PaydayError::Export(e.to_string()))?;

    Ok(())
}
