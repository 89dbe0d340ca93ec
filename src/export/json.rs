//! JSON export of an allocation worksheet

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::display::Worksheet;
use crate::error::{PaydayError, PaydayResult};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Worksheet plus the inputs that produced it
#[derive(Debug, Clone, Serialize)]
pub struct WorksheetExport<'a> {
    pub schema_version: &'static str,
    pub exported_at: DateTime<Utc>,
    pub app_version: &'static str,
    pub income: f64,
    pub currency_symbol: &'a str,
    pub worksheet: &'a Worksheet,
}

impl<'a> WorksheetExport<'a> {
    pub fn new(worksheet: &'a Worksheet, income: f64, currency_symbol: &'a str) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION"),
            income,
            currency_symbol,
            worksheet,
        }
    }
}

/// Write the export as JSON
pub fn export_worksheet_json<W: Write>(
    export: &WorksheetExport<'_>,
    writer: &mut W,
    pretty: bool,
) -> PaydayResult<()> {
    let written = if pretty {
        serde_json::to_writer_pretty(&mut *writer, export)
    } else {
        serde_json::to_writer(&mut *writer, export)
    };
    written.map_err(|e| PaydayError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| PaydayError::Export(e.to_string()))?;
    Ok(())
}
