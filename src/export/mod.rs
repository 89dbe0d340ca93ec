//! Export of allocation worksheets
//!
//! - CSV: one row per funding item (spreadsheet-compatible)
//! - JSON: full worksheet with checklist and totals
//! - YAML: the JSON document in human-readable form

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_worksheet_csv;
pub use json::{export_worksheet_json, WorksheetExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_worksheet_yaml;
