//! Display formatting for terminal output
//!
//! Tables and summaries built from engine results. Amounts are rounded to
//! whole units here and nowhere else.

pub mod allowance;
pub mod items;
pub mod worksheet;

pub use allowance::format_allowance_plan;
pub use items::format_items;
pub use worksheet::{format_worksheet, ChecklistEntry, Worksheet, WorksheetLine};
