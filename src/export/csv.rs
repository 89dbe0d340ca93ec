//! CSV export of worksheet lines
//!
//! One row per funding item, bills first, for pasting into a spreadsheet.

use std::io::Write;

use serde::Serialize;

use crate::display::Worksheet;
use crate::error::{PaydayError, PaydayResult};

#[derive(Serialize)]
struct CsvRow<'a> {
    id: &'a str,
    name: &'a str,
    category: String,
    priority: &'a str,
    suggested: i64,
    target: i64,
}

/// Write the worksheet lines as CSV with a header row
pub fn export_worksheet_csv<W: Write>(worksheet: &Worksheet, writer: W) -> PaydayResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for line in worksheet.lines() {
        csv_writer.serialize(CsvRow {
            id: line.id.as_str(),
            name: &line.name,
            category: line.category.to_string(),
            priority: line.priority.as_str(),
            suggested: line.suggested.units(),
            target: line.target.units(),
        })?;
    }

    csv_writer
        .flush()
        .map_err(|e| PaydayError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{normalize, Goal, Obligation};
    use crate::services::allocate_items;

    #[test]
    fn test_csv_rows() {
        let items = normalize(
            &[Obligation::new(1, "Rent, Unit 4", 8000.0)],
            &[Goal::new(1, "Fund", 0.0).with_monthly_plan(1000.0)],
        );
        let result = allocate_items(20000.0, 2000.0, &items);
        let worksheet = Worksheet::build(&items, &result);

        let mut buffer = Vec::new();
        export_worksheet_csv(&worksheet, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "id,name,category,priority,suggested,target");
        assert_eq!(lines[1], "obligation-1,\"Rent, Unit 4\",fixed,high,8000,8000");
        assert_eq!(lines[2], "goal-1,Fund,savings,medium,1000,1000");
        assert_eq!(lines.len(), 3);
    }
}
