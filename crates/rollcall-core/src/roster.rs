use polars::prelude::*;

use crate::error::{ReportError, Result};
use crate::schema::ROSTER_METADATA_ROWS;

/// Pulls staff display names out of the companion names sheet.
///
/// The sheet leads with three metadata rows; names live in a single
/// column, selected by zero-based position. Cells are trimmed, and blank
/// or null cells are dropped rather than kept as placeholder staff.
pub fn extract_roster(sheet: &DataFrame, name_column: usize) -> Result<Vec<String>> {
    let width = sheet.width();
    if name_column >= width {
        return Err(ReportError::RosterColumn {
            index: name_column,
            width,
        });
    }

    let column = sheet.get_columns()[name_column]
        .as_materialized_series()
        .cast(&DataType::String)?;
    let cells = column.str()?;

    let mut roster = Vec::new();
    for idx in ROSTER_METADATA_ROWS..sheet.height() {
        if let Some(cell) = cells.get(idx) {
            let name = cell.trim();
            if !name.is_empty() {
                roster.push(name.to_string());
            }
        }
    }

    Ok(roster)
}
