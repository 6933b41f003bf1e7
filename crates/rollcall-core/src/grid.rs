//! Normalization of the raw punch sheet into the fixed day grid.
//!
//! The attendance device exports one sheet per month: a banner of
//! metadata rows, then a three-row block per staff member where only the
//! first row holds punch text. Columns are positional; their labels in
//! the export are noise.

use polars::prelude::*;

use crate::error::Result;
use crate::schema::{day_label, DAY_COLUMN_COUNT, METADATA_ROWS, STAFF_ROW_STRIDE};

const ROW_ORDINAL: &str = "row_ordinal";

/// Keeps only the rows of the raw sheet that carry punch text.
///
/// Rows are numbered from 1; the metadata banner is dropped and every
/// third remaining row is kept, starting with the first. Short sheets
/// produce an empty frame rather than an error.
pub fn select_staff_rows(sheet: &DataFrame) -> Result<DataFrame> {
    let first_staff_row = (METADATA_ROWS + 1) as i64;
    let ordinal = col(ROW_ORDINAL).cast(DataType::Int64);

    let selected = sheet
        .clone()
        .lazy()
        .with_row_index(ROW_ORDINAL, Some(1))
        .filter(
            ordinal
                .clone()
                .gt_eq(lit(first_staff_row))
                .and(((ordinal - lit(first_staff_row)) % lit(STAFF_ROW_STRIDE as i64)).eq(lit(0))),
        )
        .drop([ROW_ORDINAL])
        .collect()?;

    Ok(selected)
}

/// Forces the staff rows into the `DAY1..DAY32` shape.
///
/// Columns are renamed by position, never by label: the first becomes
/// `DAY1`, the second `DAY2`, and anything beyond the 32nd is dropped.
/// Days the source sheet never had are padded with empty strings. A
/// column whose every cell is null carried nothing from the device and
/// is removed; padded columns hold empty strings, not nulls, so they
/// always survive. Running this on an already normalized grid changes
/// nothing.
pub fn normalize_day_columns(rows: &DataFrame) -> Result<DataFrame> {
    let height = rows.height();

    let mut columns: Vec<Column> = rows
        .get_columns()
        .iter()
        .take(DAY_COLUMN_COUNT)
        .enumerate()
        .map(|(idx, column)| {
            column
                .as_materialized_series()
                .clone()
                .with_name(day_label(idx + 1).into())
                .into()
        })
        .collect();

    for ordinal in columns.len() + 1..=DAY_COLUMN_COUNT {
        columns.push(Series::new(day_label(ordinal).into(), vec![""; height]).into());
    }

    if height > 0 {
        columns.retain(|column| column.null_count() < height);
    }

    Ok(DataFrame::new(columns)?)
}

/// Full normalization pass: row selection, then column shaping.
pub fn normalize_punch_grid(sheet: &DataFrame) -> Result<DataFrame> {
    let rows = select_staff_rows(sheet)?;
    normalize_day_columns(&rows)
}
