//! Punch classification and attendance aggregation.

use polars::df;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ReportError, Result};
use crate::punches::count_punches;
use crate::schema::{
    weekday_map, COL_DAY, COL_DAYS_PRESENT, COL_EXIT, COL_RESUME, COL_STAFF, DAY_COLUMN_COUNT,
};

/// Aggregated attendance tables for one punch-log upload.
#[derive(Debug, Clone)]
pub struct AttendanceReport {
    /// One row per (staff, weekday), sorted by staff then weekday.
    pub daily_summary: DataFrame,
    /// One row per staff with summed counts and the days-present proxy.
    pub staff_totals: DataFrame,
    /// Present when the roster and grid did not line up one-to-one.
    pub roster_mismatch: Option<RosterMismatch>,
}

/// Records a roster that disagreed with the grid's row count. Processing
/// continues on the first `used` staff; the rest are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterMismatch {
    pub roster_count: usize,
    pub row_count: usize,
    pub used: usize,
}

/// Classifies every punch in the grid and aggregates the results.
///
/// Each cell of each day column is tokenized and its punches tallied,
/// producing one observation per (staff, day column). Observations are
/// summed into a per-(staff, weekday) daily summary and again into
/// per-staff totals, where days present is the larger of the two summed
/// counts. Columns whose cleaned label is not `DAY1..DAY32` are skipped.
///
/// A roster/row-count mismatch is reported on the result and logged, not
/// raised; only structurally empty inputs are errors.
pub fn summarize_attendance(grid: &DataFrame, roster: &[String]) -> Result<AttendanceReport> {
    if grid.height() == 0 {
        return Err(ReportError::EmptyGrid);
    }
    if roster.is_empty() {
        return Err(ReportError::EmptyRoster);
    }

    let row_count = grid.height();
    let roster_count = roster.len();
    let used = roster_count.min(row_count);
    let roster_mismatch = if roster_count != row_count {
        warn!(
            roster_count,
            row_count, "staff roster does not match grid rows, keeping first {used}"
        );
        Some(RosterMismatch {
            roster_count,
            row_count,
            used,
        })
    } else {
        None
    };

    let weekdays = weekday_map();

    let mut staff_names: Vec<&str> = Vec::with_capacity(used * DAY_COLUMN_COUNT);
    let mut day_names: Vec<&str> = Vec::with_capacity(used * DAY_COLUMN_COUNT);
    let mut resume_counts: Vec<i64> = Vec::with_capacity(used * DAY_COLUMN_COUNT);
    let mut exit_counts: Vec<i64> = Vec::with_capacity(used * DAY_COLUMN_COUNT);

    for column in grid.get_columns() {
        let label = column.name().trim().to_uppercase();
        let weekday = match weekdays.get(&label) {
            Some(weekday) => *weekday,
            None => continue,
        };

        let text = column.as_materialized_series().cast(&DataType::String)?;
        let cells = text.str()?;

        for (staff_idx, staff_name) in roster.iter().take(used).enumerate() {
            let counts = cells.get(staff_idx).map(count_punches).unwrap_or_default();
            staff_names.push(staff_name.as_str());
            day_names.push(weekday.as_str());
            resume_counts.push(counts.resume);
            exit_counts.push(counts.exit);
        }
    }

    let observations = df![
        COL_STAFF => staff_names,
        COL_DAY => day_names,
        COL_RESUME => resume_counts,
        COL_EXIT => exit_counts,
    ]?;

    let daily_summary = observations
        .clone()
        .lazy()
        .group_by([col(COL_STAFF), col(COL_DAY)])
        .agg([col(COL_RESUME).sum(), col(COL_EXIT).sum()])
        .sort([COL_STAFF, COL_DAY], SortMultipleOptions::default())
        .collect()?;

    let staff_totals = observations
        .lazy()
        .group_by([col(COL_STAFF)])
        .agg([col(COL_RESUME).sum(), col(COL_EXIT).sum()])
        .with_column(
            when(col(COL_RESUME).gt_eq(col(COL_EXIT)))
                .then(col(COL_RESUME))
                .otherwise(col(COL_EXIT))
                .alias(COL_DAYS_PRESENT),
        )
        .sort([COL_STAFF], SortMultipleOptions::default())
        .collect()?;

    Ok(AttendanceReport {
        daily_summary,
        staff_totals,
        roster_mismatch,
    })
}
