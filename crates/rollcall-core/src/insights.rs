//! Reshaped views of the daily summary for rendering.
//!
//! These back the caller's charts and drill-down tables; actual chart
//! drawing stays outside this crate.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use polars::prelude::*;

use crate::error::{ReportError, Result};
use crate::punches::PunchKind;
use crate::schema::{COL_DAY, COL_EXIT, COL_PERCENT, COL_RESUME, COL_STAFF};

/// Pivots the daily summary into one row per staff with a count column
/// per observed weekday. Staff rows and weekday columns come out in
/// lexical order; a staff/weekday pair the summary never saw is filled
/// with 0, but a weekday no row mentions gets no column at all.
pub fn weekday_count_matrix(daily_summary: &DataFrame, kind: PunchKind) -> Result<DataFrame> {
    let count_column = match kind {
        PunchKind::Resume => COL_RESUME,
        PunchKind::Exit => COL_EXIT,
    };

    let staff = daily_summary
        .column(COL_STAFF)?
        .as_materialized_series()
        .str()?;
    let days = daily_summary
        .column(COL_DAY)?
        .as_materialized_series()
        .str()?;
    let counts = daily_summary
        .column(count_column)?
        .as_materialized_series()
        .i64()?;

    let mut by_staff: BTreeMap<String, HashMap<String, i64>> = BTreeMap::new();
    let mut observed_days: BTreeSet<String> = BTreeSet::new();
    for idx in 0..daily_summary.height() {
        if let (Some(name), Some(day)) = (staff.get(idx), days.get(idx)) {
            let count = counts.get(idx).unwrap_or(0);
            observed_days.insert(day.to_string());
            *by_staff
                .entry(name.to_string())
                .or_default()
                .entry(day.to_string())
                .or_insert(0) += count;
        }
    }

    let staff_names: Vec<String> = by_staff.keys().cloned().collect();
    let mut columns: Vec<Column> = Vec::with_capacity(observed_days.len() + 1);
    columns.push(Series::new(COL_STAFF.into(), staff_names).into());
    for day in &observed_days {
        let per_day: Vec<i64> = by_staff
            .values()
            .map(|day_counts| day_counts.get(day).copied().unwrap_or(0))
            .collect();
        columns.push(Series::new(day.as_str().into(), per_day).into());
    }

    Ok(DataFrame::new(columns)?)
}

/// Per-weekday share of staff that clocked in, as a percentage of
/// `staff_count`. Rows come out sorted by weekday name.
pub fn weekday_resume_percent(daily_summary: &DataFrame, staff_count: usize) -> Result<DataFrame> {
    if staff_count == 0 {
        return Err(ReportError::EmptyRoster);
    }

    let percent = daily_summary
        .clone()
        .lazy()
        .group_by([col(COL_DAY)])
        .agg([col(COL_RESUME).sum()])
        .with_column(
            (col(COL_RESUME).cast(DataType::Float64) / lit(staff_count as f64) * lit(100.0))
                .alias(COL_PERCENT),
        )
        .select([col(COL_DAY), col(COL_PERCENT)])
        .sort([COL_DAY], SortMultipleOptions::default())
        .collect()?;

    Ok(percent)
}
