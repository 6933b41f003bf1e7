use polars::df;
use polars::prelude::*;

use rollcall_core::error::ReportError;
use rollcall_core::grid::normalize_day_columns;
use rollcall_core::summary::summarize_attendance;

fn roster(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[test]
fn sums_counts_across_columns_sharing_a_weekday() -> Result<(), ReportError> {
    let rows = df![
        "d1" => ["09:00"],
        "d2" => [""],
        "d3" => [""],
        "d4" => [""],
        "d5" => [""],
        "d6" => ["17:30"],
    ]?;
    let grid = normalize_day_columns(&rows)?;

    let report = summarize_attendance(&grid, &roster(&["Asha"]))?;
    let daily = &report.daily_summary;
    assert_eq!(
        daily.get_column_names(),
        ["Staff", "Day", "Resume Count", "Exit Count"]
    );
    // One staff member, all five weekdays present, in lexical order:
    // Friday, Monday, Thursday, Tuesday, Wednesday.
    assert_eq!(daily.height(), 5);

    let days = daily.column("Day")?.str()?;
    let resumes = daily.column("Resume Count")?.i64()?;
    let exits = daily.column("Exit Count")?.i64()?;

    assert_eq!(days.get(1), Some("Monday"));
    assert_eq!(resumes.get(1), Some(1)); // 09:00 on DAY1
    assert_eq!(exits.get(1), Some(1)); // 17:30 on DAY6, also a Monday

    assert_eq!(days.get(0), Some("Friday"));
    assert_eq!(resumes.get(0), Some(0));
    assert_eq!(exits.get(0), Some(0));
    Ok(())
}

#[test]
fn days_present_is_the_larger_total() -> Result<(), ReportError> {
    let rows = df![
        "d1" => ["08:0016:0017:00"],
    ]?;
    let grid = normalize_day_columns(&rows)?;

    let report = summarize_attendance(&grid, &roster(&["Asha"]))?;
    let totals = &report.staff_totals;
    assert_eq!(
        totals.get_column_names(),
        ["Staff", "Resume Count", "Exit Count", "Days Present"]
    );
    assert_eq!(totals.height(), 1);
    assert_eq!(totals.column("Resume Count")?.i64()?.get(0), Some(1));
    assert_eq!(totals.column("Exit Count")?.i64()?.get(0), Some(2));
    assert_eq!(totals.column("Days Present")?.i64()?.get(0), Some(2));
    assert!(report.roster_mismatch.is_none());
    Ok(())
}

#[test]
fn truncates_when_roster_outnumbers_rows() -> Result<(), ReportError> {
    let rows = df![
        "d1" => ["08:00", "09:00"],
    ]?;
    let grid = normalize_day_columns(&rows)?;

    let report = summarize_attendance(&grid, &roster(&["Asha", "Bode", "Chidi", "Dayo", "Efe"]))?;
    let mismatch = report.roster_mismatch.expect("mismatch should be recorded");
    assert_eq!(mismatch.roster_count, 5);
    assert_eq!(mismatch.row_count, 2);
    assert_eq!(mismatch.used, 2);

    assert_eq!(report.staff_totals.height(), 2);
    let staff = report.staff_totals.column("Staff")?.str()?;
    assert_eq!(staff.get(0), Some("Asha"));
    assert_eq!(staff.get(1), Some("Bode"));
    Ok(())
}

#[test]
fn truncates_when_rows_outnumber_roster() -> Result<(), ReportError> {
    let rows = df![
        "d1" => ["08:00", "09:00", "07:30", "08:10", "08:30", "09:10", "07:45"],
    ]?;
    let grid = normalize_day_columns(&rows)?;

    let report = summarize_attendance(&grid, &roster(&["Asha", "Bode", "Chidi", "Dayo", "Efe"]))?;
    let mismatch = report.roster_mismatch.expect("mismatch should be recorded");
    assert_eq!(mismatch.roster_count, 5);
    assert_eq!(mismatch.row_count, 7);
    assert_eq!(mismatch.used, 5);

    assert_eq!(report.staff_totals.height(), 5);
    assert_eq!(report.daily_summary.height(), 25);
    Ok(())
}

#[test]
fn cleans_labels_before_matching_day_columns() -> Result<(), ReportError> {
    let grid = df![
        " day1 " => ["08:00"],
        "Total" => ["999"],
    ]?;

    let report = summarize_attendance(&grid, &roster(&["Asha"]))?;
    assert_eq!(report.daily_summary.height(), 1);

    let days = report.daily_summary.column("Day")?.str()?;
    assert_eq!(days.get(0), Some("Monday"));
    assert_eq!(
        report.staff_totals.column("Resume Count")?.i64()?.get(0),
        Some(1)
    );
    Ok(())
}

#[test]
fn null_cells_count_as_no_punches() -> Result<(), ReportError> {
    let grid = df![
        "DAY1" => [Some("08:00"), None],
        "DAY2" => [None::<&str>, None],
    ]?;

    let report = summarize_attendance(&grid, &roster(&["Asha", "Bode"]))?;
    assert_eq!(report.daily_summary.height(), 4);

    let totals = &report.staff_totals;
    assert_eq!(totals.column("Resume Count")?.i64()?.get(1), Some(0));
    assert_eq!(totals.column("Exit Count")?.i64()?.get(1), Some(0));
    assert_eq!(totals.column("Days Present")?.i64()?.get(1), Some(0));
    Ok(())
}

#[test]
fn numeric_cells_are_stringified_before_tokenizing() -> Result<(), ReportError> {
    let grid = df![
        "DAY1" => [815i64, 930],
    ]?;

    let report = summarize_attendance(&grid, &roster(&["Asha", "Bode"]))?;
    assert_eq!(
        report.staff_totals.column("Resume Count")?.i64()?.get(0),
        Some(0)
    );
    Ok(())
}

#[test]
fn orders_staff_lexically() -> Result<(), ReportError> {
    let rows = df![
        "d1" => ["16:05", "08:00"],
    ]?;
    let grid = normalize_day_columns(&rows)?;

    let report = summarize_attendance(&grid, &roster(&["Zuri", "Asha"]))?;
    let totals = &report.staff_totals;
    let staff = totals.column("Staff")?.str()?;
    assert_eq!(staff.get(0), Some("Asha"));
    assert_eq!(staff.get(1), Some("Zuri"));

    let resumes = totals.column("Resume Count")?.i64()?;
    let exits = totals.column("Exit Count")?.i64()?;
    assert_eq!(resumes.get(0), Some(1)); // Asha holds the second grid row
    assert_eq!(exits.get(0), Some(0));
    assert_eq!(resumes.get(1), Some(0));
    assert_eq!(exits.get(1), Some(1));
    Ok(())
}

#[test]
fn empty_grid_is_a_structural_error() {
    let grid = DataFrame::default();
    let err = summarize_attendance(&grid, &roster(&["Asha"]))
        .expect_err("empty grid must be rejected");
    match err {
        ReportError::EmptyGrid => {}
        other => panic!("expected EmptyGrid, got {other:?}"),
    }
}

#[test]
fn empty_roster_is_a_structural_error() -> Result<(), ReportError> {
    let rows = df![
        "d1" => ["08:00"],
    ]?;
    let grid = normalize_day_columns(&rows)?;

    let err = summarize_attendance(&grid, &[]).expect_err("empty roster must be rejected");
    match err {
        ReportError::EmptyRoster => {}
        other => panic!("expected EmptyRoster, got {other:?}"),
    }
    Ok(())
}
