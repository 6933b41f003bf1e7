use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Rows at the top of the punch sheet taken up by the device's export
/// banner and header noise.
pub const METADATA_ROWS: usize = 4;

/// Each staff member occupies a block of three physical rows in the raw
/// export; only the first row of a block carries punch text.
pub const STAFF_ROW_STRIDE: usize = 3;

/// The companion names sheet leads with three metadata rows.
pub const ROSTER_METADATA_ROWS: usize = 3;

/// The normalized grid always spans a 32-day window.
pub const DAY_COLUMN_COUNT: usize = 32;

pub const COL_STAFF: &str = "Staff";
pub const COL_DAY: &str = "Day";
pub const COL_RESUME: &str = "Resume Count";
pub const COL_EXIT: &str = "Exit Count";
pub const COL_DAYS_PRESENT: &str = "Days Present";
pub const COL_PERCENT: &str = "Attendance Percent";

/// Canonical label for the day column at 1-based position `ordinal`.
pub fn day_label(ordinal: usize) -> String {
    format!("DAY{ordinal}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// Work-week cycle assigned to day columns: DAY1 is a Monday and the
    /// five weekdays repeat from there, with no weekends or calendar gaps.
    pub const CYCLE: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps every normalized day label to its weekday. Columns whose label is
/// not in this map carry no attendance data and are skipped downstream.
pub fn weekday_map() -> HashMap<String, Weekday> {
    (1..=DAY_COLUMN_COUNT)
        .map(|ordinal| {
            let weekday = Weekday::CYCLE[(ordinal - 1) % Weekday::CYCLE.len()];
            (day_label(ordinal), weekday)
        })
        .collect()
}
