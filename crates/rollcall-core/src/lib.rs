pub mod error;
pub mod schema;
pub mod punches;
pub mod grid;
pub mod roster;
pub mod summary;
pub mod insights;

pub use error::ReportError;
pub use grid::{normalize_day_columns, normalize_punch_grid, select_staff_rows};
pub use insights::{weekday_count_matrix, weekday_resume_percent};
pub use punches::{classify_punch, count_punches, split_time_tokens, PunchCounts, PunchKind};
pub use roster::extract_roster;
pub use schema::{day_label, weekday_map, Weekday};
pub use summary::{summarize_attendance, AttendanceReport, RosterMismatch};
