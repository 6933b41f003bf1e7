use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Width of one `HH:MM` punch token in the device export.
const TOKEN_WIDTH: usize = 5;

/// Punches in these hour windows count as arrivals and departures; any
/// other hour carries no attendance signal.
const RESUME_HOURS: RangeInclusive<u32> = 7..=9;
const EXIT_HOURS: RangeInclusive<u32> = 16..=19;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PunchKind {
    Resume,
    Exit,
}

impl PunchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PunchKind::Resume => "resume",
            PunchKind::Exit => "exit",
        }
    }
}

impl fmt::Display for PunchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tally of classified punches within a single grid cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PunchCounts {
    pub resume: i64,
    pub exit: i64,
}

/// Cuts a raw punch cell into `HH:MM` candidate tokens.
///
/// The device writes punches back to back with no separator, so the cell
/// is stripped of all whitespace and sliced into fixed five-character
/// strides. A trailing slice shorter than five characters is dropped, as
/// is any slice without a colon. This is a positional heuristic, not a
/// time parser; text that is not shaped as consecutive `HH:MM` runs will
/// produce junk tokens for [`classify_punch`] to reject.
pub fn split_time_tokens(cell: &str) -> Vec<String> {
    let stripped: Vec<char> = cell.chars().filter(|ch| !ch.is_whitespace()).collect();
    stripped
        .chunks(TOKEN_WIDTH)
        .filter(|chunk| chunk.len() == TOKEN_WIDTH && chunk.contains(&':'))
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Classifies one token by the hour in its leading two characters.
///
/// A token whose hour does not parse, or parses outside both punch
/// windows, yields `None` and is counted as neither kind.
pub fn classify_punch(token: &str) -> Option<PunchKind> {
    let hour_text: String = token.chars().take(2).collect();
    let hour: u32 = hour_text.parse().ok()?;
    if RESUME_HOURS.contains(&hour) {
        Some(PunchKind::Resume)
    } else if EXIT_HOURS.contains(&hour) {
        Some(PunchKind::Exit)
    } else {
        None
    }
}

/// Counts resume and exit punches in one raw cell.
pub fn count_punches(cell: &str) -> PunchCounts {
    let mut counts = PunchCounts::default();
    for token in split_time_tokens(cell) {
        match classify_punch(&token) {
            Some(PunchKind::Resume) => counts.resume += 1,
            Some(PunchKind::Exit) => counts.exit += 1,
            None => {}
        }
    }
    counts
}
