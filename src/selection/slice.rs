use crate::score::{Scalar, ScoreRecord, ScoreTable};

/// Rows matching `week`, `day`, and the parsed start `hour` exactly.
pub fn select_slice<'a>(table: &'a ScoreTable, week: &Scalar, day: &Scalar, hour: i64) -> Vec<&'a ScoreRecord> {
    table.iter()
        .filter(|r| r.week() == Some(week) && r.day() == Some(day) && r.hour_numeric() == Some(hour))
        .collect()
}
