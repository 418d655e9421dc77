use crate::{error::SelectionError, score::{Scalar, ScoreTable}};

use super::{days, hours, weeks, HourRange};

/// The (week, day, hour) triple chosen for one render cycle. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    pub week: Scalar,
    pub day: Scalar,
    pub hour: i64,
}

/// Outcome of resolving raw user input against the cascade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    Ready(SelectionState),
    /// The chosen day has no parsable time windows; nothing to select.
    NoHours { week: Scalar, day: Scalar },
}

impl SelectionState {
    pub fn new(week: Scalar, day: Scalar, hour: i64) -> Self {
        Self { week, day, hour }
    }

    /// Find the week spelled `raw` among the table's weeks.
    pub fn resolve_week(table: &ScoreTable, raw: &str) -> Result<Scalar, SelectionError> {
        weeks(table).into_iter()
            .find(|w| w.matches(raw))
            .ok_or_else(|| SelectionError::UnknownWeek(raw.to_string()))
    }

    /// Walk the cascade with raw `week` and `day` spellings. A missing `hour`
    /// defaults to the first selectable hour.
    pub fn resolve(table: &ScoreTable, week: &str, day: &str, hour: Option<i64>) -> Result<Resolved, SelectionError> {
        let week = Self::resolve_week(table, week)?;

        let day = days(table, &week).into_iter()
            .find(|d| d.matches(day))
            .ok_or_else(|| SelectionError::UnknownDay { week: week.clone(), day: day.to_string() })?;

        let Some(range) = HourRange::spanning(&hours(table, &week, &day)) else {
            return Ok(Resolved::NoHours { week, day });
        };

        let hour = hour.unwrap_or(range.min);
        if !range.contains(hour) {
            return Err(SelectionError::HourOutOfRange { hour, range });
        }

        Ok(Resolved::Ready(Self { week, day, hour }))
    }
}
