//! Dependent week -> day -> hour choices, each sorted ascending without duplicates.

use std::{collections::BTreeSet, fmt, ops::RangeInclusive};

use crate::score::{Scalar, ScoreTable};

/// All non-null weeks in the table.
pub fn weeks(table: &ScoreTable) -> Vec<Scalar> {
    table.iter()
        .filter_map(|r| r.week().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Non-null days recorded within `week`.
pub fn days(table: &ScoreTable, week: &Scalar) -> Vec<Scalar> {
    table.iter()
        .filter(|r| r.week() == Some(week))
        .filter_map(|r| r.day().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Parsed start hours recorded on `day` of `week`; rows without an hour are skipped.
pub fn hours(table: &ScoreTable, week: &Scalar, day: &Scalar) -> Vec<i64> {
    table.iter()
        .filter(|r| r.week() == Some(week) && r.day() == Some(day))
        .filter_map(|r| r.hour_numeric())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Inclusive, step-1 hour domain spanning the observed hours.
///
/// The range may include hours with no data (9 and 11 observed gives 9..=11);
/// selecting such an hour yields an empty slice rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourRange {
    pub min: i64,
    pub max: i64,
}

impl HourRange {
    /// Span of `hours`, or `None` when there are no hours to choose from.
    pub fn spanning(hours: &[i64]) -> Option<Self> {
        let min = *hours.iter().min()?;
        let max = *hours.iter().max()?;
        Some(Self { min, max })
    }

    #[inline]
    pub fn contains(&self, hour: i64) -> bool {
        (self.min..=self.max).contains(&hour)
    }

    /// Every selectable hour, in order.
    pub fn iter(&self) -> RangeInclusive<i64> {
        self.min..=self.max
    }
}

impl fmt::Display for HourRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{geography::GeoId, score::ScoreRecord};

    fn row(week: Option<i64>, day: Option<&str>, window: Option<&str>) -> ScoreRecord {
        ScoreRecord::new(GeoId::new("A"), week.map(Scalar::Int), day.map(Scalar::from), window.map(str::to_string), Some(1.0))
    }

    fn table() -> ScoreTable {
        ScoreTable::from_records(vec![
            row(Some(10), Some("Tue"), Some("11:00–11:59")),
            row(Some(2), Some("Mon"), Some("11:00–11:59")),
            row(Some(2), Some("Mon"), Some("09:00–09:59")),
            row(Some(2), Some("Mon"), Some("09:00–09:59")),
            row(Some(2), Some("Fri"), Some("garbage")),
            row(Some(2), None, Some("07:00–07:59")),
            row(None, Some("Sun"), Some("07:00–07:59")),
        ])
    }

    #[test]
    fn weeks_are_sorted_unique_and_non_null() {
        assert_eq!(weeks(&table()), vec![Scalar::Int(2), Scalar::Int(10)]);
    }

    #[test]
    fn days_depend_on_week() {
        let t = table();
        assert_eq!(days(&t, &Scalar::Int(2)), vec![Scalar::from("Fri"), Scalar::from("Mon")]);
        assert_eq!(days(&t, &Scalar::Int(10)), vec![Scalar::from("Tue")]);
        assert!(days(&t, &Scalar::Int(99)).is_empty());
    }

    #[test]
    fn hours_depend_on_week_and_day() {
        let t = table();
        assert_eq!(hours(&t, &Scalar::Int(2), &Scalar::from("Mon")), vec![9, 11]);
        assert_eq!(hours(&t, &Scalar::Int(10), &Scalar::from("Mon")), Vec::<i64>::new());
    }

    #[test]
    fn day_with_only_unparsable_windows_has_no_hours() {
        assert!(hours(&table(), &Scalar::Int(2), &Scalar::from("Fri")).is_empty());
    }

    #[test]
    fn range_spans_gaps() {
        let range = HourRange::spanning(&[9, 11]).unwrap();
        assert_eq!(range, HourRange { min: 9, max: 11 });
        assert!(range.contains(10));
        assert!(!range.contains(12));
        assert_eq!(range.iter().collect::<Vec<_>>(), vec![9, 10, 11]);
        assert_eq!(range.to_string(), "[9, 11]");
        assert!(HourRange::spanning(&[]).is_none());
    }
}
