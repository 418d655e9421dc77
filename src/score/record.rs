use std::{fmt, sync::Arc};

use crate::geography::GeoId;

use super::extract_start_hour;

/// A comparable week or day value; integer columns stay numeric so `10` sorts after `9`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scalar {
    Int(i64),
    Text(Arc<str>),
}

impl Scalar {
    /// True if `raw` spells this value (as typed on a command line or in a form field).
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            Scalar::Int(n) => parse_integral(raw) == Some(*n),
            Scalar::Text(s) => &**s == raw,
        }
    }
}

/// Parse an integer, also accepting integer-valued decimals such as `"2.0"`
/// (how an integer column holding blanks is often written out).
pub(crate) fn parse_integral(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(n) = raw.parse::<i64>() {
        return Some(n);
    }
    let x = raw.parse::<f64>().ok()?;
    (x.is_finite() && x.fract() == 0.0 && x.abs() < 9.0e15).then_some(x as i64)
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(n) => write!(f, "{n}"),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self { Scalar::Int(value) }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self { Scalar::Text(Arc::from(value)) }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self { Scalar::Text(Arc::from(value)) }
}

/// One row of the score table: a geography's access score for one time window.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRecord {
    geo_id: GeoId,
    week: Option<Scalar>,
    day: Option<Scalar>,
    time_window: Option<String>,
    hour_numeric: Option<i64>, // derived from time_window, never read from storage
    access_score: Option<f64>,
}

impl ScoreRecord {
    pub fn new(
        geo_id: GeoId,
        week: Option<Scalar>,
        day: Option<Scalar>,
        time_window: Option<String>,
        access_score: Option<f64>,
    ) -> Self {
        let hour_numeric = extract_start_hour(time_window.as_deref());
        Self { geo_id, week, day, time_window, hour_numeric, access_score }
    }

    #[inline] pub fn geo_id(&self) -> &GeoId { &self.geo_id }
    #[inline] pub fn week(&self) -> Option<&Scalar> { self.week.as_ref() }
    #[inline] pub fn day(&self) -> Option<&Scalar> { self.day.as_ref() }
    #[inline] pub fn time_window(&self) -> Option<&str> { self.time_window.as_deref() }
    #[inline] pub fn hour_numeric(&self) -> Option<i64> { self.hour_numeric }
    #[inline] pub fn access_score(&self) -> Option<f64> { self.access_score }
}

/// The loaded score table. Read-only once constructed.
#[derive(Debug, Clone, Default)]
pub struct ScoreTable {
    records: Vec<ScoreRecord>,
}

impl ScoreTable {
    pub fn from_records(records: Vec<ScoreRecord>) -> Self {
        Self { records }
    }

    #[inline] pub fn records(&self) -> &[ScoreRecord] { &self.records }
    #[inline] pub fn len(&self) -> usize { self.records.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &ScoreRecord> + '_ {
        self.records.iter()
    }

    /// Number of rows whose time-window label could not be parsed into an hour.
    pub fn unparsed_windows(&self) -> usize {
        self.records.iter().filter(|r| r.hour_numeric.is_none()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hour_is_derived_from_window() {
        let rec = ScoreRecord::new(GeoId::new("37183052101"), Some(Scalar::Int(1)), Some("Mon".into()), Some("12:00–13:59".into()), Some(0.4));
        assert_eq!(rec.hour_numeric(), Some(12));

        let rec = ScoreRecord::new(GeoId::new("37183052101"), Some(Scalar::Int(1)), Some("Mon".into()), None, Some(0.4));
        assert_eq!(rec.hour_numeric(), None);
    }

    #[test]
    fn integer_scalars_order_numerically() {
        let mut values: Vec<Scalar> = vec![Scalar::Int(10), Scalar::Int(2), Scalar::Int(9)];
        values.sort();
        assert_eq!(values, vec![Scalar::Int(2), Scalar::Int(9), Scalar::Int(10)]);
    }

    #[test]
    fn scalar_matches_its_spelling() {
        assert!(Scalar::Int(3).matches("3"));
        assert!(Scalar::Int(3).matches(" 03"));
        assert!(!Scalar::Int(3).matches("three"));
        assert!(Scalar::Int(3).matches("3.0"));
        assert!(!Scalar::Int(3).matches("3.5"));
        assert!(Scalar::from("Mon").matches("Mon"));
        assert!(!Scalar::from("Mon").matches("mon"));
    }
}
