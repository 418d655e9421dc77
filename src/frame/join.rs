use ahash::AHashMap;
use tracing::warn;

use crate::{geography::GeographyPolygon, score::ScoreRecord};

/// One geography in a joined frame. Geometry is borrowed from the loaded layer.
#[derive(Debug, Clone, Copy)]
pub struct JoinedRow<'a> {
    pub polygon: &'a GeographyPolygon,
    pub access_score: f64,
    /// Whether a score row for this geography existed in the slice.
    pub matched: bool,
}

/// Left join of polygons against one time slice: exactly one row per polygon, in polygon order.
#[derive(Debug, Clone, Default)]
pub struct JoinedFrame<'a> {
    rows: Vec<JoinedRow<'a>>,
}

impl<'a> JoinedFrame<'a> {
    #[inline] pub fn rows(&self) -> &[JoinedRow<'a>] { &self.rows }
    #[inline] pub fn len(&self) -> usize { self.rows.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &JoinedRow<'a>> + '_ {
        self.rows.iter()
    }

    /// Number of polygons that found a score row.
    pub fn matched(&self) -> usize {
        self.rows.iter().filter(|r| r.matched).count()
    }
}

/// Left-join `polygons` with `subset` on GEOID (string comparison).
///
/// Polygons without a score row, or whose row has no score, get `0.0`.
/// If the slice holds several rows for one GEOID, the first one wins.
pub fn join<'a>(polygons: &'a [GeographyPolygon], subset: &[&ScoreRecord]) -> JoinedFrame<'a> {
    let mut scores: AHashMap<&str, Option<f64>> = AHashMap::with_capacity(subset.len());
    let mut duplicates = 0usize;
    for record in subset {
        let key = record.geo_id().id();
        if scores.contains_key(key) {
            duplicates += 1;
        } else {
            scores.insert(key, record.access_score());
        }
    }
    if duplicates > 0 {
        warn!(duplicates, "time slice holds repeated GEOIDs; keeping the first row for each");
    }

    let rows = polygons.iter()
        .map(|polygon| match scores.get(polygon.geo_id.id()) {
            Some(score) => JoinedRow { polygon, access_score: score.unwrap_or(0.0), matched: true },
            None => JoinedRow { polygon, access_score: 0.0, matched: false },
        })
        .collect();

    JoinedFrame { rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{geography::GeoId, score::Scalar};
    use geo::MultiPolygon;

    fn polygon(id: &str) -> GeographyPolygon {
        GeographyPolygon::new(GeoId::new(id), "Wake County", MultiPolygon(vec![]))
    }

    fn record(id: &str, score: Option<f64>) -> ScoreRecord {
        ScoreRecord::new(GeoId::new(id), Some(Scalar::Int(1)), Some("Mon".into()), Some("08:00–08:59".into()), score)
    }

    #[test]
    fn preserves_left_cardinality_and_fills_zero() {
        let polygons = vec![polygon("A"), polygon("B"), polygon("C")];
        let records = vec![record("A", Some(10.0)), record("Z", Some(99.0)), record("C", None)];
        let subset: Vec<&ScoreRecord> = records.iter().collect();

        let frame = join(&polygons, &subset);
        assert_eq!(frame.len(), 3);

        let scores: Vec<(&str, f64, bool)> = frame.iter()
            .map(|r| (r.polygon.geo_id.id(), r.access_score, r.matched))
            .collect();
        assert_eq!(scores, vec![("A", 10.0, true), ("B", 0.0, false), ("C", 0.0, true)]);
        assert_eq!(frame.matched(), 2);
    }

    #[test]
    fn leading_zeros_must_match_exactly() {
        let polygons = vec![polygon("01001020100")];
        let records = vec![record("1001020100", Some(4.0))];
        let subset: Vec<&ScoreRecord> = records.iter().collect();

        let frame = join(&polygons, &subset);
        assert!(!frame.rows()[0].matched);
        assert_eq!(frame.rows()[0].access_score, 0.0);
    }

    #[test]
    fn first_duplicate_wins() {
        let polygons = vec![polygon("A")];
        let records = vec![record("A", Some(1.0)), record("A", Some(2.0))];
        let subset: Vec<&ScoreRecord> = records.iter().collect();

        let frame = join(&polygons, &subset);
        assert_eq!(frame.len(), 1);
        assert_eq!(frame.rows()[0].access_score, 1.0);
    }

    #[test]
    fn empty_polygon_set_yields_empty_frame() {
        let records = vec![record("A", Some(1.0))];
        let subset: Vec<&ScoreRecord> = records.iter().collect();
        assert!(join(&[], &subset).is_empty());
    }
}
