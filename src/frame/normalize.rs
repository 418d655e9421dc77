use crate::score::ScoreRecord;

/// Color-scale domain for one frame. Always has non-zero width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreRange {
    pub vmin: f64,
    pub vmax: f64,
}

impl ScoreRange {
    /// Range from observed extremes, widened by one on each side when they coincide.
    pub fn new(vmin: f64, vmax: f64) -> Self {
        if vmin == vmax {
            Self { vmin: vmin - 1.0, vmax: vmax + 1.0 }
        } else {
            Self { vmin, vmax }
        }
    }

    /// Position of `value` within the range: 0.0 at `vmin`, 1.0 at `vmax` (unclamped).
    #[inline]
    pub fn position(&self, value: f64) -> f64 {
        (value - self.vmin) / (self.vmax - self.vmin)
    }
}

/// Min and max access score over `subset`, ignoring missing scores.
/// `None` when no row in the subset carries a score.
pub fn normalize_range(subset: &[&ScoreRecord]) -> Option<ScoreRange> {
    let (vmin, vmax) = subset.iter()
        .filter_map(|r| r.access_score())
        .fold(None, |acc: Option<(f64, f64)>, s| match acc {
            None => Some((s, s)),
            Some((lo, hi)) => Some((lo.min(s), hi.max(s))),
        })?;
    Some(ScoreRange::new(vmin, vmax))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{geography::GeoId, score::Scalar};

    fn rows(scores: &[Option<f64>]) -> Vec<ScoreRecord> {
        scores.iter()
            .enumerate()
            .map(|(i, &s)| ScoreRecord::new(GeoId::new(&i.to_string()), Some(Scalar::Int(1)), Some("Mon".into()), Some("08:00–08:59".into()), s))
            .collect()
    }

    #[test]
    fn single_row_widens_symmetrically() {
        let data = rows(&[Some(5.0)]);
        let subset: Vec<&ScoreRecord> = data.iter().collect();
        assert_eq!(normalize_range(&subset), Some(ScoreRange { vmin: 4.0, vmax: 6.0 }));
    }

    #[test]
    fn distinct_scores_keep_extremes() {
        let data = rows(&[Some(3.0), Some(7.0)]);
        let subset: Vec<&ScoreRecord> = data.iter().collect();
        assert_eq!(normalize_range(&subset), Some(ScoreRange { vmin: 3.0, vmax: 7.0 }));
    }

    #[test]
    fn missing_scores_are_ignored() {
        let data = rows(&[None, Some(2.0), None, Some(2.0)]);
        let subset: Vec<&ScoreRecord> = data.iter().collect();
        assert_eq!(normalize_range(&subset), Some(ScoreRange { vmin: 1.0, vmax: 3.0 }));

        let data = rows(&[None, None]);
        let subset: Vec<&ScoreRecord> = data.iter().collect();
        assert_eq!(normalize_range(&subset), None);
    }

    #[test]
    fn position_is_linear() {
        let range = ScoreRange::new(3.0, 7.0);
        assert_eq!(range.position(3.0), 0.0);
        assert_eq!(range.position(5.0), 0.5);
        assert_eq!(range.position(7.0), 1.0);
    }
}
