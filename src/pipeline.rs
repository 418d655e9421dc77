//! Loaded context and the per-selection render cycle.

use std::path::Path;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::{
    error::SelectionError,
    frame::{join, normalize_range, Choropleth, ScoreRange},
    geography::{filter_geographies, GeographyLayer, RegionSet},
    score::{Scalar, ScoreTable},
    selection::{self, select_slice, HourRange, Resolved, SelectionState},
};

/// Immutable datasets loaded once at startup and shared by every render cycle.
#[derive(Debug, Clone)]
pub struct AccessMap {
    scores: ScoreTable,
    geographies: GeographyLayer,
}

/// Result of one render cycle. The two empty outcomes are expected states, not failures.
#[derive(Debug, Clone)]
pub enum CycleOutcome<'a> {
    Rendered(Choropleth<'a>),
    NoHours { week: Scalar, day: Scalar },
    NoSlice { week: Scalar, day: Scalar, hour: i64 },
}

impl CycleOutcome<'_> {
    /// User-facing message for the empty outcomes.
    pub fn advisory(&self) -> Option<&'static str> {
        match self {
            CycleOutcome::Rendered(_) => None,
            CycleOutcome::NoHours { .. } => Some("No data available for this day."),
            CycleOutcome::NoSlice { .. } => Some("No data for this time slice."),
        }
    }
}

impl AccessMap {
    /// Restrict `geographies` to `regions` and take ownership of both tables.
    pub fn new(scores: ScoreTable, geographies: GeographyLayer, regions: &RegionSet) -> Self {
        let geographies = GeographyLayer::new(filter_geographies(geographies.into_polygons(), regions));
        if geographies.is_empty() {
            warn!("no geographies fall inside the region set; every map will be empty");
        }
        Self { scores, geographies }
    }

    /// Load the score CSV and polygon file, failing fast on schema problems.
    pub fn load(scores_path: &Path, polygons_path: &Path, regions: &RegionSet) -> Result<Self> {
        let scores = ScoreTable::read_csv(scores_path)?;
        let geographies = GeographyLayer::read(polygons_path)?;
        let map = Self::new(scores, geographies, regions);
        info!(scores = map.scores.len(), geographies = map.geographies.len(), "access map ready");
        Ok(map)
    }

    #[inline] pub fn scores(&self) -> &ScoreTable { &self.scores }
    #[inline] pub fn geographies(&self) -> &GeographyLayer { &self.geographies }

    pub fn weeks(&self) -> Vec<Scalar> {
        selection::weeks(&self.scores)
    }

    pub fn days(&self, week: &Scalar) -> Vec<Scalar> {
        selection::days(&self.scores, week)
    }

    pub fn hours(&self, week: &Scalar, day: &Scalar) -> Vec<i64> {
        selection::hours(&self.scores, week, day)
    }

    /// Selectable hour domain for `day` of `week`, or `None` when the day has no hours.
    pub fn hour_range(&self, week: &Scalar, day: &Scalar) -> Option<HourRange> {
        HourRange::spanning(&self.hours(week, day))
    }

    /// Resolve raw user input into a selection (see [`SelectionState::resolve`]).
    pub fn resolve(&self, week: &str, day: &str, hour: Option<i64>) -> Result<Resolved, SelectionError> {
        SelectionState::resolve(&self.scores, week, day, hour)
    }

    /// Slice, normalize, and join for one selection.
    pub fn render_cycle(&self, selection: &SelectionState) -> CycleOutcome<'_> {
        let SelectionState { week, day, hour } = selection;

        if self.hours(week, day).is_empty() {
            debug!(%week, %day, "no hours for day");
            return CycleOutcome::NoHours { week: week.clone(), day: day.clone() };
        }

        let subset = select_slice(&self.scores, week, day, *hour);
        if subset.is_empty() {
            debug!(%week, %day, hour, "empty time slice");
            return CycleOutcome::NoSlice { week: week.clone(), day: day.clone(), hour: *hour };
        }

        // A slice whose rows all lack scores renders as zeros after the join.
        let range = normalize_range(&subset).unwrap_or_else(|| ScoreRange::new(0.0, 0.0));
        let frame = join(self.geographies.polygons(), &subset);
        debug!(%week, %day, hour, rows = subset.len(), matched = frame.matched(), vmin = range.vmin, vmax = range.vmax, "render cycle");

        CycleOutcome::Rendered(Choropleth { selection: selection.clone(), range, frame })
    }
}
