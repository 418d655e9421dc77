//! GeoJSON and CSV exports of a rendered time slice.

use std::{io::Write, path::Path};

use anyhow::{Context, Result};
use geo::{LineString, MultiPolygon};
use polars::{io::SerWriter, prelude::{Column, CsvWriter, DataFrame}};
use serde_json::{json, Value};

use crate::{
    common::PendingWrite,
    geography::{GEOID_FIELD, REGION_FIELD},
    score::SCORE_COLUMN,
};

use super::Choropleth;

impl Choropleth<'_> {
    /// Build a GeoJSON FeatureCollection; the slice and color range ride along as foreign members.
    pub fn to_geojson_value(&self) -> Value {
        let features: Vec<Value> = self.frame.iter()
            .map(|row| json!({
                "type": "Feature",
                "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": multipolygon_coords(&row.polygon.geometry),
                },
                "properties": {
                    GEOID_FIELD: row.polygon.geo_id.id(),
                    REGION_FIELD: &*row.polygon.region_name,
                    SCORE_COLUMN: row.access_score,
                    "matched": row.matched,
                },
            }))
            .collect();

        json!({
            "type": "FeatureCollection",
            "slice": {
                "week": self.selection.week.to_string(),
                "day": self.selection.day.to_string(),
                "hour": self.selection.hour,
            },
            "range": { "vmin": self.range.vmin, "vmax": self.range.vmax },
            "features": features,
        })
    }

    /// Write the GeoJSON FeatureCollection to `path`.
    pub fn to_geojson(&self, path: &Path, force: bool) -> Result<()> {
        let mut sink = PendingWrite::open(path, force)?;
        serde_json::to_writer(&mut sink, &self.to_geojson_value())
            .with_context(|| format!("[frame::io] Failed to write GeoJSON to {}", path.display()))?;
        sink.flush()?;
        sink.finalize()
    }

    /// Tabular view of the frame: `GEOID, NAMELSADCO, Access_Score, matched`.
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let rows = self.frame.rows();
        Ok(DataFrame::new(vec![
            Column::new(GEOID_FIELD.into(), rows.iter().map(|r| r.polygon.geo_id.id()).collect::<Vec<_>>()),
            Column::new(REGION_FIELD.into(), rows.iter().map(|r| &*r.polygon.region_name).collect::<Vec<_>>()),
            Column::new(SCORE_COLUMN.into(), rows.iter().map(|r| r.access_score).collect::<Vec<_>>()),
            Column::new("matched".into(), rows.iter().map(|r| r.matched).collect::<Vec<_>>()),
        ])?)
    }

    /// Write the tabular view as CSV to `path`.
    pub fn to_csv(&self, path: &Path, force: bool) -> Result<()> {
        let mut df = self.to_dataframe()?;
        let mut sink = PendingWrite::open(path, force)?;
        CsvWriter::new(&mut sink)
            .finish(&mut df)
            .with_context(|| format!("[frame::io] Failed to write CSV to {}", path.display()))?;
        sink.finalize()
    }
}

/// GeoJSON MultiPolygon coordinates: polygons of rings of [x, y] positions.
fn multipolygon_coords(shape: &MultiPolygon<f64>) -> Vec<Vec<Vec<[f64; 2]>>> {
    fn ring(ls: &LineString<f64>) -> Vec<[f64; 2]> {
        ls.coords().map(|c| [c.x, c.y]).collect()
    }

    shape.0.iter()
        .map(|polygon| std::iter::once(polygon.exterior())
            .chain(polygon.interiors())
            .map(ring)
            .collect())
        .collect()
}
