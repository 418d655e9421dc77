//! Polygon dataset loading: shapefile, zipped shapefile, or GeoJSON.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use geo::{Coord, LineString, MultiPolygon, Polygon};
use serde_json::Value;
use shapefile::dbase::{FieldValue, Record};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::{common, error::SchemaError};

use super::{GeoId, GeographyLayer, GeographyPolygon};

pub(crate) const GEOID_FIELD: &str = "GEOID";
pub(crate) const REGION_FIELD: &str = "NAMELSADCO";

const DATASET: &str = "polygon dataset";

impl GeographyLayer {
    /// Load polygons from `path`, choosing the reader by file extension.
    pub fn read(path: &Path) -> Result<Self> {
        let ext = path.extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let layer = match ext.as_deref() {
            Some("shp") => Self::read_shapefile(path)?,
            Some("zip") => Self::read_zipped_shapefile(path)?,
            Some("geojson" | "json") => {
                let bytes = std::fs::read(path)
                    .with_context(|| format!("[geography::io] Failed to read {}", path.display()))?;
                Self::from_geojson_bytes(&bytes)
                    .with_context(|| format!("[geography::io] Invalid GeoJSON in {}", path.display()))?
            }
            _ => bail!("[geography::io] Unsupported polygon format: {}", path.display()),
        };

        info!(path = %path.display(), polygons = layer.len(), "loaded polygon dataset");
        Ok(layer)
    }

    /// Loads polygons and their attribute records from a `.shp` file (with its `.dbf` sidecar).
    pub fn read_shapefile(path: &Path) -> Result<Self> {
        let mut reader = shapefile::Reader::from_path(path)
            .with_context(|| format!("[geography::io] Failed to open shapefile: {}", path.display()))?;

        let polygons = reader.iter_shapes_and_records()
            .enumerate()
            .map(|(i, item)| {
                let (shape, record) = item
                    .with_context(|| format!("[geography::io] Error reading shape+record {i}"))?;
                let geometry = common::shape_to_multipolygon(shape)
                    .with_context(|| format!("[geography::io] Bad geometry in record {i}"))?;
                Ok(GeographyPolygon::new(
                    record_geo_id(&record)?,
                    &record_region(&record)?,
                    geometry,
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(polygons))
    }

    /// Extracts a zip archive to a temporary directory and reads the first `.shp` inside it.
    pub fn read_zipped_shapefile(path: &Path) -> Result<Self> {
        let tmp = tempfile::tempdir().context("[geography::io] create temp dir")?;
        common::extract_zip(path, tmp.path())?;

        let shp = find_shapefile(tmp.path())
            .ok_or_else(|| anyhow!("[geography::io] No .shp file inside {}", path.display()))?;
        debug!(shp = %shp.display(), "reading shapefile from archive");

        Self::read_shapefile(&shp)
    }

    /// Parse a GeoJSON FeatureCollection with Polygon / MultiPolygon geometries.
    pub fn from_geojson_bytes(bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes).context("[geography::io] Failed to parse GeoJSON")?;
        let features = value["features"].as_array()
            .ok_or_else(|| anyhow!("[geography::io] GeoJSON is not a FeatureCollection"))?;

        let polygons = features.iter()
            .enumerate()
            .map(|(i, feature)| {
                let properties = &feature["properties"];
                let geo_id = match &properties[GEOID_FIELD] {
                    Value::String(s) => GeoId::new(s.trim()),
                    Value::Number(n) => match n.as_i64() {
                        Some(n) => GeoId::new(&n.to_string()),
                        None => GeoId::from_numeric(n.as_f64().unwrap_or(f64::NAN)),
                    },
                    Value::Null => return Err(missing(GEOID_FIELD)),
                    other => return Err(invalid(GEOID_FIELD, format!("unexpected value {other}"))),
                };
                let region = match &properties[REGION_FIELD] {
                    Value::String(s) => s.trim().to_string(),
                    Value::Null => return Err(missing(REGION_FIELD)),
                    other => return Err(invalid(REGION_FIELD, format!("unexpected value {other}"))),
                };
                let geometry = parse_geometry(&feature["geometry"])
                    .with_context(|| format!("[geography::io] Bad geometry in feature {i}"))?;
                Ok(GeographyPolygon::new(geo_id, &region, geometry))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(polygons))
    }
}

fn missing(field: &str) -> anyhow::Error {
    SchemaError::MissingColumn { dataset: DATASET, column: field.to_string() }.into()
}

fn invalid(field: &str, reason: String) -> anyhow::Error {
    SchemaError::InvalidColumn { dataset: DATASET, column: field.to_string(), reason }.into()
}

/// Character and numeric GEOID attributes are both coerced to strings.
fn record_geo_id(record: &Record) -> Result<GeoId> {
    match record.get(GEOID_FIELD) {
        Some(FieldValue::Character(Some(s))) => Ok(GeoId::new(s.trim())),
        Some(FieldValue::Numeric(Some(n))) => Ok(GeoId::from_numeric(*n)),
        Some(FieldValue::Integer(n)) => Ok(GeoId::new(&n.to_string())),
        None => Err(missing(GEOID_FIELD)),
        Some(other) => Err(invalid(GEOID_FIELD, format!("unexpected value {other:?}"))),
    }
}

fn record_region(record: &Record) -> Result<String> {
    match record.get(REGION_FIELD) {
        Some(FieldValue::Character(Some(s))) => Ok(s.trim().to_string()),
        None => Err(missing(REGION_FIELD)),
        Some(other) => Err(invalid(REGION_FIELD, format!("unexpected value {other:?}"))),
    }
}

/// First `.shp` file under `dir`, in sorted path order.
fn find_shapefile(dir: &Path) -> Option<PathBuf> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.into_path())
        .find(|path| path.extension().is_some_and(|e| e.eq_ignore_ascii_case("shp")))
}

fn parse_geometry(geometry: &Value) -> Result<MultiPolygon<f64>> {
    let coords = geometry["coordinates"].as_array()
        .ok_or_else(|| anyhow!("missing coordinates"))?;
    match geometry["type"].as_str() {
        Some("Polygon") => Ok(MultiPolygon(vec![parse_polygon(coords)?])),
        Some("MultiPolygon") => Ok(MultiPolygon(coords.iter()
            .map(|polygon| parse_polygon(polygon.as_array().ok_or_else(|| anyhow!("polygon is not an array"))?))
            .collect::<Result<Vec<_>>>()?)),
        other => bail!("expected Polygon or MultiPolygon geometry, found {other:?}"),
    }
}

/// GeoJSON polygon: first ring is the exterior, the rest are holes.
fn parse_polygon(rings: &[Value]) -> Result<Polygon<f64>> {
    let mut rings = rings.iter().map(parse_ring);
    let exterior = rings.next().ok_or_else(|| anyhow!("polygon has no rings"))??;
    let interiors = rings.collect::<Result<Vec<_>>>()?;
    Ok(Polygon::new(exterior, interiors))
}

fn parse_ring(ring: &Value) -> Result<LineString<f64>> {
    let points = ring.as_array().ok_or_else(|| anyhow!("ring is not an array"))?;
    points.iter()
        .map(|point| {
            let x = point[0].as_f64().ok_or_else(|| anyhow!("invalid x coordinate"))?;
            let y = point[1].as_f64().ok_or_else(|| anyhow!("invalid y coordinate"))?;
            Ok(Coord { x, y })
        })
        .collect::<Result<Vec<_>>>()
        .map(LineString::from)
}
