//! Score table loading (CSV via polars).

use std::{fs::File, io::Cursor, path::Path};

use anyhow::{Context, Result};
use polars::{io::SerReader, prelude::{Column, CsvReadOptions, DataFrame, DataType}};
use tracing::{info, warn};

use crate::{error::SchemaError, geography::GeoId};

use super::{record::parse_integral, Scalar, ScoreRecord, ScoreTable};

pub(crate) const GEOID_COLUMN: &str = "GEOID";
pub(crate) const WEEK_COLUMN: &str = "week";
pub(crate) const DAY_COLUMN: &str = "day";
pub(crate) const HOUR_COLUMN: &str = "hour";
pub(crate) const SCORE_COLUMN: &str = "Access_Score";

const DATASET: &str = "score table";

impl ScoreTable {
    /// Reads the score table from a CSV file at `path`.
    pub fn read_csv(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("[score::io] Failed to open CSV file: {}", path.display()))?;
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .into_reader_with_file_handle(file)
            .finish()
            .with_context(|| format!("[score::io] Failed to read CSV from {}", path.display()))?;

        let table = Self::from_dataframe(&df)
            .with_context(|| format!("[score::io] Invalid score table: {}", path.display()))?;
        info!(path = %path.display(), rows = table.len(), "loaded score table");
        Ok(table)
    }

    /// Reads the score table from in-memory CSV bytes.
    pub fn from_csv_bytes(bytes: &[u8]) -> Result<Self> {
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .into_reader_with_file_handle(Cursor::new(bytes))
            .finish()
            .context("[score::io] Failed to read CSV from bytes")?;
        Self::from_dataframe(&df)
    }

    /// Build a table from a DataFrame with the `GEOID, week, day, hour, Access_Score` columns.
    ///
    /// Any stored `hour_numeric` column is ignored; hours are always re-derived from `hour`.
    pub fn from_dataframe(df: &DataFrame) -> Result<Self> {
        let geo_ids = string_values(df, GEOID_COLUMN)?;
        let weeks = scalar_values(df, WEEK_COLUMN)?;
        let days = scalar_values(df, DAY_COLUMN)?;
        let windows = string_values(df, HOUR_COLUMN)?;
        let scores = float_values(df, SCORE_COLUMN)?;

        let mut missing_ids = 0usize;
        let records = geo_ids.into_iter()
            .zip(weeks)
            .zip(days)
            .zip(windows)
            .zip(scores)
            .filter_map(|((((geo_id, week), day), window), score)| {
                let Some(geo_id) = geo_id else {
                    missing_ids += 1;
                    return None;
                };
                Some(ScoreRecord::new(GeoId::new(geo_id.trim()), week, day, window, score))
            })
            .collect();

        if missing_ids > 0 {
            warn!(rows = missing_ids, "dropped score rows without a GEOID");
        }

        let table = Self::from_records(records);
        let unparsed = table.unparsed_windows();
        if unparsed > 0 {
            warn!(rows = unparsed, "score rows with a missing or unparsable time window");
        }
        Ok(table)
    }
}

fn require<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column, SchemaError> {
    df.column(name).map_err(|_| SchemaError::MissingColumn { dataset: DATASET, column: name.to_string() })
}

fn cast(column: &Column, name: &str, dtype: &DataType) -> Result<Column, SchemaError> {
    column.cast(dtype).map_err(|e| SchemaError::InvalidColumn {
        dataset: DATASET,
        column: name.to_string(),
        reason: e.to_string(),
    })
}

fn string_values(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = cast(require(df, name)?, name, &DataType::String)?;
    Ok(column.str()?.into_iter().map(|v| v.map(str::to_string)).collect())
}

/// Integer columns (or text columns whose every value is integral, `2` or `2.0`) become
/// `Scalar::Int`; anything else is compared as text.
fn scalar_values(df: &DataFrame, name: &str) -> Result<Vec<Option<Scalar>>> {
    let column = require(df, name)?;
    if column.dtype().is_integer() {
        let column = cast(column, name, &DataType::Int64)?;
        return Ok(column.i64()?.into_iter().map(|v| v.map(Scalar::Int)).collect());
    }

    let values = string_values(df, name)?;
    let ints = values.iter()
        .map(|v| v.as_deref().map(parse_integral).map_or(Some(None), |n| n.map(Some)))
        .collect::<Option<Vec<_>>>();

    Ok(match ints {
        Some(ints) => ints.into_iter().map(|v| v.map(Scalar::Int)).collect(),
        None => values.into_iter().map(|v| v.map(Scalar::from)).collect(),
    })
}

/// Scores parse from text or cast from any numeric dtype; NaN counts as missing.
fn float_values(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let column = require(df, name)?;
    let values: Vec<Option<f64>> = if column.dtype() == &DataType::String {
        column.str()?.into_iter()
            .map(|v| v.and_then(|s| s.trim().parse::<f64>().ok()))
            .collect()
    } else {
        cast(column, name, &DataType::Float64)?.f64()?.into_iter().collect()
    };
    Ok(values.into_iter().map(|v| v.filter(|x| !x.is_nan())).collect())
}
