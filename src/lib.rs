#![doc = "AccessMap public API"]
mod common;
mod error;
mod frame;
mod geography;
mod pipeline;
mod score;
mod selection;

#[doc(inline)]
pub use error::{SchemaError, SelectionError};

#[doc(inline)]
pub use score::{extract_start_hour, Scalar, ScoreRecord, ScoreTable, WINDOW_SEPARATOR};

#[doc(inline)]
pub use geography::{filter_geographies, GeoId, GeographyLayer, GeographyPolygon, RegionSet, NC_STUDY_COUNTIES};

#[doc(inline)]
pub use selection::{days, hours, select_slice, weeks, HourRange, Resolved, SelectionState};

#[doc(inline)]
pub use frame::{join, normalize_range, Choropleth, JoinedFrame, JoinedRow, ScoreRange, SvgOptions};

#[doc(inline)]
pub use pipeline::{AccessMap, CycleOutcome};

#[cfg(feature = "download")]
#[doc(inline)]
pub use common::download_tract_boundaries;
