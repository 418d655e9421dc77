mod geo_id;
mod io;
mod layer;
mod region;

pub use geo_id::GeoId;
pub use layer::{GeographyLayer, GeographyPolygon};
pub(crate) use io::{GEOID_FIELD, REGION_FIELD};
pub(crate) use layer::union_bounds;
pub use region::{filter_geographies, RegionSet, NC_STUDY_COUNTIES};
