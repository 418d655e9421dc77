use std::{fs::File, io::BufReader, path::Path};

use ahash::AHashSet;
use anyhow::{ensure, Context, Result};
use tracing::{info, warn};

use super::GeographyPolygon;

/// The 34 North Carolina counties that bound the rendered area.
pub const NC_STUDY_COUNTIES: [&str; 34] = [
    "Brunswick County",
    "Carteret County",
    "Chatham County",
    "Columbus County",
    "Craven County",
    "Duplin County",
    "Durham County",
    "Edgecombe County",
    "Franklin County",
    "Granville County",
    "Greene County",
    "Halifax County",
    "Harnett County",
    "Johnston County",
    "Jones County",
    "Lee County",
    "Lenoir County",
    "Moore County",
    "Nash County",
    "New Hanover County",
    "Onslow County",
    "Orange County",
    "Pamlico County",
    "Pender County",
    "Person County",
    "Pitt County",
    "Richmond County",
    "Sampson County",
    "Scotland County",
    "Vance County",
    "Wake County",
    "Warren County",
    "Wayne County",
    "Wilson County",
];

/// Static allow-list of region names. Matching is exact and case-sensitive.
#[derive(Debug, Clone)]
pub struct RegionSet {
    names: AHashSet<String>,
}

impl Default for RegionSet {
    fn default() -> Self {
        Self::from_names(NC_STUDY_COUNTIES)
    }
}

impl RegionSet {
    pub fn from_names<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        Self { names: names.into_iter().map(Into::into).collect() }
    }

    /// Load an alternative allow-list from a JSON array of region names.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("[geography::region] Failed to open region list: {}", path.display()))?;
        let names: Vec<String> = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("[geography::region] Expected a JSON array of names in {}", path.display()))?;
        ensure!(!names.is_empty(), "[geography::region] Region list {} is empty", path.display());

        Ok(Self::from_names(names))
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    #[inline] pub fn len(&self) -> usize { self.names.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.names.is_empty() }
}

/// Keep exactly the polygons whose region name is in `regions`.
pub fn filter_geographies(polygons: Vec<GeographyPolygon>, regions: &RegionSet) -> Vec<GeographyPolygon> {
    let total = polygons.len();
    let kept: Vec<GeographyPolygon> = polygons.into_iter()
        .filter(|polygon| regions.contains(&polygon.region_name))
        .collect();

    let mut seen = AHashSet::with_capacity(kept.len());
    let duplicates = kept.iter().filter(|p| !seen.insert(p.geo_id.clone())).count();
    if duplicates > 0 {
        warn!(duplicates, "filtered geographies contain repeated GEOIDs");
    }

    info!(kept = kept.len(), dropped = total - kept.len(), "filtered geographies to region set");
    kept
}
