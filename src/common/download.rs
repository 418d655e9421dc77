use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use tracing::info;

use super::{ensure_dir_exists, PendingWrite};

/// Census cartographic-boundary (1:500k) tract file URL for a state FIPS code and vintage.
fn tract_boundary_url(state_fips: &str, year: u16) -> String {
    format!("https://www2.census.gov/geo/tiger/GENZ{year}/shp/cb_{year}_{state_fips}_tract_500k.zip")
}

/// Download a large file from `file_url` to `out_path`.
fn download_big_file(file_url: &str, out_path: &Path, force: bool) -> Result<()> {
    // Safe big-file write (tempfile -> atomic rename), no accidental overwrite unless --force
    let mut sink = PendingWrite::open(out_path, force)?;

    let mut resp = reqwest::blocking::get(file_url)
        .with_context(|| format!("[common::download] GET {file_url}"))?
        .error_for_status()
        .with_context(|| format!("[common::download] GET {file_url} returned error status"))?;

    std::io::copy(&mut resp, &mut sink)
        .with_context(|| format!("[common::download] write {}", out_path.display()))?;

    sink.finalize()
}

/// Download the zipped tract boundaries for `state_fips` into `out_dir`, returning the archive path.
pub fn download_tract_boundaries(state_fips: &str, year: u16, out_dir: &Path, force: bool) -> Result<PathBuf> {
    ensure!(
        state_fips.len() == 2 && state_fips.chars().all(|c| c.is_ascii_digit()),
        "[common::download] state FIPS code must be two digits, got {state_fips:?}"
    );
    ensure_dir_exists(out_dir)?;

    let url = tract_boundary_url(state_fips, year);
    let out_path = out_dir.join(format!("cb_{year}_{state_fips}_tract_500k.zip"));

    info!(%url, out = %out_path.display(), "downloading tract boundaries");
    download_big_file(&url, &out_path, force)?;

    Ok(out_path)
}
