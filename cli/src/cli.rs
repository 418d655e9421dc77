use clap::{Args, Parser, Subcommand, ValueEnum, ValueHint};
use std::path::PathBuf;

/// Access score choropleth explorer
#[derive(Parser, Debug)]
#[command(name = "accessmap", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the valid weeks, days for a week, or hours for a week and day
    Options(OptionsArgs),

    /// Render one time slice as a map (forbids stdout)
    Render(RenderArgs),

    /// Download Census tract boundaries for a state
    #[cfg(feature = "download")]
    Download(DownloadArgs),
}

#[derive(Args, Debug)]
pub struct OptionsArgs {
    /// Score table (CSV with GEOID, week, day, hour, Access_Score)
    #[arg(value_hint = ValueHint::FilePath)]
    pub scores: PathBuf,

    /// Week to list days for
    #[arg(long)]
    pub week: Option<String>,

    /// Day to list hours for (requires --week)
    #[arg(long, requires = "week")]
    pub day: Option<String>,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
pub enum OutputFormat { Svg, Geojson, Csv }

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Score table (CSV with GEOID, week, day, hour, Access_Score)
    #[arg(value_hint = ValueHint::FilePath)]
    pub scores: PathBuf,

    /// Tract polygons (.shp, zipped shapefile, or GeoJSON)
    #[arg(value_hint = ValueHint::FilePath)]
    pub tracts: PathBuf,

    #[arg(long)]
    pub week: String,

    #[arg(long)]
    pub day: String,

    /// Start hour; defaults to the first available hour of the day
    #[arg(long)]
    pub hour: Option<i64>,

    /// Output file (must be a file path; "-" is rejected)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Svg)]
    pub format: OutputFormat,

    /// JSON array of region names replacing the built-in county list
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub regions: Option<PathBuf>,

    /// SVG canvas width in pixels
    #[arg(long, default_value_t = 1200.0)]
    pub width: f64,

    /// SVG margin in pixels
    #[arg(long, default_value_t = 10.0)]
    pub margin: f64,

    /// Overwrite if the file exists
    #[arg(long)]
    pub force: bool,
}

#[cfg(feature = "download")]
#[derive(Args, Debug)]
pub struct DownloadArgs {
    /// Output location (directory)
    #[arg(value_hint = ValueHint::DirPath)]
    pub out: PathBuf,

    /// Two-digit state FIPS code
    #[arg(long, default_value = "37")]
    pub state: String,

    /// Boundary vintage
    #[arg(long, default_value_t = 2023)]
    pub year: u16,

    /// Overwrite if the archive already exists
    #[arg(long)]
    pub force: bool,
}
