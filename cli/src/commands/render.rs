use std::path::Path;

use anyhow::{bail, Result};
use tracing::info;

use accessmap::{AccessMap, CycleOutcome, RegionSet, Resolved, SvgOptions};

use crate::cli::{Cli, OutputFormat, RenderArgs};

pub fn run(_cli: &Cli, args: &RenderArgs) -> Result<()> {
    if args.output == Path::new("-") {
        bail!("stdout is not supported; provide a real file path.");
    }

    let regions = match &args.regions {
        Some(path) => RegionSet::from_json_file(path)?,
        None => RegionSet::default(),
    };
    let map = AccessMap::load(&args.scores, &args.tracts, &regions)?;

    let selection = match map.resolve(&args.week, &args.day, args.hour)? {
        Resolved::Ready(selection) => selection,
        Resolved::NoHours { .. } => {
            eprintln!("warning: No data available for this day.");
            return Ok(());
        }
    };

    let choropleth = match map.render_cycle(&selection) {
        CycleOutcome::Rendered(choropleth) => choropleth,
        other => {
            if let Some(message) = other.advisory() { eprintln!("warning: {message}") }
            return Ok(());
        }
    };

    match args.format {
        OutputFormat::Svg => {
            let options = SvgOptions { width: args.width, margin: args.margin };
            choropleth.to_svg(&args.output, &options, args.force)?
        }
        OutputFormat::Geojson => choropleth.to_geojson(&args.output, args.force)?,
        OutputFormat::Csv => choropleth.to_csv(&args.output, args.force)?,
    }

    info!(output = %args.output.display(), title = %choropleth.title(), "wrote map");
    Ok(())
}
