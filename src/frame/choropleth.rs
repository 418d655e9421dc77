use std::{io::Write, path::Path};

use anyhow::{anyhow, ensure, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    common::{self, PendingWrite, Projection, SvgWriter},
    geography::union_bounds,
    selection::SelectionState,
};

use super::{JoinedFrame, ScoreRange};

/// Vertical space reserved under the map for the color bar.
const LEGEND_HEIGHT: f64 = 48.0;

/// SVG canvas settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SvgOptions {
    pub width: f64,
    pub margin: f64,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self { width: 1200.0, margin: 10.0 }
    }
}

/// Everything a renderer needs for one time slice: the joined frame plus its color scale.
#[derive(Debug, Clone)]
pub struct Choropleth<'a> {
    pub selection: SelectionState,
    pub range: ScoreRange,
    pub frame: JoinedFrame<'a>,
}

impl Choropleth<'_> {
    /// Human-readable label for the time slice.
    pub fn title(&self) -> String {
        format!("Access Score: week {}, {}, hour {}", self.selection.week, self.selection.day, self.selection.hour)
    }

    /// Write the map as an SVG file, refusing to overwrite unless `force` is set.
    pub fn to_svg(&self, path: &Path, options: &SvgOptions, force: bool) -> Result<()> {
        let mut sink = PendingWrite::open(path, force)?;
        self.write_svg(&mut sink, options)
            .with_context(|| format!("[frame::svg] Failed to write {}", path.display()))?;
        sink.finalize()
    }

    /// Render the map to an in-memory SVG document.
    pub fn to_svg_string(&self, options: &SvgOptions) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_svg(&mut buffer, options)?;
        String::from_utf8(buffer).context("[frame::svg] SVG output is not valid UTF-8")
    }

    fn write_svg<W: Write>(&self, out: W, options: &SvgOptions) -> Result<()> {
        let bounds = union_bounds(self.frame.iter().map(|row| &row.polygon.geometry))
            .ok_or_else(|| anyhow!("[frame::svg] Could not determine bounds; nothing to draw."))?;
        ensure!(bounds.width() > 0.0 && bounds.height() > 0.0, "[frame::svg] Geometry bounds are degenerate");
        ensure!(options.width > 2.0 * options.margin, "[frame::svg] Width must exceed twice the margin");

        let projection = Projection::fit(bounds, options.width, options.margin);
        let map_height = projection.map_height();
        let height = map_height + LEGEND_HEIGHT;

        let mut writer = SvgWriter::new(out);
        writer.write_header(options.width, height, &projection)?;
        writeln!(writer, "<title>{}</title>", xml_escape(&self.title()))?;
        writer.write_styles(&common::OR_RD)?;

        for row in self.frame.iter() {
            let fill = common::sequential_color(self.range.position(row.access_score));
            let path = projection.multipolygon_to_path(&row.polygon.geometry);
            writer.write_path(&xml_escape(row.polygon.geo_id.id()), fill, &path)?;
        }

        let legend_width = (options.width - 2.0 * options.margin).min(240.0);
        writer.write_legend(options.margin, map_height + 4.0, legend_width, self.range.vmin, self.range.vmax)?;
        writer.write_footer()?;

        let mut out = writer.into_inner();
        out.flush()?;
        debug!(geographies = self.frame.len(), width = options.width, height, "rendered svg");
        Ok(())
    }
}

fn xml_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}
