//! SVG writing operations.

use std::io::Write;

use anyhow::Result;

use super::{Projection, Rgb};

/// Thin SVG emitter over any byte sink (file, temp file, or in-memory buffer).
pub(crate) struct SvgWriter<W: Write> {
    inner: W,
}

/// Implement std::io::Write so `write!` / `writeln!` work.
impl<W: Write> Write for SvgWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> { self.inner.write(buf) }

    fn flush(&mut self) -> std::io::Result<()> { self.inner.flush() }

    fn write_all(&mut self, buf: &[u8]) -> std::io::Result<()> { self.inner.write_all(buf) }
}

impl<W: Write> SvgWriter<W> {
    pub(crate) fn new(inner: W) -> Self {
        Self { inner }
    }

    pub(crate) fn into_inner(self) -> W {
        self.inner
    }

    /// Write the XML declaration, the opening <svg> tag, and a white background.
    pub(crate) fn write_header(&mut self, width: f64, height: f64, projection: &Projection) -> Result<()> {
        let bounds = projection.bounds();
        writeln!(self, r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"##)?;
        writeln!(self, r##"<svg xmlns="http://www.w3.org/2000/svg"
        width="{width}" height="{height}"
        viewBox="0 0 {width} {height}"
        data-lon-min="{lon_min}" data-lon-max="{lon_max}"
        data-lat-min="{lat_min}" data-lat-max="{lat_max}"
        data-scale="{scale}">"##,
            lon_min = bounds.min().x,
            lon_max = bounds.max().x,
            lat_min = bounds.min().y,
            lat_max = bounds.max().y,
            scale = projection.scale(),
        )?;
        writeln!(self, r##"<rect width="100%" height="100%" fill="#ffffff"/>"##)?;
        Ok(())
    }

    /// Write styles plus a horizontal gradient definition for the legend.
    pub(crate) fn write_styles(&mut self, ramp: &[Rgb]) -> Result<()> {
        writeln!(self, r##"<defs>
<style>
    .geo {{ stroke: #808080; stroke-width: 0.2; vector-effect: non-scaling-stroke; }}
    .legend-label {{ font-family: sans-serif; font-size: 11px; fill: #111827; }}
</style>
<linearGradient id="ramp" x1="0" y1="0" x2="1" y2="0">"##)?;
        let last = ramp.len().saturating_sub(1).max(1) as f64;
        for (i, color) in ramp.iter().enumerate() {
            writeln!(self, r##"    <stop offset="{:.4}" stop-color="{color}"/>"##, i as f64 / last)?;
        }
        writeln!(self, "</linearGradient>\n</defs>")?;
        Ok(())
    }

    /// Write a single filled geography.
    pub(crate) fn write_path(&mut self, id: &str, fill: Rgb, path: &str) -> Result<()> {
        writeln!(self, r#"<path class="geo" data-geoid="{id}" fill-rule="evenodd" style="fill:{fill}" d="{path}"/>"#)?;
        Ok(())
    }

    /// Write a color-bar legend spanning `[vmin, vmax]` at vertical offset `y`.
    pub(crate) fn write_legend(&mut self, x: f64, y: f64, width: f64, vmin: f64, vmax: f64) -> Result<()> {
        writeln!(self, r##"<g class="legend">
<rect x="{x:.3}" y="{y:.3}" width="{width:.3}" height="12" fill="url(#ramp)" stroke="#808080" stroke-width="0.5"/>
<text class="legend-label" x="{x:.3}" y="{ty:.3}" text-anchor="start">{vmin:.2}</text>
<text class="legend-label" x="{xr:.3}" y="{ty:.3}" text-anchor="end">{vmax:.2}</text>
</g>"##,
            ty = y + 26.0,
            xr = x + width,
        )?;
        Ok(())
    }

    /// Write the closing </svg> tag.
    pub(crate) fn write_footer(&mut self) -> Result<()> {
        writeln!(self, "</svg>")?;
        Ok(())
    }
}
