use std::fmt::Write as _;

use geo::{Coord, CoordsIter, LineString, MultiPolygon, Rect};

/// Equirectangular lon/lat -> SVG canvas transform (Y down).
#[derive(Clone, Copy, Debug)]
pub(crate) struct Projection {
    bounds: Rect<f64>,
    margin: f64,
    scale: f64,
}

impl Projection {
    /// Fit `bounds` into a canvas `width` wide, leaving `margin` on every side.
    pub(crate) fn fit(bounds: Rect<f64>, width: f64, margin: f64) -> Self {
        let scale = (width - 2.0 * margin) / bounds.width();
        Self { bounds, margin, scale }
    }

    pub(crate) fn scale(&self) -> f64 { self.scale }

    pub(crate) fn bounds(&self) -> &Rect<f64> { &self.bounds }

    /// Height of the drawn map area, margins included.
    pub(crate) fn map_height(&self) -> f64 {
        self.bounds.height() * self.scale + 2.0 * self.margin
    }

    #[inline]
    pub(crate) fn project(&self, coord: &Coord<f64>) -> (f64, f64) {
        let x = self.margin + (coord.x - self.bounds.min().x) * self.scale;
        let y = self.margin + (self.bounds.max().y - coord.y) * self.scale;
        (x, y)
    }

    /// Build a compact SVG path string for a MultiPolygon (exteriors + holes).
    pub(crate) fn multipolygon_to_path(&self, shape: &MultiPolygon<f64>) -> String {
        let mut out = String::new();
        for polygon in &shape.0 {
            self.ring_to_path(polygon.exterior(), &mut out);
            for interior in polygon.interiors() {
                self.ring_to_path(interior, &mut out);
            }
        }
        out
    }

    /// Append a ring as an SVG subpath: "M x,y L x,y ... Z"
    fn ring_to_path(&self, ring: &LineString<f64>, out: &mut String) {
        let mut coords = ring.coords_iter().map(|coord| self.project(&coord));
        if let Some((x, y)) = coords.next() {
            let _ = write!(out, " M{x:.3},{y:.3}");
            for (x, y) in coords {
                let _ = write!(out, " L{x:.3},{y:.3}");
            }
            out.push('Z');
        }
    }
}
