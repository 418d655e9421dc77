use anyhow::{bail, Result};
use geo::{Coord, LineString, MultiPolygon, Polygon};
use shapefile::{PolygonRing, Shape};

/// Coerce a shapefile shape into a multipolygon, ignoring M/Z measures.
pub(crate) fn shape_to_multipolygon(shape: Shape) -> Result<MultiPolygon<f64>> {
    match shape {
        Shape::Polygon(p) => Ok(rings_to_multipolygon(p.rings(), |pt| Coord { x: pt.x, y: pt.y })),
        Shape::PolygonM(p) => Ok(rings_to_multipolygon(p.rings(), |pt| Coord { x: pt.x, y: pt.y })),
        Shape::PolygonZ(p) => Ok(rings_to_multipolygon(p.rings(), |pt| Coord { x: pt.x, y: pt.y })),
        other => bail!("[common::polygon] found non-polygon shape: {:?}", other.shapetype()),
    }
}

/// Group shapefile rings into polygons: each outer ring owns the inner rings that follow it.
fn rings_to_multipolygon<P>(rings: &[PolygonRing<P>], xy: impl Fn(&P) -> Coord<f64>) -> MultiPolygon<f64> {
    let mut polygons = Vec::new();
    let mut exterior: Option<LineString<f64>> = None;
    let mut holes = Vec::new();

    for ring in rings {
        let line = LineString::from(ring.points().iter().map(&xy).collect::<Vec<_>>());
        match ring {
            PolygonRing::Outer(_) => {
                if let Some(ext) = exterior.replace(line) {
                    polygons.push(Polygon::new(ext, std::mem::take(&mut holes)));
                }
            }
            // Orphan holes ahead of any outer ring are dropped.
            PolygonRing::Inner(_) => if exterior.is_some() { holes.push(line) },
        }
    }
    if let Some(ext) = exterior {
        polygons.push(Polygon::new(ext, holes));
    }

    MultiPolygon(polygons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapefile::Point;

    fn square(x0: f64, y0: f64, size: f64) -> Vec<Point> {
        // Shapefile outer rings are clockwise.
        vec![
            Point::new(x0, y0),
            Point::new(x0, y0 + size),
            Point::new(x0 + size, y0 + size),
            Point::new(x0 + size, y0),
            Point::new(x0, y0),
        ]
    }

    #[test]
    fn holes_attach_to_preceding_outer_ring() {
        let mut hole = square(1.0, 1.0, 1.0);
        hole.reverse();
        let polygon = shapefile::Polygon::with_rings(vec![
            PolygonRing::Outer(square(0.0, 0.0, 4.0)),
            PolygonRing::Inner(hole),
            PolygonRing::Outer(square(10.0, 10.0, 1.0)),
        ]);

        let mp = shape_to_multipolygon(Shape::Polygon(polygon)).unwrap();
        assert_eq!(mp.0.len(), 2);
        assert_eq!(mp.0[0].interiors().len(), 1);
        assert_eq!(mp.0[1].interiors().len(), 0);
    }

    #[test]
    fn non_polygon_shapes_are_rejected() {
        assert!(shape_to_multipolygon(Shape::Point(Point::new(0.0, 0.0))).is_err());
    }
}
