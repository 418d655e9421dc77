use std::sync::Arc;

use geo::{BoundingRect, MultiPolygon, Rect, coord};

use super::GeoId;

/// A single geography boundary with its join key and the region (county) it belongs to.
#[derive(Debug, Clone)]
pub struct GeographyPolygon {
    pub geo_id: GeoId,
    pub region_name: Arc<str>, // e.g., "Wake County"
    pub geometry: MultiPolygon<f64>,
}

impl GeographyPolygon {
    pub fn new(geo_id: GeoId, region_name: &str, geometry: MultiPolygon<f64>) -> Self {
        Self { geo_id, region_name: Arc::from(region_name), geometry }
    }
}

/// The loaded polygon dataset. Read-only once constructed.
#[derive(Debug, Clone, Default)]
pub struct GeographyLayer {
    polygons: Vec<GeographyPolygon>,
}

impl GeographyLayer {
    pub fn new(polygons: Vec<GeographyPolygon>) -> Self {
        Self { polygons }
    }

    #[inline] pub fn polygons(&self) -> &[GeographyPolygon] { &self.polygons }
    #[inline] pub fn len(&self) -> usize { self.polygons.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.polygons.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &GeographyPolygon> + '_ {
        self.polygons.iter()
    }

    pub fn into_polygons(self) -> Vec<GeographyPolygon> {
        self.polygons
    }

    /// Bounding box of every geometry in the layer, if any are non-empty.
    pub fn bounds(&self) -> Option<Rect<f64>> {
        union_bounds(self.polygons.iter().map(|p| &p.geometry))
    }
}

/// Smallest rectangle covering every geometry yielded by `shapes`.
pub(crate) fn union_bounds<'a>(shapes: impl IntoIterator<Item = &'a MultiPolygon<f64>>) -> Option<Rect<f64>> {
    shapes.into_iter()
        .filter_map(|shape| shape.bounding_rect())
        .reduce(|a, b| Rect::new(
            coord! { x: a.min().x.min(b.min().x), y: a.min().y.min(b.min().y) },
            coord! { x: a.max().x.max(b.max().x), y: a.max().y.max(b.max().y) },
        ))
}
