use std::{borrow::Borrow, fmt, sync::Arc};

/// Stable string key joining score rows to polygons.
/// Keeps the original GEOID text (with leading zeros) without repeated owned Strings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GeoId(Arc<str>); // e.g., "37183052101" for a tract

impl GeoId {
    pub fn new(id: &str) -> Self {
        Self(Arc::from(id))
    }

    /// Coerce a numeric identifier to its string form, dropping an integral fractional part.
    /// Leading zeros lost by the numeric source cannot be recovered.
    pub fn from_numeric(value: f64) -> Self {
        if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e18 {
            Self::new(&format!("{}", value as i64))
        } else {
            Self::new(&value.to_string())
        }
    }

    #[inline]
    pub fn id(&self) -> &str { &self.0 }
}

impl fmt::Display for GeoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

impl Borrow<str> for GeoId {
    fn borrow(&self) -> &str { &self.0 }
}

impl From<&str> for GeoId {
    fn from(value: &str) -> Self { Self::new(value) }
}
