//! Color mapping utilities for SVG visualization.

use std::fmt;

/// Simple RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Rgb {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
}

impl fmt::Display for Rgb {
    /// Format as CSS: rgb(r,g,b)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Nine-class sequential orange-red ramp, light to dark.
pub(crate) const OR_RD: [Rgb; 9] = [
    Rgb { r: 255, g: 247, b: 236 },
    Rgb { r: 254, g: 232, b: 200 },
    Rgb { r: 253, g: 212, b: 158 },
    Rgb { r: 253, g: 187, b: 132 },
    Rgb { r: 252, g: 141, b:  89 },
    Rgb { r: 239, g: 101, b:  72 },
    Rgb { r: 215, g:  48, b:  31 },
    Rgb { r: 179, g:   0, b:   0 },
    Rgb { r: 127, g:   0, b:   0 },
];

/// Linearly interpolate the orange-red ramp at `t` in [0.0, 1.0].
pub(crate) fn sequential_color(t: f64) -> Rgb {
    // Handle NaN / infinities: fall back to neutral gray.
    if !t.is_finite() { return Rgb { r: 150, g: 150, b: 150 } }

    let pos = t.clamp(0.0, 1.0) * (OR_RD.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = (lo + 1).min(OR_RD.len() - 1);
    let frac = pos - lo as f64;

    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;
    let (a, b) = (OR_RD[lo], OR_RD[hi]);
    Rgb { r: lerp(a.r, b.r), g: lerp(a.g, b.g), b: lerp(a.b, b.b) }
}
