//! SVG primitives for map export.

mod color;
mod proj;
mod writer;

pub(crate) use color::*;
pub(crate) use proj::*;
pub(crate) use writer::*;
