mod fs;
#[cfg(feature = "download")]
mod download;
mod polygon;
mod svg;

pub(crate) use fs::*;
#[cfg(feature = "download")]
pub use download::*;
pub(crate) use polygon::*;
pub(crate) use svg::*;
