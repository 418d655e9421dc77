mod choropleth;
mod io;
mod join;
mod normalize;

pub use choropleth::{Choropleth, SvgOptions};
pub use join::{join, JoinedFrame, JoinedRow};
pub use normalize::{normalize_range, ScoreRange};
