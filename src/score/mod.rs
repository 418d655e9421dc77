mod hour;
mod io;
mod record;

pub use hour::{extract_start_hour, WINDOW_SEPARATOR};
pub use record::{Scalar, ScoreRecord, ScoreTable};
pub(crate) use io::SCORE_COLUMN;
