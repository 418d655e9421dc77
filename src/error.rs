use thiserror::Error;

use crate::{score::Scalar, selection::HourRange};

/// Problems with the shape of an input dataset, detected once at load time.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("{dataset} is missing required column {column:?}")]
    MissingColumn { dataset: &'static str, column: String },

    #[error("{dataset} column {column:?} is unusable: {reason}")]
    InvalidColumn { dataset: &'static str, column: String, reason: String },
}

/// A user selection that does not name a valid choice for the loaded table.
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("week {0:?} does not appear in the score table")]
    UnknownWeek(String),

    #[error("day {day:?} does not appear in week {week}")]
    UnknownDay { week: Scalar, day: String },

    #[error("hour {hour} is outside the selectable range {range}")]
    HourOutOfRange { hour: i64, range: HourRange },
}
