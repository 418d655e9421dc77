mod cascade;
mod slice;
mod state;

pub use cascade::{days, hours, weeks, HourRange};
pub use slice::select_slice;
pub use state::{Resolved, SelectionState};
