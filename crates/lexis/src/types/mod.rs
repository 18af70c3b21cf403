mod calendar;
mod value;

pub use calendar::CalendarBreakdown;
pub use value::{Map, Value};
