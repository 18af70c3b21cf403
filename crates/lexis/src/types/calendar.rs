use bon::Builder;
use time::{OffsetDateTime, PrimitiveDateTime};

/// A pre-resolved calendar breakdown used for date rendering.
///
/// No timezone conversion happens anywhere in the formatter; callers resolve
/// local time before building one of these. Month and weekday are indices
/// into the configured name lists, so out-of-range values are allowed and
/// simply render no name.
///
/// # Example
///
/// ```
/// use lexis::CalendarBreakdown;
///
/// let date = CalendarBreakdown::builder()
///     .year(2024)
///     .month(2)
///     .day(5)
///     .weekday(2)
///     .build();
/// assert_eq!(date.hour, 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Builder)]
pub struct CalendarBreakdown {
    /// Full year, e.g. `2024`.
    #[builder(default)]
    pub year: i32,
    /// Month index, `0` = January.
    #[builder(default)]
    pub month: u32,
    /// Day of the month, starting at `1`.
    #[builder(default = 1)]
    pub day: u32,
    #[builder(default)]
    pub hour: u32,
    #[builder(default)]
    pub minute: u32,
    #[builder(default)]
    pub second: u32,
    /// Weekday index, `0` = Sunday.
    #[builder(default)]
    pub weekday: u32,
}

impl CalendarBreakdown {
    /// The current instant as a UTC breakdown.
    pub fn now_utc() -> Self {
        OffsetDateTime::now_utc().into()
    }
}

impl From<OffsetDateTime> for CalendarBreakdown {
    fn from(value: OffsetDateTime) -> Self {
        Self {
            year: value.year(),
            month: u32::from(u8::from(value.month())) - 1,
            day: u32::from(value.day()),
            hour: u32::from(value.hour()),
            minute: u32::from(value.minute()),
            second: u32::from(value.second()),
            weekday: u32::from(value.weekday().number_days_from_sunday()),
        }
    }
}

impl From<PrimitiveDateTime> for CalendarBreakdown {
    fn from(value: PrimitiveDateTime) -> Self {
        value.assume_utc().into()
    }
}
