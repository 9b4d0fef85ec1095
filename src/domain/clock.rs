use chrono::{Local, NaiveDateTime};

pub const DATE_FORMAT: &str = "%m/%d/%Y";
pub const TIME_FORMAT: &str = "%H:%M:%S";

pub trait Clock: Send + Sync {
    /// Wall-clock instant in local time.
    fn now(&self) -> NaiveDateTime;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Formats an instant as the `(date, time)` pair written to the sheet.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use deploy_recorder::domain::clock::date_and_time;
/// let instant = NaiveDate::from_ymd_opt(2024, 3, 7)
///     .unwrap()
///     .and_hms_opt(9, 5, 1)
///     .unwrap();
/// assert_eq!(
///     date_and_time(instant),
///     ("03/07/2024".to_string(), "09:05:01".to_string())
/// );
/// ```
pub fn date_and_time(instant: NaiveDateTime) -> (String, String) {
    (
        instant.format(DATE_FORMAT).to_string(),
        instant.format(TIME_FORMAT).to_string(),
    )
}
