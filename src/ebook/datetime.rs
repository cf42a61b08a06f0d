//! UTC date and time used to stamp generated publications.
//!
//! Formatting follows the `dcterms:modified` requirement of EPUB 3:
//! `CCYY-MM-DDThh:mm:ssZ`.

use std::fmt::Display;

/// The [date](Date) and [time](Time) components, always in UTC.
///
/// # Examples
/// - Converting from a UNIX timestamp:
/// ```
/// # use epubgen::ebook::datetime::DateTime;
/// let datetime = DateTime::from_unix(-58016463);
///
/// assert_eq!("1968-02-29T12:18:57Z", datetime.to_string());
/// assert_eq!(1968, datetime.date().year());
/// assert_eq!(18, datetime.time().minute());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime {
    date: Date,
    time: Time,
}

impl DateTime {
    /// Construct a datetime from the given [`Date`] and [`Time`].
    pub fn new(date: Date, time: Time) -> Self {
        Self { date, time }
    }

    /// Returns the current date and UTC time.
    ///
    /// # Panics
    /// Panics on targets where [`std::time::SystemTime`] is unsupported,
    /// such as `wasm32-unknown-unknown`.
    pub fn now() -> Self {
        Self::try_now().expect("epubgen: std::time::SystemTime is not supported on this platform")
    }

    /// Attempts to return the current date and UTC time.
    ///
    /// Returns `None` on targets where [`std::time::SystemTime`] is unsupported.
    pub fn try_now() -> Option<Self> {
        #[cfg(all(target_family = "wasm", target_os = "unknown"))]
        {
            None
        }
        #[cfg(not(all(target_family = "wasm", target_os = "unknown")))]
        {
            let epoch_time = match std::time::UNIX_EPOCH.elapsed() {
                Ok(after_epoch) => after_epoch.as_secs() as i64,
                // Clock set before 1970-01-01T00:00:00Z
                Err(before_epoch) => -(before_epoch.duration().as_secs() as i64),
            };

            Some(Self::from_unix(epoch_time))
        }
    }

    /// Returns the date and UTC time from the given UNIX Epoch timestamp.
    pub fn from_unix(secs: i64) -> Self {
        unix_timestamp_to_utc_calendar(secs)
    }

    pub fn date(&self) -> Date {
        self.date
    }

    pub fn time(&self) -> Time {
        self.time
    }
}

impl Display for DateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}T{}", self.date, self.time)
    }
}

/// A calendar date: [year](Self::year), [month](Self::month), and [day](Self::day).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: i16,
    month: u8,
    day: u8,
}

impl Date {
    /// Construct a date from the given parts.
    ///
    /// # Clamping
    /// - Year: `[-9999, 9999]`
    /// - Month: `[1, 12]`
    /// - Day: `[1, 31]`
    pub fn new(year: i16, month: u8, day: u8) -> Self {
        Self {
            year: year.clamp(-9999, 9999),
            month: month.clamp(1, 12),
            day: day.clamp(1, 31),
        }
    }

    /// Create a [`DateTime`] with the given [`Time`].
    pub fn at(self, time: Time) -> DateTime {
        DateTime::new(self, time)
    }

    pub fn year(&self) -> i16 {
        self.year
    }

    /// Month in `[1, 12]`.
    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }
}

impl Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:0>4}-{:0>2}-{:0>2}", self.year, self.month, self.day)
    }
}

/// A UTC time of day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time {
    hour: u8,
    minute: u8,
    second: u8,
}

impl Time {
    /// Construct a UTC time from the given parts.
    ///
    /// # Clamping
    /// - Hour: `[0, 23]`
    /// - Minute: `[0, 59]`
    /// - Second: `[0, 59]`
    pub fn utc(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour: hour.min(23),
            minute: minute.min(59),
            second: second.min(59),
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> u8 {
        self.second
    }
}

impl Display for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:0>2}:{:0>2}:{:0>2}Z",
            self.hour, self.minute, self.second,
        )
    }
}

/// UNIX timestamp to UTC Gregorian calendar.
///
/// Based on Howard Hinnant's date algorithms:
/// <https://howardhinnant.github.io/date_algorithms.html>
fn unix_timestamp_to_utc_calendar(secs: i64) -> DateTime {
    let days_since_epoch = secs.div_euclid(86400) as i32;
    let secs_of_day = secs.rem_euclid(86400) as u32;

    let second = (secs_of_day % 60) as u8;
    let minute = ((secs_of_day / 60) % 60) as u8;
    let hour = ((secs_of_day / 3600) % 24) as u8;

    let z = days_since_epoch + 719468; // Shift epoch from 1970-01-01 to 0000-03-01
    let era = (if z >= 0 { z } else { z - 146096 }) / 146097;
    let doe = (z - era * 146097) as u32;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe as i32 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };

    let year = y + (m <= 2) as i32;

    DateTime::new(
        Date::new(year as i16, m as u8, d as u8),
        Time::utc(hour, minute, second),
    )
}
