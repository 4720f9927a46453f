//! Core data types for sunrise calculations.

use crate::math::floor;

/// Nanoseconds per second.
const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// Nanoseconds per day.
const NANOS_PER_DAY: i64 = 86_400 * NANOS_PER_SECOND;

/// Largest magnitude accepted by [`MinutesUtc::to_nanoseconds`] (about 190 years).
const MAX_MINUTES: f64 = 1.0e8;

/// Minutes since midnight UTC that can extend beyond a single day.
///
/// This is the native output of the NOAA event solver. Values represent minutes since
/// midnight UTC (0 UT) of the calculation date:
/// - Negative values indicate the previous day
/// - 0.0 to < 1440.0 indicates the current day
/// - ≥ 1440.0 indicates the next day
///
/// # Example
/// ```
/// # use noaa_sunrise::MinutesUtc;
/// let morning = MinutesUtc::from_minutes(390.0); // 06:30 current day
/// let after_midnight = MinutesUtc::from_minutes(1470.0); // 00:30 next day
/// let before_midnight_prev = MinutesUtc::from_minutes(-30.0); // 23:30 previous day
/// assert_eq!(after_midnight.time_of_day().unwrap().day_offset, 1);
/// assert_eq!(before_midnight_prev.time_of_day().unwrap().hour, 23);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct MinutesUtc(f64);

impl MinutesUtc {
    /// Creates a new `MinutesUtc` from minutes since midnight UTC.
    #[must_use]
    pub const fn from_minutes(minutes: f64) -> Self {
        Self(minutes)
    }

    /// Gets the raw minutes value.
    ///
    /// Can be negative (previous day) or ≥ 1440.0 (next day).
    #[must_use]
    pub const fn minutes(&self) -> f64 {
        self.0
    }

    /// Gets the value as fractional hours since midnight UTC.
    #[must_use]
    pub fn hours(&self) -> f64 {
        self.0 / 60.0
    }

    /// Converts to whole nanoseconds since midnight UTC.
    ///
    /// The value is split by successive `floor` into hours, minutes, seconds and a
    /// sub-second remainder; the remainder is truncated to whole nanoseconds.
    /// Returns `None` for non-finite values or values too large to represent.
    #[must_use]
    pub fn to_nanoseconds(&self) -> Option<i64> {
        if !self.0.is_finite() || self.0.abs() > MAX_MINUTES {
            return None;
        }

        let mut minutes = self.0;
        let hours = floor(minutes / 60.0);
        minutes -= hours * 60.0;
        let whole_minutes = floor(minutes);
        let seconds = (minutes - whole_minutes) * 60.0;
        let whole_seconds = floor(seconds);
        let nanos = (seconds - whole_seconds) * 1e9;

        let total_seconds =
            (hours as i64) * 3600 + (whole_minutes as i64) * 60 + whole_seconds as i64;
        total_seconds
            .checked_mul(NANOS_PER_SECOND)?
            .checked_add(nanos as i64)
    }

    /// Splits into a day offset and a normalized UTC time of day.
    ///
    /// Returns `None` for non-finite values or values too large to represent.
    ///
    /// # Example
    /// ```
    /// # use noaa_sunrise::MinutesUtc;
    /// let time = MinutesUtc::from_minutes(1530.5).time_of_day().unwrap();
    /// assert_eq!(time.day_offset, 1);
    /// assert_eq!((time.hour, time.minute, time.second), (1, 30, 30));
    /// ```
    #[must_use]
    pub fn time_of_day(&self) -> Option<TimeOfDay> {
        let total = self.to_nanoseconds()?;
        let day_offset = i32::try_from(total.div_euclid(NANOS_PER_DAY)).ok()?;
        let in_day = total.rem_euclid(NANOS_PER_DAY);

        let nanosecond = in_day % NANOS_PER_SECOND;
        let seconds = in_day / NANOS_PER_SECOND;

        Some(TimeOfDay {
            day_offset,
            hour: (seconds / 3600) as u32,
            minute: ((seconds / 60) % 60) as u32,
            second: (seconds % 60) as u32,
            nanosecond: nanosecond as u32,
        })
    }
}

/// A UTC time of day together with its offset in whole days from the calculation date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeOfDay {
    /// Whole days from the calculation date (negative = previous days).
    pub day_offset: i32,
    /// Hour (0-23)
    pub hour: u32,
    /// Minute (0-59)
    pub minute: u32,
    /// Second (0-59)
    pub second: u32,
    /// Nanosecond (0-999,999,999)
    pub nanosecond: u32,
}

/// Result of sunrise/sunset calculations for a given day.
///
/// At high latitudes around the solstices the sun may not cross the horizon at all;
/// the transit (solar noon) is still reported in that case.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "std",
    doc = "Default generic parameter is `()`; chrono helpers return `SunriseResult<chrono::DateTime<Tz>>`."
)]
pub enum SunriseResult<T = ()> {
    /// Regular day with distinct sunrise, transit (noon), and sunset times
    RegularDay {
        /// Time of sunrise
        sunrise: T,
        /// Time of solar transit (solar noon)
        transit: T,
        /// Time of sunset
        sunset: T,
    },
    /// Polar day - sun remains above the horizon all day
    AllDay {
        /// Time of solar transit (closest approach to zenith)
        transit: T,
    },
    /// Polar night - sun remains below the horizon all day
    AllNight {
        /// Time of solar transit (when sun is highest, though still below horizon)
        transit: T,
    },
}

impl<T> SunriseResult<T> {
    /// Gets the transit time (solar noon) for any sunrise result.
    pub const fn transit(&self) -> &T {
        match self {
            Self::RegularDay { transit, .. }
            | Self::AllDay { transit }
            | Self::AllNight { transit } => transit,
        }
    }

    /// Checks if this represents a regular day with sunrise and sunset.
    pub const fn is_regular_day(&self) -> bool {
        matches!(self, Self::RegularDay { .. })
    }

    /// Checks if this represents a polar day (sun never sets).
    pub const fn is_polar_day(&self) -> bool {
        matches!(self, Self::AllDay { .. })
    }

    /// Checks if this represents a polar night (sun never rises).
    pub const fn is_polar_night(&self) -> bool {
        matches!(self, Self::AllNight { .. })
    }

    /// Gets sunrise time if this is a regular day.
    pub const fn sunrise(&self) -> Option<&T> {
        if let Self::RegularDay { sunrise, .. } = self {
            Some(sunrise)
        } else {
            None
        }
    }

    /// Gets sunset time if this is a regular day.
    pub const fn sunset(&self) -> Option<&T> {
        if let Self::RegularDay { sunset, .. } = self {
            Some(sunset)
        } else {
            None
        }
    }

    /// Maps every contained time with `f`, keeping the variant.
    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> SunriseResult<U> {
        match self {
            Self::RegularDay {
                sunrise,
                transit,
                sunset,
            } => SunriseResult::RegularDay {
                sunrise: f(sunrise),
                transit: f(transit),
                sunset: f(sunset),
            },
            Self::AllDay { transit } => SunriseResult::AllDay {
                transit: f(transit),
            },
            Self::AllNight { transit } => SunriseResult::AllNight {
                transit: f(transit),
            },
        }
    }
}
