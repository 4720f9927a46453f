//! Calendar and Julian date calculations.
//!
//! Converts proleptic Gregorian dates to Julian Day numbers and Julian centuries, the time
//! variable of every NOAA solar-position formula. Also carries the small calendar helpers
//! (leap years, day of year, day of week) that go with it.

#![allow(clippy::unreadable_literal)]

use crate::math::floor;
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::{DateTime, Datelike, TimeZone, Utc};

/// Julian Day Number for J2000.0 epoch (2000-01-01 12:00:00 UTC)
const J2000_JDN: f64 = 2_451_545.0;

/// Days per Julian century
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Julian Day of the Unix epoch (1970-01-01 00:00:00 UTC)
#[cfg(feature = "chrono")]
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Seconds per day
#[cfg(feature = "chrono")]
const SECONDS_PER_DAY: i64 = 86_400;

/// Weekday names indexed by `floor(jd + 1.5) mod 7`.
const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Julian Day at 0h UTC of a proleptic Gregorian calendar date.
///
/// January and February count as months 13 and 14 of the previous year. The Gregorian
/// correction `b = 2 − a + ⌊a/4⌋` with `a = ⌊year/100⌋` is always applied. Inputs are not
/// range-checked; use [`JulianDate::from_ymd`] for a validated conversion.
///
/// # Example
/// ```
/// # use noaa_sunrise::time::julian_day;
/// assert_eq!(julian_day(2000, 1, 1), 2_451_544.5);
/// assert_eq!(julian_day(2000, 3, 1) - julian_day(2000, 2, 29), 1.0);
/// ```
#[must_use]
pub fn julian_day(year: i32, month: u32, day: u32) -> f64 {
    // inputs are unchecked, so no integer arithmetic
    let (y, m) = if month <= 2 {
        (f64::from(year) - 1.0, f64::from(month) + 12.0)
    } else {
        (f64::from(year), f64::from(month))
    };

    let a = floor(y / 100.0);
    let b = 2.0 - a + floor(a / 4.0);

    floor(365.25 * (y + 4716.0)) + floor(30.6001 * (m + 1.0)) + f64::from(day) + b - 1524.5
}

/// Julian centuries elapsed since J2000.0.
///
/// JC = (JD - 2451545.0) / 36525
#[must_use]
pub fn julian_century(jd: f64) -> f64 {
    (jd - J2000_JDN) / DAYS_PER_CENTURY
}

/// Julian Day from Julian centuries since J2000.0 (inverse of [`julian_century`]).
#[must_use]
pub fn julian_day_from_century(t: f64) -> f64 {
    t * DAYS_PER_CENTURY + J2000_JDN
}

/// Julian Day at 0h UTC of the UTC calendar date of `datetime`.
///
/// The time of day is dropped: any instant on 2000-01-01 UTC maps to 2451544.5.
#[cfg(feature = "chrono")]
#[must_use]
pub fn julian_day_of<Tz: TimeZone>(datetime: &DateTime<Tz>) -> f64 {
    JulianDate::from_datetime(datetime).julian_date()
}

/// Julian date representation for the NOAA calculations.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct JulianDate {
    /// Julian Date (JD)
    jd: f64,
}

impl JulianDate {
    /// Wraps a raw Julian Day value.
    #[must_use]
    pub const fn from_julian_day(jd: f64) -> Self {
        Self { jd }
    }

    /// Creates a Julian date from Julian centuries since J2000.0.
    #[must_use]
    pub fn from_julian_century(t: f64) -> Self {
        Self::from_julian_day(julian_day_from_century(t))
    }

    /// Creates the Julian date at 0h UTC of a calendar date.
    ///
    /// # Errors
    /// Returns error if month is outside 1-12 or day is outside the month.
    ///
    /// # Example
    /// ```
    /// # use noaa_sunrise::time::JulianDate;
    /// let jd = JulianDate::from_ymd(1970, 1, 1).unwrap();
    /// assert_eq!(jd.julian_date(), 2_440_587.5);
    /// assert!(JulianDate::from_ymd(1900, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_datetime("month must be between 1 and 12"));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(Error::invalid_datetime("day is out of range for month"));
        }
        Ok(Self::from_julian_day(julian_day(year, month, day)))
    }

    /// Creates the Julian date at 0h UTC of the UTC calendar date of `datetime`.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        let utc = datetime.with_timezone(&Utc);
        Self::from_julian_day(julian_day(utc.year(), utc.month(), utc.day()))
    }

    /// Gets the Julian Date (JD) value.
    #[must_use]
    pub const fn julian_date(&self) -> f64 {
        self.jd
    }

    /// Calculates the Julian Century (JC) from J2000.0.
    #[must_use]
    pub fn julian_century(&self) -> f64 {
        julian_century(self.jd)
    }

    /// Returns this date shifted by a (possibly fractional) number of days.
    #[must_use]
    pub fn add_days(self, days: f64) -> Self {
        Self { jd: self.jd + days }
    }

    /// Gets the English weekday name, or `None` if the Julian date is not finite.
    ///
    /// # Example
    /// ```
    /// # use noaa_sunrise::time::JulianDate;
    /// let jd = JulianDate::from_ymd(2000, 1, 1).unwrap();
    /// assert_eq!(jd.day_of_week_name(), Some("Saturday"));
    /// ```
    #[must_use]
    pub fn day_of_week_name(&self) -> Option<&'static str> {
        day_of_week_name(self.jd)
    }

    /// UTC midnight that starts the calendar day containing this Julian date.
    ///
    /// Returns `None` for non-finite values or dates chrono cannot represent.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn utc_midnight(&self) -> Option<DateTime<Utc>> {
        if !self.jd.is_finite() {
            return None;
        }
        let days = floor(self.jd - 0.5) + 0.5 - UNIX_EPOCH_JD;
        if days.abs() > f64::from(i32::MAX) {
            return None;
        }
        DateTime::from_timestamp((days as i64) * SECONDS_PER_DAY, 0)
    }
}

/// Day of week for a Julian date, 0 = Sunday through 6 = Saturday.
///
/// Returns `None` if `jd` is not finite.
#[must_use]
pub fn day_of_week(jd: f64) -> Option<usize> {
    if !jd.is_finite() {
        return None;
    }
    let index = (floor(jd + 1.5) as i64).rem_euclid(7);
    Some(index as usize)
}

/// English name of the day of week for a Julian date.
///
/// Returns `None` if `jd` is not finite.
#[must_use]
pub fn day_of_week_name(jd: f64) -> Option<&'static str> {
    day_of_week(jd).map(|index| WEEKDAY_NAMES[index])
}

/// Gregorian leap year rule.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Ordinal day of the year (1-366).
///
/// # Errors
/// Returns error if month is outside 1-12 or day is outside the month.
///
/// # Example
/// ```
/// # use noaa_sunrise::time::day_of_year;
/// assert_eq!(day_of_year(2024, 3, 1).unwrap(), 61);
/// assert_eq!(day_of_year(2023, 12, 31).unwrap(), 365);
/// ```
pub fn day_of_year(year: i32, month: u32, day: u32) -> Result<u32> {
    if !(1..=12).contains(&month) {
        return Err(Error::invalid_datetime("month must be between 1 and 12"));
    }
    if day == 0 || day > days_in_month(year, month) {
        return Err(Error::invalid_datetime("day is out of range for month"));
    }

    let k = if is_leap_year(year) { 1 } else { 2 };
    Ok(275 * month / 9 - k * ((month + 9) / 12) + day - 30)
}

const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_julian_day_reference_values() {
        assert_eq!(julian_day(2000, 1, 1), 2_451_544.5);
        assert_eq!(julian_day(1970, 1, 1), 2_440_587.5);
        assert_eq!(julian_day(2024, 6, 20), 2_460_481.5);
        // Meeus, Astronomical Algorithms, example 7.a (1957 October 4.81)
        assert_eq!(julian_day(1957, 10, 4), 2_436_115.5);
    }

    #[test]
    fn test_julian_day_extreme_inputs() {
        assert!(julian_day(i32::MAX, 1, 1).is_finite());
        assert!(julian_day(i32::MIN, 1, 1).is_finite());
        assert!(julian_day(i32::MIN, 12, u32::MAX).is_finite());
        assert!(julian_day(2024, u32::MAX, 1).is_finite());
        assert!(julian_day(2024, 0, 0).is_finite());
    }

    #[test]
    fn test_month_boundaries() {
        assert_eq!(julian_day(2000, 3, 1) - julian_day(2000, 2, 29), 1.0);
        assert_eq!(julian_day(1900, 3, 1) - julian_day(1900, 2, 28), 1.0);
        assert_eq!(julian_day(2001, 1, 1) - julian_day(2000, 12, 31), 1.0);
        assert_eq!(julian_day(2001, 1, 1) - julian_day(2000, 1, 1), 366.0);
        assert_eq!(julian_day(1901, 1, 1) - julian_day(1900, 1, 1), 365.0);
    }

    #[test]
    fn test_from_ymd_validation() {
        assert!(JulianDate::from_ymd(2024, 2, 29).is_ok());
        assert!(JulianDate::from_ymd(2023, 2, 29).is_err());
        assert!(JulianDate::from_ymd(1900, 2, 29).is_err());
        assert!(JulianDate::from_ymd(2000, 2, 29).is_ok());
        assert!(JulianDate::from_ymd(2024, 13, 1).is_err());
        assert!(JulianDate::from_ymd(2024, 0, 1).is_err());
        assert!(JulianDate::from_ymd(2024, 4, 31).is_err());
        assert!(JulianDate::from_ymd(2024, 1, 0).is_err());
    }

    #[test]
    fn test_julian_centuries() {
        assert!(julian_century(J2000_JDN).abs() < EPSILON);
        assert!((julian_century(J2000_JDN + 36_525.0) - 1.0).abs() < EPSILON);
        assert_eq!(julian_day_from_century(0.0), J2000_JDN);

        let jd = 2_460_481.5;
        assert!((julian_day_from_century(julian_century(jd)) - jd).abs() < 1e-8);

        let date = JulianDate::from_julian_century(0.25);
        assert!((date.julian_century() - 0.25).abs() < EPSILON);
    }

    #[test]
    fn test_weekdays() {
        // 2000-01-01 was a Saturday, 1970-01-01 a Thursday
        assert_eq!(day_of_week_name(julian_day(2000, 1, 1)), Some("Saturday"));
        assert_eq!(day_of_week_name(julian_day(1970, 1, 1)), Some("Thursday"));
        assert_eq!(day_of_week(julian_day(2024, 6, 16)), Some(0));
        // far before the epoch the index must stay in range
        assert_eq!(day_of_week_name(-10.0), Some("Friday"));
        assert_eq!(day_of_week(f64::NAN), None);
    }

    #[test]
    fn test_leap_years_and_day_of_year() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));

        assert_eq!(day_of_year(2024, 1, 1).unwrap(), 1);
        assert_eq!(day_of_year(2024, 12, 31).unwrap(), 366);
        assert_eq!(day_of_year(2023, 3, 1).unwrap(), 60);
        assert!(day_of_year(2023, 2, 29).is_err());
    }

    #[test]
    fn test_add_days() {
        let jd = JulianDate::from_ymd(2000, 1, 1).unwrap().add_days(-1.0);
        assert_eq!(jd.julian_date(), julian_day(1999, 12, 31));
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_from_datetime_uses_utc_date() {
        use chrono::{DateTime, FixedOffset};

        // 23:30 on Dec 31 in UTC-5 is already Jan 1 in UTC
        let datetime = "1999-12-31T23:30:00-05:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        assert_eq!(julian_day_of(&datetime), 2_451_544.5);
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_utc_midnight() {
        use chrono::{TimeZone, Utc};

        let jd = JulianDate::from_ymd(2024, 6, 20).unwrap();
        assert_eq!(
            jd.utc_midnight(),
            Some(Utc.with_ymd_and_hms(2024, 6, 20, 0, 0, 0).unwrap())
        );
        // fractional day still maps to the start of that day
        assert_eq!(
            jd.add_days(0.75).utc_midnight(),
            Some(Utc.with_ymd_and_hms(2024, 6, 20, 0, 0, 0).unwrap())
        );
        assert_eq!(JulianDate::from_julian_day(f64::NAN).utc_midnight(), None);
    }
}
