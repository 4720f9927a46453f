//! NOAA sunrise, solar noon and sunset algorithm.
//!
//! Times are found from the solar declination and equation of time of the
//! [`position`] model. Each event takes two passes. The first pass evaluates the sun at
//! solar noon. The second pass re-evaluates it at the first estimate, because the sun
//! moves during the fraction of the day between noon and the event.
//!
//! Solar noon itself is searched over the previous, same and next UTC day of the input
//! instant, and the candidate closest to the instant wins. Without this search, locations
//! near ±180° longitude would get a noon on the wrong side of the UTC day boundary.
//!
//! Reference: NOAA Global Monitoring Division solar calculator, after Meeus (1998).
//! Astronomical Algorithms, 2nd edition. Willmann-Bell.

#![allow(clippy::similar_names)]

pub mod position;

use crate::error::check_finite;
use crate::math::{acos, cos, degrees_to_radians, radians_to_degrees, tan};
use crate::time::{JulianDate, julian_century, julian_day_from_century};
use crate::{Error, MinutesUtc, Result, SunriseResult};
use position::{declination, equation_of_time};

#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeDelta, TimeZone, Utc};

/// Zenith angle of the sun's centre at apparent sunrise/sunset (90° + 0.833° for refraction
/// and solar radius).
const SUNRISE_SUNSET_ZENITH: f64 = 90.833;

/// Minutes per day conversion factor.
const MINUTES_PER_DAY: f64 = 1440.0;

/// Minutes since midnight of an event at the Greenwich meridian with zero equation of time.
const GREENWICH_NOON_MINUTES: f64 = 720.0;

/// Minutes of clock time per degree of Earth rotation.
const MINUTES_PER_DEGREE: f64 = 4.0;

/// Calculate the solar noon nearest to `when`.
///
/// # Arguments
/// * `when` - Instant with timezone; the result is expressed in the same timezone
/// * `longitude` - Observer longitude in degrees East
///
/// # Errors
/// Returns `ComputationError` for a non-finite longitude or a result outside chrono's range.
///
/// # Example
/// ```rust
/// use noaa_sunrise::noaa;
/// use chrono::{DateTime, FixedOffset, Timelike};
///
/// let when = "2024-06-20T09:00:00-04:00".parse::<DateTime<FixedOffset>>().unwrap();
/// let noon = noaa::solar_noon(when, -71.1).unwrap(); // Boston
///
/// assert_eq!((noon.hour(), noon.minute()), (12, 46));
/// assert_eq!(noon.offset(), when.offset());
/// ```
#[cfg(feature = "chrono")]
#[allow(clippy::needless_pass_by_value)]
pub fn solar_noon<Tz: TimeZone>(when: DateTime<Tz>, longitude: f64) -> Result<DateTime<Tz>> {
    check_finite(longitude, "longitude is not finite")?;
    let longitude_west = -longitude;

    let search = nearest_solar_noon(&when.with_timezone(&Utc), longitude_west)?;
    Ok(search.utc.with_timezone(&when.timezone()))
}

/// Calculate the sunrise before the solar noon nearest to `when`.
///
/// # Arguments
/// * `when` - Instant with timezone; the result is expressed in the same timezone
/// * `latitude` - Observer latitude in degrees North
/// * `longitude` - Observer longitude in degrees East
///
/// # Errors
/// Returns `PolarDay`/`PolarNight` if the sun does not cross the horizon that day (either
/// sunrise or sunset missing, matching [`sun_events_for_day`]), and
/// `ComputationError` for non-finite coordinates.
///
/// # Example
/// ```rust
/// use noaa_sunrise::noaa;
/// use chrono::{DateTime, FixedOffset, Timelike};
///
/// let when = "2024-06-20T12:00:00-04:00".parse::<DateTime<FixedOffset>>().unwrap();
/// let sunrise = noaa::sunrise(when, 42.4, -71.1).unwrap();
/// assert_eq!((sunrise.hour(), sunrise.minute()), (5, 7));
/// ```
#[cfg(feature = "chrono")]
#[allow(clippy::needless_pass_by_value)]
pub fn sunrise<Tz: TimeZone>(when: DateTime<Tz>, latitude: f64, longitude: f64) -> Result<DateTime<Tz>> {
    single_event(&when, latitude, longitude, SunEvent::Sunrise)
}

/// Calculate the sunset after the solar noon nearest to `when`.
///
/// # Arguments
/// * `when` - Instant with timezone; the result is expressed in the same timezone
/// * `latitude` - Observer latitude in degrees North
/// * `longitude` - Observer longitude in degrees East
///
/// # Errors
/// Returns `PolarDay`/`PolarNight` if the sun does not cross the horizon that day (either
/// sunrise or sunset missing, matching [`sun_events_for_day`]), and
/// `ComputationError` for non-finite coordinates.
///
/// # Example
/// ```rust
/// use noaa_sunrise::noaa;
/// use chrono::{DateTime, FixedOffset, Timelike};
///
/// let when = "2024-06-20T12:00:00-04:00".parse::<DateTime<FixedOffset>>().unwrap();
/// let sunset = noaa::sunset(when, 42.4, -71.1).unwrap();
/// assert_eq!((sunset.hour(), sunset.minute()), (20, 24));
/// ```
#[cfg(feature = "chrono")]
#[allow(clippy::needless_pass_by_value)]
pub fn sunset<Tz: TimeZone>(when: DateTime<Tz>, latitude: f64, longitude: f64) -> Result<DateTime<Tz>> {
    single_event(&when, latitude, longitude, SunEvent::Sunset)
}

/// Calculate sunrise, solar noon and sunset around the solar noon nearest to `when`.
///
/// The noon search runs once and both events reuse its result. The times are identical to
/// those returned by [`sunrise`], [`solar_noon`] and [`sunset`]. If either event does not
/// exist, the day is reported as [`SunriseResult::AllDay`] or [`SunriseResult::AllNight`],
/// with the transit still set.
///
/// # Arguments
/// * `when` - Instant with timezone; results are expressed in the same timezone
/// * `latitude` - Observer latitude in degrees North
/// * `longitude` - Observer longitude in degrees East
///
/// # Errors
/// Returns `ComputationError` for non-finite coordinates or results outside chrono's range.
///
/// # Example
/// ```rust
/// use noaa_sunrise::{noaa, SunriseResult};
/// use chrono::{DateTime, FixedOffset};
///
/// let when = "2024-06-20T12:00:00-04:00".parse::<DateTime<FixedOffset>>().unwrap();
/// match noaa::sun_events_for_day(when, 42.4, -71.1).unwrap() {
///     SunriseResult::RegularDay { sunrise, transit, sunset } => {
///         println!("Sunrise: {sunrise}");
///         println!("Solar noon: {transit}");
///         println!("Sunset: {sunset}");
///     }
///     _ => println!("No sunrise/sunset (polar day/night)"),
/// }
/// ```
#[cfg(feature = "chrono")]
#[allow(clippy::needless_pass_by_value)]
pub fn sun_events_for_day<Tz: TimeZone>(
    when: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<SunriseResult<DateTime<Tz>>> {
    check_finite(latitude, "latitude is not finite")?;
    check_finite(longitude, "longitude is not finite")?;
    let longitude_west = -longitude;

    let search = nearest_solar_noon(&when.with_timezone(&Utc), longitude_west)?;
    let events = search.basis.events(latitude, longitude_west);

    let tz = when.timezone();
    let zoned = |minutes: f64| {
        minutes_to_utc(search.basis.julian_date, minutes).map(|utc| utc.with_timezone(&tz))
    };

    Ok(match events {
        SunriseResult::RegularDay {
            sunrise,
            transit,
            sunset,
        } => SunriseResult::RegularDay {
            sunrise: zoned(sunrise)?,
            transit: zoned(transit)?,
            sunset: zoned(sunset)?,
        },
        SunriseResult::AllDay { transit } => SunriseResult::AllDay {
            transit: zoned(transit)?,
        },
        SunriseResult::AllNight { transit } => SunriseResult::AllNight {
            transit: zoned(transit)?,
        },
    })
}

/// Calculate solar noon for a UTC calendar day without chrono.
///
/// No nearest-noon search is done: the result is relative to 0h UTC of the given date and
/// may be negative or ≥ 1440 minutes for longitudes near ±180°.
///
/// # Errors
/// Returns `InvalidDateTime` for an invalid date and `ComputationError` for a non-finite
/// longitude.
///
/// # Example
/// ```rust
/// use noaa_sunrise::noaa;
///
/// let noon = noaa::solar_noon_utc(2024, 6, 20, 0.0).unwrap();
/// // Greenwich noon is early by the (negative) equation of time
/// assert!((noon.minutes() - 721.6).abs() < 0.5);
/// ```
pub fn solar_noon_utc(year: i32, month: u32, day: u32, longitude: f64) -> Result<MinutesUtc> {
    check_finite(longitude, "longitude is not finite")?;
    let jd = JulianDate::from_ymd(year, month, day)?;
    let longitude_west = -longitude;

    let minutes = solar_noon_utc_minutes(jd.julian_century(), longitude_west);
    Ok(MinutesUtc::from_minutes(minutes))
}

/// Calculate sunrise, solar noon and sunset for a UTC calendar day without chrono.
///
/// All times are minutes relative to 0h UTC of the given date. No nearest-noon search is
/// done, so at longitudes far from Greenwich some events may fall on the previous or next
/// UTC day (negative or ≥ 1440 minutes).
///
/// # Errors
/// Returns `InvalidDateTime` for an invalid date and `ComputationError` for non-finite
/// coordinates.
///
/// # Example
/// ```rust
/// use noaa_sunrise::{noaa, SunriseResult};
///
/// // Boston, 2024-06-20
/// let result = noaa::sun_events_utc(2024, 6, 20, 42.4, -71.1).unwrap();
/// if let SunriseResult::RegularDay { sunrise, transit, sunset } = result {
///     assert!((sunrise.hours() - 9.12).abs() < 0.05); // 09:07 UTC
///     assert!((transit.hours() - 16.77).abs() < 0.05); // 16:46 UTC
///     assert!((sunset.hours() - 24.41).abs() < 0.05); // 00:24 UTC next day
/// }
/// ```
pub fn sun_events_utc(
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
) -> Result<SunriseResult<MinutesUtc>> {
    check_finite(latitude, "latitude is not finite")?;
    check_finite(longitude, "longitude is not finite")?;
    let julian_date = JulianDate::from_ymd(year, month, day)?;
    let longitude_west = -longitude;

    let basis = DayBasis {
        julian_date,
        noon_minutes: solar_noon_utc_minutes(julian_date.julian_century(), longitude_west),
    };
    Ok(basis
        .events(latitude, longitude_west)
        .map(MinutesUtc::from_minutes))
}

// ============================================================================
// Event solver
// Everything below works in degrees West; public functions flip the sign once.
// ============================================================================

/// Horizon crossing to solve for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SunEvent {
    Sunrise,
    Sunset,
}

/// Enum for polar condition types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PolarType {
    AllDay,
    AllNight,
}

impl PolarType {
    const fn into_error(self, latitude: f64) -> Error {
        match self {
            Self::AllDay => Error::polar_day(latitude),
            Self::AllNight => Error::polar_night(latitude),
        }
    }
}

/// Cosine of the sunrise hour angle; outside [-1, 1] the sun does not cross the horizon.
fn hour_angle_cosine(latitude: f64, solar_declination: f64) -> f64 {
    let lat_rad = degrees_to_radians(latitude);
    let dec_rad = degrees_to_radians(solar_declination);

    cos(degrees_to_radians(SUNRISE_SUNSET_ZENITH)) / (cos(lat_rad) * cos(dec_rad))
        - tan(lat_rad) * tan(dec_rad)
}

/// Check for polar day/night conditions and return the type
fn check_polar_conditions_type(cos_hour_angle: f64) -> Option<PolarType> {
    if cos_hour_angle < -1.0 {
        Some(PolarType::AllDay)
    } else if cos_hour_angle > 1.0 {
        Some(PolarType::AllNight)
    } else {
        None
    }
}

/// Hour angle of the event in radians: positive for sunrise, negative for sunset.
fn hour_angle(
    latitude: f64,
    solar_declination: f64,
    event: SunEvent,
) -> core::result::Result<f64, PolarType> {
    let cos_hour_angle = hour_angle_cosine(latitude, solar_declination);
    if let Some(polar_type) = check_polar_conditions_type(cos_hour_angle) {
        log::debug!(
            "no {event:?} at latitude {latitude}: declination {solar_declination}, \
             cos(hour angle) {cos_hour_angle} gives {polar_type:?}"
        );
        return Err(polar_type);
    }

    let angle = acos(cos_hour_angle);
    Ok(match event {
        SunEvent::Sunrise => angle,
        SunEvent::Sunset => -angle,
    })
}

/// One pass of the event solver: UTC minutes of the event using the sun at century `t`.
fn event_pass(
    t: f64,
    latitude: f64,
    longitude_west: f64,
    event: SunEvent,
) -> core::result::Result<f64, PolarType> {
    let eq_time = equation_of_time(t);
    let solar_declination = declination(t);
    let hour_angle = hour_angle(latitude, solar_declination, event)?;

    let delta = longitude_west - radians_to_degrees(hour_angle);
    Ok(GREENWICH_NOON_MINUTES + MINUTES_PER_DEGREE * delta - eq_time)
}

/// UTC minutes of sunrise or sunset relative to the day starting at century `t`.
///
/// The first pass uses the sun at noon (`t_noon`); the second uses it at the first estimate.
fn event_utc_minutes(
    t: f64,
    t_noon: f64,
    latitude: f64,
    longitude_west: f64,
    event: SunEvent,
) -> core::result::Result<f64, PolarType> {
    let estimate = event_pass(t_noon, latitude, longitude_west, event)?;

    let refined_t = julian_century(julian_day_from_century(t) + estimate / MINUTES_PER_DAY);
    event_pass(refined_t, latitude, longitude_west, event)
}

/// UTC minutes of solar noon relative to the day starting at century `t`.
fn solar_noon_utc_minutes(t: f64, longitude_west: f64) -> f64 {
    // approximate local noon, counted from the 0h UTC start of the day
    let t_noon = julian_century(julian_day_from_century(t) + longitude_west / 360.0);
    let eq_time = equation_of_time(t_noon);
    let estimate = GREENWICH_NOON_MINUTES + (longitude_west * MINUTES_PER_DEGREE) - eq_time;

    let refined_t =
        julian_century(julian_day_from_century(t) - 0.5 + estimate / MINUTES_PER_DAY);
    let eq_time = equation_of_time(refined_t);
    GREENWICH_NOON_MINUTES + (longitude_west * MINUTES_PER_DEGREE) - eq_time
}

/// A UTC day together with the solar noon found for it; the time basis of both events.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DayBasis {
    julian_date: JulianDate,
    noon_minutes: f64,
}

impl DayBasis {
    fn event_minutes(
        &self,
        latitude: f64,
        longitude_west: f64,
        event: SunEvent,
    ) -> core::result::Result<f64, PolarType> {
        let t = self.julian_date.julian_century();
        let t_noon = self
            .julian_date
            .add_days(self.noon_minutes / MINUTES_PER_DAY)
            .julian_century();
        event_utc_minutes(t, t_noon, latitude, longitude_west, event)
    }

    fn events(&self, latitude: f64, longitude_west: f64) -> SunriseResult<f64> {
        let transit = self.noon_minutes;
        let sunrise = self.event_minutes(latitude, longitude_west, SunEvent::Sunrise);
        let sunset = self.event_minutes(latitude, longitude_west, SunEvent::Sunset);

        match (sunrise, sunset) {
            (Ok(sunrise), Ok(sunset)) => SunriseResult::RegularDay {
                sunrise,
                transit,
                sunset,
            },
            (Err(PolarType::AllDay), _) | (_, Err(PolarType::AllDay)) => {
                SunriseResult::AllDay { transit }
            }
            (Err(PolarType::AllNight), _) | (_, Err(PolarType::AllNight)) => {
                SunriseResult::AllNight { transit }
            }
        }
    }
}

// ============================================================================
// Solar noon search and chrono conversions
// ============================================================================

/// Winning candidate of the nearest solar noon search.
#[cfg(feature = "chrono")]
#[derive(Debug, Clone, Copy, PartialEq)]
struct NoonSearch {
    basis: DayBasis,
    utc: DateTime<Utc>,
}

/// Find the solar noon nearest to `utc` among the previous, same and next UTC day.
#[cfg(feature = "chrono")]
fn nearest_solar_noon(utc: &DateTime<Utc>, longitude_west: f64) -> Result<NoonSearch> {
    let day = JulianDate::from_datetime(utc);

    let mut best: Option<(TimeDelta, NoonSearch)> = None;
    for day_offset in [-1.0, 0.0, 1.0] {
        let julian_date = day.add_days(day_offset);
        let noon_minutes = solar_noon_utc_minutes(julian_date.julian_century(), longitude_west);
        let noon = minutes_to_utc(julian_date, noon_minutes)?;
        let distance = (noon - *utc).abs();

        log::trace!("solar noon candidate {noon} is {distance} from {utc}");

        if best.as_ref().is_none_or(|(best_distance, _)| distance < *best_distance) {
            let basis = DayBasis {
                julian_date,
                noon_minutes,
            };
            best = Some((distance, NoonSearch { basis, utc: noon }));
        }
    }

    best.map(|(_, search)| search)
        .ok_or(Error::computation_error("no solar noon candidate"))
}

#[cfg(feature = "chrono")]
fn single_event<Tz: TimeZone>(
    when: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
    event: SunEvent,
) -> Result<DateTime<Tz>> {
    check_finite(latitude, "latitude is not finite")?;
    check_finite(longitude, "longitude is not finite")?;
    let longitude_west = -longitude;

    let search = nearest_solar_noon(&when.with_timezone(&Utc), longitude_west)?;

    // a day missing either event is polar for both, as in `sun_events_for_day`
    let minutes = match search.basis.events(latitude, longitude_west) {
        SunriseResult::RegularDay {
            sunrise, sunset, ..
        } => match event {
            SunEvent::Sunrise => sunrise,
            SunEvent::Sunset => sunset,
        },
        SunriseResult::AllDay { .. } => return Err(PolarType::AllDay.into_error(latitude)),
        SunriseResult::AllNight { .. } => return Err(PolarType::AllNight.into_error(latitude)),
    };

    let utc = minutes_to_utc(search.basis.julian_date, minutes)?;
    Ok(utc.with_timezone(&when.timezone()))
}

/// Instant `minutes` after 0h UTC of the day containing `julian_date`.
#[cfg(feature = "chrono")]
fn minutes_to_utc(julian_date: JulianDate, minutes: f64) -> Result<DateTime<Utc>> {
    let midnight = julian_date
        .utc_midnight()
        .ok_or(Error::computation_error("date is out of range"))?;
    let nanos = MinutesUtc::from_minutes(minutes)
        .to_nanoseconds()
        .ok_or(Error::computation_error("event time is not finite"))?;

    midnight
        .checked_add_signed(TimeDelta::nanoseconds(nanos))
        .ok_or(Error::computation_error("event time is out of range"))
}
