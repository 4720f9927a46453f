//! # NOAA Sunrise Library
//!
//! Sunrise, solar noon and sunset times from the NOAA solar calculator algorithm.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! The algorithm follows the NOAA Global Monitoring Division solar calculator, a
//! simplification of Meeus' solar position formulas. Event times are accurate to about a
//! minute for latitudes within ±72° and dates between 1800 and 2100.
//!
//! The library provides:
//! - **Sun events**: sunrise, solar noon and sunset nearest to a given instant, in the
//!   timezone of that instant ([`noaa`])
//! - **Solar position model**: declination, equation of time and related quantities as a
//!   function of the Julian century ([`noaa::position`])
//! - **Calendar helpers**: Julian day, Julian century, day of year, day of week ([`time`])
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions (usually faster than `libm`)
//! - `chrono` (default): Enable `DateTime<Tz>` based convenience API
//! - `libm`: Use pure Rust math for `no_std` environments
//! - `cli`: Build the `suntimes` command line tool
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono (most convenient)
//! noaa-sunrise = "0.1"
//!
//! # Minimal std (no chrono, smallest dependency tree)
//! noaa-sunrise = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # Minimal no_std (pure numeric API)
//! noaa-sunrise = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ### Sun events (with chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use noaa_sunrise::noaa;
//! use chrono::{DateTime, FixedOffset};
//!
//! // Boston, around midday local time
//! let when = "2024-06-20T12:00:00-04:00".parse::<DateTime<FixedOffset>>().unwrap();
//!
//! let sunrise = noaa::sunrise(when, 42.4, -71.1).unwrap();
//! let noon = noaa::solar_noon(when, -71.1).unwrap();
//! let sunset = noaa::sunset(when, 42.4, -71.1).unwrap();
//! assert!(sunrise < noon && noon < sunset);
//!
//! // Same times, one noon search
//! let result = noaa::sun_events_for_day(when, 42.4, -71.1).unwrap();
//! assert_eq!(result.sunrise(), Some(&sunrise));
//! assert_eq!(result.transit(), &noon);
//! # }
//! ```
//!
//! ### Sun events (numeric API, no chrono)
//! ```rust
//! use noaa_sunrise::{noaa, SunriseResult};
//!
//! // Minutes relative to 0h UTC of 2024-06-20
//! let result = noaa::sun_events_utc(2024, 6, 20, 42.4, -71.1).unwrap();
//! if let SunriseResult::RegularDay { sunrise, sunset, .. } = result {
//!     let rise = sunrise.time_of_day().unwrap();
//!     println!("Sunrise: {:02}:{:02} UTC", rise.hour, rise.minute);
//!     println!("Sunset at {:.1} minutes", sunset.minutes());
//! }
//! ```
//!
//! ## Coordinate Conventions
//!
//! - **Latitude**: degrees, positive North (-90° to +90°)
//! - **Longitude**: degrees, positive East (-180° to +180°)
//! - **Times**: the chrono API returns instants in the input's timezone; the numeric API
//!   returns [`MinutesUtc`] relative to 0h UTC of the calculation date
//!
//! ## References
//!
//! - NOAA Global Monitoring Division. Solar Calculation Details.
//!   <https://gml.noaa.gov/grad/solcalc/calcdetails.html>
//! - Meeus, J. (1998). Astronomical Algorithms, 2nd edition. Willmann-Bell.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("either the `std` or the `libm` feature must be enabled");

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::time::JulianDate;
pub use crate::types::{MinutesUtc, SunriseResult, TimeOfDay};

// Algorithm modules
pub mod noaa;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;

#[cfg(all(test, feature = "chrono"))]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset, TimeZone, Utc};

    #[test]
    fn test_basic_sun_events() {
        // Same instant in different timezone types
        let datetime_fixed = "2024-06-20T12:00:00-04:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        let datetime_utc = Utc.with_ymd_and_hms(2024, 6, 20, 16, 0, 0).unwrap();

        let result1 = noaa::sun_events_for_day(datetime_fixed, 42.4, -71.1).unwrap();
        let result2 = noaa::sun_events_for_day(datetime_utc, 42.4, -71.1).unwrap();

        // Both should describe identical instants
        let utc1 = result1.clone().map(|time| time.with_timezone(&Utc));
        assert_eq!(utc1, result2);

        assert_eq!(result1.transit().offset(), datetime_fixed.offset());
        assert!(result1.is_regular_day());
    }

    #[test]
    fn test_numeric_api_matches_chrono_api() {
        let when = Utc.with_ymd_and_hms(2024, 6, 20, 12, 0, 0).unwrap();
        let noon = noaa::solar_noon(when, 0.0).unwrap();
        let minutes = noaa::solar_noon_utc(2024, 6, 20, 0.0).unwrap();

        let midnight = Utc.with_ymd_and_hms(2024, 6, 20, 0, 0, 0).unwrap();
        let expected = midnight + chrono::TimeDelta::nanoseconds(minutes.to_nanoseconds().unwrap());
        assert_eq!(noon, expected);
    }
}
