//! NOAA solar position model.
//!
//! Each function takes the Julian century `t` (see [`crate::time::julian_century`]) and returns
//! degrees unless noted. Coefficients and evaluation order follow the NOAA solar calculator,
//! itself based on Meeus, *Astronomical Algorithms*.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::suboptimal_flops)]

use crate::math::{asin, atan2, cos, degrees_to_radians, radians_to_degrees, sin, tan, wrap_degrees};

/// Longitude of the ascending node of the Moon's orbit, the argument of the nutation terms.
fn lunar_node(t: f64) -> f64 {
    125.04 - 1934.136 * t
}

/// Geometric mean longitude of the Sun, in [0, 360].
#[must_use]
pub fn geometric_mean_longitude(t: f64) -> f64 {
    wrap_degrees(280.46646 + t * (36000.76983 + 0.0003032 * t))
}

/// Geometric mean anomaly of the Sun (not normalized).
#[must_use]
pub fn geometric_mean_anomaly(t: f64) -> f64 {
    357.52911 + t * (35999.05029 - 0.0001537 * t)
}

/// Eccentricity of Earth's orbit (unitless).
#[must_use]
pub fn eccentricity_earth_orbit(t: f64) -> f64 {
    0.016708634 - t * (0.000042037 + 0.0000001267 * t)
}

/// Equation of center of the Sun.
#[must_use]
pub fn equation_of_center(t: f64) -> f64 {
    let m = degrees_to_radians(geometric_mean_anomaly(t));
    let sin_m = sin(m);
    let sin_2m = sin(m + m);
    let sin_3m = sin(m + m + m);

    sin_m * (1.914602 - t * (0.004817 + 0.000014 * t))
        + sin_2m * (0.019993 - 0.000101 * t)
        + sin_3m * 0.000289
}

/// True longitude of the Sun.
#[must_use]
pub fn true_longitude(t: f64) -> f64 {
    geometric_mean_longitude(t) + equation_of_center(t)
}

/// True anomaly of the Sun.
#[must_use]
pub fn true_anomaly(t: f64) -> f64 {
    geometric_mean_anomaly(t) + equation_of_center(t)
}

/// Sun–Earth distance in astronomical units.
#[must_use]
pub fn radius_vector(t: f64) -> f64 {
    let v = true_anomaly(t);
    let e = eccentricity_earth_orbit(t);

    (1.000001018 * (1.0 - e * e)) / (1.0 + e * cos(degrees_to_radians(v)))
}

/// Apparent longitude of the Sun (true longitude corrected for nutation and aberration).
#[must_use]
pub fn apparent_longitude(t: f64) -> f64 {
    let omega = lunar_node(t);
    true_longitude(t) - 0.00569 - 0.00478 * sin(degrees_to_radians(omega))
}

/// Mean obliquity of the ecliptic.
#[must_use]
pub fn mean_obliquity_of_ecliptic(t: f64) -> f64 {
    let seconds = 21.448 - t * (46.8150 + t * (0.00059 - t * 0.001813));
    23.0 + (26.0 + (seconds / 60.0)) / 60.0
}

/// Obliquity of the ecliptic corrected for nutation.
#[must_use]
pub fn obliquity_correction(t: f64) -> f64 {
    let omega = lunar_node(t);
    mean_obliquity_of_ecliptic(t) + 0.00256 * cos(degrees_to_radians(omega))
}

/// Right ascension of the Sun, in (-180, 180].
#[must_use]
pub fn right_ascension(t: f64) -> f64 {
    let e = degrees_to_radians(obliquity_correction(t));
    let lambda = degrees_to_radians(apparent_longitude(t));

    radians_to_degrees(atan2(cos(e) * sin(lambda), cos(lambda)))
}

/// Declination of the Sun.
#[must_use]
pub fn declination(t: f64) -> f64 {
    let e = degrees_to_radians(obliquity_correction(t));
    let lambda = degrees_to_radians(apparent_longitude(t));

    radians_to_degrees(asin(sin(e) * sin(lambda)))
}

/// Equation of time in minutes of time (apparent minus mean solar time).
#[must_use]
pub fn equation_of_time(t: f64) -> f64 {
    let epsilon = obliquity_correction(t);
    let l0 = degrees_to_radians(geometric_mean_longitude(t));
    let e = eccentricity_earth_orbit(t);
    let m = degrees_to_radians(geometric_mean_anomaly(t));

    let mut y = tan(degrees_to_radians(epsilon) / 2.0);
    y *= y;

    let sin_2l0 = sin(2.0 * l0);
    let sin_m = sin(m);
    let cos_2l0 = cos(2.0 * l0);
    let sin_4l0 = sin(4.0 * l0);
    let sin_2m = sin(2.0 * m);

    let e_time = y * sin_2l0 - 2.0 * e * sin_m + 4.0 * e * y * sin_m * cos_2l0
        - 0.5 * y * y * sin_4l0
        - 1.25 * e * e * sin_2m;

    // degrees of rotation to minutes of clock time
    radians_to_degrees(e_time) * 4.0
}

/// Solar coordinates evaluated once for a single Julian century.
///
/// Bundles the quantities the event solver and callers typically need together, so that a
/// caller inspecting several of them does not re-run the formula chain.
///
/// # Example
/// ```
/// use noaa_sunrise::noaa::position::SolarCoordinates;
///
/// let at_j2000 = SolarCoordinates::at(0.0);
/// assert!((at_j2000.declination() + 23.03).abs() < 0.01);
/// assert!((at_j2000.equation_of_time() + 3.30).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarCoordinates {
    julian_century: f64,
    right_ascension: f64,
    declination: f64,
    equation_of_time: f64,
    radius_vector: f64,
}

impl SolarCoordinates {
    /// Evaluates the solar position model at Julian century `t`.
    #[must_use]
    pub fn at(t: f64) -> Self {
        Self {
            julian_century: t,
            right_ascension: right_ascension(t),
            declination: declination(t),
            equation_of_time: equation_of_time(t),
            radius_vector: radius_vector(t),
        }
    }

    /// Julian century the coordinates were evaluated at.
    #[must_use]
    pub const fn julian_century(&self) -> f64 {
        self.julian_century
    }

    /// Right ascension in degrees.
    #[must_use]
    pub const fn right_ascension(&self) -> f64 {
        self.right_ascension
    }

    /// Declination in degrees.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }

    /// Equation of time in minutes.
    #[must_use]
    pub const fn equation_of_time(&self) -> f64 {
        self.equation_of_time
    }

    /// Sun–Earth distance in AU.
    #[must_use]
    pub const fn radius_vector(&self) -> f64 {
        self.radius_vector
    }
}
