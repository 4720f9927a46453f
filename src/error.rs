//! Error types for the sunrise library.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur during sunrise, solar noon and sunset calculations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid calendar date.
    InvalidDateTime {
        /// Description of the date constraint violation.
        message: &'static str,
    },
    /// The sun stays above the horizon all day, so there is no sunrise or sunset.
    PolarDay {
        /// Latitude at which the event was requested.
        latitude: f64,
    },
    /// The sun stays below the horizon all day, so there is no sunrise or sunset.
    PolarNight {
        /// Latitude at which the event was requested.
        latitude: f64,
    },
    /// Numerical computation error (non-finite intermediate, unrepresentable timestamp).
    ComputationError {
        /// Description of the computation error.
        message: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDateTime { message } => {
                write!(f, "invalid date/time: {message}")
            }
            Self::PolarDay { latitude } => {
                write!(
                    f,
                    "no sunrise or sunset at latitude {latitude}° (sun stays above the horizon)"
                )
            }
            Self::PolarNight { latitude } => {
                write!(
                    f,
                    "no sunrise or sunset at latitude {latitude}° (sun stays below the horizon)"
                )
            }
            Self::ComputationError { message } => {
                write!(f, "computation error: {message}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid date/time error.
    #[must_use]
    pub const fn invalid_datetime(message: &'static str) -> Self {
        Self::InvalidDateTime { message }
    }

    /// Creates a polar day error.
    #[must_use]
    pub const fn polar_day(latitude: f64) -> Self {
        Self::PolarDay { latitude }
    }

    /// Creates a polar night error.
    #[must_use]
    pub const fn polar_night(latitude: f64) -> Self {
        Self::PolarNight { latitude }
    }

    /// Creates a computation error.
    #[must_use]
    pub const fn computation_error(message: &'static str) -> Self {
        Self::ComputationError { message }
    }

    /// Checks whether this error reports a missing sunrise/sunset rather than a failure.
    #[must_use]
    pub const fn is_polar(&self) -> bool {
        matches!(self, Self::PolarDay { .. } | Self::PolarNight { .. })
    }
}

/// Rejects NaN and infinite values.
///
/// # Errors
/// Returns `ComputationError` with the given message if `value` is not finite.
pub fn check_finite(value: f64, message: &'static str) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::computation_error(message));
    }
    Ok(value)
}
