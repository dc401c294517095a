//! Core data types for rise/set and twilight calculations.

use crate::math::floor;
use crate::{Error, Result};

/// Altitude of the sun's center at ordinary rise/set, before the upper-limb
/// correction: 35 arc minutes below the horizon, absorbing the standard
/// refraction allowance.
const RISE_SET_ALTITUDE: f64 = -35.0 / 60.0;

/// Predefined crossing altitudes for rise/set calculations.
///
/// Corresponds to the usual twilight definitions. Ordinary rise/set is
/// referenced to the sun's upper limb; the twilight definitions are
/// referenced to the center of the disc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Horizon {
    /// Standard sunrise/sunset (upper limb 35 arc minutes below the horizon)
    SunriseSunset,
    /// Civil twilight (sun's center is 6° below horizon)
    CivilTwilight,
    /// Nautical twilight (sun's center is 12° below horizon)
    NauticalTwilight,
    /// Astronomical twilight (sun's center is 18° below horizon)
    AstronomicalTwilight,
    /// Custom crossing altitude, referenced to the center of the disc
    Custom(f64),
}

impl Horizon {
    /// Gets the crossing altitude in degrees for this horizon definition.
    ///
    /// Negative values indicate the sun is below the horizon.
    #[must_use]
    pub const fn elevation_angle(&self) -> f64 {
        match self {
            Self::SunriseSunset => RISE_SET_ALTITUDE,
            Self::CivilTwilight => -6.0,
            Self::NauticalTwilight => -12.0,
            Self::AstronomicalTwilight => -18.0,
            Self::Custom(angle) => *angle,
        }
    }

    /// Whether the crossing is measured at the sun's upper limb rather than
    /// the center of its disc.
    ///
    /// Only ordinary rise/set uses the upper limb; the solver then lowers
    /// the crossing altitude by the sun's apparent angular radius.
    #[must_use]
    pub const fn uses_upper_limb(&self) -> bool {
        matches!(self, Self::SunriseSunset)
    }

    /// Creates a custom horizon with the specified crossing altitude.
    ///
    /// # Errors
    /// Returns `InvalidElevationAngle` if the angle is outside -90 to +90
    /// degrees.
    pub fn custom(elevation_degrees: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&elevation_degrees) {
            return Err(Error::invalid_elevation_angle(elevation_degrees));
        }
        Ok(Self::Custom(elevation_degrees))
    }
}

impl Eq for Horizon {}

impl core::hash::Hash for Horizon {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        match self {
            Self::SunriseSunset => 0.hash(state),
            Self::CivilTwilight => 1.hash(state),
            Self::NauticalTwilight => 2.hash(state),
            Self::AstronomicalTwilight => 3.hash(state),
            Self::Custom(angle) => {
                4.hash(state);
                // Normalize -0.0 and +0.0 so hashing remains consistent with PartialEq
                let normalized = if *angle == 0.0 { 0.0 } else { *angle };
                normalized.to_bits().hash(state);
            }
        }
    }
}

/// Hours since midnight UTC that can extend beyond a single day.
///
/// Rise, transit and set times are fractional UTC hours on the calculation
/// date:
/// - Negative values indicate the previous day
/// - 0.0 to < 24.0 indicates the current day
/// - ≥ 24.0 indicates the next day
///
/// # Example
/// ```
/// # use sunriset::types::HoursUtc;
/// let morning = HoursUtc::from_hours(6.5); // 06:30 current day
/// let after_midnight = HoursUtc::from_hours(24.5); // 00:30 next day
/// let before_midnight_prev = HoursUtc::from_hours(-0.5); // 23:30 previous day
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoursUtc(f64);

impl HoursUtc {
    /// Creates a new `HoursUtc` from hours since midnight UTC.
    ///
    /// Values can be negative (previous day) or ≥ 24.0 (next day).
    #[must_use]
    pub const fn from_hours(hours: f64) -> Self {
        Self(hours)
    }

    /// Gets the raw hours value.
    ///
    /// Can be negative (previous day) or ≥ 24.0 (next day).
    #[must_use]
    pub const fn hours(&self) -> f64 {
        self.0
    }

    /// Gets the day offset and normalized hours (0.0 to < 24.0).
    ///
    /// # Returns
    /// Tuple of (`day_offset`, `hours_in_day`) where:
    /// - `day_offset`: whole days offset from the calculation date (negative = previous days, positive = following days)
    /// - `hours_in_day`: 0.0 to < 24.0
    ///
    /// # Example
    /// ```
    /// # use sunriset::types::HoursUtc;
    /// let time = HoursUtc::from_hours(25.5);
    /// let (day_offset, hours) = time.day_and_hours();
    /// assert_eq!(day_offset, 1);
    /// assert!((hours - 1.5).abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn day_and_hours(&self) -> (i32, f64) {
        let hours = self.0;
        if !hours.is_finite() {
            return (0, hours);
        }

        let mut day_offset_raw = floor(hours / 24.0);
        let mut normalized_hours = hours - day_offset_raw * 24.0;

        if normalized_hours < 0.0 {
            normalized_hours += 24.0;
            day_offset_raw -= 1.0;
        } else if normalized_hours >= 24.0 {
            normalized_hours -= 24.0;
            day_offset_raw += 1.0;
        }

        let day_offset = if day_offset_raw >= f64::from(i32::MAX) {
            i32::MAX
        } else if day_offset_raw <= f64::from(i32::MIN) {
            i32::MIN
        } else {
            day_offset_raw as i32
        };

        (day_offset, normalized_hours)
    }
}

/// Result of a rise/set calculation for a given day.
///
/// At extreme latitudes the sun may stay above or below the crossing
/// altitude for the whole day; the variants make those states explicit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SunriseResult<T = ()> {
    /// Regular day with distinct sunrise, transit (noon), and sunset times
    RegularDay {
        /// Time of sunrise
        sunrise: T,
        /// Time of solar transit (when sun crosses meridian, solar noon)
        transit: T,
        /// Time of sunset
        sunset: T,
    },
    /// Polar day - sun remains above the specified horizon all day
    AllDay {
        /// Time of solar transit (closest approach to zenith)
        transit: T,
    },
    /// Polar night - sun remains below the specified horizon all day
    AllNight {
        /// Time of solar transit (when sun is highest, though still below horizon)
        transit: T,
    },
}

impl<T> SunriseResult<T> {
    /// Gets the transit time (solar noon) for any result.
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
}

impl SunriseResult<HoursUtc> {
    /// Start of the above-horizon window, defined for every status.
    ///
    /// A polar day spans the full 24 hours centered on the transit, so the
    /// window opens at transit − 12h; a polar night collapses to the
    /// transit itself.
    #[must_use]
    pub fn rise_hours(&self) -> HoursUtc {
        match self {
            Self::RegularDay { sunrise, .. } => *sunrise,
            Self::AllDay { transit } => HoursUtc::from_hours(transit.hours() - 12.0),
            Self::AllNight { transit } => *transit,
        }
    }

    /// End of the above-horizon window, defined for every status.
    #[must_use]
    pub fn set_hours(&self) -> HoursUtc {
        match self {
            Self::RegularDay { sunset, .. } => *sunset,
            Self::AllDay { transit } => HoursUtc::from_hours(transit.hours() + 12.0),
            Self::AllNight { transit } => *transit,
        }
    }

    /// Length of the above-horizon window in hours: 24 for a polar day,
    /// 0 for a polar night.
    #[must_use]
    pub fn day_length_hours(&self) -> f64 {
        match self {
            Self::RegularDay { sunrise, sunset, .. } => sunset.hours() - sunrise.hours(),
            Self::AllDay { .. } => 24.0,
            Self::AllNight { .. } => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizon_elevation_angles() {
        assert_eq!(Horizon::SunriseSunset.elevation_angle(), -35.0 / 60.0);
        assert_eq!(Horizon::CivilTwilight.elevation_angle(), -6.0);
        assert_eq!(Horizon::NauticalTwilight.elevation_angle(), -12.0);
        assert_eq!(Horizon::AstronomicalTwilight.elevation_angle(), -18.0);

        let custom = Horizon::custom(-3.0).unwrap();
        assert_eq!(custom.elevation_angle(), -3.0);

        assert!(Horizon::custom(-95.0).is_err());
        assert!(Horizon::custom(95.0).is_err());
    }

    #[test]
    fn test_horizon_upper_limb() {
        assert!(Horizon::SunriseSunset.uses_upper_limb());
        assert!(!Horizon::CivilTwilight.uses_upper_limb());
        assert!(!Horizon::NauticalTwilight.uses_upper_limb());
        assert!(!Horizon::AstronomicalTwilight.uses_upper_limb());
        assert!(!Horizon::Custom(-0.25).uses_upper_limb());
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_horizon_hash_normalizes_zero_sign() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(Horizon::Custom(0.0));
        set.insert(Horizon::Custom(-0.0));

        assert_eq!(set.len(), 1, "hashing should treat +0.0 and -0.0 equally");
    }

    #[test]
    fn test_hours_utc_day_and_hours() {
        let h1 = HoursUtc::from_hours(12.5);
        let (day, hours) = h1.day_and_hours();
        assert_eq!(day, 0);
        assert!((hours - 12.5).abs() < 1e-10);

        let h2 = HoursUtc::from_hours(25.5);
        let (day, hours) = h2.day_and_hours();
        assert_eq!(day, 1);
        assert!((hours - 1.5).abs() < 1e-10);

        let h3 = HoursUtc::from_hours(-0.5);
        let (day, hours) = h3.day_and_hours();
        assert_eq!(day, -1);
        assert!((hours - 23.5).abs() < 1e-10);
    }

    #[test]
    fn test_sunrise_result_regular_day() {
        let sunrise = HoursUtc::from_hours(5.5);
        let transit = HoursUtc::from_hours(12.0);
        let sunset = HoursUtc::from_hours(18.5);

        let result = SunriseResult::RegularDay {
            sunrise,
            transit,
            sunset,
        };

        assert!(result.is_regular_day());
        assert!(!result.is_polar_day());
        assert!(!result.is_polar_night());
        assert_eq!(result.transit(), &transit);
        assert_eq!(result.sunrise(), Some(&sunrise));
        assert_eq!(result.sunset(), Some(&sunset));
        assert_eq!(result.rise_hours(), sunrise);
        assert_eq!(result.set_hours(), sunset);
        assert!((result.day_length_hours() - 13.0).abs() < 1e-12);
    }

    #[test]
    fn test_sunrise_result_polar_day() {
        let transit = HoursUtc::from_hours(11.75);
        let result = SunriseResult::AllDay { transit };

        assert!(!result.is_regular_day());
        assert!(result.is_polar_day());
        assert!(!result.is_polar_night());
        assert_eq!(result.transit(), &transit);
        assert_eq!(result.sunrise(), None);
        assert_eq!(result.sunset(), None);
        // The window spans the whole day, centered on the transit.
        assert_eq!(result.rise_hours().hours(), -0.25);
        assert_eq!(result.set_hours().hours(), 23.75);
        assert_eq!(result.day_length_hours(), 24.0);
    }

    #[test]
    fn test_sunrise_result_polar_night() {
        let transit = HoursUtc::from_hours(12.25);
        let result = SunriseResult::AllNight { transit };

        assert!(!result.is_regular_day());
        assert!(!result.is_polar_day());
        assert!(result.is_polar_night());
        assert_eq!(result.transit(), &transit);
        assert_eq!(result.sunrise(), None);
        assert_eq!(result.sunset(), None);
        // The window collapses onto the transit.
        assert_eq!(result.rise_hours(), transit);
        assert_eq!(result.set_hours(), transit);
        assert_eq!(result.day_length_hours(), 0.0);
    }
}
