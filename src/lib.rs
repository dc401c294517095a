//! # Sunriset
//!
//! Sunrise, sunset and twilight times from Paul Schlyter's closed-form solar
//! algorithm.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! This library reimplements the SUNRISET.C lineage (Paul Schlyter,
//! 1989-1992, public domain): a first-order analytic solution of the
//! two-body problem for the sun's position, combined with a
//! spherical-trigonometry arc computation for the times at which the sun
//! crosses a given altitude. Ordinary rise/set and civil, nautical and
//! astronomical twilight are all the same computation with different
//! crossing altitudes.
//!
//! ## Features
//!
//! - Accuracy of one to two minutes within the documented validity window
//!   (years 1801-2099); dates outside it compute but degrade silently
//! - Explicit polar day / polar night results instead of NaN times,
//!   including at the poles themselves
//! - Multiple configurations: `std` or `no_std`, with or without `chrono`,
//!   math via native or `libm`
//! - Thread-safe: stateless, pure functions over immutable data
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions
//! - `chrono` (default): Enable `DateTime<Tz>` based convenience API
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono (most convenient)
//! sunriset = "0.1"
//!
//! # Minimal std (no chrono, smallest dependency tree)
//! sunriset = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # Minimal no_std (pure numeric API)
//! sunriset = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## References
//!
//! - Schlyter, P. "Computing planetary positions - a tutorial with worked
//!   examples". <https://stjarnhimlen.se/comp/tutorial.html>
//! - Schlyter, P. SUNRISET.C (1989-1992), released to the public domain.
//!
//! ## Quick Start
//!
//! ### Rise and set times (numeric API)
//! ```rust
//! use sunriset::{schlyter, Horizon, SunriseResult};
//!
//! // Greenwich on the March 2000 equinox
//! let result = schlyter::sunrise_sunset_utc_for_horizon(
//!     2000, 3, 20,
//!     51.5,   // latitude
//!     0.0,    // longitude
//!     Horizon::SunriseSunset,
//! ).unwrap();
//!
//! if let SunriseResult::RegularDay { sunrise, transit, sunset } = result {
//!     // Near-equal day and night, transit close to noon UTC.
//!     assert!((transit.hours() - 12.0).abs() < 0.2);
//!     assert!((sunset.hours() - sunrise.hours() - 12.0).abs() < 0.5);
//! }
//! ```
//!
//! ### With chrono
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use chrono::{DateTime, FixedOffset};
//! use sunriset::{schlyter, Horizon, SunriseResult};
//!
//! let date = "2024-06-21T12:00:00+02:00".parse::<DateTime<FixedOffset>>().unwrap();
//! let result = schlyter::sunrise_sunset(
//!     date,
//!     48.21,  // Vienna latitude
//!     16.37,  // Vienna longitude
//!     Horizon::SunriseSunset,
//! ).unwrap();
//!
//! match result {
//!     SunriseResult::RegularDay { sunrise, transit, sunset } => {
//!         println!("Sunrise: {sunrise}");
//!         println!("Solar noon: {transit}");
//!         println!("Sunset: {sunset}");
//!     }
//!     _ => println!("No sunrise/sunset (polar day/night)"),
//! }
//! # }
//! ```
//!
//! ## Coordinate and Time Conventions
//!
//! - **Longitude**: degrees, east of Greenwich positive, west negative
//! - **Latitude**: degrees, north of the equator positive, south negative
//! - **Times**: fractional UTC hours on the calculation date
//!   ([`HoursUtc`]); values below 0 or above 24 fall on the neighboring
//!   days, which happens routinely far from the prime meridian

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::types::{Horizon, HoursUtc, SunriseResult};

// Algorithm module
pub mod schlyter;

// Core modules
pub mod error;
pub mod math;
pub mod time;
pub mod types;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizons_share_the_transit() {
        let horizons = [
            Horizon::SunriseSunset,
            Horizon::CivilTwilight,
            Horizon::NauticalTwilight,
            Horizon::AstronomicalTwilight,
        ];

        let mut transits = horizons.iter().map(|&horizon| {
            schlyter::sunrise_sunset_utc_for_horizon(2024, 3, 15, 48.21, 16.37, horizon)
                .unwrap()
                .transit()
                .hours()
        });

        let first = transits.next().unwrap();
        assert!(transits.all(|transit| transit == first));
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_chrono_api_smoke() {
        use chrono::{TimeZone, Utc};

        let date = Utc.with_ymd_and_hms(2024, 6, 21, 0, 0, 0).unwrap();
        let result =
            schlyter::sunrise_sunset(date, 48.21, 16.37, Horizon::SunriseSunset).unwrap();
        assert!(result.is_regular_day());
    }
}
