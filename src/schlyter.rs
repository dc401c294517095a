//! Schlyter rise/set algorithm implementation.
//!
//! Closed-form sunrise, sunset and twilight computation after Paul Schlyter
//! (SUNRISET.C, 1989-1992, released to the public domain). The sun's
//! ecliptic position comes from a single-step solution of Kepler's equation;
//! a spherical-triangle arc computation then yields the diurnal arc for an
//! arbitrary crossing altitude.
//!
//! Accuracy is one to two minutes for years 1801-2099. Outside that window
//! the formulas still execute but degrade; there is no rejection path.
//!
//! Reference: Schlyter, P. "Computing planetary positions - a tutorial with
//! worked examples", <https://stjarnhimlen.se/comp/tutorial.html>

#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]

use crate::error::check_coordinates;
use crate::math::{
    acos_deg, atan2_deg, cos_deg, normalize_degrees_0_to_360, normalize_degrees_signed_180,
    sin_deg, sqrt, DEGREES_PER_RADIAN,
};
use crate::time::{check_date, day_number, local_sidereal_time};
use crate::{Error, Horizon, HoursUtc, Result, SunriseResult};

#[cfg(feature = "chrono")]
use chrono::{DateTime, Datelike, TimeZone, Utc};

/// Apparent angular radius of the sun in degrees at a distance of 1 AU.
///
/// Divided by the actual solar distance to get the radius on a given day;
/// used for the upper-limb correction at ordinary rise/set.
const SUN_APPARENT_RADIUS: f64 = 0.2666;

/// Degrees of hour angle per hour of time.
const DEGREES_PER_HOUR: f64 = 15.0;

/// The sun's position on the ecliptic.
///
/// The sun's ecliptic latitude is always within a fraction of an arc minute
/// of zero and is treated as exactly zero throughout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticPosition {
    /// True ecliptic longitude in degrees, [0, 360)
    longitude: f64,
    /// Distance from Earth in astronomical units
    distance: f64,
}

impl EclipticPosition {
    /// Gets the true ecliptic longitude in degrees, in [0, 360).
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Gets the sun-earth distance in astronomical units.
    #[must_use]
    pub const fn distance(&self) -> f64 {
        self.distance
    }
}

/// The sun's position in equatorial coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialPosition {
    /// Right ascension in degrees
    right_ascension: f64,
    /// Declination in degrees
    declination: f64,
    /// Distance from Earth in astronomical units
    distance: f64,
}

impl EquatorialPosition {
    /// Gets the right ascension in degrees.
    #[must_use]
    pub const fn right_ascension(&self) -> f64 {
        self.right_ascension
    }

    /// Gets the declination in degrees.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }

    /// Gets the sun-earth distance in astronomical units.
    #[must_use]
    pub const fn distance(&self) -> f64 {
        self.distance
    }
}

/// Computes the sun's ecliptic longitude and distance for a given day number.
///
/// The mean orbital elements are linear functions of the day number. Kepler's
/// equation is solved with a single first-order step; at the Earth orbit's
/// eccentricity that is accurate to about an arc minute, which matches the
/// rest of the algorithm. An iterative solve would change reference behavior.
///
/// # Arguments
/// * `day_number` - Days since 2000 Jan 0.0, including fraction of day
#[must_use]
pub fn sun_ecliptic_position(day_number: f64) -> EclipticPosition {
    // Mean elements of the sun's apparent orbit.
    let mean_anomaly = normalize_degrees_0_to_360(356.0470 + 0.9856002585 * day_number);
    let perihelion_longitude = 282.9404 + 4.70935e-5 * day_number;
    let eccentricity = 0.016709 - 1.151e-9 * day_number;

    // First-order solution of Kepler's equation.
    let eccentric_anomaly = mean_anomaly
        + eccentricity
            * DEGREES_PER_RADIAN
            * sin_deg(mean_anomaly)
            * (1.0 + eccentricity * cos_deg(mean_anomaly));

    // Rectangular coordinates in the plane of the orbit.
    let x = cos_deg(eccentric_anomaly) - eccentricity;
    let y = sqrt(1.0 - eccentricity * eccentricity) * sin_deg(eccentric_anomaly);

    let distance = sqrt(x * x + y * y);
    let true_anomaly = atan2_deg(y, x);

    EclipticPosition {
        longitude: normalize_degrees_0_to_360(true_anomaly + perihelion_longitude),
        distance,
    }
}

/// Computes the sun's right ascension, declination and distance for a given
/// day number.
///
/// Rotates the ecliptic position into the equatorial frame using the
/// obliquity of the ecliptic, a slowly decaying linear function of the day
/// number.
///
/// # Arguments
/// * `day_number` - Days since 2000 Jan 0.0, including fraction of day
#[must_use]
pub fn sun_equatorial_position(day_number: f64) -> EquatorialPosition {
    let ecliptic = sun_ecliptic_position(day_number);
    let r = ecliptic.distance();

    // Ecliptic rectangular coordinates; z = 0 since the sun's ecliptic
    // latitude is treated as zero.
    let x = r * cos_deg(ecliptic.longitude());
    let y = r * sin_deg(ecliptic.longitude());

    let obliquity = 23.4393 - 3.563e-7 * day_number;

    // Rotate about the x axis into the equatorial frame; x is unchanged.
    let y_equatorial = y * cos_deg(obliquity);
    let z_equatorial = y * sin_deg(obliquity);

    EquatorialPosition {
        right_ascension: atan2_deg(y_equatorial, x),
        declination: atan2_deg(z_equatorial, sqrt(x * x + y_equatorial * y_equatorial)),
        distance: r,
    }
}

/// Calculates rise, transit and set times for an arbitrary crossing altitude.
///
/// This is the workhorse function; [`sunrise_sunset_utc_for_horizon`] wraps
/// it with the predefined twilight altitudes.
///
/// Times are fractional UTC hours on the given date ([`HoursUtc`]); they can
/// be negative (previous day) or exceed 24 (next day) at longitudes far from
/// the prime meridian.
///
/// # Arguments
/// * `year` - Year (documented validity 1801-2099; not enforced)
/// * `month` - Month (1-12)
/// * `day` - Day of month (1-31)
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180, east positive)
/// * `elevation_angle` - Crossing altitude in degrees (e.g. -6.0 for civil twilight)
/// * `upper_limb` - Reference the sun's upper limb instead of the disc center
///
/// # Errors
/// Returns an error for invalid coordinates, a non-finite elevation angle,
/// or invalid calendar components.
///
/// # Example
/// ```
/// use sunriset::{schlyter, SunriseResult};
///
/// // Greenwich on the March 2000 equinox, standard rise/set altitude.
/// let result = schlyter::sunrise_sunset_utc(
///     2000, 3, 20,
///     51.5,
///     0.0,
///     -35.0 / 60.0,
///     true,
/// ).unwrap();
///
/// if let SunriseResult::RegularDay { sunrise, transit, sunset } = result {
///     assert!(sunrise.hours() < transit.hours());
///     assert!(transit.hours() < sunset.hours());
///     assert!((transit.hours() - 12.0).abs() < 0.2);
/// } else {
///     panic!("expected a regular day at 51.5°N");
/// }
/// ```
pub fn sunrise_sunset_utc(
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
    elevation_angle: f64,
    upper_limb: bool,
) -> Result<SunriseResult<HoursUtc>> {
    check_coordinates(latitude, longitude)?;
    if !elevation_angle.is_finite() {
        return Err(Error::invalid_elevation_angle(elevation_angle));
    }
    check_date(year, month, day)?;

    // Day number of 12h local mean solar time on the given date.
    let d = day_number(year, month, day) + 0.5 - longitude / 360.0;

    let sidtime = local_sidereal_time(d, longitude);
    let sun = sun_equatorial_position(d);

    // The sun is due south when the local sidereal time equals its right
    // ascension.
    let transit_hours = 12.0
        - normalize_degrees_signed_180(sidtime - sun.right_ascension()) / DEGREES_PER_HOUR;
    let transit = HoursUtc::from_hours(transit_hours);

    let mut altitude = elevation_angle;
    if upper_limb {
        altitude -= SUN_APPARENT_RADIUS / sun.distance();
    }

    let numerator = sin_deg(altitude) - sin_deg(latitude) * sin_deg(sun.declination());

    // cos(latitude) vanishes at the poles; resolve from the numerator sign
    // instead of dividing.
    if latitude.abs() >= 90.0 {
        return Ok(if numerator >= 0.0 {
            SunriseResult::AllNight { transit }
        } else {
            SunriseResult::AllDay { transit }
        });
    }

    let cos_arc = numerator / (cos_deg(latitude) * cos_deg(sun.declination()));

    // Non-strict comparisons so exact boundary values resolve to a
    // circumpolar state rather than NaN out of acos.
    let result = if cos_arc >= 1.0 {
        SunriseResult::AllNight { transit }
    } else if cos_arc <= -1.0 {
        SunriseResult::AllDay { transit }
    } else {
        let half_arc_hours = acos_deg(cos_arc) / DEGREES_PER_HOUR;
        SunriseResult::RegularDay {
            sunrise: HoursUtc::from_hours(transit_hours - half_arc_hours),
            transit,
            sunset: HoursUtc::from_hours(transit_hours + half_arc_hours),
        }
    };
    Ok(result)
}

/// Calculates rise, transit and set times for a predefined horizon.
///
/// # Arguments
/// * `year` - Year (documented validity 1801-2099; not enforced)
/// * `month` - Month (1-12)
/// * `day` - Day of month (1-31)
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180, east positive)
/// * `horizon` - Horizon type (sunrise/sunset, civil twilight, etc.)
///
/// # Errors
/// Returns an error for invalid coordinates or calendar components.
///
/// # Example
/// ```
/// use sunriset::{schlyter, Horizon, SunriseResult};
///
/// let result = schlyter::sunrise_sunset_utc_for_horizon(
///     2024, 6, 21,
///     48.21,  // Vienna
///     16.37,
///     Horizon::SunriseSunset,
/// ).unwrap();
/// assert!(matches!(result, SunriseResult::RegularDay { .. }));
///
/// // Civil twilight opens earlier and closes later than sunrise/sunset.
/// let twilight = schlyter::sunrise_sunset_utc_for_horizon(
///     2024, 6, 21,
///     48.21,
///     16.37,
///     Horizon::CivilTwilight,
/// ).unwrap();
/// assert!(twilight.rise_hours().hours() < result.rise_hours().hours());
/// ```
pub fn sunrise_sunset_utc_for_horizon(
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
    horizon: Horizon,
) -> Result<SunriseResult<HoursUtc>> {
    sunrise_sunset_utc(
        year,
        month,
        day,
        latitude,
        longitude,
        horizon.elevation_angle(),
        horizon.uses_upper_limb(),
    )
}

/// Calculates the length of the above-horizon window in hours.
///
/// For `Horizon::SunriseSunset` this is the day length; for the twilight
/// horizons it is the span from dawn to dusk of that twilight kind. A polar
/// day yields 24.0 and a polar night 0.0.
///
/// # Errors
/// Returns an error for invalid coordinates or calendar components.
pub fn day_length(
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
    horizon: Horizon,
) -> Result<f64> {
    let result = sunrise_sunset_utc_for_horizon(year, month, day, latitude, longitude, horizon)?;
    Ok(result.day_length_hours())
}

/// Calculates rise, transit and set times as timezone-aware datetimes.
///
/// The computation runs on the UTC calendar date of `date`; results are
/// converted back into `date`'s timezone. Callers working in a local zone
/// should pass a datetime whose UTC date is the day they care about
/// (midnight local time is usually fine outside the date line).
///
/// # Arguments
/// * `date` - Any timezone-aware datetime; only its UTC calendar date is used
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180, east positive)
/// * `horizon` - Horizon type (sunrise/sunset, civil twilight, etc.)
///
/// # Errors
/// Returns an error for invalid coordinates.
///
/// # Example
/// ```
/// # #[cfg(feature = "chrono")] {
/// use chrono::{DateTime, Utc};
/// use sunriset::{schlyter, Horizon, SunriseResult};
///
/// let date = "2024-06-21T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
/// let result = schlyter::sunrise_sunset(date, 48.21, 16.37, Horizon::SunriseSunset).unwrap();
///
/// if let SunriseResult::RegularDay { sunrise, sunset, .. } = result {
///     println!("Sunrise: {sunrise}");
///     println!("Sunset: {sunset}");
/// }
/// # }
/// ```
#[cfg(feature = "chrono")]
#[allow(clippy::needless_pass_by_value)]
pub fn sunrise_sunset<Tz: TimeZone>(
    date: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
    horizon: Horizon,
) -> Result<SunriseResult<DateTime<Tz>>> {
    let utc = date.with_timezone(&Utc);
    let result = sunrise_sunset_utc_for_horizon(
        utc.year(),
        utc.month(),
        utc.day(),
        latitude,
        longitude,
        horizon,
    )?;

    let day_start = utc
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .expect("midnight is always valid")
        .and_utc();
    let tz = date.timezone();

    Ok(match result {
        SunriseResult::RegularDay {
            sunrise,
            transit,
            sunset,
        } => SunriseResult::RegularDay {
            sunrise: at_hours(day_start, sunrise, &tz),
            transit: at_hours(day_start, transit, &tz),
            sunset: at_hours(day_start, sunset, &tz),
        },
        SunriseResult::AllDay { transit } => SunriseResult::AllDay {
            transit: at_hours(day_start, transit, &tz),
        },
        SunriseResult::AllNight { transit } => SunriseResult::AllNight {
            transit: at_hours(day_start, transit, &tz),
        },
    })
}

/// Converts fractional UTC hours on the calculation date into a datetime in
/// the caller's timezone, truncating to whole milliseconds.
#[cfg(feature = "chrono")]
fn at_hours<Tz: TimeZone>(day_start: DateTime<Utc>, hours: HoursUtc, tz: &Tz) -> DateTime<Tz> {
    const MILLIS_PER_HOUR: f64 = 3_600_000.0;
    let millis = (hours.hours() * MILLIS_PER_HOUR) as i64;
    (day_start + chrono::Duration::milliseconds(millis)).with_timezone(tz)
}
