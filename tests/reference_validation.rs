//! Spot checks of rise/set output against published times for a spread of
//! locations and seasons.
//!
//! Expected values are fractional UTC hours; tolerances are generous enough
//! to absorb the algorithm's one-to-two-minute accuracy and the reference
//! tables' rounding.

use sunriset::{schlyter, Horizon, HoursUtc, SunriseResult};

const TOLERANCE_HOURS: f64 = 0.3;

fn assert_regular_day(
    result: &SunriseResult<HoursUtc>,
    expected_rise: f64,
    expected_transit: f64,
    expected_set: f64,
) {
    if let SunriseResult::RegularDay {
        sunrise,
        transit,
        sunset,
    } = result
    {
        assert!(
            (sunrise.hours() - expected_rise).abs() < TOLERANCE_HOURS,
            "sunrise {} != expected {expected_rise}",
            sunrise.hours()
        );
        assert!(
            (transit.hours() - expected_transit).abs() < TOLERANCE_HOURS,
            "transit {} != expected {expected_transit}",
            transit.hours()
        );
        assert!(
            (sunset.hours() - expected_set).abs() < TOLERANCE_HOURS,
            "sunset {} != expected {expected_set}",
            sunset.hours()
        );
    } else {
        panic!("expected RegularDay, got {result:?}");
    }
}

#[test]
fn san_francisco_june_solstice() {
    // 2023-06-21, 37.7749°N 122.4194°W. Sunset falls past midnight UTC,
    // so it exceeds 24 hours rather than wrapping.
    let result = schlyter::sunrise_sunset_utc_for_horizon(
        2023,
        6,
        21,
        37.7749,
        -122.4194,
        Horizon::SunriseSunset,
    )
    .unwrap();

    assert_regular_day(&result, 12.79, 20.18, 27.57);
}

#[test]
fn sydney_december_solstice() {
    // 2024-12-21, 33.87°S 151.21°E. Sunrise falls on the previous UTC day,
    // so it is negative.
    let result = schlyter::sunrise_sunset_utc_for_horizon(
        2024,
        12,
        21,
        -33.87,
        151.21,
        Horizon::SunriseSunset,
    )
    .unwrap();

    assert_regular_day(&result, -5.32, 1.89, 9.10);
}

#[test]
fn singapore_march_equinox() {
    // 2024-03-20, 1.28°N 103.83°E: near-equatorial twelve-hour day.
    let result = schlyter::sunrise_sunset_utc_for_horizon(
        2024,
        3,
        20,
        1.28,
        103.83,
        Horizon::SunriseSunset,
    )
    .unwrap();

    assert_regular_day(&result, -0.84, 5.20, 11.26);
}

#[test]
fn longyearbyen_polar_day_and_night() {
    // 78.22°N 15.65°E: midnight sun in June, polar night in December.
    let june = schlyter::sunrise_sunset_utc_for_horizon(
        2024,
        6,
        21,
        78.22,
        15.65,
        Horizon::SunriseSunset,
    )
    .unwrap();
    assert!(matches!(june, SunriseResult::AllDay { .. }));
    // Transit stays close to local mean noon, roughly an hour east of UTC noon.
    assert!((june.transit().hours() - 10.96).abs() < TOLERANCE_HOURS);

    let december = schlyter::sunrise_sunset_utc_for_horizon(
        2024,
        12,
        21,
        78.22,
        15.65,
        Horizon::SunriseSunset,
    )
    .unwrap();
    assert!(matches!(december, SunriseResult::AllNight { .. }));
}

#[test]
fn san_francisco_day_length() {
    // 14h47m of daylight at the June solstice.
    let length = schlyter::day_length(
        2023,
        6,
        21,
        37.7749,
        -122.4194,
        Horizon::SunriseSunset,
    )
    .unwrap();
    assert!((length - 14.78).abs() < TOLERANCE_HOURS);
}

#[test]
fn civil_twilight_adds_about_half_an_hour_at_mid_latitudes() {
    // Vienna in mid-March: civil dawn precedes sunrise by roughly half an
    // hour, and civil dusk follows sunset by the same amount.
    let sun = schlyter::sunrise_sunset_utc_for_horizon(
        2024,
        3,
        15,
        48.21,
        16.37,
        Horizon::SunriseSunset,
    )
    .unwrap();
    let civil = schlyter::sunrise_sunset_utc_for_horizon(
        2024,
        3,
        15,
        48.21,
        16.37,
        Horizon::CivilTwilight,
    )
    .unwrap();

    let lead = sun.rise_hours().hours() - civil.rise_hours().hours();
    let trail = civil.set_hours().hours() - sun.set_hours().hours();

    assert!(lead > 0.3 && lead < 0.75, "civil dawn lead was {lead}h");
    assert!(trail > 0.3 && trail < 0.75, "civil dusk trail was {trail}h");
}
