#![cfg(feature = "chrono")]

use chrono::{DateTime, FixedOffset, NaiveDate, TimeDelta, TimeZone, Utc};
use noaa_sunrise::{SunriseResult, noaa};

// Near ±180° longitude solar noon falls close to 0h UTC, so the UTC calendar date of the input
// is not necessarily the day whose noon is nearest. The search over the neighbouring days must
// pick the right one and anchor sunrise/sunset on it.
#[test]
fn solar_noon_near_dateline_uses_next_utc_day() {
    let when = Utc.with_ymd_and_hms(2024, 3, 20, 23, 30, 0).unwrap();

    let noon = noaa::solar_noon(when, 179.0).unwrap();
    let expected = "2024-03-21T00:11:17.302Z".parse::<DateTime<Utc>>().unwrap();
    assert!(
        (noon - expected).abs() < TimeDelta::milliseconds(5),
        "noon={noon}"
    );

    let result = noaa::sun_events_for_day(when, 0.0, 179.0).unwrap();
    let SunriseResult::RegularDay {
        sunrise, sunset, ..
    } = result
    else {
        panic!("expected regular day at the equator");
    };

    let expected_sunrise = "2024-03-20T18:07:52.964Z".parse::<DateTime<Utc>>().unwrap();
    let expected_sunset = "2024-03-21T06:14:23.792Z".parse::<DateTime<Utc>>().unwrap();
    assert!((sunrise - expected_sunrise).abs() < TimeDelta::milliseconds(5), "sunrise={sunrise}");
    assert!((sunset - expected_sunset).abs() < TimeDelta::milliseconds(5), "sunset={sunset}");
}

#[test]
fn solar_noon_near_dateline_uses_previous_utc_day() {
    // At 179°W the noon of March 21 (UTC) is almost a full day later, the one computed for
    // March 20 falls just after midnight
    let when = Utc.with_ymd_and_hms(2024, 3, 21, 0, 10, 0).unwrap();

    let noon = noaa::solar_noon(when, -179.0).unwrap();
    let expected = "2024-03-21T00:03:17.401Z".parse::<DateTime<Utc>>().unwrap();
    assert!(
        (noon - expected).abs() < TimeDelta::milliseconds(5),
        "noon={noon}"
    );
    assert!((noon - when).abs() < TimeDelta::hours(12));

    let sunrise = noaa::sunrise(when, 0.0, -179.0).unwrap();
    let sunset = noaa::sunset(when, 0.0, -179.0).unwrap();
    let expected_sunrise = "2024-03-20T17:59:53.063Z".parse::<DateTime<Utc>>().unwrap();
    let expected_sunset = "2024-03-21T06:06:23.891Z".parse::<DateTime<Utc>>().unwrap();
    assert!((sunrise - expected_sunrise).abs() < TimeDelta::milliseconds(5), "sunrise={sunrise}");
    assert!((sunset - expected_sunset).abs() < TimeDelta::milliseconds(5), "sunset={sunset}");
}

#[test]
fn nearest_noon_is_never_more_than_half_a_day_away() {
    for longitude in [-179.5, -150.0, -71.1, 0.0, 71.1, 150.0, 179.5] {
        for hour in 0..24 {
            let when = Utc.with_ymd_and_hms(2024, 3, 20, hour, 0, 0).unwrap();
            let noon = noaa::solar_noon(when, longitude).unwrap();
            let distance = (noon - when).abs();
            assert!(
                distance <= TimeDelta::minutes(12 * 60 + 20),
                "lon={longitude} when={when} noon={noon}"
            );
        }
    }
}

#[test]
fn events_shortly_after_local_midnight_belong_to_previous_day() {
    // 00:30 EDT is closer to the previous day's solar noon (16:57 UTC) than to the next one
    let when = "2024-06-20T00:30:00-04:00"
        .parse::<DateTime<FixedOffset>>()
        .unwrap();

    let result = noaa::sun_events_for_day(when, 40.7128, -74.006).unwrap();
    let SunriseResult::RegularDay {
        sunrise,
        transit,
        sunset,
    } = result
    else {
        panic!("expected regular day for New York");
    };

    let june_19 = NaiveDate::from_ymd_opt(2024, 6, 19).unwrap();
    assert_eq!(sunrise.date_naive(), june_19);
    assert_eq!(transit.date_naive(), june_19);
    assert_eq!(sunset.date_naive(), june_19);

    let expected_transit = "2024-06-19T12:57:26.980-04:00"
        .parse::<DateTime<FixedOffset>>()
        .unwrap();
    assert!((transit - expected_transit).abs() < TimeDelta::milliseconds(5));
}

#[test]
fn events_late_in_the_evening_belong_to_same_day() {
    let when = "2024-06-20T23:30:00-04:00"
        .parse::<DateTime<FixedOffset>>()
        .unwrap();

    let sunrise = noaa::sunrise(when, 40.7128, -74.006).unwrap();
    let sunset = noaa::sunset(when, 40.7128, -74.006).unwrap();

    let expected_sunrise = "2024-06-20T05:24:54.183-04:00"
        .parse::<DateTime<FixedOffset>>()
        .unwrap();
    let expected_sunset = "2024-06-20T20:30:39.173-04:00"
        .parse::<DateTime<FixedOffset>>()
        .unwrap();
    assert!((sunrise - expected_sunrise).abs() < TimeDelta::milliseconds(5));
    assert!((sunset - expected_sunset).abs() < TimeDelta::milliseconds(5));
}
