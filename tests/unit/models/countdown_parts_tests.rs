// Zero-padding of decomposed countdown values

use auction_countdown::models::countdown::CountdownParts;
use chrono::Duration;
use proptest::prelude::*;
use test_case::test_case;

fn parts(days: i64, hours: i64, minutes: i64, seconds: i64) -> CountdownParts {
    let diff = Duration::days(days)
        + Duration::hours(hours)
        + Duration::minutes(minutes)
        + Duration::seconds(seconds);
    CountdownParts::from_duration(diff).unwrap()
}

#[test_case(0, 0, 0, 1 => ["00", "00", "00", "01"]; "one second left")]
#[test_case(0, 0, 1, 0 => ["00", "00", "01", "00"]; "one minute left")]
#[test_case(6, 8, 0, 0 => ["06", "08", "00", "00"]; "monday morning")]
#[test_case(6, 23, 59, 59 => ["06", "23", "59", "59"]; "just after close")]
#[test_case(10, 9, 5, 7 => ["10", "09", "05", "07"]; "two digit days")]
#[test_case(123, 0, 0, 9 => ["123", "00", "00", "09"]; "days wider than two digits")]
fn test_padded_values(days: i64, hours: i64, minutes: i64, seconds: i64) -> [String; 4] {
    parts(days, hours, minutes, seconds).padded()
}

#[test_case(0; "zero")]
#[test_case(-1; "one millisecond late")]
#[test_case(-86_400_000; "a day late")]
fn test_non_positive_is_not_rendered(ms: i64) {
    assert!(CountdownParts::from_millis(ms).is_none());
}

#[test]
fn test_display_joins_padded_values() {
    assert_eq!(parts(0, 0, 1, 0).to_string(), "00 00 01 00");
}

proptest! {
    /// Property: hours/minutes/seconds are always exactly two characters
    #[test]
    fn prop_small_units_are_two_chars(ms in 1i64..(30 * 86_400_000)) {
        let parts = CountdownParts::from_millis(ms).unwrap();
        let [days, hours, minutes, seconds] = parts.padded();
        prop_assert!(days.len() >= 2);
        prop_assert_eq!(hours.len(), 2);
        prop_assert_eq!(minutes.len(), 2);
        prop_assert_eq!(seconds.len(), 2);
        prop_assert_eq!(days.parse::<i64>().unwrap(), ms / 86_400_000);
    }
}
