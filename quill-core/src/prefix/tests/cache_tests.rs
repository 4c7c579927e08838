use crate::prefix::{PrefixCache, prefix_reference};
use crate::time::Zone;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

const TAG: &str = "tst";
const LEVEL: &str = "XYZ";

fn now() -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(1_760_000_000)
}

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn secs(v: u64) -> Duration {
    Duration::from_secs(v)
}

fn days(v: u64) -> Duration {
    secs(v * 24 * 3600)
}

/// `12h 7m 5s 369ms`
fn half_day() -> Duration {
    secs(12 * 3600 + 7 * 60 + 5) + ms(369)
}

/// Update the cache, check it against the reference and return the date-time part.
fn log_date_time(cache: &mut PrefixCache, t: SystemTime) -> String {
    let zone = *cache.zone();
    let prefix = cache.update(LEVEL, t).to_string();
    assert_eq!(prefix, prefix_reference(TAG, LEVEL, t, &zone));

    let first = prefix.find(' ').unwrap();
    let second = prefix[first + 1..].find(' ').unwrap() + first + 1;
    let third = prefix[second + 1..].find(' ').unwrap() + second + 1;
    prefix[first + 1..third].to_string()
}

#[test]
fn prefix_starts_with_tag_and_ends_with_level() {
    // Arrange
    let mut cache = PrefixCache::new(TAG, Zone::Utc);

    // Act
    let prefix = cache.update(LEVEL, now());

    // Assert
    assert!(prefix.starts_with("tst "));
    assert!(prefix.ends_with(" XYZ  "));
    assert_eq!(cache.last_update(), Some(now()));
}

#[test]
fn past_dates_match_reference() {
    let mut cache = PrefixCache::new(TAG, Zone::Utc);

    let cases = [
        (Duration::ZERO, "2025-10-09 08:53:20.000000"),
        (ms(369), "2025-10-09 08:53:19.631000"),
        (secs(5) + ms(369), "2025-10-09 08:53:14.631000"),
        (secs(7 * 60 + 5) + ms(369), "2025-10-09 08:46:14.631000"),
        (half_day(), "2025-10-08 20:46:14.631000"),
        (days(2 * 365 + 1) + half_day(), "2023-10-08 20:46:14.631000"),
        (days(31 + 30) + half_day(), "2025-08-08 20:46:14.631000"),
        (days(2) + half_day(), "2025-10-06 20:46:14.631000"),
        (
            days(5 * 365 + 2) + days(4 * 30) + days(3) + half_day(),
            "2020-06-06 20:46:14.631000",
        ),
    ];

    for (delta, expected) in cases {
        assert_eq!(log_date_time(&mut cache, now() - delta), expected);
    }
}

#[test]
fn future_dates_match_reference() {
    let mut cache = PrefixCache::new(TAG, Zone::Utc);

    let cases = [
        (ms(369), "2025-10-09 08:53:20.369000"),
        (secs(5) + ms(369), "2025-10-09 08:53:25.369000"),
        (secs(7 * 60 + 5) + ms(369), "2025-10-09 09:00:25.369000"),
        (half_day(), "2025-10-09 21:00:25.369000"),
        (days(2 * 365 - 1) + half_day(), "2027-10-08 21:00:25.369000"),
        (days(2 * 30) + half_day(), "2025-12-08 21:00:25.369000"),
        (days(2) + half_day(), "2025-10-11 21:00:25.369000"),
        (
            days(5 * 365) + days(4 * 30) + days(3) + half_day(),
            "2031-02-08 21:00:25.369000",
        ),
    ];

    for (delta, expected) in cases {
        assert_eq!(log_date_time(&mut cache, now() + delta), expected);
    }
}

#[test]
fn year_rollover_rerenders_every_field() {
    // Arrange
    let last_second = UNIX_EPOCH + Duration::from_secs(1_767_225_599);
    let mut used = PrefixCache::new(TAG, Zone::Utc);
    let _ = used.update(LEVEL, now());
    let mut fresh = PrefixCache::new(TAG, Zone::Utc);

    // Act
    let before = used.update(LEVEL, last_second).to_string();
    let fresh_before = fresh.update(LEVEL, last_second).to_string();
    let after = fresh.update(LEVEL, last_second + secs(1)).to_string();

    // Assert
    assert_eq!(before, "tst 2025-12-31 23:59:59.000000 XYZ  ");
    assert_eq!(fresh_before, before);
    assert_eq!(after, "tst 2026-01-01 00:00:00.000000 XYZ  ");
    assert_eq!(
        after,
        prefix_reference(TAG, LEVEL, last_second + secs(1), &Zone::Utc)
    );
}

#[test]
fn repeated_and_backwards_times_are_rendered_correctly() {
    let mut cache = PrefixCache::new(TAG, Zone::Utc);
    let t = now() + Duration::from_nanos(123_456_789);

    let times = [
        t,
        t,
        t - Duration::from_nanos(1_000),
        t + days(400),
        t - days(400),
        t,
    ];

    for time in times {
        let expected = prefix_reference(TAG, LEVEL, time, &Zone::Utc);
        assert_eq!(cache.update(LEVEL, time), expected);
    }
}

#[test]
fn level_can_change_between_calls() {
    let mut cache = PrefixCache::new("wsd", Zone::Utc);

    assert_eq!(cache.update("ERR", now()), "wsd 2025-10-09 08:53:20.000000 ERR  ");
    assert_eq!(cache.update("I", now()), "wsd 2025-10-09 08:53:20.000000 I    ");
}

#[test]
fn fixed_offset_zone_matches_reference_across_rollover() {
    // Arrange
    let est: Zone = "-05:00".parse().unwrap();
    let mut cache = PrefixCache::new(TAG, est);
    let t = UNIX_EPOCH + Duration::from_secs(1_767_225_599);

    // Act
    let prefix = cache.update(LEVEL, t).to_string();

    // Assert
    assert_eq!(prefix, "tst 2025-12-31 18:59:59.000000 XYZ  ");
    assert_eq!(
        cache.update(LEVEL, t + secs(5 * 3600 + 1)),
        prefix_reference(TAG, LEVEL, t + secs(5 * 3600 + 1), &est)
    );
}

#[test]
fn local_zone_matches_reference() {
    let mut cache = PrefixCache::new(TAG, Zone::Local);
    let t = now() + ms(17);

    assert_eq!(
        cache.update(LEVEL, t),
        prefix_reference(TAG, LEVEL, t, &Zone::Local)
    );
}

fn any_time() -> impl Strategy<Value = SystemTime> {
    (0u64..2_000_000_000, 0u32..1_000_000_000)
        .prop_map(|(secs, nanos)| UNIX_EPOCH + Duration::new(secs, nanos))
}

proptest! {
    #[test]
    fn cache_agrees_with_reference_for_any_sequence(
        times in prop::collection::vec(any_time(), 1..64),
    ) {
        let mut cache = PrefixCache::new(TAG, Zone::Utc);

        for t in times {
            let expected = prefix_reference(TAG, LEVEL, t, &Zone::Utc);
            prop_assert_eq!(cache.update(LEVEL, t), expected.as_str());

            let mut fresh = PrefixCache::new(TAG, Zone::Utc);
            prop_assert_eq!(fresh.update(LEVEL, t), expected.as_str());
        }
    }

    #[test]
    fn cache_agrees_with_reference_for_nearby_times(
        start in any_time(),
        steps in prop::collection::vec(-5_000_000i64..5_000_000, 1..64),
    ) {
        let zone: Zone = "+05:30".parse().unwrap();
        let mut cache = PrefixCache::new(TAG, zone);
        let mut t = start;

        for step in steps {
            let delta = Duration::from_micros(step.unsigned_abs());
            t = if step < 0 { t - delta } else { t + delta };

            let expected = prefix_reference(TAG, LEVEL, t, &zone);
            prop_assert_eq!(cache.update(LEVEL, t), expected.as_str());
        }
    }
}
