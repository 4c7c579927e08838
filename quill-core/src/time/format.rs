use crate::time::{TimeFormatError, Zone, breakdown};
use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Timelike, Utc};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

const HTTP_DATE: &str = "%a, %d %b %Y %H:%M:%S";
const MAX_FRACTION_DIGITS: usize = 6;
const MIN_YEAR_DIGITS: usize = 4;
const MAX_YEAR_DIGITS: usize = 6;

/// Render `t` as `YYYY-MM-DDTHH:MM:SS.ffffffZ` in UTC, truncating to microseconds.
pub fn to_iso8601_fraction(t: SystemTime) -> String {
    let b = breakdown(t, &Zone::Utc);
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:06}Z",
        b.year, b.month, b.day, b.hour, b.minute, b.second, b.micros
    )
}

/// Parse the output of [`to_iso8601_fraction`].
///
/// The fraction may carry 1 to 6 digits or be absent entirely. `field` names the value
/// being parsed and is carried into the error.
pub fn parse_iso8601_fraction(input: &str, field: &str) -> Result<SystemTime, TimeFormatError> {
    let invalid = |reason: &str| TimeFormatError::parse(field, input, reason);

    if input.chars().any(char::is_whitespace) {
        return Err(invalid("unexpected whitespace"));
    }

    let body = input
        .strip_suffix('Z')
        .ok_or_else(|| invalid("missing 'Z' suffix"))?;

    let (seconds, micros) = match body.split_once('.') {
        Some((seconds, fraction)) => {
            let micros = parse_fraction(fraction)
                .ok_or_else(|| invalid("fraction must be 1 to 6 digits"))?;
            (seconds, micros)
        }
        None => (body, 0),
    };

    let [year, month, day, hour, minute, second] =
        split_date_time(seconds).ok_or_else(|| invalid("expected YYYY-MM-DDTHH:MM:SS"))?;

    let naive = NaiveDate::from_ymd_opt(year as i32, month, day)
        .ok_or_else(|| invalid("date out of range"))?
        .and_hms_micro_opt(hour, minute, second, micros)
        .ok_or_else(|| invalid("time out of range"))?;

    Ok(SystemTime::from(Utc.from_utc_datetime(&naive)))
}

/// Year of four to six digits, every other field exactly two.
fn split_date_time(seconds: &str) -> Option<[u32; 6]> {
    let (date, time) = seconds.split_once('T')?;
    let (year, month_day) = date.split_once('-')?;
    let (month, day) = month_day.split_once('-')?;

    let mut clock = time.split(':');
    let (hour, minute, second) = (clock.next()?, clock.next()?, clock.next()?);
    if clock.next().is_some() {
        return None;
    }

    Some([
        digits(year, MIN_YEAR_DIGITS, MAX_YEAR_DIGITS)?,
        digits(month, 2, 2)?,
        digits(day, 2, 2)?,
        digits(hour, 2, 2)?,
        digits(minute, 2, 2)?,
        digits(second, 2, 2)?,
    ])
}

fn digits(field: &str, min: usize, max: usize) -> Option<u32> {
    if field.len() < min || field.len() > max || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

fn parse_fraction(fraction: &str) -> Option<u32> {
    if fraction.is_empty()
        || fraction.len() > MAX_FRACTION_DIGITS
        || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }

    let value: u32 = fraction.parse().ok()?;
    let scale = 10u32.pow((MAX_FRACTION_DIGITS - fraction.len()) as u32);
    Some(value * scale)
}

/// Drop everything below the microsecond, rounding towards the past.
pub fn truncate_to_micros(t: SystemTime) -> SystemTime {
    match t.duration_since(UNIX_EPOCH) {
        Ok(after) => UNIX_EPOCH + Duration::new(after.as_secs(), after.subsec_micros() * 1_000),
        Err(err) => {
            let before = err.duration();
            if before.subsec_nanos() % 1_000 == 0 {
                t
            } else {
                UNIX_EPOCH - Duration::new(before.as_secs(), (before.subsec_micros() + 1) * 1_000)
            }
        }
    }
}

/// Render `t` as an RFC-1123 date without the trailing zone token.
pub fn to_http_date(t: SystemTime) -> String {
    DateTime::<Utc>::from(t).format(HTTP_DATE).to_string()
}

/// Parse an HTTP date, with or without the trailing `GMT`.
pub fn parse_http_date(input: &str, field: &str) -> Result<SystemTime, TimeFormatError> {
    httpdate::parse_http_date(input)
        .or_else(|_| httpdate::parse_http_date(&format!("{input} GMT")))
        .map_err(|e| TimeFormatError::parse(field, input, e.to_string()))
}

/// Describe `t` in `zone` together with its offset from `reference`.
///
/// ```text
/// Thu Oct 09 08:53:19.631 2025 (369ms ago)
/// ```
pub fn relative_description(reference: SystemTime, t: SystemTime, zone: &Zone) -> String {
    let local = zone.localize(t);
    let millis = (local.nanosecond() / 1_000_000).min(999);

    let (offset, direction) = match t.duration_since(reference) {
        Ok(ahead) if !ahead.is_zero() => (ahead, "later"),
        Ok(_) => (Duration::ZERO, "ago"),
        Err(behind) => (behind.duration(), "ago"),
    };

    format!(
        "{}.{:03} {} ({} {})",
        local.format("%a %b %d %H:%M:%S"),
        millis,
        local.year(),
        format_offset(offset),
        direction
    )
}

fn format_offset(offset: Duration) -> String {
    let total = offset.as_millis();
    let units = [
        (total / 3_600_000, "h"),
        (total / 60_000 % 60, "m"),
        (total / 1_000 % 60, "s"),
        (total % 1_000, "ms"),
    ];

    let parts: Vec<String> = units
        .iter()
        .filter(|(value, _)| *value > 0)
        .map(|(value, unit)| format!("{value}{unit}"))
        .collect();

    if parts.is_empty() {
        "0ms".to_string()
    } else {
        parts.join(" ")
    }
}
