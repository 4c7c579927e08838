use crate::time::{
    Zone, parse_iso8601_fraction, relative_description, to_http_date, to_iso8601_fraction,
};
use std::time::SystemTime;

/// ISO-8601, HTTP-date and relative rendering of `t`, one per line.
pub fn describe_time(t: SystemTime, now: SystemTime, zone: &Zone) -> String {
    format!(
        "iso8601:  {}\nhttp:     {}\nrelative: {}",
        to_iso8601_fraction(t),
        to_http_date(t),
        relative_description(now, t, zone)
    )
}

pub fn run(input: Option<String>, zone: Zone) -> anyhow::Result<()> {
    let now = SystemTime::now();
    let t = match input {
        Some(s) => parse_iso8601_fraction(&s, "time")?,
        None => now,
    };

    println!("{}", describe_time(t, now, &zone));
    Ok(())
}
