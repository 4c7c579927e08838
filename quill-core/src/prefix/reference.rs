use crate::prefix::LEVEL_WIDTH;
use crate::time::{Zone, breakdown};
use std::time::SystemTime;

/// Render the prefix for `t` without any caching.
pub fn prefix_reference(tag: &str, level: &str, t: SystemTime, zone: &Zone) -> String {
    let b = breakdown(t, zone);
    format!(
        "{tag} {:04}-{:02}-{:02} {:02}:{:02}:{:02}.{:06} {level:<width$}  ",
        b.year,
        b.month,
        b.day,
        b.hour,
        b.minute,
        b.second,
        b.micros,
        width = LEVEL_WIDTH,
    )
}
