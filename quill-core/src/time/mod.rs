//! Calendar breakdown and textual time representations.
//!
//! Every local-time operation takes an explicit [`Zone`] so callers (and tests) decide which
//! rules apply instead of relying on ambient process state.

mod breakdown;
mod error;
mod format;
mod zone;


pub use breakdown::{CalendarBreakdown, CalendarField, breakdown};
pub use error::{TimeFormatError, ZoneError};
pub use format::*;
pub use zone::Zone;
