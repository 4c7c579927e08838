//! Per-line log prefix: `"<tag> <YYYY-MM-DD> <HH:MM:SS>.<ffffff> <level>  "`.
//!
//! [`prefix_reference`] renders the prefix from scratch. [`PrefixCache`] produces the same
//! bytes while re-rendering only the calendar fields that changed since its previous call.

mod cache;
mod reference;

#[cfg(test)]
mod tests;

pub use cache::PrefixCache;
pub use reference::prefix_reference;

/// Minimum column width of the level tag. Levels are followed by two spaces.
pub const LEVEL_WIDTH: usize = 3;
