//! Host aliases: operator-supplied hostnames, URLs or regexes, turned into regex source
//! used to match the `Host` header of incoming requests.

mod classify;
mod compile;
mod set;

#[cfg(test)]
mod tests;

pub use classify::{AliasForm, classify_alias};
pub use compile::parse_alias;
pub use set::{AliasSet, CompiledAlias};
