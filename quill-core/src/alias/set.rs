use crate::alias::classify::strip_port;
use crate::alias::parse_alias;
use regex::{Regex, RegexBuilder};
use tracing::{debug, warn};

/// An accepted alias together with its anchored matcher.
#[derive(Debug, Clone)]
pub struct CompiledAlias {
    pub alias: String,
    pub pattern: String,
    regex: Regex,
}

impl CompiledAlias {
    pub fn is_match(&self, host: &str) -> bool {
        self.regex.is_match(host)
    }
}

/// Host aliases accepted from configuration.
#[derive(Debug, Clone, Default)]
pub struct AliasSet {
    aliases: Vec<CompiledAlias>,
}

impl AliasSet {
    /// Compile every alias, returning the set and the aliases that were rejected.
    pub fn compile<I, S>(aliases: I) -> (Self, Vec<String>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = AliasSet::default();
        let mut rejected = Vec::new();

        for alias in aliases {
            let alias = alias.as_ref();
            match compile_one(alias) {
                Some(compiled) => {
                    debug!(alias, pattern = %compiled.pattern, "host alias accepted");
                    set.aliases.push(compiled);
                }
                None => {
                    warn!(alias, "host alias rejected");
                    rejected.push(alias.to_owned());
                }
            }
        }

        (set, rejected)
    }

    /// First alias matching a `Host` header value (port ignored, case-insensitive).
    pub fn find(&self, host_header: &str) -> Option<&CompiledAlias> {
        let host = host_without_port(host_header.trim());
        self.aliases.iter().find(|a| a.is_match(host))
    }

    pub fn matches(&self, host_header: &str) -> bool {
        self.find(host_header).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompiledAlias> {
        self.aliases.iter()
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

fn compile_one(alias: &str) -> Option<CompiledAlias> {
    let pattern = parse_alias(alias);
    if pattern.is_empty() {
        return None;
    }

    let regex = RegexBuilder::new(&format!("^(?:{pattern})$"))
        .case_insensitive(true)
        .build()
        .ok()?;

    Some(CompiledAlias {
        alias: alias.to_owned(),
        pattern,
        regex,
    })
}

fn host_without_port(host_header: &str) -> &str {
    if host_header.starts_with('[') {
        // IPv6 literal, the port (if any) follows the closing bracket.
        return match host_header.find(']') {
            Some(end) => &host_header[..=end],
            None => host_header,
        };
    }
    strip_port(host_header)
}
