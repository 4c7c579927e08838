use crate::alias::{AliasForm, classify_alias};
use regex::Regex;

/// Compile an alias into regex source.
///
/// Hosts (from URLs or bare `host[:port][/path]` forms) have their metacharacters escaped.
/// Anything else is taken as a regex and returned unchanged when it compiles. An empty
/// string means the alias is rejected.
pub fn parse_alias(input: &str) -> String {
    match classify_alias(input) {
        AliasForm::Host(host) => escape_host(&host),
        AliasForm::Pattern(pattern) if !pattern.is_empty() && Regex::new(pattern).is_ok() => {
            pattern.to_owned()
        }
        AliasForm::Pattern(_) => String::new(),
    }
}

fn escape_host(host: &str) -> String {
    let mut escaped = String::with_capacity(host.len() + 8);
    for c in host.chars() {
        if matches!(c, '.' | '[' | ']') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
