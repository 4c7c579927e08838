use crate::alias::AliasSet;
use crate::conf::load_config;
use crate::logging::init_logging;
use anyhow::Context;
use std::io::{self, BufRead};
use std::path::Path;
use tracing::{info, warn};

/// Read `Host` header values from stdin, one per line, and log which alias accepts each.
pub fn run(config: &Path) -> anyhow::Result<()> {
    let validated = load_config(config)
        .with_context(|| format!("failed to load config from {}", config.display()))?;
    let _guard = init_logging(&validated.config.logging)?;

    for issue in &validated.report.warnings {
        warn!(origin = %issue.origin, "{}", issue.message);
    }
    info!(aliases = validated.config.aliases.len(), "host aliases loaded");

    let stdin = io::stdin();
    let (matched, total) = match_hosts(&validated.config.aliases, stdin.lock())?;
    info!(matched, total, "done");

    Ok(())
}

pub fn match_hosts(aliases: &AliasSet, input: impl BufRead) -> io::Result<(usize, usize)> {
    let mut matched = 0;
    let mut total = 0;

    for line in input.lines() {
        let line = line?;
        let host = line.trim();
        if host.is_empty() {
            continue;
        }
        total += 1;

        match aliases.find(host) {
            Some(alias) => {
                matched += 1;
                info!(host, alias = %alias.alias, pattern = %alias.pattern, "host accepted");
            }
            None => warn!(host, "no alias matches host"),
        }
    }

    Ok((matched, total))
}

#[cfg(test)]
mod tests {
    use super::match_hosts;
    use crate::alias::AliasSet;
    use pretty_assertions::assert_eq;

    #[test]
    fn counts_matching_hosts() {
        // Arrange
        let (aliases, _) = AliasSet::compile(["https://test4.local:8080", "test[1-3]"]);
        let input = "test4.local:443\n\ntest2\nother.local\n";

        // Act
        let counts = match_hosts(&aliases, input.as_bytes()).unwrap();

        // Assert
        assert_eq!(counts, (2, 3));
    }
}
