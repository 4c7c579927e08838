use std::borrow::Cow;
use url::{Host, Url};

/// How an alias string is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AliasForm<'a> {
    /// Host taken from a URL or from a bare `host[:port][/path]`; matched literally.
    Host(Cow<'a, str>),
    /// Anything that is not a well-formed host, used verbatim as regex source.
    Pattern(&'a str),
}

/// Decide whether `input` names a host or is a regex.
pub fn classify_alias(input: &str) -> AliasForm<'_> {
    let host = if input.contains("://") {
        url_host(input).map(Cow::Owned)
    } else {
        bare_host(input).map(Cow::Borrowed)
    };

    match host {
        Some(host) => AliasForm::Host(host),
        None => AliasForm::Pattern(input),
    }
}

fn url_host(input: &str) -> Option<String> {
    let url = Url::parse(input).ok()?;
    match url.host()? {
        Host::Domain(domain) => is_hostname(domain).then(|| domain.to_owned()),
        Host::Ipv4(addr) => Some(addr.to_string()),
        Host::Ipv6(addr) => Some(format!("[{addr}]")),
    }
}

/// `[userinfo@]host[:port][/path]` without a scheme.
fn bare_host(input: &str) -> Option<&str> {
    let authority = input.split('/').next()?;
    let host_port = authority
        .rsplit_once('@')
        .map_or(authority, |(_, host_port)| host_port);
    let host = strip_port(host_port);

    is_hostname(host).then_some(host)
}

/// Drop a trailing `:<digits>`.
pub(crate) fn strip_port(host_port: &str) -> &str {
    match host_port.rsplit_once(':') {
        Some((host, port)) if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => {
            host
        }
        _ => host_port,
    }
}

/// Only characters valid in a DNS hostname.
fn is_hostname(host: &str) -> bool {
    !host.is_empty()
        && host
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'.')
}
