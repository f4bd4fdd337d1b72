//! Syntactic checks applied during structural decoding.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

/// Email address grammar from the HTML living standard.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$",
    )
    .expect("Invalid email regex pattern")
});

/// Return `true` when `value` is a syntactically valid email address.
///
/// Says nothing about which domains are acceptable.
pub(crate) fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Parse an absolute URL with a host.
pub(crate) fn parse_link(value: &str) -> Option<Url> {
    Url::parse(value).ok().filter(Url::has_host)
}
