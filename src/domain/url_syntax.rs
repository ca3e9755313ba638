use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

const URL_PATTERN: &str = concat!(
    r"^(https?://)?",
    r"((([a-z0-9]([a-z0-9-]*[a-z0-9])?)\.)+[a-z]{2,}",
    r"|(([0-9]{1,3}\.){3}[0-9]{1,3}))",
    r"(:[0-9]+)?(/[-a-z0-9%_.~+]*)*",
    r"(\?[;&a-z0-9%_.~+=-]*)?",
    r"(#[-a-z0-9_]*)?$",
);

// ASCII-only case folding: Unicode folding would let `[a-z]` match U+017F and U+212A.
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(URL_PATTERN)
        .case_insensitive(true)
        .unicode(false)
        .build()
        .expect("url pattern is a valid regex")
});

/// Syntactic check only; says nothing about whether the link resolves.
pub fn validate_url_syntax(candidate: &str) -> bool {
    URL_REGEX.is_match(candidate)
}
