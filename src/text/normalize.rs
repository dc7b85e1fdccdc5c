//! Raw text normalization
//!
//! Strips the social-media markup that would otherwise pollute scoring and
//! tokenization: URLs, @mentions, and the `#` of hashtags (the tag word
//! itself is kept).

use once_cell::sync::Lazy;
use regex::Regex;

static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"http\S+|www\S+").unwrap());
static MENTION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"@\w+").unwrap());
static HASHTAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#(\w+)").unwrap());

/// Normalize raw item text for scoring.
///
/// Applied in order: drop URL runs, drop `@username` mentions, detach the
/// hashtag marker (`#word` becomes `word`), collapse whitespace runs and
/// trim. Idempotent; empty input yields empty output.
pub fn normalize(raw: &str) -> String {
    let t = URL_RE.replace_all(raw, "");
    let t = MENTION_RE.replace_all(&t, "");
    let t = HASHTAG_RE.replace_all(&t, "$1");
    t.split_whitespace().collect::<Vec<_>>().join(" ")
}
