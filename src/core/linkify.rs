//! URL-to-anchor conversion that leaves existing markup alone.

use regex::{Captures, Regex};
use std::sync::OnceLock;

static TAG_RE: OnceLock<Regex> = OnceLock::new();
static URL_RE: OnceLock<Regex> = OnceLock::new();

fn tag_regex() -> &'static Regex {
    TAG_RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"))
}

fn url_regex() -> &'static Regex {
    URL_RE.get_or_init(|| Regex::new(r#"https?://[^\s<>"']+"#).expect("url pattern is valid"))
}

/// Wraps a single URL in an anchor that opens in a new tab.
pub fn anchor_for(url: &str) -> String {
    format!(
        r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
        url, url
    )
}

/// Replaces every `http://` / `https://` URL in `text` with an anchor tag.
///
/// Tags already present in the input are copied through byte for byte and
/// their attributes are never scanned for URLs. Addresses without a scheme,
/// such as `contact@example.com` or `example.com`, are left as plain text.
pub fn linkify_urls(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut links = 0usize;

    for tag in tag_regex().find_iter(text) {
        links += linkify_segment(&text[last..tag.start()], &mut out);
        out.push_str(tag.as_str());
        last = tag.end();
    }
    links += linkify_segment(&text[last..], &mut out);

    if links > 0 {
        tracing::debug!("Linkified {} URL(s)", links);
    }
    out
}

/// Linkifies a tag-free segment into `out`, returning how many URLs it wrapped.
fn linkify_segment(segment: &str, out: &mut String) -> usize {
    let mut count = 0;
    let replaced = url_regex().replace_all(segment, |caps: &Captures| {
        count += 1;
        anchor_for(&caps[0])
    });
    out.push_str(&replaced);
    count
}
