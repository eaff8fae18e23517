//! Parsing of the `Link` response header Canvas paginates with.
//!
//! The header is a comma-separated list of segments shaped like
//! `<https://...>; rel="next"`. Canvas also sends `current`, `first`,
//! `last` and `prev` relations; only `next` drives the page walk.

use regex::Regex;

/// One relation from a `Link` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub rel: String,
    pub url: String,
}

/// Split a `Link` header into its relations.
///
/// A segment missing the angle-bracketed URL or the `rel` attribute is
/// skipped, not an error.
pub fn parse(header: &str) -> Vec<Link> {
    let url_re = Regex::new(r"^\s*<([^>]*)>").unwrap();
    let rel_re = Regex::new(r#"rel="([^"]*)""#).unwrap();

    header
        .split(',')
        .filter_map(|segment| {
            let caps = url_re.captures(segment)?;
            let url = caps[1].to_string();
            let params = &segment[caps.get(0).unwrap().end()..];
            let rel = rel_re.captures(params)?[1].to_string();

            Some(Link { rel, url })
        })
        .collect()
}

/// The next page's URL, if the header advertises one.
///
/// `None` is the normal end of a page walk.
pub fn next_url(header: &str) -> Option<String> {
    parse(header)
        .into_iter()
        .find(|link| link.rel == "next")
        .map(|link| link.url)
}
