//! Route processing utilities.
//!
//! Maps page routes (as written in a manifest) onto the files the head
//! fragments are written to.

use std::path::PathBuf;

/// Extension appended to every rendered head fragment.
pub const FRAGMENT_EXT: &str = "head.html";

/// Strip leading and trailing slashes from a route.
///
/// # Examples
/// ```ignore
/// assert_eq!(trim_slashes("/services/roofing/"), "services/roofing");
/// assert_eq!(trim_slashes("/"), "");
/// ```
#[inline]
pub fn trim_slashes(route: &str) -> &str {
    route.trim_matches('/')
}

/// Split a route into path and fragment parts.
///
/// Returns `(path, "")` when there is no `#`.
#[inline]
pub fn split_path_fragment(route: &str) -> (&str, &str) {
    route.split_once('#').unwrap_or((route, ""))
}

/// Convert a page route into a relative fragment file path.
///
/// Query strings and fragments are dropped, the root route maps to `index`.
///
/// # Examples
/// ```ignore
/// route_to_fragment_path("/")                 -> "index.head.html"
/// route_to_fragment_path("/services/roofing") -> "services/roofing.head.html"
/// route_to_fragment_path("about/")            -> "about.head.html"
/// ```
pub fn route_to_fragment_path(route: &str) -> PathBuf {
    let (path, _) = split_path_fragment(route);
    let path = path.split_once('?').map_or(path, |(p, _)| p);
    let path = trim_slashes(path);

    let mut out = PathBuf::new();
    let segments: Vec<&str> = path
        .split('/')
        .filter(|s| !s.is_empty() && *s != "." && *s != "..")
        .collect();

    match segments.split_last() {
        Some((last, parents)) => {
            for segment in parents {
                out.push(segment);
            }
            out.push(format!("{last}.{FRAGMENT_EXT}"));
        }
        None => out.push(format!("index.{FRAGMENT_EXT}")),
    }
    out
}
