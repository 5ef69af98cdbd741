//! Lexical path normalisation for request paths and registration patterns.
//!
//! Lookup expects a normalised path: no `.` or `..` segments and no repeated
//! slashes. [`clean_path`] produces that form without touching the filesystem.
//! Request paths are percent-decoded with [`decode_path`] first.

use std::borrow::Cow;

use tracing::debug;

/// Return the shortest path equivalent to `path` by purely lexical processing.
///
/// - repeated slashes collapse to one
/// - `.` segments are dropped
/// - `..` removes the preceding segment; at the root it is dropped
/// - a trailing slash is removed unless the result is `/`
///
/// An empty input yields `"."`.
#[must_use]
pub fn clean_path(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }
    let rooted = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::with_capacity(path.matches('/').count() + 1);

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if rooted => {}
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }

    let joined = segments.join("/");
    if rooted {
        let mut out = String::with_capacity(joined.len() + 1);
        out.push('/');
        out.push_str(&joined);
        out
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

/// Percent-decode a raw request path.
///
/// Returns `raw` unchanged when the decoded bytes are not valid UTF-8.
#[must_use]
pub fn decode_path(raw: &str) -> Cow<'_, str> {
    match urlencoding::decode(raw) {
        Ok(decoded) => decoded,
        Err(e) => {
            debug!(path = %raw, error = %e, "Path does not decode to UTF-8; matching raw path");
            Cow::Borrowed(raw)
        }
    }
}

/// Join path elements with `/` and clean the result.
///
/// Empty elements are ignored; if every element is empty the result is the
/// empty string.
#[must_use]
pub fn join_path(elements: &[&str]) -> String {
    let parts: Vec<&str> = elements.iter().copied().filter(|e| !e.is_empty()).collect();
    if parts.is_empty() {
        return String::new();
    }
    clean_path(&parts.join("/"))
}
