//! Path parameter extraction.
//!
//! Extraction is a second pass, independent of the trie: once a route has been
//! selected, the concrete path and the route's pattern are split on `/` and
//! compared segment by segment.
//!
//! - `:name` captures the path segment at the same index
//! - `*name` captures every remaining segment joined with `/` and must be the
//!   final pattern segment; a bare `*` is named `catch`

use serde::ser::{Serialize, SerializeMap, Serializer};
use smallvec::SmallVec;

use crate::error::{Result, RouterError};
use crate::handler::Request;

/// Maximum number of path parameters before heap allocation.
pub const MAX_INLINE_PARAMS: usize = 8;

/// Name given to a catch-all segment written as a bare `*`
pub const DEFAULT_CATCH_ALL: &str = "catch";

/// Stack-allocated parameter storage
pub type ParamVec = SmallVec<[(String, String); MAX_INLINE_PARAMS]>;

/// Parameters extracted for one request, in pattern-segment order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pairs: ParamVec,
}

impl Params {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((name.into(), value.into()));
    }

    /// Value for `name`, or `""` when absent.
    ///
    /// Uses "last write wins" semantics if a name appears twice.
    #[must_use]
    pub fn get(&self, name: &str) -> &str {
        self.try_get(name).unwrap_or("")
    }

    #[must_use]
    pub fn try_get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rfind(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Flat `name:value,name:value` form carried in the legacy parameter header.
    #[must_use]
    pub fn encode(&self) -> String {
        let mut out = String::new();
        for (i, (k, v)) in self.pairs.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push_str(k);
            out.push(':');
            out.push_str(v);
        }
        out
    }

    /// Parse the flat form produced by [`Params::encode`].
    ///
    /// Entries that do not split into exactly one name and one value are
    /// skipped, so values containing `:` or `,` do not survive this encoding.
    #[must_use]
    pub fn load(source: &str) -> Self {
        let mut params = Self::new();
        for entry in source.split(',') {
            let mut parts = entry.split(':');
            if let (Some(name), Some(value), None) = (parts.next(), parts.next(), parts.next()) {
                params.push(name, value);
            }
        }
        params
    }

    /// Parameters stashed on an in-flight request.
    ///
    /// Reads the request extension set by the mux. When none is present and
    /// `header` names a header, that header's encoded value is parsed instead.
    /// Returns an empty set when neither is available.
    #[must_use]
    pub fn from_request(req: &Request, header: Option<&str>) -> Self {
        if let Some(params) = req.extensions().get::<Params>() {
            return params.clone();
        }
        header
            .and_then(|name| req.headers().get(name))
            .and_then(|value| value.to_str().ok())
            .map(Params::load)
            .unwrap_or_default()
    }
}

impl Serialize for Params {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        // Only the last value of a repeated name is written, as with `get`.
        let latest = |i: usize, k: &String| !self.pairs[i + 1..].iter().any(|(later, _)| later == k);
        let len = self.pairs.iter().enumerate().filter(|(i, (k, _))| latest(*i, k)).count();
        let mut map = serializer.serialize_map(Some(len))?;
        for (i, (k, v)) in self.pairs.iter().enumerate() {
            if latest(i, k) {
                map.serialize_entry(k, v)?;
            }
        }
        map.end()
    }
}

/// Parameters stashed on `req` by the mux (see [`Params::from_request`]).
#[must_use]
pub fn params(req: &Request) -> Params {
    Params::from_request(req, None)
}

/// Reconstruct named parameters from a matched path and its pattern.
///
/// Patterns without `:` or `*` yield an empty set. Fails with
/// [`RouterError::BadPattern`] if the path has fewer segments than the
/// pattern or a catch-all is not the final segment.
pub fn extract_params(path: &str, pattern: &str) -> Result<Params> {
    let mut params = Params::new();
    if !pattern.contains([':', '*']) {
        return Ok(params);
    }

    let path_segments: Vec<&str> = path.split('/').collect();
    let pattern_segments: Vec<&str> = pattern.split('/').collect();
    if path_segments.len() < pattern_segments.len() {
        return Err(RouterError::BadPattern);
    }

    let last = pattern_segments.len() - 1;
    for (idx, segment) in pattern_segments.iter().enumerate() {
        if let Some(name) = segment.strip_prefix(':') {
            params.push(name, path_segments[idx]);
        } else if let Some(name) = segment.strip_prefix('*') {
            if idx != last {
                return Err(RouterError::BadPattern);
            }
            let name = if name.is_empty() { DEFAULT_CATCH_ALL } else { name };
            params.push(name, path_segments[idx..].join("/"));
            break;
        }
    }
    Ok(params)
}
