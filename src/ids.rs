//! Per-request identifiers carried through the mux.

use std::fmt;
use std::str::FromStr;

use http::HeaderValue;
use ulid::Ulid;

use crate::handler::{Request, Response};

/// Header carrying the request identifier in both directions
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// ULID identifying one request as it passes through middleware and handler.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct RequestId(pub Ulid);

impl RequestId {
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Id from the `x-request-id` header of `req`, or a fresh one when the
    /// header is missing or not a ULID.
    #[must_use]
    pub fn for_request(req: &Request) -> Self {
        req.headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Id previously stored in the request extensions, if any.
    #[must_use]
    pub fn current(req: &Request) -> Option<Self> {
        req.extensions().get::<RequestId>().copied()
    }

    /// Set the `x-request-id` header on `res`.
    pub fn stamp(&self, res: &mut Response) {
        if let Ok(value) = HeaderValue::from_str(&self.0.to_string()) {
            res.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for RequestId {
    type Err = ulid::DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ulid::from_string(s).map(RequestId)
    }
}
