use std::fmt;

use http::Method;

/// Errors reported by registration, lookup and parameter extraction.
///
/// None of these are fatal. Registration errors are returned straight from the
/// registering call; `RouteNotFound` is the ordinary signal that sends a request
/// to the not-found handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    /// The pattern was the empty string
    EmptyPattern,
    /// The pattern did not begin with `/`
    MustStartWithSlash,
    /// `insert` was called on a node that is not a trie root
    InsertOnNonRoot,
    /// `find` was called on a node that is not a trie root
    FindOnNonRoot,
    /// The method is outside the fixed set the router keeps a trie for
    UnknownMethod(Method),
    /// No registered pattern matches the path
    RouteNotFound,
    /// The concrete path and the pattern disagree on segment layout, or a
    /// catch-all segment is not the final segment of the pattern
    BadPattern,
    /// A route already occupies this trie position (strict registration only)
    DuplicateRoute(String),
    /// Router configuration could not be parsed
    InvalidConfig(String),
}

impl fmt::Display for RouterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouterError::EmptyPattern => write!(f, "empty pattern is not supported"),
            RouterError::MustStartWithSlash => write!(f, "path must start with '/'"),
            RouterError::InsertOnNonRoot => write!(f, "insert on non root node"),
            RouterError::FindOnNonRoot => write!(f, "find on non root node"),
            RouterError::UnknownMethod(method) => write!(f, "unknown http method: {method}"),
            RouterError::RouteNotFound => write!(f, "route not found"),
            RouterError::BadPattern => write!(f, "bad pattern"),
            RouterError::DuplicateRoute(pattern) => {
                write!(f, "route already registered for pattern '{pattern}'")
            }
            RouterError::InvalidConfig(reason) => {
                write!(f, "invalid router configuration: {reason}")
            }
        }
    }
}

impl std::error::Error for RouterError {}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, RouterError>;
