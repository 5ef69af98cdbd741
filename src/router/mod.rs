//! # Router Module
//!
//! Path matching for the mux: one character trie per HTTP method, plus the
//! parameter extractor that rebuilds named values from a matched pattern.
//!
//! ## Pattern grammar
//!
//! Patterns are `/`-separated segments:
//!
//! - `/users/list` matches literally
//! - `/hello/:name` captures one segment as `name`
//! - `/static/*path` captures the rest of the path as `path`; a bare `*` is
//!   named `catch`. A catch-all must be the last segment.
//!
//! ## Example
//!
//! ```rust
//! use alien_mux::router::extract_params;
//!
//! let params = extract_params("/hello/world", "/hello/:name").unwrap();
//! assert_eq!(params.get("name"), "world");
//! ```

mod node;
mod params;
mod trie;

pub use params::{
    extract_params, params, ParamVec, Params, DEFAULT_CATCH_ALL, MAX_INLINE_PARAMS,
};

pub(crate) use node::Inserted;
pub(crate) use trie::Trie;
