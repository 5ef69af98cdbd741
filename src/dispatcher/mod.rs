//! # Dispatcher Module
//!
//! The dispatcher owns the routing state that every [`Mux`](crate::Mux)
//! handle of one router shares: a trie per HTTP method and the not-found
//! handler.
//!
//! ## Request Flow
//!
//! 1. The request path is normalised (unless disabled in [`RouterConfig`])
//! 2. The method's trie is searched; a miss runs the not-found handler
//! 3. Parameters are extracted from the path and the matched pattern and
//!    inserted into the request extensions
//! 4. The route runs its middleware chain and handler
//!
//! ## Concurrency
//!
//! Each trie sits behind its own reader/writer lock. Lookups share the lock;
//! registration takes it exclusively for the duration of one insert. Route
//! tables are expected to be built at startup, so lock granularity is a whole
//! trie rather than individual nodes.
//!
//! [`RouterConfig`]: crate::runtime_config::RouterConfig

mod core;

pub use core::{Dispatcher, ALL_METHODS};
