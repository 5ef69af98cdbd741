//! # alien-mux
//!
//! An embeddable HTTP request router. Given a request's method and path it
//! selects a registered handler, extracts path parameters and runs the
//! handler through its middleware chain. It is a library for a host HTTP
//! server: it does no I/O, spawns no threads and never suspends.
//!
//! ## Architecture
//!
//! - **[`router`]** - per-method character trie and parameter extraction
//! - **[`dispatcher`]** - shared routing tables, not-found fallback, dispatch
//! - **[`Mux`]** - registration handle with prefix groups and middleware
//! - **[`middleware`]** - bundled tracing and metrics middleware
//! - **[`runtime_config`]** - environment and TOML configuration
//! - **[`path`]** - lexical path normalisation
//!
//! ### Request Handling Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Host as Host server
//!     participant Mux
//!     participant Trie as Method trie
//!     participant Route
//!     participant Handler
//!
//!     Host->>Mux: serve(GET /hello/world)
//!     Mux->>Mux: clean_path
//!     Mux->>Trie: find("/hello/world") (read lock)
//!     alt No Route Match
//!         Mux->>Host: not-found handler response
//!     end
//!     Trie-->>Mux: Route "/hello/:name"
//!     Mux->>Mux: extract_params → {name: world}
//!     Mux->>Route: serve(request + Params)
//!     Route->>Handler: middleware chain → handler
//!     Handler-->>Host: Response
//! ```
//!
//! ## Example
//!
//! ```rust
//! use alien_mux::{params, Mux, Request, Response};
//! use bytes::Bytes;
//!
//! let mux = Mux::new();
//! mux.get("/hello/:name", |req: Request| {
//!     let name = params(&req).get("name").to_string();
//!     Response::new(Bytes::from(format!("hello {name}")))
//! })
//! .unwrap();
//!
//! let req = http::Request::get("/hello/world").body(Bytes::new()).unwrap();
//! let res = mux.serve(req);
//! assert_eq!(res.body().as_ref(), b"hello world");
//! ```
//!
//! ## Matching precedence
//!
//! At every node a parameter child is tried before a catch-all child, and
//! both before a literal child. Registering `/users/:id` and `/users/new`
//! therefore routes `/users/new` to the `:id` handler with `id = "new"`.

pub mod dispatcher;
pub mod error;
pub mod handler;
pub mod ids;
pub mod middleware;
mod mux;
pub mod path;
pub mod route;
pub mod router;
pub mod runtime_config;

pub use dispatcher::ALL_METHODS;
pub use error::{Result, RouterError};
pub use handler::{handler_fn, middleware_fn, BoxHandler, Handler, Middleware, Request, Response};
pub use mux::Mux;
pub use router::{extract_params, params, Params};
pub use runtime_config::RouterConfig;
