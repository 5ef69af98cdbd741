use std::sync::Arc;

use http::Method;

use crate::dispatcher::Dispatcher;
use crate::error::Result;
use crate::handler::{BoxHandler, Handler, Middleware, Request, Response};
use crate::path::join_path;
use crate::runtime_config::RouterConfig;

/// HTTP multiplexer matching requests to registered handlers.
///
/// Patterns support named parameters:
///
/// ```text
/// /hello/:name      matches /hello/world            name = "world"
/// ```
///
/// and catch-all parameters, which must end the pattern:
///
/// ```text
/// /hello/*whatever  matches /hello/world            whatever = "world"
///                           /hello/world/tanzania   whatever = "world/tanzania"
/// /hello/*          matches /hello/a/b              catch = "a/b"
/// ```
///
/// Handlers read parameters with [`params`](crate::params).
///
/// A `Mux` is a handle onto shared routing tables. [`Mux::group`] returns
/// another handle onto the same tables with a longer prefix and its own copy
/// of the middleware list; [`Mux::use_middleware`] only affects routes
/// registered afterwards through the handle it was called on.
///
/// ```rust
/// use alien_mux::{Mux, Request, Response};
/// use bytes::Bytes;
///
/// let mux = Mux::new();
/// let home = mux.group("/home");
/// home.get("/alone", |_req: Request| Response::new(Bytes::from_static(b"alone")))
///     .unwrap();
/// assert!(mux.has_route("/home/alone", None).unwrap());
/// ```
#[derive(Clone)]
pub struct Mux {
    dispatcher: Arc<Dispatcher>,
    prefix: String,
    middleware: Vec<Arc<dyn Middleware>>,
}

impl Default for Mux {
    fn default() -> Self {
        Self::new()
    }
}

impl Mux {
    /// Router with the default configuration and a 404 not-found handler.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RouterConfig::default())
    }

    #[must_use]
    pub fn with_config(config: RouterConfig) -> Self {
        Mux {
            dispatcher: Arc::new(Dispatcher::new(config)),
            prefix: String::new(),
            middleware: Vec::new(),
        }
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[must_use]
    pub fn config(&self) -> &RouterConfig {
        self.dispatcher.config()
    }

    pub fn get<H: Handler + 'static>(&self, pattern: &str, handler: H) -> Result<()> {
        self.add_route(Method::GET, pattern, handler)
    }

    pub fn put<H: Handler + 'static>(&self, pattern: &str, handler: H) -> Result<()> {
        self.add_route(Method::PUT, pattern, handler)
    }

    pub fn post<H: Handler + 'static>(&self, pattern: &str, handler: H) -> Result<()> {
        self.add_route(Method::POST, pattern, handler)
    }

    pub fn head<H: Handler + 'static>(&self, pattern: &str, handler: H) -> Result<()> {
        self.add_route(Method::HEAD, pattern, handler)
    }

    pub fn patch<H: Handler + 'static>(&self, pattern: &str, handler: H) -> Result<()> {
        self.add_route(Method::PATCH, pattern, handler)
    }

    pub fn trace<H: Handler + 'static>(&self, pattern: &str, handler: H) -> Result<()> {
        self.add_route(Method::TRACE, pattern, handler)
    }

    pub fn delete<H: Handler + 'static>(&self, pattern: &str, handler: H) -> Result<()> {
        self.add_route(Method::DELETE, pattern, handler)
    }

    pub fn options<H: Handler + 'static>(&self, pattern: &str, handler: H) -> Result<()> {
        self.add_route(Method::OPTIONS, pattern, handler)
    }

    pub fn connect<H: Handler + 'static>(&self, pattern: &str, handler: H) -> Result<()> {
        self.add_route(Method::CONNECT, pattern, handler)
    }

    /// Register `handler` for `method` at this handle's prefix joined with `pattern`.
    pub fn add_route<H: Handler + 'static>(&self, method: Method, pattern: &str, handler: H) -> Result<()> {
        self.add_boxed_route(method, pattern, Arc::new(handler))
    }

    /// [`Mux::add_route`] for an already shared handler.
    pub fn add_boxed_route(&self, method: Method, pattern: &str, handler: BoxHandler) -> Result<()> {
        let pattern = join_path(&[&self.prefix, pattern]);
        self.dispatcher
            .add_route(method, &pattern, handler, self.middleware.clone())
    }

    /// Append middleware for routes registered later through this handle.
    pub fn use_middleware<M: Middleware + 'static>(&mut self, middleware: M) {
        self.middleware.push(Arc::new(middleware));
    }

    /// Append several shared middleware at once, in order.
    pub fn use_all<I>(&mut self, middleware: I)
    where
        I: IntoIterator<Item = Arc<dyn Middleware>>,
    {
        self.middleware.extend(middleware);
    }

    #[must_use]
    pub fn middleware_count(&self) -> usize {
        self.middleware.len()
    }

    /// New handle on the same routing tables, nested under `prefix`.
    ///
    /// The group starts with a snapshot of this handle's middleware; later
    /// `use_middleware` calls on either handle are not seen by the other.
    #[must_use]
    pub fn group(&self, prefix: &str) -> Mux {
        Mux {
            dispatcher: Arc::clone(&self.dispatcher),
            prefix: join_path(&[&self.prefix, prefix]),
            middleware: self.middleware.clone(),
        }
    }

    /// Whether `path` resolves for `method`, or for any method when `None`.
    pub fn has_route(&self, path: &str, method: Option<&Method>) -> Result<bool> {
        self.dispatcher.has_route(path, method)
    }

    /// Replace the handler run when no route matches (shared by all groups).
    pub fn not_found_handler<H: Handler + 'static>(&self, handler: H) {
        self.dispatcher.set_not_found(Arc::new(handler));
    }

    /// Every registered `(method, pattern)`, in registration order.
    #[must_use]
    pub fn routes(&self) -> Vec<(Method, String)> {
        self.dispatcher.routes()
    }

    /// Serve one request: normalise, look up, inject parameters, invoke.
    pub fn serve(&self, req: Request) -> Response {
        self.dispatcher.dispatch(req)
    }
}

impl Handler for Mux {
    fn call(&self, req: Request) -> Response {
        self.serve(req)
    }
}
