use std::fmt;
use std::sync::Arc;

use crate::handler::{BoxHandler, Middleware, Request, Response};

/// A registered pattern together with its handler and middleware.
///
/// The middleware chain is folded onto the handler once, when the route is
/// built, so that `wares[n-1](wares[n-2](...wares[0](handler)))` is the
/// handler that serves requests: the last registered middleware is the
/// outermost wrapper and runs first. A route never changes after creation.
pub struct Route {
    pattern: String,
    middleware: Vec<Arc<dyn Middleware>>,
    chain: BoxHandler,
}

impl Route {
    #[must_use]
    pub fn new(pattern: String, handler: BoxHandler, middleware: Vec<Arc<dyn Middleware>>) -> Self {
        let chain = middleware
            .iter()
            .fold(handler, |inner, mw| mw.wrap(inner));
        Self {
            pattern,
            middleware,
            chain,
        }
    }

    /// The pattern exactly as it was inserted (prefix already joined)
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    #[must_use]
    pub fn middleware_count(&self) -> usize {
        self.middleware.len()
    }

    /// Whether the pattern carries any `:` or `*` segment
    #[must_use]
    pub fn has_parameters(&self) -> bool {
        self.pattern.contains([':', '*'])
    }

    /// Run the request through the middleware chain and the handler.
    pub fn serve(&self, req: Request) -> Response {
        self.chain.call(req)
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("pattern", &self.pattern)
            .field("middleware", &self.middleware.len())
            .finish_non_exhaustive()
    }
}
