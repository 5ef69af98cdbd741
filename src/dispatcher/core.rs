//! Dispatcher core module - hot path for request dispatch.
//!
//! Owns one trie per HTTP method plus the not-found handler. Every [`Mux`]
//! handle derived from the same root shares one `Dispatcher`.
//!
//! [`Mux`]: crate::Mux

use std::sync::Arc;

use http::{HeaderName, HeaderValue, Method};
use parking_lot::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::error::{Result, RouterError};
use crate::handler::{not_found, BoxHandler, Middleware, Request, Response};
use crate::path::{clean_path, decode_path};
use crate::route::Route;
use crate::router::{extract_params, Inserted, Trie};
use crate::runtime_config::RouterConfig;

/// Methods the router keeps a trie for, in the order `has_route` probes them.
pub const ALL_METHODS: [Method; 9] = [
    Method::GET,
    Method::PUT,
    Method::POST,
    Method::HEAD,
    Method::PATCH,
    Method::TRACE,
    Method::DELETE,
    Method::OPTIONS,
    Method::CONNECT,
];

fn method_index(method: &Method) -> Option<usize> {
    ALL_METHODS.iter().position(|m| m == method)
}

/// Per-method routing tables shared by every handle of one mux.
pub struct Dispatcher {
    tries: [Trie; ALL_METHODS.len()],
    not_found: RwLock<BoxHandler>,
    /// (method, pattern) in registration order
    registered: Mutex<Vec<(Method, String)>>,
    config: RouterConfig,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(RouterConfig::default())
    }
}

impl Dispatcher {
    #[must_use]
    pub fn new(config: RouterConfig) -> Self {
        Dispatcher {
            tries: std::array::from_fn(|_| Trie::new()),
            not_found: RwLock::new(Arc::new(not_found)),
            registered: Mutex::new(Vec::new()),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Insert `pattern` into the trie for `method`.
    ///
    /// `middleware` is captured by the new route as it stands now.
    pub fn add_route(
        &self,
        method: Method,
        pattern: &str,
        handler: BoxHandler,
        middleware: Vec<Arc<dyn Middleware>>,
    ) -> Result<()> {
        let Some(idx) = method_index(&method) else {
            warn!(method = %method, pattern = %pattern, "Rejected route for unknown method");
            return Err(RouterError::UnknownMethod(method));
        };

        let middleware_count = middleware.len();
        let route = Arc::new(Route::new(pattern.to_string(), handler, middleware));
        match self.tries[idx].insert(pattern, route, self.config.strict_routes)? {
            Inserted::New => {}
            Inserted::Shadowed => warn!(
                method = %method,
                pattern = %pattern,
                "Route shadows an earlier registration at the same position"
            ),
        }

        let mut registered = self.registered.lock();
        registered.push((method.clone(), pattern.to_string()));
        info!(
            method = %method,
            pattern = %pattern,
            middleware_count = middleware_count,
            total_routes = registered.len(),
            "Route registered"
        );
        Ok(())
    }

    /// Look up the route for an already-normalised path.
    ///
    /// Methods outside [`ALL_METHODS`] never match.
    pub fn find(&self, method: &Method, path: &str) -> Result<Arc<Route>> {
        match method_index(method) {
            Some(idx) => self.tries[idx].find(path),
            None => Err(RouterError::RouteNotFound),
        }
    }

    /// Whether `path` resolves for `method`, or for any method when `None`.
    pub fn has_route(&self, path: &str, method: Option<&Method>) -> Result<bool> {
        let probe = |m: &Method| match self.find(m, path) {
            Ok(_) => Ok(true),
            Err(RouterError::RouteNotFound) => Ok(false),
            Err(e) => Err(e),
        };
        if let Some(m) = method {
            return probe(m);
        }
        for m in &ALL_METHODS {
            if probe(m)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    pub fn set_not_found(&self, handler: BoxHandler) {
        *self.not_found.write() = handler;
    }

    #[must_use]
    pub fn routes(&self) -> Vec<(Method, String)> {
        self.registered.lock().clone()
    }

    /// Resolve `req`, attach its parameters and run the selected handler.
    pub fn dispatch(&self, mut req: Request) -> Response {
        let path = {
            let decoded = decode_path(req.uri().path());
            if self.config.clean_path {
                clean_path(&decoded)
            } else {
                decoded.into_owned()
            }
        };

        // D1: Route lookup
        let route = match self.find(req.method(), &path) {
            Ok(route) => route,
            Err(e) => {
                debug!(method = %req.method(), path = %path, reason = %e, "No route matched");
                let fallback = Arc::clone(&*self.not_found.read());
                return fallback.call(req);
            }
        };

        // D2: Parameter extraction
        if route.has_parameters() {
            match extract_params(&path, route.pattern()) {
                Ok(params) => {
                    if let Some(header) = &self.config.param_header {
                        stash_header(&mut req, header, &params.encode());
                    }
                    req.extensions_mut().insert(params);
                }
                Err(e) => warn!(
                    path = %path,
                    pattern = %route.pattern(),
                    error = %e,
                    "Parameter extraction failed; serving route without parameters"
                ),
            }
        }

        // D3: Route matched
        debug!(
            method = %req.method(),
            path = %path,
            pattern = %route.pattern(),
            "Route matched"
        );
        route.serve(req)
    }
}

fn stash_header(req: &mut Request, header: &str, encoded: &str) {
    if encoded.is_empty() {
        return;
    }
    match (
        HeaderName::from_bytes(header.as_bytes()),
        HeaderValue::from_str(encoded),
    ) {
        (Ok(name), Ok(value)) => {
            req.headers_mut().insert(name, value);
        }
        _ => debug!(header = %header, "Encoded parameters are not a valid header value"),
    }
}
