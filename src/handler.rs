//! Handler and middleware contracts between the router and its host server.
//!
//! The router never performs I/O. A host hands it an [`http::Request`] and
//! receives the [`http::Response`] produced by the selected handler (or the
//! not-found handler), wrapped in whatever middleware the route was
//! registered with.

use std::sync::Arc;

use bytes::Bytes;
use http::{header, StatusCode};

/// Incoming request as seen by handlers
pub type Request = http::Request<Bytes>;

/// Response produced by handlers
pub type Response = http::Response<Bytes>;

/// Terminal request handler.
///
/// Any `Fn(Request) -> Response` closure that is `Send + Sync` is a handler.
pub trait Handler: Send + Sync {
    fn call(&self, req: Request) -> Response;
}

impl<F> Handler for F
where
    F: Fn(Request) -> Response + Send + Sync,
{
    fn call(&self, req: Request) -> Response {
        self(req)
    }
}

/// Shared, type-erased handler
pub type BoxHandler = Arc<dyn Handler>;

/// Transform from one handler into another.
///
/// A middleware receives the next handler in the chain and returns the handler
/// that runs in its place. It decides whether, and how, to call onward.
pub trait Middleware: Send + Sync {
    fn wrap(&self, next: BoxHandler) -> BoxHandler;
}

impl<F> Middleware for F
where
    F: Fn(BoxHandler) -> BoxHandler + Send + Sync,
{
    fn wrap(&self, next: BoxHandler) -> BoxHandler {
        self(next)
    }
}

/// Box a closure as a [`BoxHandler`].
pub fn handler_fn<F>(f: F) -> BoxHandler
where
    F: Fn(Request) -> Response + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Box a closure as a shared middleware.
pub fn middleware_fn<F>(f: F) -> Arc<dyn Middleware>
where
    F: Fn(BoxHandler) -> BoxHandler + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Default not-found handler: `404` with an HTML body.
pub fn not_found(_req: Request) -> Response {
    let mut res = Response::new(Bytes::from_static(b"404 - Not Found"));
    *res.status_mut() = StatusCode::NOT_FOUND;
    res.headers_mut().insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("text/html; charset=UTF-8"),
    );
    res
}
