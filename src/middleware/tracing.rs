use std::sync::Arc;
use std::time::Instant;

use tracing::{info, info_span};

use crate::handler::{BoxHandler, Handler, Middleware, Request, Response};
use crate::ids::RequestId;

/// Wraps a route in an `info` span and logs its outcome.
///
/// The request id comes from an incoming `x-request-id` header when it holds a
/// valid ULID, otherwise a new one is generated. It is inserted into the
/// request extensions and echoed on the response.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingMiddleware;

impl Middleware for TracingMiddleware {
    fn wrap(&self, next: BoxHandler) -> BoxHandler {
        Arc::new(Traced { next })
    }
}

struct Traced {
    next: BoxHandler,
}

impl Handler for Traced {
    fn call(&self, mut req: Request) -> Response {
        let request_id = RequestId::for_request(&req);
        req.extensions_mut().insert(request_id);

        let span = info_span!(
            "request",
            request_id = %request_id,
            method = %req.method(),
            path = %req.uri().path(),
            status = tracing::field::Empty,
            latency_us = tracing::field::Empty,
        );
        let _entered = span.enter();

        let start = Instant::now();
        let mut res = self.next.call(req);
        let latency = start.elapsed();

        span.record("status", res.status().as_u16());
        span.record("latency_us", latency.as_micros() as u64);
        info!(
            status = res.status().as_u16(),
            latency_us = latency.as_micros() as u64,
            "Request complete"
        );

        request_id.stamp(&mut res);
        res
    }
}
