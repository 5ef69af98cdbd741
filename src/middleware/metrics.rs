use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::handler::{BoxHandler, Handler, Middleware, Request, Response};

#[derive(Default)]
struct Counters {
    request_count: AtomicUsize,
    total_latency_ns: AtomicU64,
    success: AtomicUsize,
    client_errors: AtomicUsize,
    server_errors: AtomicUsize,
}

/// Middleware for collecting request metrics
///
/// Tracks request counts, latency and responses by status class. All counters
/// use atomic operations for thread-safe updates without locks. Clones share
/// the same counters, so keep one clone to read them after registering
/// another with [`Mux::use_middleware`](crate::Mux::use_middleware).
///
/// Only requests that reached a route are counted; not-found responses are
/// produced outside any route's middleware chain.
#[derive(Clone, Default)]
pub struct MetricsMiddleware {
    counters: Arc<Counters>,
}

impl MetricsMiddleware {
    /// Create a new metrics middleware with all counters initialized to zero
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the total number of requests processed
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.counters.request_count.load(Ordering::Relaxed)
    }

    /// Calculate the average request latency
    ///
    /// Returns zero duration if no requests have been processed yet.
    #[must_use]
    pub fn average_latency(&self) -> Duration {
        let count = self.request_count() as u64;
        if count == 0 {
            Duration::from_nanos(0)
        } else {
            Duration::from_nanos(self.counters.total_latency_ns.load(Ordering::Relaxed) / count)
        }
    }

    /// Responses by class: `(informational/success/redirect, 4xx, 5xx)`
    #[must_use]
    pub fn status_counts(&self) -> (usize, usize, usize) {
        (
            self.counters.success.load(Ordering::Relaxed),
            self.counters.client_errors.load(Ordering::Relaxed),
            self.counters.server_errors.load(Ordering::Relaxed),
        )
    }

    fn record(&self, res: &Response, latency: Duration) {
        let c = &self.counters;
        c.request_count.fetch_add(1, Ordering::Relaxed);
        c.total_latency_ns
            .fetch_add(latency.as_nanos() as u64, Ordering::Relaxed);
        let bucket = if res.status().is_server_error() {
            &c.server_errors
        } else if res.status().is_client_error() {
            &c.client_errors
        } else {
            &c.success
        };
        bucket.fetch_add(1, Ordering::Relaxed);
    }
}

impl Middleware for MetricsMiddleware {
    fn wrap(&self, next: BoxHandler) -> BoxHandler {
        Arc::new(Measured {
            metrics: self.clone(),
            next,
        })
    }
}

struct Measured {
    metrics: MetricsMiddleware,
    next: BoxHandler,
}

impl Handler for Measured {
    fn call(&self, req: Request) -> Response {
        let start = Instant::now();
        let res = self.next.call(req);
        self.metrics.record(&res, start.elapsed());
        res
    }
}
