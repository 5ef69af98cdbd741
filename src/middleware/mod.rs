mod metrics;
mod tracing;

pub use metrics::MetricsMiddleware;
pub use tracing::TracingMiddleware;
