use alien_mux::middleware::{MetricsMiddleware, TracingMiddleware};
use alien_mux::{params, Mux, Request, Response, RouterConfig};
use anyhow::Context;
use bytes::Bytes;
use clap::Parser;
use http::Method;
use tracing_subscriber::EnvFilter;

/// Resolve requests against a sample route table
#[derive(Parser)]
#[command(name = "alien-mux")]
#[command(about = "Dispatch synthetic requests through a sample alien-mux route table", long_about = None)]
struct Cli {
    /// Print the registered route table before dispatching
    #[arg(long, default_value_t = false)]
    routes: bool,

    /// Emit logs as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Request pairs: METHOD PATH [METHOD PATH ...]
    #[arg(num_args = 0..)]
    requests: Vec<String>,
}

fn text(body: String) -> Response {
    Response::new(Bytes::from(body))
}

fn build_mux(metrics: &MetricsMiddleware) -> anyhow::Result<Mux> {
    let mut mux = Mux::with_config(RouterConfig::from_env());
    mux.use_middleware(TracingMiddleware);
    mux.use_middleware(metrics.clone());

    mux.get("/system/user/list", |_req: Request| text("hello world".into()))?;
    mux.get("/hello/:name", |req: Request| {
        text(format!("hello {}", params(&req).get("name")))
    })?;
    mux.get("/static/*", |req: Request| {
        text(format!("file {}", params(&req).get("catch")))
    })?;

    let api = mux.group("/api/v1");
    api.get("/users/:id", |req: Request| {
        text(format!("user {}", params(&req).get("id")))
    })?;
    api.post("/users/:id/posts", |req: Request| {
        text(format!("new post for {}", params(&req).get("id")))
    })?;
    Ok(mux)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if cli.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let metrics = MetricsMiddleware::new();
    let mux = build_mux(&metrics)?;

    if cli.routes {
        for (method, pattern) in mux.routes() {
            println!("[route] {method} {pattern}");
        }
    }

    if cli.requests.len() % 2 != 0 {
        anyhow::bail!("requests must be given as METHOD PATH pairs");
    }
    for pair in cli.requests.chunks(2) {
        let method = Method::from_bytes(pair[0].to_ascii_uppercase().as_bytes())
            .with_context(|| format!("invalid method '{}'", pair[0]))?;
        let req = http::Request::builder()
            .method(method.clone())
            .uri(pair[1].as_str())
            .body(Bytes::new())
            .with_context(|| format!("invalid request path '{}'", pair[1]))?;
        let res = mux.serve(req);
        println!(
            "{} {} -> {} {}",
            method,
            pair[1],
            res.status().as_u16(),
            String::from_utf8_lossy(res.body())
        );
    }

    println!(
        "[metrics] routed={} avg_latency_us={}",
        metrics.request_count(),
        metrics.average_latency().as_micros()
    );
    Ok(())
}
