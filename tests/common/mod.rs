#![allow(dead_code)]

use std::sync::Once;

use alien_mux::{params, Request, Response};
use bytes::Bytes;
use http::Method;

static TRACING: Once = Once::new();

/// Install a test-writer subscriber once per test binary
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
            .with_test_writer()
            .try_init();
    });
}

pub fn request(method: Method, path: &str) -> Request {
    http::Request::builder()
        .method(method)
        .uri(path)
        .body(Bytes::new())
        .unwrap()
}

pub fn get(path: &str) -> Request {
    request(Method::GET, path)
}

/// Handler answering with a fixed body
pub fn reply(body: &'static str) -> impl Fn(Request) -> Response + Send + Sync + 'static {
    move |_req: Request| Response::new(Bytes::from_static(body.as_bytes()))
}

/// Handler answering with the encoded parameters it received
pub fn echo_params(req: Request) -> Response {
    Response::new(Bytes::from(params(&req).encode()))
}

pub fn body(res: &Response) -> String {
    String::from_utf8_lossy(res.body()).into_owned()
}
