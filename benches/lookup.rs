use std::hint::black_box;

use alien_mux::{Mux, Request, Response};
use bytes::Bytes;
use criterion::{criterion_group, criterion_main, Criterion};

fn ok(_req: Request) -> Response {
    Response::new(Bytes::new())
}

fn build(routes: usize) -> Mux {
    let mux = Mux::new();
    for i in 0..routes {
        mux.get(&format!("/api/v1/resource{i}/:id"), ok).unwrap();
        mux.post(&format!("/api/v1/resource{i}/:id/items/*rest"), ok)
            .unwrap();
    }
    mux.get("/health", ok).unwrap();
    mux
}

fn get(path: &str) -> Request {
    http::Request::get(path).body(Bytes::new()).unwrap()
}

fn bench_lookup(c: &mut Criterion) {
    for size in [10usize, 100, 500] {
        let mux = build(size);
        let target = format!("/api/v1/resource{}/12345", size / 2);
        c.bench_function(&format!("serve_param_{size}_routes"), |b| {
            b.iter(|| black_box(mux.serve(get(black_box(&target)))))
        });
    }

    let mux = build(100);
    c.bench_function("serve_static", |b| {
        b.iter(|| black_box(mux.serve(get(black_box("/health")))))
    });
    c.bench_function("serve_not_found", |b| {
        b.iter(|| black_box(mux.serve(get(black_box("/does/not/exist")))))
    });
    c.bench_function("has_route_any_method", |b| {
        b.iter(|| black_box(mux.has_route(black_box("/api/v1/resource7/1"), None)))
    });
}

criterion_group!(benches, bench_lookup);
criterion_main!(benches);
