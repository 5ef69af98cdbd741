//! End-to-end routing through a `Mux`: registration, lookup precedence,
//! parameter injection and the not-found fallback.

mod common;

use alien_mux::{params, Mux, Request, Response, RouterError, ALL_METHODS};
use bytes::Bytes;
use common::{body, echo_params, get, init_tracing, reply, request};
use http::{Method, StatusCode};

#[test]
fn test_named_parameter() {
    init_tracing();
    let mux = Mux::new();
    mux.get("/hello/:name", echo_params).unwrap();
    let res = mux.serve(get("/hello/world"));
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body(&res), "name:world");
}

#[test]
fn test_named_catch_all() {
    let mux = Mux::new();
    mux.get("/hello/*name", echo_params).unwrap();
    let res = mux.serve(get("/hello/my/magical/sheeplike/ship"));
    assert_eq!(body(&res), "name:my/magical/sheeplike/ship");
}

#[test]
fn test_default_catch_all_name() {
    let mux = Mux::new();
    mux.get("/hello/*", echo_params).unwrap();
    let res = mux.serve(get("/hello/a/b"));
    assert_eq!(body(&res), "catch:a/b");
}

#[test]
fn test_parameter_beats_literal() {
    let mux = Mux::new();
    mux.get("/users/:id", |req: Request| {
        Response::new(Bytes::from(format!("param {}", params(&req).get("id"))))
    })
    .unwrap();
    mux.get("/users/new", reply("literal")).unwrap();
    assert_eq!(body(&mux.serve(get("/users/new"))), "param new");
}

#[test]
fn test_every_verb_helper_registers_its_method() {
    let mux = Mux::new();
    mux.get("/v", reply("GET")).unwrap();
    mux.put("/v", reply("PUT")).unwrap();
    mux.post("/v", reply("POST")).unwrap();
    mux.head("/v", reply("HEAD")).unwrap();
    mux.patch("/v", reply("PATCH")).unwrap();
    mux.trace("/v", reply("TRACE")).unwrap();
    mux.delete("/v", reply("DELETE")).unwrap();
    mux.options("/v", reply("OPTIONS")).unwrap();
    mux.connect("/v", reply("CONNECT")).unwrap();

    for method in ALL_METHODS {
        let res = mux.serve(request(method.clone(), "/v"));
        assert_eq!(body(&res), method.as_str());
    }
}

#[test]
fn test_add_route_unknown_method() {
    let mux = Mux::new();
    let brew = Method::from_bytes(b"BREW").unwrap();
    assert_eq!(
        mux.add_route(brew.clone(), "/pot", reply("coffee")).unwrap_err(),
        RouterError::UnknownMethod(brew)
    );
}

#[test]
fn test_registration_errors() {
    let mux = Mux::new();
    assert_eq!(mux.get("", reply("x")).unwrap_err(), RouterError::EmptyPattern);
    assert_eq!(
        mux.get("hello", reply("x")).unwrap_err(),
        RouterError::MustStartWithSlash
    );
    assert!(mux.routes().is_empty());
}

#[test]
fn test_default_not_found() {
    let mux = Mux::new();
    mux.get("/here", reply("here")).unwrap();
    let res = mux.serve(get("/missing"));
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(body(&res), "404 - Not Found");
    assert_eq!(
        res.headers().get(http::header::CONTENT_TYPE).unwrap(),
        "text/html; charset=UTF-8"
    );
    // Wrong method is a miss too.
    assert_eq!(mux.serve(request(Method::POST, "/here")).status(), StatusCode::NOT_FOUND);
}

#[test]
fn test_custom_not_found_shared_with_groups() {
    let mux = Mux::new();
    let api = mux.group("/api");
    api.not_found_handler(|_req: Request| {
        let mut res = Response::new(Bytes::from_static(b"nothing here"));
        *res.status_mut() = StatusCode::GONE;
        res
    });
    let res = mux.serve(get("/nope"));
    assert_eq!(res.status(), StatusCode::GONE);
    assert_eq!(body(&res), "nothing here");
}

#[test]
fn test_request_path_is_cleaned() {
    let mux = Mux::new();
    mux.get("/a/b", reply("ab")).unwrap();
    assert_eq!(body(&mux.serve(get("/a//x/../b/"))), "ab");
    assert_eq!(body(&mux.serve(get("/./a/b"))), "ab");
}

#[test]
fn test_has_route() {
    let mux = Mux::new();
    assert!(!mux.has_route("/missing", Some(&Method::GET)).unwrap());
    mux.delete("/items/:id", reply("gone")).unwrap();
    assert!(mux.has_route("/items/4", None).unwrap());
    assert!(mux.has_route("/items/4", Some(&Method::DELETE)).unwrap());
    assert!(!mux.has_route("/items/4", Some(&Method::GET)).unwrap());
}

#[test]
fn test_duplicate_pattern_shadows_previous() {
    let mux = Mux::new();
    mux.get("/dup", reply("first")).unwrap();
    mux.get("/dup", reply("second")).unwrap();
    assert_eq!(body(&mux.serve(get("/dup"))), "second");
    assert_eq!(mux.routes().len(), 2);
}

#[test]
fn test_repeated_lookups_are_idempotent() {
    let mux = Mux::new();
    mux.get("/users/:id/files/*path", echo_params).unwrap();
    let first = body(&mux.serve(get("/users/3/files/a/b.txt")));
    for _ in 0..5 {
        assert_eq!(body(&mux.serve(get("/users/3/files/a/b.txt"))), first);
    }
    assert_eq!(first, "id:3,path:a/b.txt");
}

#[test]
fn test_mux_is_a_handler() {
    use alien_mux::Handler;

    let inner = Mux::new();
    inner.get("/inner", reply("nested")).unwrap();
    let outer = Mux::new();
    outer.get("/inner", inner).unwrap();
    assert_eq!(body(&outer.serve(get("/inner"))), "nested");
    assert_eq!(body(&outer.call(get("/inner"))), "nested");
}

#[test]
fn test_parameter_value_is_percent_decoded() {
    let mux = Mux::new();
    mux.get("/hello/:name", echo_params).unwrap();
    assert_eq!(body(&mux.serve(get("/hello/w%20orld"))), "name:w orld");
}

#[test]
fn test_encoded_literal_route_matches() {
    let mux = Mux::new();
    mux.get("/café", reply("coffee")).unwrap();
    let res = mux.serve(get("/caf%C3%A9"));
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body(&res), "coffee");
}

#[test]
fn test_undecodable_path_matches_raw() {
    let mux = Mux::new();
    mux.get("/raw/:v", echo_params).unwrap();
    assert_eq!(body(&mux.serve(get("/raw/%FF"))), "v:%FF");
}
