#![allow(dead_code)]

//! Shared helpers for driving the router in-process.

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use snickers::app::create_app;
use snickers::infrastructure::storage::{DynStorage, MemoryStorage};
use snickers::state::AppState;
use std::sync::Arc;
use tower::ServiceExt;

pub const JSON_UTF8: &str = "application/json; charset=UTF-8";

/// Fresh router over its own in-memory store.
pub fn test_app() -> (Router, Arc<MemoryStorage>) {
    let store = Arc::new(MemoryStorage::new());
    let storage: DynStorage = store.clone();
    let app = create_app(AppState::new(storage));
    (app, store)
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

/// POST without a Content-Type header, like a bare HTTP client would send.
pub fn post(uri: &str, body: &str) -> Request<Body> {
    Request::post(uri).body(Body::from(body.to_string())).unwrap()
}

pub fn content_type(response: &Response<Body>) -> String {
    response.headers()["content-type"].to_str().unwrap().to_string()
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = body.collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
