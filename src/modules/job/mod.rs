use crate::common::response::{json_content_type, method_not_allowed};
use crate::state::AppState;
use axum::Router;
use axum::http::header;
use axum::routing::get;
use tower_http::set_header::SetResponseHeaderLayer;

pub mod dto;
pub mod handler;
pub mod model;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/jobs", get(handler::list_jobs).post(handler::create_job))
        .route("/jobs/{id}", get(handler::get_job))
        .method_not_allowed_fallback(method_not_allowed)
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_TYPE,
            json_content_type(),
        ))
}
