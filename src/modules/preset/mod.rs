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
        .route(
            "/presets",
            get(handler::list_presets).post(handler::create_preset),
        )
        .route("/presets/{name}", get(handler::get_preset))
        .method_not_allowed_fallback(method_not_allowed)
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_TYPE,
            json_content_type(),
        ))
}
