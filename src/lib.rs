//! REST service for video transcoding jobs and the presets they are built from.

pub mod app;
pub mod common;
pub mod config;
pub mod docs;
pub mod error;
pub mod infrastructure;
pub mod modules;
pub mod routes;
pub mod state;
