//! Thank-you page for a form submission that echoes the respondent's answer back and offers to
//! share it, either through a compose post link or by copying a prepared text.

use std::sync::Arc;

use axum::Router;

pub mod answer;
pub mod configuration;
pub mod copy;
mod routes;
pub mod share;

pub use configuration::Configuration;

#[derive(Clone)]
pub struct AppState {
    pub configuration: Arc<Configuration>,
}

/// Builds the application with all routes, static assets and request tracing
pub fn create_app(configuration: Configuration) -> Router {
    let state = AppState {
        configuration: Arc::new(configuration),
    };

    routes::create_router(state)
}
