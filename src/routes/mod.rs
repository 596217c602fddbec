use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::AppState;

mod error;
mod thanks;

pub(crate) fn create_router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.configuration.assets);

    Router::new()
        .route("/", get(thanks::get_page))
        .nest_service("/assets", assets)
        .fallback(error::get_not_found_page)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
