use askama::Template;
use axum::http::StatusCode;

#[derive(Template)]
#[template(path = "not_found.html")]
pub(crate) struct NotFoundTemplate {}

pub(crate) async fn get_not_found_page() -> (StatusCode, NotFoundTemplate) {
    (StatusCode::NOT_FOUND, NotFoundTemplate {})
}
