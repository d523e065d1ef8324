use axum::{http::header, response::Html, response::IntoResponse};

const INDEX_HTML: &str = include_str!("../../templates/index.html");
const GARDEN_PLANNER_HTML: &str = include_str!("../../templates/garden_planner.html");
const APP_JS: &str = include_str!("../../static/js/app.js");

/// GET / - Plant selection homepage
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /garden-planner - Garden planning page
pub async fn garden_planner_handler() -> Html<&'static str> {
    Html(GARDEN_PLANNER_HTML)
}

/// GET /static/js/app.js - Script shared by both pages
pub async fn app_js_handler() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/javascript; charset=utf-8"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        APP_JS,
    )
}
