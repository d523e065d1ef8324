use axum::{routing::get, Router};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::routes;
use crate::state::AppState;

/// Assemble every route the front end serves.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(routes::INDEX, get(handlers::index_handler))
        .route(routes::GARDEN_PLANNER, get(handlers::garden_planner_handler))
        .route(routes::APP_JS, get(handlers::app_js_handler))
        .route(routes::HEALTH, get(handlers::health_handler))
        .route(routes::PLANTS, get(handlers::list_plants_handler))
        .route(routes::PLANT_ITEM, get(handlers::get_plant_handler))
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
