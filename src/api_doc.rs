use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse};
use crate::handlers;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "garden-frontend API",
        version = "0.1.0",
        description = "Web front end for the native plant garden planner; proxies read-only plant data from the backend API"
    ),
    paths(
        handlers::health::health_handler,
        handlers::plants::list_plants_handler,
        handlers::plants::get_plant_handler
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "plants", description = "Plant data proxied from the backend API")
    )
)]
pub struct ApiDoc;
