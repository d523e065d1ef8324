use crate::error::{ApiError, ErrorResponse};
use crate::routes;
use crate::state::AppState;
use crate::upstream::redacted;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
};

fn json_passthrough(body: Bytes) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
}

/// GET /api/plants handler - Proxy the plant list from the backend
///
/// The backend body is relayed byte-for-byte. Any failure to reach the
/// backend, an error status, or a non-JSON body becomes a 500.
#[utoipa::path(
    get,
    path = routes::PLANTS,
    responses(
        (status = 200, description = "Backend plant list, unmodified", body = serde_json::Value, content_type = "application/json"),
        (status = 500, description = "Backend unavailable", body = ErrorResponse)
    ),
    tag = "plants"
)]
pub async fn list_plants_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    match state.backend.list_plants().await {
        Ok(body) => Ok(json_passthrough(body)),
        Err(err) => {
            tracing::error!(
                "Error fetching plants from {} ({}): {}",
                redacted(&state.config.api_base_url),
                err.stage(),
                err
            );
            Err(ApiError::PlantsUnavailable(err))
        }
    }
}

/// GET /api/plants/{id} handler - Proxy a single plant from the backend
#[utoipa::path(
    get,
    path = routes::PLANT_ITEM,
    params(
        ("id" = String, Path, description = "Backend plant identifier")
    ),
    responses(
        (status = 200, description = "Backend plant record, unmodified", body = serde_json::Value, content_type = "application/json"),
        (status = 500, description = "Backend unavailable or plant missing", body = ErrorResponse)
    ),
    tag = "plants"
)]
pub async fn get_plant_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    match state.backend.get_plant(&id).await {
        Ok(body) => Ok(json_passthrough(body)),
        Err(err) => {
            tracing::error!(
                "Error fetching plant {} from {} ({}): {}",
                id,
                redacted(&state.config.api_base_url),
                err.stage(),
                err
            );
            Err(ApiError::PlantUnavailable(err))
        }
    }
}
