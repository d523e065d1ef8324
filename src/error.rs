use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::upstream::UpstreamError;

/// Error envelope returned when the backend cannot be reached
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub details: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Custom error type for API endpoints
///
/// Every backend failure maps to 500 with a fixed `error` message per
/// endpoint; the upstream status is never passed through.
#[derive(Debug)]
pub enum ApiError {
    /// The plant list could not be fetched from the backend
    PlantsUnavailable(UpstreamError),
    /// A single plant could not be fetched from the backend
    PlantUnavailable(UpstreamError),
}

impl ApiError {
    pub fn message(&self) -> &'static str {
        match self {
            ApiError::PlantsUnavailable(_) => "Failed to fetch plants",
            ApiError::PlantUnavailable(_) => "Failed to fetch plant",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error = self.message().to_string();
        let (status, details) = match self {
            ApiError::PlantsUnavailable(err) | ApiError::PlantUnavailable(err) => {
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        let body = Json(ErrorResponse { error, details });

        (status, body).into_response()
    }
}
