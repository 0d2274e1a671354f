// HTTP error type shared by API and page handlers

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::api::ErrorResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Lookup by id found nothing. Carries the resource name.
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),

    #[error("Template error: {0}")]
    Render(#[from] askama::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(_) => {
                (StatusCode::NOT_FOUND, Json(ErrorResponse::new(self.to_string()))).into_response()
            }
            ApiError::Internal(e) => {
                tracing::error!("Request failed: {:#}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("Internal server error")),
                )
                    .into_response()
            }
            ApiError::Render(e) => {
                tracing::error!("Failed to render template: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = ApiError::NotFound("Event").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_maps_to_500() {
        let response = ApiError::from(anyhow::anyhow!("database is locked")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(ApiError::NotFound("Event").to_string(), "Event not found");
    }
}
