use axum::{
    Json,
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mxchange_shared::FieldErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation failed: {0:?}")]
    ValidationFailed(FieldErrors),

    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] FormRejection),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl From<mxchange_shared::Error> for AppError {
    fn from(err: mxchange_shared::Error) -> Self {
        match err.field_errors() {
            Some(fields) => AppError::ValidationFailed(fields),
            None => AppError::InternalError(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::ValidationFailed(field_errors) => {
                tracing::debug!(errors = ?field_errors, "Form validation failed");

                let error_response = serde_json::json!({
                    "error": "ValidationFailed",
                    "message": "Invalid form submission.",
                    "details": field_errors,
                });

                (StatusCode::UNPROCESSABLE_ENTITY, Json(error_response)).into_response()
            }
            AppError::InvalidRequest(rejection) => {
                tracing::debug!("Form body rejected: {}", rejection.body_text());

                let error_response = serde_json::json!({
                    "error": "InvalidRequest",
                    "message": rejection.body_text(),
                });

                (rejection.status(), Json(error_response)).into_response()
            }
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);

                let error_response = serde_json::json!({
                    "error": "InternalServerError",
                    "message": "An unexpected error occurred. Please try again later.",
                });

                (StatusCode::INTERNAL_SERVER_ERROR, Json(error_response)).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    async fn json_body(response: Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_server_error_maps_to_500() {
        let err = AppError::from(mxchange_shared::Error::Server("boom".to_string()));
        assert!(matches!(err, AppError::InternalError(ref msg) if msg == "boom"));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = json_body(response).await;
        assert_eq!(body["error"], "InternalServerError");
        assert!(!body.to_string().contains("boom"));
    }

    #[tokio::test]
    async fn test_unknown_error_maps_to_500() {
        let err = AppError::from(mxchange_shared::Error::from(anyhow::anyhow!("lost")));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json_body(response).await["error"], "InternalServerError");
    }

    #[tokio::test]
    async fn test_validation_error_maps_to_422() {
        let mut fields = FieldErrors::default();
        fields.push("date", "This field is required.");

        let response = AppError::ValidationFailed(fields).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            json_body(response).await["details"],
            json!({"date": ["This field is required."]})
        );
    }
}
