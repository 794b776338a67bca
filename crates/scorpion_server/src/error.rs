//! Conversion of bridge errors into HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use scorpion_error::{GenerationErrorKind, ScorpionError, ScorpionErrorKind};
use serde_json::{Value, json};

/// An error response: a status code and a JSON body with at least an `error` key.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    status: StatusCode,
    body: Value,
}

impl ApiError {
    /// `400` with `message`.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// `404 {"error": "Not found"}`.
    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not found")
    }

    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: json!({ "error": message.into() }),
        }
    }

    /// The response status.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The response body.
    pub fn body(&self) -> &Value {
        &self.body
    }
}

impl From<ScorpionError> for ApiError {
    fn from(err: ScorpionError) -> Self {
        match err.kind() {
            ScorpionErrorKind::Validation(e) => {
                tracing::debug!(error = %e, "Rejected request");
                Self::bad_request(e.message.clone())
            }
            ScorpionErrorKind::NotFound(e) => {
                tracing::debug!(error = %e, "Not found");
                Self::new(StatusCode::NOT_FOUND, e.target.clone())
            }
            ScorpionErrorKind::Generation(e) => {
                tracing::warn!(error = %e, "Generation did not succeed");
                match &e.kind {
                    GenerationErrorKind::Failed { stderr, stdout, .. } => Self {
                        status: StatusCode::INTERNAL_SERVER_ERROR,
                        body: json!({
                            "error": "Generation failed",
                            "details": stderr,
                            "stdout": stdout,
                        }),
                    },
                    GenerationErrorKind::TimedOut(_) => Self {
                        status: StatusCode::INTERNAL_SERVER_ERROR,
                        body: json!({
                            "error": "Generation failed",
                            "details": e.kind.to_string(),
                            "stdout": "",
                        }),
                    },
                    GenerationErrorKind::Spawn(_) => {
                        Self::new(StatusCode::INTERNAL_SERVER_ERROR, e.kind.to_string())
                    }
                }
            }
            ScorpionErrorKind::Storage(e) => {
                tracing::error!(error = %e, "Storage fault");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, e.kind.to_string())
            }
            ScorpionErrorKind::Config(e) => {
                tracing::error!(error = %e, "Configuration fault");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, e.message.clone())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scorpion_error::{GenerationError, NotFoundError, ValidationError};

    #[test]
    fn validation_maps_to_400() {
        let err = ApiError::from(ScorpionError::from(ValidationError::new("Missing blockId")));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.body(), &json!({"error": "Missing blockId"}));
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = ApiError::from(ScorpionError::from(NotFoundError::new("Block 9 not found")));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn failed_generation_carries_output() {
        let err = ApiError::from(ScorpionError::from(GenerationError::new(
            GenerationErrorKind::Failed {
                code: Some(1),
                stderr: "boom".to_string(),
                stdout: "half done".to_string(),
            },
        )));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.body(),
            &json!({"error": "Generation failed", "details": "boom", "stdout": "half done"})
        );
    }
}
