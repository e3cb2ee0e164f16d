use crate::server::types::ErrorResponse;
use axum::Json;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum DetectError {
    #[error("request is not a usable multipart body: {0}")]
    Rejected(#[from] MultipartRejection),
    #[error("multipart body has no `file` part")]
    MissingFile,
    #[error("failed to read upload: {0}")]
    Multipart(#[from] MultipartError),
    #[error("failed to store upload: {0}")]
    Storage(#[from] std::io::Error),
}

impl DetectError {
    pub fn status(&self) -> StatusCode {
        match self {
            DetectError::Rejected(rejection) => rejection.status(),
            DetectError::MissingFile => StatusCode::UNPROCESSABLE_ENTITY,
            // over-limit bodies without Content-Length surface here
            DetectError::Multipart(err) if err.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                StatusCode::PAYLOAD_TOO_LARGE
            }
            DetectError::Multipart(_) | DetectError::Storage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for DetectError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::error!(%status, error = %self, "detect request failed");

        // callers only ever see the status reason
        let body = ErrorResponse {
            error: status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn storage_failure_is_a_generic_server_error() {
        let err = DetectError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "/secret/uploads is read-only",
        ));
        let res = err.into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = res.into_body().collect().await.unwrap().to_bytes();
        let body: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(body.error, "Internal Server Error");
    }

    #[test]
    fn missing_file_is_unprocessable() {
        assert_eq!(
            DetectError::MissingFile.status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }
}
