//! `BoardError` → HTTP response mapping.
//!
//! Validation and policy rejections are expected traffic and surface with
//! their exact reason strings; infrastructure failures are logged here and
//! collapse to one opaque 500 body.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use domains::BoardError;
use serde_json::json;

pub struct ApiError(pub BoardError);

impl From<BoardError> for ApiError {
    fn from(err: BoardError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            err @ (BoardError::MissingTextOrIp
            | BoardError::MessageTooLong
            | BoardError::InvalidUsername
            | BoardError::ModerationRejected) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": err.to_string() })),
            )
                .into_response(),

            BoardError::CooldownActive { retry_after_secs } => (
                StatusCode::TOO_MANY_REQUESTS,
                [(header::RETRY_AFTER, retry_after_secs.to_string())],
                Json(json!({ "error": "Cooldown active" })),
            )
                .into_response(),

            // No body detail: a denial must not reveal whether data exists.
            BoardError::Forbidden => StatusCode::FORBIDDEN.into_response(),

            BoardError::Internal(err) => {
                tracing::error!(error = ?err, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Server error" })),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: BoardError) -> StatusCode {
        ApiError(err).into_response().status()
    }

    #[test]
    fn statuses_follow_the_error_taxonomy() {
        assert_eq!(status_of(BoardError::MissingTextOrIp), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(BoardError::MessageTooLong), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(BoardError::InvalidUsername), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(BoardError::ModerationRejected),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(BoardError::CooldownActive { retry_after_secs: 30 }),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(status_of(BoardError::Forbidden), StatusCode::FORBIDDEN);
        assert_eq!(
            status_of(BoardError::Internal(anyhow::anyhow!("db down"))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn cooldown_carries_a_retry_after_header() {
        let response =
            ApiError(BoardError::CooldownActive { retry_after_secs: 30 }).into_response();
        assert_eq!(response.headers()[header::RETRY_AFTER], "30");
    }

    #[tokio::test]
    async fn reason_strings_reach_the_body_verbatim() {
        let response = ApiError(BoardError::MessageTooLong).into_response();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], br#"{"error":"Message too long"}"#);
    }

    #[tokio::test]
    async fn forbidden_has_an_empty_body() {
        let response = ApiError(BoardError::Forbidden).into_response();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());
    }
}
