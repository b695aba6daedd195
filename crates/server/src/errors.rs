use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

use crate::routes::graphs::JSON_UTF8;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body is not a graph; answered with an empty 422.
    #[error("unprocessable entity: {0}")]
    Unprocessable(String),
    #[error("not found")]
    NotFound,
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            // empty body, API content type
            ApiError::Unprocessable(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, [(header::CONTENT_TYPE, JSON_UTF8)]).into_response()
            }
            ApiError::NotFound => (StatusCode::NOT_FOUND, [(header::CONTENT_TYPE, JSON_UTF8)]).into_response(),
            ApiError::Service(e) => {
                let msg = e.to_string();
                error!(error = %msg, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(serde_json::json!({"error": msg}))).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        for (err, status) in [
            (ApiError::Unprocessable("x".into()), StatusCode::UNPROCESSABLE_ENTITY),
            (ApiError::NotFound, StatusCode::NOT_FOUND),
        ] {
            let res = err.into_response();
            assert_eq!(res.status(), status);
            assert_eq!(res.headers().get(header::CONTENT_TYPE).unwrap(), JSON_UTF8);
        }
        let storage = ApiError::from(ServiceError::Storage("disk gone".into()));
        assert_eq!(storage.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
