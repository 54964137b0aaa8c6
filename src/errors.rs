use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::domain::errors::DomainError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(msg) => AppError::BadRequest(msg),
            DomainError::NotFound(msg) => AppError::NotFound(msg),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<actix_web::error::BlockingError> for AppError {
    fn from(e: actix_web::error::BlockingError) -> Self {
        AppError::Internal(e.to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Every error carries `{"error": {"message", "status"}}`. Internal
    /// details go to the log, not to the client.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let message = match self {
            AppError::Internal(detail) => {
                log::error!("{}", detail);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        HttpResponse::build(status).json(serde_json::json!({
            "error": {
                "message": message,
                "status": status.as_u16(),
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_json(err: AppError) -> serde_json::Value {
        let body = to_bytes(err.error_response().into_body())
            .await
            .expect("readable body");
        serde_json::from_slice(&body).expect("json body")
    }

    #[test]
    fn bad_request_returns_400() {
        let err = AppError::BadRequest("missing body".to_string());
        assert_eq!(err.error_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_returns_404() {
        let err = AppError::NotFound("Invoice ID#3 not found".to_string());
        assert_eq!(err.error_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn internal_error_returns_500() {
        let err = AppError::Internal("something went wrong".to_string());
        assert_eq!(
            err.error_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_error_display() {
        assert_eq!(
            AppError::Internal("msg".to_string()).to_string(),
            "Internal error: msg"
        );
    }

    #[actix_web::test]
    async fn not_found_body_carries_message_and_status() {
        let body = body_json(AppError::NotFound("Company 'x' not found".to_string())).await;

        assert_eq!(
            body,
            serde_json::json!({
                "error": { "message": "Company 'x' not found", "status": 404 }
            })
        );
    }

    #[actix_web::test]
    async fn internal_body_hides_detail() {
        let body = body_json(AppError::Internal("password=hunter2".to_string())).await;

        assert_eq!(body["error"]["message"], "Internal server error");
        assert_eq!(body["error"]["status"], 500);
    }

    #[test]
    fn domain_validation_maps_to_bad_request() {
        let app_err: AppError = DomainError::Validation("bad value".to_string()).into();
        assert!(matches!(app_err, AppError::BadRequest(_)));
    }

    #[test]
    fn domain_not_found_keeps_message() {
        let app_err: AppError = DomainError::NotFound("Invoice ID#1 not found".to_string()).into();
        assert!(matches!(app_err, AppError::NotFound(ref m) if m == "Invoice ID#1 not found"));
    }

    #[test]
    fn domain_internal_maps_to_app_internal() {
        let app_err: AppError = DomainError::Internal("oops".to_string()).into();
        assert!(matches!(app_err, AppError::Internal(_)));
    }
}
