//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::payment::PaymentStep;

/// Page-level error type, rendered as HTML
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Page not found")]
    NotFound,

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Page not found"),
            AppError::Template(e) => {
                tracing::error!("Template error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Template error")
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
            }
        };

        // Return simple HTML error page
        let html = format!(
            r#"<!DOCTYPE html>
<html>
<head><title>{} - Monastery360</title></head>
<body style="font-family: sans-serif; text-align: center; padding: 50px;">
    <h1>{}</h1>
    <p>{}</p>
    <a href="/">Return to homepage</a>
</body>
</html>"#,
            status.as_u16(),
            status.as_u16(),
            message
        );

        (status, axum::response::Html(html)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

/// JSON API errors (booking, payment, calendar)
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Booking form is incomplete: missing {}", .missing.join(", "))]
    IncompleteForm { missing: Vec<&'static str> },

    #[error("Contact details are invalid: {0}")]
    InvalidContact(#[from] validator::ValidationErrors),

    #[error("Card details are incomplete: missing {}", .missing.join(", "))]
    IncompleteCard { missing: Vec<&'static str> },

    #[error("Payment session {0} not found")]
    SessionNotFound(Uuid),

    #[error("Cannot move payment from {from} to {to}")]
    InvalidTransition { from: PaymentStep, to: PaymentStep },

    #[error("Payment gateway error: {0}")]
    Gateway(String),

    #[error("Event {0} not found")]
    EventNotFound(u32),
}

impl ApiError {
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::IncompleteForm { .. } => "incomplete_form",
            ApiError::InvalidContact(_) => "invalid_contact",
            ApiError::IncompleteCard { .. } => "incomplete_card",
            ApiError::SessionNotFound(_) => "session_not_found",
            ApiError::InvalidTransition { .. } => "invalid_transition",
            ApiError::Gateway(_) => "gateway_error",
            ApiError::EventNotFound(_) => "event_not_found",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::IncompleteForm { .. }
            | ApiError::InvalidContact(_)
            | ApiError::IncompleteCard { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::SessionNotFound(_) | ApiError::EventNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidTransition { .. } => StatusCode::CONFLICT,
            ApiError::Gateway(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            ApiError::IncompleteForm { missing } | ApiError::IncompleteCard { missing } => {
                Some(serde_json::json!({ "missing": missing }))
            }
            ApiError::InvalidContact(errors) => serde_json::to_value(errors).ok(),
            _ => None,
        }
    }
}

/// Generic API error body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::debug!("Rejected API request: {}", self);
        }

        let body = ErrorResponse {
            error_type: self.error_type().to_string(),
            message: self.to_string(),
            details: self.details(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ApiError::IncompleteForm {
            missing: vec!["date", "phone"],
        };
        assert_eq!(err.to_string(), "Booking form is incomplete: missing date, phone");

        let err = ApiError::InvalidTransition {
            from: PaymentStep::Details,
            to: PaymentStep::Success,
        };
        assert!(err.to_string().contains("details"));
        assert!(err.to_string().contains("success"));
    }

    #[test]
    fn test_api_error_status() {
        assert_eq!(
            ApiError::IncompleteCard { missing: vec!["cvv"] }.status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::SessionNotFound(Uuid::nil()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ApiError::EventNotFound(99).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Gateway("declined".into()).status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_api_error_details() {
        let err = ApiError::IncompleteForm {
            missing: vec!["package"],
        };
        assert_eq!(
            err.details(),
            Some(serde_json::json!({ "missing": ["package"] }))
        );
        assert_eq!(ApiError::Gateway("x".into()).details(), None);
    }
}
