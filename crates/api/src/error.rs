//! Unified error handling with Sentry integration.
//!
//! Route handlers return `Result<T, AppError>`. Refund failures and malformed
//! requests become `400 Bad Request` with the error text as a plain-text body.
//! Failures after the order was flagged refunded are also reported to Sentry,
//! since they leave an order refunded without a credit.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use order_refunds_core::RefundError;

/// Application-level error type for the refund API.
#[derive(Debug, Error)]
pub enum AppError {
    /// The refund workflow rejected the request.
    #[error(transparent)]
    Refund(#[from] RefundError),

    /// Bad request from client.
    #[error("{0}")]
    BadRequest(String),
}

impl AppError {
    /// Whether the refund failed after the order was flagged refunded.
    const fn is_partial_refund(&self) -> bool {
        matches!(
            self,
            Self::Refund(RefundError::VoucherConstruction(_) | RefundError::Store(_))
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_partial_refund() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Refund failed after order was flagged"
            );
        } else {
            tracing::warn!(error = %self, "Refund request rejected");
        }

        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Add a breadcrumb for a refund step.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of actions
/// leading up to an error.
pub fn add_breadcrumb(category: &str, message: &str, data: &[(&str, &str)]) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    for (key, value) in data {
        breadcrumb.data.insert(
            (*key).to_string(),
            serde_json::Value::String((*value).to_string()),
        );
    }

    sentry::add_breadcrumb(breadcrumb);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use order_refunds_core::{OrderKey, StoreError, UserKey};

    use super::*;

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_refund_errors_are_plain_text_bad_requests() {
        let err = AppError::from(RefundError::UserNotFound(UserKey::from("barbara-streisand")));
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "user not found: barbara-streisand");
    }

    #[tokio::test]
    async fn test_partial_refund_keeps_store_message() {
        let err = AppError::from(RefundError::Store(StoreError::Overflow {
            entity: "user",
            key: "john-doe".to_string(),
        }));
        assert!(err.is_partial_refund());

        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "user balance overflow: john-doe");
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            err.into_response().status()
        }

        assert_eq!(
            get_status(AppError::BadRequest("user_key is required".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(RefundError::AlreadyRefunded(OrderKey::from("2")).into()),
            StatusCode::BAD_REQUEST
        );
        assert!(!AppError::from(RefundError::AlreadyRefunded(OrderKey::from("2"))).is_partial_refund());
    }
}
