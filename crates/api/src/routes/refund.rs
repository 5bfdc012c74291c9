//! Refund route handler.

use axum::{
    Extension, Json,
    body::Bytes,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use order_refunds_core::{OrderKey, UserKey};

use crate::error::{AppError, Result, add_breadcrumb};
use crate::middleware::RequestId;
use crate::state::AppState;

/// Body of a refund request. Echoed back on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefundRequest {
    /// Key of the user to credit.
    #[serde(default)]
    pub user_key: String,
}

/// Refund the order stored under `order_key` to the user named in the body.
///
/// # Errors
///
/// Returns `AppError::BadRequest` if the body is not JSON or `user_key` is
/// blank, and `AppError::Refund` if the workflow rejects the refund.
pub async fn refund(
    State(state): State<AppState>,
    Path(order_key): Path<String>,
    request_id: Option<Extension<RequestId>>,
    body: Bytes,
) -> Result<Json<RefundRequest>> {
    let request: RefundRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("invalid request body: {e}")))?;

    if request.user_key.trim().is_empty() {
        return Err(AppError::BadRequest("user_key is required".to_string()));
    }

    add_breadcrumb(
        "refund",
        "Refund requested",
        &[
            ("user_key", request.user_key.as_str()),
            ("order_key", order_key.as_str()),
        ],
    );

    let user_key = UserKey::from(request.user_key.as_str());
    let order_key = OrderKey::from(order_key);

    let receipt = state.ledger().lock().await.refund(&user_key, &order_key)?;

    let request_id = request_id.map(|Extension(RequestId(id))| id);
    tracing::info!(
        request_id = request_id.as_deref().unwrap_or("-"),
        refund_id = %receipt.refund_id,
        channel = %receipt.channel,
        amount = %receipt.amount,
        "Refund completed"
    );

    Ok(Json(request))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
    };
    use rust_decimal::Decimal;
    use tower::ServiceExt;

    use order_refunds_core::{
        Ledger, Order, OrderId, PaymentMethod, Repository, ShippingZone, User, voucher_key,
    };

    use super::*;

    fn test_state() -> AppState {
        let mut ledger = Ledger::new();
        ledger
            .users
            .insert(User::new("John", "Doe").unwrap().with_balance(Decimal::from(100)))
            .unwrap();
        ledger
            .orders
            .insert(Order::new(
                OrderId::new(1),
                Decimal::from(100),
                PaymentMethod::CreditCard,
                ShippingZone::Europe,
            ))
            .unwrap();
        ledger
            .orders
            .insert(Order::new(
                OrderId::new(3),
                Decimal::from(300),
                PaymentMethod::CashOnDelivery,
                ShippingZone::Mena,
            ))
            .unwrap();
        AppState::new(ledger)
    }

    fn app(state: AppState) -> Router {
        super::super::routes().with_state(state)
    }

    fn post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_successful_refund_echoes_body() {
        let state = test_state();
        let response = app(state.clone())
            .oneshot(post("/order/1/refund/", r#"{"user_key": "john-doe"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let echoed: RefundRequest = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(echoed.user_key, "john-doe");

        let ledger = state.ledger().lock().await;
        let user = ledger.users.find(&UserKey::from("john-doe")).unwrap();
        assert_eq!(user.balance, Decimal::from(200));
    }

    #[tokio::test]
    async fn test_voucher_refund_without_trailing_slash() {
        let state = test_state();
        let response = app(state.clone())
            .oneshot(post("/order/2/refund", r#"{"user_key": "john-doe"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let ledger = state.ledger().lock().await;
        let voucher = ledger
            .vouchers
            .find(&voucher_key(&UserKey::from("john-doe")))
            .unwrap();
        assert_eq!(voucher.balance, Decimal::from(300));
    }

    #[tokio::test]
    async fn test_unknown_user_is_bad_request() {
        let response = app(test_state())
            .oneshot(post("/order/1/refund/", r#"{"user_key": "barbara-streisand"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "user not found: barbara-streisand");
    }

    #[tokio::test]
    async fn test_unknown_order_is_bad_request() {
        let response = app(test_state())
            .oneshot(post("/order/987/refund/", r#"{"user_key": "john-doe"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "order not found: 987");
    }

    #[tokio::test]
    async fn test_blank_or_missing_user_key_is_bad_request() {
        for body in [r#"{"user_key": "  "}"#, "{}", "not json"] {
            let response = app(test_state())
                .oneshot(post("/order/1/refund/", body))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
        }
    }

    #[tokio::test]
    async fn test_repeat_refund_is_rejected() {
        let state = test_state();
        let first = app(state.clone())
            .oneshot(post("/order/1/refund/", r#"{"user_key": "john-doe"}"#))
            .await
            .unwrap();
        let second = app(state.clone())
            .oneshot(post("/order/1/refund/", r#"{"user_key": "john-doe"}"#))
            .await
            .unwrap();

        assert_eq!(first.status(), StatusCode::OK);
        assert_eq!(second.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(second).await, "order already refunded: 1");

        let ledger = state.ledger().lock().await;
        assert_eq!(
            ledger.users.find(&UserKey::from("john-doe")).unwrap().balance,
            Decimal::from(200)
        );
    }
}
