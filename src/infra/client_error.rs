use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::domain::cart::CartError;
use crate::domain::checkout::CheckoutError;

#[derive(Debug)]
pub enum ClientError {
    Cart(CartError),
    Checkout(CheckoutError),
    NotFound(String),
    Payload(String),
    Internal(anyhow::Error),
}

impl IntoResponse for ClientError {
    fn into_response(self) -> Response {
        #[derive(serde::Serialize)]
        struct ErrorResponse {
            message: String,
        }

        let (status, message) = match self {
            ClientError::Cart(cart_error) => (StatusCode::BAD_REQUEST, cart_error.to_string()),
            ClientError::Checkout(checkout_error) => {
                (StatusCode::BAD_REQUEST, checkout_error.to_string())
            }
            ClientError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ClientError::Payload(message) => (StatusCode::BAD_REQUEST, message),
            ClientError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Please ask your system administrator to check the logs.".to_owned(),
            ),
        };

        (status, Json(ErrorResponse { message })).into_response()
    }
}

impl From<CartError> for ClientError {
    fn from(cart_error: CartError) -> Self {
        ClientError::Cart(cart_error)
    }
}

impl From<CheckoutError> for ClientError {
    fn from(checkout_error: CheckoutError) -> Self {
        ClientError::Checkout(checkout_error)
    }
}

impl From<anyhow::Error> for ClientError {
    fn from(value: anyhow::Error) -> Self {
        ClientError::Internal(value)
    }
}
