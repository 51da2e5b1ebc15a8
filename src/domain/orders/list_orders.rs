//! List Orders slice: the sales history, oldest first.

use axum::Json;
use axum::extract::State;

use crate::infra::ClientError;

use super::{Order, OrderLog};

pub async fn list_orders_endpoint(
    State(orders): State<OrderLog>,
) -> Result<Json<Vec<Order>>, ClientError> {
    Ok(Json(orders.all().await))
}
