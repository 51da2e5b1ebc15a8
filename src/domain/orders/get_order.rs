//! Get Order slice.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use crate::domain::ids::OrderId;
use crate::infra::ClientError;

use super::{Order, OrderLog};

pub async fn get_order_endpoint(
    State(orders): State<OrderLog>,
    Path(order_uuid): Path<Uuid>,
) -> Result<Json<Order>, ClientError> {
    let order_id: OrderId = order_uuid.try_into()?;
    let order = orders
        .get(order_id)
        .await
        .ok_or_else(|| ClientError::NotFound(format!("Order {order_id} does not exist.")))?;
    Ok(Json(order))
}

//-------------------------- Tests -------------------------------
