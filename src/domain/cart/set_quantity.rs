//! Set Quantity slice. Zero removes the line; more than the available stock
//! is rejected at the data-mutation boundary.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use crate::domain::checkout::SessionStore;
use crate::domain::ids::{ProductId, SaleId};
use crate::infra::ClientError;

use super::CartReadModel;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct SetQuantityPayload {
    pub product_id: Uuid,
    pub quantity: u32,
}

pub async fn set_quantity_endpoint(
    State(sessions): State<SessionStore>,
    Path(sale_uuid): Path<Uuid>,
    Json(payload): Json<SetQuantityPayload>,
) -> Result<Json<CartReadModel>, ClientError> {
    let sale_id: SaleId = sale_uuid.try_into()?;
    let product_id: ProductId = payload.product_id.try_into()?;

    let cart = sessions
        .update(sale_id, |session| {
            session.guard_not_completed()?;
            session.cart.set_quantity(product_id, payload.quantity)?;
            Ok(CartReadModel::from(&session.cart))
        })
        .await?;

    Ok(Json(cart))
}

//-------------------------- Tests -------------------------------
