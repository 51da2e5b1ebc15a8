//! Remove Item slice. Deletes the whole line, whatever its quantity.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use crate::domain::checkout::SessionStore;
use crate::domain::ids::{ProductId, SaleId};
use crate::infra::ClientError;

use super::CartReadModel;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct RemoveItemPayload {
    pub product_id: Uuid,
}

pub async fn remove_item_endpoint(
    State(sessions): State<SessionStore>,
    Path(sale_uuid): Path<Uuid>,
    Json(payload): Json<RemoveItemPayload>,
) -> Result<Json<CartReadModel>, ClientError> {
    let sale_id: SaleId = sale_uuid.try_into()?;
    let product_id: ProductId = payload.product_id.try_into()?;

    let cart = sessions
        .update(sale_id, |session| {
            session.guard_not_completed()?;
            session.cart.remove_item(product_id)?;
            Ok(CartReadModel::from(&session.cart))
        })
        .await?;

    Ok(Json(cart))
}

//-------------------------- Tests -------------------------------
