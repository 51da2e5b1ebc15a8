//! Add Item slice.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use crate::domain::catalog::Catalog;
use crate::domain::checkout::SessionStore;
use crate::domain::ids::{ProductId, SaleId};
use crate::infra::ClientError;

use super::{CartError, CartReadModel};

#[derive(Debug, Clone, serde::Deserialize)]
pub struct AddItemPayload {
    pub product_id: Uuid,
}

pub async fn add_item_endpoint(
    State(catalog): State<Catalog>,
    State(sessions): State<SessionStore>,
    Path(sale_uuid): Path<Uuid>,
    Json(payload): Json<AddItemPayload>,
) -> Result<Json<CartReadModel>, ClientError> {
    let sale_id: SaleId = sale_uuid.try_into()?;
    let product_id: ProductId = payload.product_id.try_into()?;

    let product = catalog
        .get(product_id)
        .ok_or(CartError::UnknownItem(product_id))?
        .clone();

    let cart = sessions
        .update(sale_id, |session| {
            session.guard_not_completed()?;
            session.cart.add_item(&product);
            Ok(CartReadModel::from(&session.cart))
        })
        .await?;

    Ok(Json(cart))
}

//-------------------------- Tests -------------------------------
