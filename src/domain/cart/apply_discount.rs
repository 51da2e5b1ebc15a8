//! Apply Discount slice. Stores the discount; lines are untouched.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use crate::domain::checkout::SessionStore;
use crate::domain::ids::SaleId;
use crate::infra::ClientError;

use super::{CartReadModel, DiscountSpec};

#[derive(Debug, Clone, serde::Deserialize)]
pub struct ApplyDiscountPayload {
    pub discount: DiscountSpec,
}

pub async fn apply_discount_endpoint(
    State(sessions): State<SessionStore>,
    Path(sale_uuid): Path<Uuid>,
    Json(payload): Json<ApplyDiscountPayload>,
) -> Result<Json<CartReadModel>, ClientError> {
    let sale_id: SaleId = sale_uuid.try_into()?;

    let cart = sessions
        .update(sale_id, |session| {
            session.guard_not_completed()?;
            session.cart.apply_discount(payload.discount)?;
            Ok(CartReadModel::from(&session.cart))
        })
        .await?;

    Ok(Json(cart))
}

//-------------------------- Tests -------------------------------
