//! Select Payment slice. Exactly one method from the closed set.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use crate::domain::ids::SaleId;
use crate::infra::ClientError;

use super::{PaymentMethod, SessionStore};

#[derive(Debug, Clone, serde::Deserialize)]
pub struct SelectPaymentPayload {
    pub method: PaymentMethod,
}

pub async fn select_payment_endpoint(
    State(sessions): State<SessionStore>,
    Path(sale_uuid): Path<Uuid>,
    Json(payload): Json<SelectPaymentPayload>,
) -> Result<Json<PaymentMethod>, ClientError> {
    let sale_id: SaleId = sale_uuid.try_into()?;
    sessions
        .update(sale_id, |session| Ok(session.select_payment(payload.method)?))
        .await?;
    Ok(Json(payload.method))
}

//-------------------------- Tests -------------------------------
