//! Settlement Status slice: what a client polls while a PIX charge is open.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use crate::domain::ids::SaleId;
use crate::infra::ClientError;

use super::{SessionStore, SettlementLedger, SettlementSignal};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PendingChargeView {
    pub pix_payload: String,
    pub remaining_secs: u32,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SettlementStatus {
    pub pending: Option<PendingChargeView>,
    pub signal: Option<SettlementSignal>,
}

pub async fn settlement_status_endpoint(
    State(sessions): State<SessionStore>,
    State(settlements): State<SettlementLedger>,
    Path(sale_uuid): Path<Uuid>,
) -> Result<Json<SettlementStatus>, ClientError> {
    let sale_id: SaleId = sale_uuid.try_into()?;

    let signal = sessions
        .read(sale_id, |session| session.signal().cloned())
        .await?;
    let pending = settlements
        .pending(sale_id)
        .await
        .map(|charge| PendingChargeView {
            remaining_secs: charge.remaining_secs(),
            pix_payload: charge.pix_payload,
        });

    Ok(Json(SettlementStatus { pending, signal }))
}

//-------------------------- Tests -------------------------------
