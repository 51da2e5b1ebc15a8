//! Reset Sale slice: back to an empty session from any stage. Also cancels a
//! pending PIX charge for the sale, if one exists.

use axum::Json;
use axum::extract::{Path, State};
use tracing::info;
use uuid::Uuid;

use crate::domain::ids::SaleId;
use crate::infra::ClientError;

use super::{CheckoutStage, SessionStore, SettlementLedger};

pub async fn reset_sale_endpoint(
    State(sessions): State<SessionStore>,
    State(settlements): State<SettlementLedger>,
    Path(sale_uuid): Path<Uuid>,
) -> Result<Json<CheckoutStage>, ClientError> {
    let sale_id: SaleId = sale_uuid.try_into()?;

    if settlements.cancel(sale_id).await.is_some() {
        info!("Discarded the pending charge of sale {sale_id} on reset.");
    }

    let stage = sessions
        .update(sale_id, |session| {
            session.reset();
            Ok(session.stage())
        })
        .await?;
    Ok(Json(stage))
}

//-------------------------- Tests -------------------------------
