//! Previous Step slice. Always permitted; keeps entered data.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use crate::domain::ids::SaleId;
use crate::infra::ClientError;

use super::{CheckoutStage, SessionStore};

pub async fn prev_step_endpoint(
    State(sessions): State<SessionStore>,
    Path(sale_uuid): Path<Uuid>,
) -> Result<Json<CheckoutStage>, ClientError> {
    let sale_id: SaleId = sale_uuid.try_into()?;
    let stage = sessions
        .update(sale_id, |session| Ok(session.retreat()?))
        .await?;
    Ok(Json(stage))
}
