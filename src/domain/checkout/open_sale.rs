//! Open Sale slice. Starts a fresh checkout session.

use axum::{Json, extract::State};
use uuid::Uuid;

use crate::infra::ClientError;

use super::SessionStore;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct OpenSaleResponse {
    pub sale_id: Uuid,
}

pub async fn open_sale_endpoint(
    State(sessions): State<SessionStore>,
) -> Result<Json<OpenSaleResponse>, ClientError> {
    let sale_id = sessions.open().await;
    Ok(Json(OpenSaleResponse {
        sale_id: sale_id.into(),
    }))
}

//-------------------------- Tests -------------------------------
