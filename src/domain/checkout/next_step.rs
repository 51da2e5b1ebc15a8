//! Next Step slice: the guarded forward transition.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use crate::domain::ids::SaleId;
use crate::infra::ClientError;

use super::{CheckoutStage, SessionStore};

pub async fn next_step_endpoint(
    State(sessions): State<SessionStore>,
    Path(sale_uuid): Path<Uuid>,
) -> Result<Json<CheckoutStage>, ClientError> {
    let sale_id: SaleId = sale_uuid.try_into()?;
    let stage = sessions
        .update(sale_id, |session| Ok(session.advance()?))
        .await?;
    Ok(Json(stage))
}

//-------------------------- Tests -------------------------------

#[cfg(test)]
mod tests {
    use crate::domain::checkout::CheckoutError;

    use super::*;

    #[tokio::test]
    async fn advancing_an_empty_cart_is_rejected() {
        let sessions = SessionStore::new();
        let sale_id = sessions.open().await;

        let result = next_step_endpoint(State(sessions), Path(sale_id.into())).await;

        assert!(matches!(
            result,
            Err(ClientError::Checkout(CheckoutError::EmptyCart))
        ));
    }
}
