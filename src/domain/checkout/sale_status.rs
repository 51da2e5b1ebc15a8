//! Sale Status slice: the session read model clients poll while walking the
//! steps and while a PIX charge is pending.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use crate::domain::cart::CartReadModel;
use crate::domain::customers::Customer;
use crate::domain::ids::SaleId;
use crate::infra::ClientError;

use super::{CheckoutSession, CheckoutStage, PaymentMethod, SessionStore, SettlementSignal};

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SaleReadModel {
    pub sale_id: Uuid,
    pub stage: CheckoutStage,
    pub cart: CartReadModel,
    pub customer: Option<Customer>,
    pub payment_method: Option<PaymentMethod>,
    pub signal: Option<SettlementSignal>,
}

impl SaleReadModel {
    pub fn project(sale_id: SaleId, session: &CheckoutSession) -> Self {
        Self {
            sale_id: sale_id.into(),
            stage: session.stage(),
            cart: CartReadModel::from(&session.cart),
            customer: session.customer().cloned(),
            payment_method: session.payment_method(),
            signal: session.signal().cloned(),
        }
    }
}

pub async fn sale_status_endpoint(
    State(sessions): State<SessionStore>,
    Path(sale_uuid): Path<Uuid>,
) -> Result<Json<SaleReadModel>, ClientError> {
    let sale_id: SaleId = sale_uuid.try_into()?;
    let read_model = sessions
        .read(sale_id, |session| SaleReadModel::project(sale_id, session))
        .await?;
    Ok(Json(read_model))
}
