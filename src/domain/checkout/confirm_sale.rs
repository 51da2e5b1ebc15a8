//! Confirm Sale slice: the terminal action of the sequencer.
//!
//! Non-PIX methods settle synchronously and the order lands in the log
//! immediately. PIX opens a pending charge instead; the settlement worker
//! decides its fate.

use axum::Json;
use axum::extract::{Path, State};
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::domain::ids::{OrderId, SaleId};
use crate::domain::orders::{Order, OrderLog};
use crate::domain::storefront::order_handoff_link;
use crate::infra::{ClientError, Settings};

use super::{PendingCharge, SessionStore, SettlementLedger, pix};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmationStatus {
    Confirmed,
    AwaitingPayment,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PixDetails {
    pub payload: String,
    pub expires_in_secs: u32,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ConfirmSaleResponse {
    pub order_id: OrderId,
    pub status: ConfirmationStatus,
    pub total: Decimal,
    pub pix: Option<PixDetails>,
    pub whatsapp_handoff: String,
}

pub async fn confirm_sale_endpoint(
    State(settings): State<Settings>,
    State(sessions): State<SessionStore>,
    State(orders): State<OrderLog>,
    State(settlements): State<SettlementLedger>,
    Path(sale_uuid): Path<Uuid>,
) -> Result<Json<ConfirmSaleResponse>, ClientError> {
    let sale_id: SaleId = sale_uuid.try_into()?;

    let order = sessions
        .update(sale_id, |session| {
            let method = session.complete()?;
            Ok(Order::from_sale(
                &session.cart,
                session.customer().cloned(),
                method,
            ))
        })
        .await?;

    let whatsapp_handoff = order_handoff_link(&settings.store, &order);
    let response = if order.payment_method.settles_asynchronously() {
        let payload = pix::copia_e_cola(&settings.store, order.total);
        let charge = PendingCharge::new(
            sale_id,
            order.clone(),
            payload.clone(),
            settings.checkout.pix_timeout_secs,
            settings.checkout.settlement_delay_secs,
        );
        info!(
            "Sale {sale_id} is awaiting a PIX payment of {} for {}s.",
            order.total, settings.checkout.pix_timeout_secs
        );
        settlements.open(charge).await;

        ConfirmSaleResponse {
            order_id: order.id,
            status: ConfirmationStatus::AwaitingPayment,
            total: order.total,
            pix: Some(PixDetails {
                payload,
                expires_in_secs: settings.checkout.pix_timeout_secs,
            }),
            whatsapp_handoff,
        }
    } else {
        info!(
            "Sale {sale_id} settled as order {} ({}) for {}.",
            order.id, order.payment_method, order.total
        );
        let order_id = order.id;
        let total = order.total;
        orders.append(order).await;
        sessions
            .update(sale_id, |session| {
                session.settle(order_id);
                Ok(())
            })
            .await?;

        ConfirmSaleResponse {
            order_id,
            status: ConfirmationStatus::Confirmed,
            total,
            pix: None,
            whatsapp_handoff,
        }
    };

    Ok(Json(response))
}

//-------------------------- Tests -------------------------------
