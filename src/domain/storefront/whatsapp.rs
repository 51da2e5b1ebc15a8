//! WhatsApp handoff links for the public storefront.
//!
//! The storefront has no payment rails of its own; purchases and product
//! enquiries hand over to the store's WhatsApp number via `wa.me` deep links
//! with a pre-filled message.

use axum::Json;
use axum::extract::{Path, State};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::catalog::{Catalog, CatalogItem};
use crate::domain::ids::ProductId;
use crate::domain::orders::Order;
use crate::infra::{ClientError, Settings, StoreSettings};

/// Percent-encodes a message for the `text` query parameter, leaving the
/// characters `encodeURIComponent` leaves.
fn encode(message: &str) -> String {
    let mut encoded = String::with_capacity(message.len() * 3);
    for byte in message.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' => encoded.push(byte as char),
            b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}

/// Formats an amount the Brazilian way: `R$ 4.250,00`.
fn format_brl(amount: Decimal) -> String {
    let fixed = format!("{amount:.2}");
    let (units, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let (sign, digits) = units.strip_prefix('-').map_or(("", units), |d| ("-", d));

    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("{sign}R$ {grouped},{cents}")
}

fn deep_link(store: &StoreSettings, message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        store.whatsapp_number,
        encode(message)
    )
}

/// The enquiry link shown on a catalog card. Out-of-stock products get a
/// notify-me message instead of a purchase enquiry.
pub fn product_inquiry_link(store: &StoreSettings, item: &CatalogItem) -> String {
    let message = if item.available_quantity > 0 {
        format!(
            "Olá! Tenho interesse no produto *{}* por {}. Poderia me dar mais informações?",
            item.name,
            format_brl(item.unit_price)
        )
    } else {
        format!(
            "Olá! Gostaria de ser avisado quando o produto *{}* estiver disponível.",
            item.name
        )
    };
    deep_link(store, &message)
}

/// The link handed to the operator once a sale is confirmed, carrying the
/// order summary.
pub fn order_handoff_link(store: &StoreSettings, order: &Order) -> String {
    let mut message = format!("Olá! Pedido {} confirmado:\n", order.id);
    for line in &order.lines {
        message.push_str(&format!(
            "{}x {} - {}\n",
            line.quantity,
            line.name,
            format_brl(line.line_total)
        ));
    }
    message.push_str(&format!("Total: {}", format_brl(order.total)));
    deep_link(store, &message)
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct WhatsAppLinkResponse {
    pub product_id: ProductId,
    pub link: String,
}

pub async fn whatsapp_link_endpoint(
    State(settings): State<Settings>,
    State(catalog): State<Catalog>,
    Path(product_uuid): Path<Uuid>,
) -> Result<Json<WhatsAppLinkResponse>, ClientError> {
    let product_id: ProductId = product_uuid.try_into()?;
    let item = catalog
        .get(product_id)
        .ok_or_else(|| ClientError::NotFound(format!("Product {product_id} does not exist.")))?;

    Ok(Json(WhatsAppLinkResponse {
        product_id,
        link: product_inquiry_link(&settings.store, &item),
    }))
}

//-------------------------- Tests -------------------------------
