//! Cart read model returned by every cart-mutating slice, so the client
//! always sees the freshly derived totals.

use rust_decimal::Decimal;

use super::{Cart, CartLine, DiscountSpec};

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CartReadModel {
    pub lines: Vec<CartLine>,
    pub item_count: u32,
    pub subtotal: Decimal,
    pub discount: Option<DiscountSpec>,
    pub discount_amount: Decimal,
    pub total: Decimal,
}

impl From<&Cart> for CartReadModel {
    fn from(cart: &Cart) -> Self {
        Self {
            lines: cart.lines().to_vec(),
            item_count: cart.item_count(),
            subtotal: cart.subtotal(),
            discount: cart.discount(),
            discount_amount: cart.discount_amount(),
            total: cart.total(),
        }
    }
}
