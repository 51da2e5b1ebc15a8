//! The cart builder: ordered lines, a discount, and derived totals.
//!
//! All operations are synchronous and free of I/O. Totals are recomputed on
//! every read; nothing here is cached.

use rust_decimal::Decimal;

use crate::domain::catalog::CatalogItem;
use crate::domain::ids::ProductId;

use super::CartError;

/// One aggregated entry per distinct product. The product fields are a
/// snapshot taken when the line was first created, so a sale keeps pricing
/// stable for its whole session.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Decimal,
    pub available_quantity: u32,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Discount applied to the cart subtotal, either a percentage of the
/// subtotal or a flat currency amount.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum DiscountSpec {
    Percentage(Decimal),
    Amount(Decimal),
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
    discount: Option<DiscountSpec>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn discount(&self) -> Option<DiscountSpec> {
        self.discount
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total units across all lines, as shown in the sale summary.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Adds one unit of the product. An existing line is incremented, capped
    /// at the available stock; the increment past the cap is a silent no-op,
    /// matching the disabled "+" button on the POS screen.
    pub fn add_item(&mut self, product: &CatalogItem) {
        match self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product.id)
        {
            Some(line) => {
                if line.quantity < line.available_quantity {
                    line.quantity += 1;
                }
            }
            None => {
                if product.available_quantity > 0 {
                    self.lines.push(CartLine {
                        product_id: product.id,
                        name: product.name.clone(),
                        unit_price: product.unit_price,
                        available_quantity: product.available_quantity,
                        quantity: 1,
                    });
                }
            }
        }
    }

    pub fn remove_item(&mut self, product_id: ProductId) -> Result<(), CartError> {
        let before = self.lines.len();
        self.lines.retain(|line| line.product_id != product_id);
        if self.lines.len() == before {
            return Err(CartError::ItemNotInCart(product_id));
        }
        Ok(())
    }

    /// Replaces a line's quantity. Zero removes the line; more than the
    /// available stock is rejected.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return self.remove_item(product_id);
        }

        let line = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product_id)
            .ok_or(CartError::ItemNotInCart(product_id))?;

        if quantity > line.available_quantity {
            return Err(CartError::QuantityExceedsStock {
                requested: quantity,
                available: line.available_quantity,
            });
        }

        line.quantity = quantity;
        Ok(())
    }

    pub fn apply_discount(&mut self, spec: DiscountSpec) -> Result<(), CartError> {
        match spec {
            DiscountSpec::Percentage(pct) => {
                if pct < Decimal::ZERO || pct > Decimal::new(100, 0) {
                    return Err(CartError::InvalidDiscount(pct));
                }
            }
            DiscountSpec::Amount(amount) => {
                if amount < Decimal::ZERO {
                    return Err(CartError::InvalidDiscount(amount));
                }
            }
        }
        self.discount = Some(spec);
        Ok(())
    }

    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// The discount actually taken off, never more than the subtotal.
    pub fn discount_amount(&self) -> Decimal {
        let subtotal = self.subtotal();
        let amount = match self.discount {
            None => Decimal::ZERO,
            Some(DiscountSpec::Percentage(pct)) => subtotal * pct / Decimal::new(100, 0),
            Some(DiscountSpec::Amount(amount)) => amount,
        };
        amount.min(subtotal)
    }

    pub fn total(&self) -> Decimal {
        (self.subtotal() - self.discount_amount()).max(Decimal::ZERO)
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.discount = None;
    }
}

//-------------------------- Tests -------------------------------
