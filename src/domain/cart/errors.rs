use rust_decimal::Decimal;

use crate::domain::ids::ProductId;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CartError {
    #[error("Product {0} is not in the catalog.")]
    UnknownItem(ProductId),
    #[error("Product {0} is not in the cart.")]
    ItemNotInCart(ProductId),
    #[error("Requested quantity {requested} exceeds available stock of {available}.")]
    QuantityExceedsStock { requested: u32, available: u32 },
    #[error("Discount {0} is not valid.")]
    InvalidDiscount(Decimal),
}
