mod add_item;
mod apply_discount;
mod builder;
mod clear_cart;
mod errors;
mod read_model;
mod remove_item;
mod set_quantity;

pub use add_item::{AddItemPayload, add_item_endpoint};
pub use apply_discount::{ApplyDiscountPayload, apply_discount_endpoint};
pub use builder::{Cart, CartLine, DiscountSpec};
pub use clear_cart::clear_cart_endpoint;
pub use errors::CartError;
pub use read_model::CartReadModel;
pub use remove_item::{RemoveItemPayload, remove_item_endpoint};
pub use set_quantity::{SetQuantityPayload, set_quantity_endpoint};
