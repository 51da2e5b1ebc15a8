mod get_order;
mod list_orders;
mod order;

pub use get_order::get_order_endpoint;
pub use list_orders::list_orders_endpoint;
pub use order::{Order, OrderLine, OrderLog};
