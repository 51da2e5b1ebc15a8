//! The terminal artifact of a sale. Created only on confirmation, immutable
//! thereafter.

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use tokio::sync::RwLock;

use crate::domain::cart::Cart;
use crate::domain::checkout::PaymentMethod;
use crate::domain::customers::Customer;
use crate::domain::ids::{OrderId, ProductId};

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
    pub line_total: Decimal,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub lines: Vec<OrderLine>,
    pub customer: Option<Customer>,
    pub payment_method: PaymentMethod,
    pub subtotal: Decimal,
    pub discount_amount: Decimal,
    pub total: Decimal,
    pub created_at: Timestamp,
}

impl Order {
    /// Snapshots the sale as it stands at confirmation time.
    pub fn from_sale(
        cart: &Cart,
        customer: Option<Customer>,
        payment_method: PaymentMethod,
    ) -> Self {
        let lines = cart
            .lines()
            .iter()
            .map(|line| OrderLine {
                product_id: line.product_id,
                name: line.name.clone(),
                unit_price: line.unit_price,
                quantity: line.quantity,
                line_total: line.line_total(),
            })
            .collect();

        Self {
            id: OrderId::new(),
            lines,
            customer,
            payment_method,
            subtotal: cart.subtotal(),
            discount_amount: cart.discount_amount(),
            total: cart.total(),
            created_at: Timestamp::now(),
        }
    }
}

/// In-memory log of completed sales, newest last. Queryable so the dashboard
/// has a sales history to show.
#[derive(Debug, Clone, Default)]
pub struct OrderLog {
    orders: Arc<RwLock<Vec<Order>>>,
}

impl OrderLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn append(&self, order: Order) {
        self.orders.write().await.push(order);
    }

    pub async fn all(&self) -> Vec<Order> {
        self.orders.read().await.clone()
    }

    pub async fn get(&self, order_id: OrderId) -> Option<Order> {
        self.orders
            .read()
            .await
            .iter()
            .find(|order| order.id == order_id)
            .cloned()
    }
}

//-------------------------- Tests -------------------------------
