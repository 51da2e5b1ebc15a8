use strum_macros::Display;

/// The ordered steps of a sale, as shown on the POS progress bar.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStage {
    #[default]
    SelectingItems,
    SelectingCustomer,
    SelectingPayment,
    Confirming,
    Completed,
}

/// The closed set of payment methods offered at step three.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Pix,
    Card,
    Cash,
    TradeIn,
}

impl PaymentMethod {
    /// Only PIX goes through the simulated asynchronous settlement; the other
    /// methods settle at the counter.
    pub fn settles_asynchronously(&self) -> bool {
        matches!(self, PaymentMethod::Pix)
    }
}
