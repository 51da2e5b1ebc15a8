mod confirm_sale;
mod errors;
mod next_step;
mod open_sale;
mod payment_clock;
pub mod pix;
mod prev_step;
mod reset_sale;
mod sale_status;
mod select_customer;
mod select_payment;
mod session;
mod sessions;
mod settlement;
mod settlement_status;
mod stage;

pub use confirm_sale::{
    ConfirmSaleResponse, ConfirmationStatus, PixDetails, confirm_sale_endpoint,
};
pub use errors::CheckoutError;
pub use next_step::next_step_endpoint;
pub use open_sale::{OpenSaleResponse, open_sale_endpoint};
pub use payment_clock::{ClockEvent, PaymentClock};
pub use prev_step::prev_step_endpoint;
pub use reset_sale::reset_sale_endpoint;
pub use sale_status::{SaleReadModel, sale_status_endpoint};
pub use select_customer::{SelectCustomerPayload, select_customer_endpoint};
pub use select_payment::{SelectPaymentPayload, select_payment_endpoint};
pub use session::{CheckoutSession, SettlementSignal};
pub use sessions::SessionStore;
pub use settlement::{PendingCharge, SettlementLedger, SettlementOutcome};
pub use settlement_status::{
    PendingChargeView, SettlementStatus, settlement_status_endpoint,
};
pub use stage::{CheckoutStage, PaymentMethod};
