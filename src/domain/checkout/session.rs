//! The checkout sequencer: a per-sale state machine gating progression on
//! per-step completeness.

use crate::domain::cart::Cart;
use crate::domain::customers::Customer;
use crate::domain::ids::OrderId;

use super::{CheckoutError, CheckoutStage, PaymentMethod};

/// Raised by the settlement worker and surfaced on the session read model so
/// a client polling the sale learns what happened to its payment.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case", tag = "signal")]
pub enum SettlementSignal {
    PaymentConfirmed { order_id: OrderId },
    PaymentExpired,
}

#[derive(Debug, Clone, Default)]
pub struct CheckoutSession {
    pub cart: Cart,
    customer: Option<Customer>,
    payment_method: Option<PaymentMethod>,
    stage: CheckoutStage,
    signal: Option<SettlementSignal>,
}

impl CheckoutSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> CheckoutStage {
        self.stage
    }

    pub fn customer(&self) -> Option<&Customer> {
        self.customer.as_ref()
    }

    pub fn payment_method(&self) -> Option<PaymentMethod> {
        self.payment_method
    }

    pub fn signal(&self) -> Option<&SettlementSignal> {
        self.signal.as_ref()
    }

    /// Guarded forward transition. Each step must be complete before the next
    /// one can be reached.
    pub fn advance(&mut self) -> Result<CheckoutStage, CheckoutError> {
        let next = match self.stage {
            CheckoutStage::SelectingItems => {
                if self.cart.is_empty() {
                    return Err(CheckoutError::EmptyCart);
                }
                CheckoutStage::SelectingCustomer
            }
            CheckoutStage::SelectingCustomer => {
                if self.customer.is_none() {
                    return Err(CheckoutError::NoCustomerSelected);
                }
                CheckoutStage::SelectingPayment
            }
            CheckoutStage::SelectingPayment => {
                if self.payment_method.is_none() {
                    return Err(CheckoutError::NoPaymentMethodSelected);
                }
                CheckoutStage::Confirming
            }
            CheckoutStage::Confirming => return Err(CheckoutError::AlreadyAtConfirmation),
            CheckoutStage::Completed => return Err(CheckoutError::SaleCompleted),
        };
        self.stage = next;
        Ok(next)
    }

    /// Backward transitions never clear data already entered.
    pub fn retreat(&mut self) -> Result<CheckoutStage, CheckoutError> {
        self.stage = match self.stage {
            CheckoutStage::SelectingItems => CheckoutStage::SelectingItems,
            CheckoutStage::SelectingCustomer => CheckoutStage::SelectingItems,
            CheckoutStage::SelectingPayment => CheckoutStage::SelectingCustomer,
            CheckoutStage::Confirming => CheckoutStage::SelectingPayment,
            CheckoutStage::Completed => return Err(CheckoutError::SaleCompleted),
        };
        Ok(self.stage)
    }

    pub fn select_customer(&mut self, customer: Customer) -> Result<(), CheckoutError> {
        self.guard_not_completed()?;
        self.customer = Some(customer);
        Ok(())
    }

    pub fn select_payment(&mut self, method: PaymentMethod) -> Result<(), CheckoutError> {
        self.guard_not_completed()?;
        self.payment_method = Some(method);
        Ok(())
    }

    /// The explicit confirm action. Only valid at the confirmation step; the
    /// caller builds the order record from the session afterwards.
    pub fn complete(&mut self) -> Result<PaymentMethod, CheckoutError> {
        if self.stage != CheckoutStage::Confirming {
            return Err(CheckoutError::NotReadyToConfirm);
        }
        // Guards along the way ensure the method is present by now.
        let method = self
            .payment_method
            .ok_or(CheckoutError::NoPaymentMethodSelected)?;
        self.stage = CheckoutStage::Completed;
        Ok(method)
    }

    /// Restores the empty session: empty cart, no customer, no payment
    /// method, back at item selection. Available from any stage.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// A payment that expired reverts the sale to item selection, keeping the
    /// entered data so the operator can generate a fresh charge.
    pub fn revert_expired(&mut self) {
        self.stage = CheckoutStage::SelectingItems;
        self.signal = Some(SettlementSignal::PaymentExpired);
    }

    /// A settled payment resets the session for the next sale and leaves the
    /// confirmation signal behind.
    pub fn settle(&mut self, order_id: OrderId) {
        self.reset();
        self.signal = Some(SettlementSignal::PaymentConfirmed { order_id });
    }

    pub fn guard_not_completed(&self) -> Result<(), CheckoutError> {
        if self.stage == CheckoutStage::Completed {
            return Err(CheckoutError::SaleCompleted);
        }
        Ok(())
    }
}

//-------------------------- Tests -------------------------------
