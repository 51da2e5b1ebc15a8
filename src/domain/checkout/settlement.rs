//! Pending PIX charges and the ledger the settlement worker drains.
//!
//! A charge carries two countdowns: the payability window (the payment clock)
//! and the simulated provider confirmation delay. Whichever reaches zero
//! first decides the outcome.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::ids::SaleId;
use crate::domain::orders::Order;

use super::payment_clock::{ClockEvent, PaymentClock};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettlementOutcome {
    Confirmed,
    Expired,
}

#[derive(Debug, Clone)]
pub struct PendingCharge {
    pub sale_id: SaleId,
    pub order: Order,
    pub pix_payload: String,
    clock: PaymentClock,
    settle_in_secs: u32,
}

impl PendingCharge {
    pub fn new(
        sale_id: SaleId,
        order: Order,
        pix_payload: String,
        timeout_secs: u32,
        settle_in_secs: u32,
    ) -> Self {
        Self {
            sale_id,
            order,
            pix_payload,
            clock: PaymentClock::new(timeout_secs),
            settle_in_secs,
        }
    }

    pub fn remaining_secs(&self) -> u32 {
        self.clock.remaining_secs()
    }

    /// One simulated second. Confirmation wins a tie with expiry, matching
    /// the always-succeeding demo settlement.
    pub fn tick(&mut self) -> Option<SettlementOutcome> {
        if self.settle_in_secs > 0 {
            self.settle_in_secs -= 1;
            if self.settle_in_secs == 0 {
                return Some(SettlementOutcome::Confirmed);
            }
        }
        match self.clock.tick() {
            Some(ClockEvent::Expired) => Some(SettlementOutcome::Expired),
            None => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SettlementLedger {
    charges: Arc<RwLock<HashMap<SaleId, PendingCharge>>>,
}

impl SettlementLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn open(&self, charge: PendingCharge) {
        self.charges.write().await.insert(charge.sale_id, charge);
    }

    pub async fn pending(&self, sale_id: SaleId) -> Option<PendingCharge> {
        self.charges.read().await.get(&sale_id).cloned()
    }

    pub async fn cancel(&self, sale_id: SaleId) -> Option<PendingCharge> {
        self.charges.write().await.remove(&sale_id)
    }

    /// Advances every pending charge by one second, removing and returning
    /// the ones that reached an outcome.
    pub async fn tick_all(&self) -> Vec<(PendingCharge, SettlementOutcome)> {
        let mut charges = self.charges.write().await;
        let mut settled = Vec::new();
        let mut finished_ids = Vec::new();

        for (sale_id, charge) in charges.iter_mut() {
            if let Some(outcome) = charge.tick() {
                finished_ids.push((*sale_id, outcome));
            }
        }
        for (sale_id, outcome) in finished_ids {
            if let Some(charge) = charges.remove(&sale_id) {
                settled.push((charge, outcome));
            }
        }
        settled
    }
}

//-------------------------- Tests -------------------------------

#[cfg(test)]
mod tests {
    use crate::domain::cart::Cart;
    use crate::domain::checkout::PaymentMethod;

    use super::*;

    fn charge(timeout_secs: u32, settle_in_secs: u32) -> PendingCharge {
        let order = Order::from_sale(&Cart::new(), None, PaymentMethod::Pix);
        PendingCharge::new(
            SaleId::new(),
            order,
            "payload".to_owned(),
            timeout_secs,
            settle_in_secs,
        )
    }

    #[test]
    fn a_charge_confirms_when_the_settlement_delay_elapses_first() {
        let mut charge = charge(900, 3);

        assert_eq!(charge.tick(), None);
        assert_eq!(charge.tick(), None);
        assert_eq!(charge.tick(), Some(SettlementOutcome::Confirmed));
    }

    #[test]
    fn a_charge_expires_after_the_full_payment_window() {
        // A settlement that would only arrive after the window has closed.
        let mut charge = charge(900, 10_000);

        let mut outcome = None;
        let mut ticks = 0;
        while outcome.is_none() {
            outcome = charge.tick();
            ticks += 1;
        }

        assert_eq!(outcome, Some(SettlementOutcome::Expired));
        assert_eq!(ticks, 900);
    }

    #[tokio::test]
    async fn the_ledger_drains_settled_charges() {
        let ledger = SettlementLedger::new();
        let fast = charge(900, 1);
        let slow = charge(900, 500);
        let fast_sale = fast.sale_id;
        let slow_sale = slow.sale_id;

        ledger.open(fast).await;
        ledger.open(slow).await;

        let settled = ledger.tick_all().await;
        assert_eq!(settled.len(), 1);
        assert_eq!(settled[0].0.sale_id, fast_sale);
        assert_eq!(settled[0].1, SettlementOutcome::Confirmed);

        assert!(ledger.pending(fast_sale).await.is_none());
        assert!(ledger.pending(slow_sale).await.is_some());
    }
}
