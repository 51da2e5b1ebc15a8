//! Drives every pending PIX charge forward one second at a time and applies
//! the outcome to the order log and the owning session.

use std::time::Duration;

use async_trait::async_trait;
use tokio::select;
use tokio_graceful_shutdown::{IntoSubsystem, SubsystemHandle};
use tracing::{info, warn};

use crate::AppState;
use crate::domain::checkout::SettlementOutcome;

pub struct SettlementWorker {
    state: AppState,
}

impl SettlementWorker {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    async fn settle_due_charges(&self) {
        for (charge, outcome) in self.state.settlements.tick_all().await {
            let sale_id = charge.sale_id;
            match outcome {
                SettlementOutcome::Confirmed => {
                    let order_id = charge.order.id;
                    info!("PIX payment of sale {sale_id} confirmed as order {order_id}.");
                    self.state.orders.append(charge.order).await;
                    let updated = self
                        .state
                        .sessions
                        .update(sale_id, |session| {
                            session.settle(order_id);
                            Ok(())
                        })
                        .await;
                    if let Err(e) = updated {
                        warn!("Could not signal confirmation on sale {sale_id}: {e:?}");
                    }
                }
                SettlementOutcome::Expired => {
                    warn!("PIX payment of sale {sale_id} expired unpaid.");
                    let updated = self
                        .state
                        .sessions
                        .update(sale_id, |session| {
                            session.revert_expired();
                            Ok(())
                        })
                        .await;
                    if let Err(e) = updated {
                        warn!("Could not revert expired sale {sale_id}: {e:?}");
                    }
                }
            }
        }
    }
}

#[async_trait]
impl IntoSubsystem<anyhow::Error> for SettlementWorker {
    async fn run(self, subsys: SubsystemHandle) -> Result<(), anyhow::Error> {
        let mut clock = tokio::time::interval(Duration::from_secs(1));
        loop {
            select!(
                _ = clock.tick() => {
                    self.settle_due_charges().await;
                }
                _ = subsys.on_shutdown_requested() => {
                    info!("Settlement worker shutdown");
                    return Ok(());
                }
            );
        }
    }
}

//-------------------------- Tests -------------------------------
