//! In-memory store of open sale sessions, keyed by SaleId.
//! One source of truth, handed by reference to every consuming slice.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::ids::SaleId;
use crate::infra::ClientError;

use super::CheckoutSession;

#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<SaleId, CheckoutSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn open(&self) -> SaleId {
        let sale_id = SaleId::new();
        self.sessions
            .write()
            .await
            .insert(sale_id, CheckoutSession::new());
        sale_id
    }

    pub async fn read<T>(
        &self,
        sale_id: SaleId,
        f: impl FnOnce(&CheckoutSession) -> T,
    ) -> Result<T, ClientError> {
        let sessions = self.sessions.read().await;
        let session = sessions
            .get(&sale_id)
            .ok_or_else(|| ClientError::NotFound(format!("Sale {sale_id} does not exist.")))?;
        Ok(f(session))
    }

    pub async fn update<T>(
        &self,
        sale_id: SaleId,
        f: impl FnOnce(&mut CheckoutSession) -> Result<T, ClientError>,
    ) -> Result<T, ClientError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(&sale_id)
            .ok_or_else(|| ClientError::NotFound(format!("Sale {sale_id} does not exist.")))?;
        f(session)
    }
}
