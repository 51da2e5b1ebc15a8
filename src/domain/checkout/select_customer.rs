//! Select Customer slice. Customers are picked from the directory, never
//! created here.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use crate::domain::customers::{Customer, CustomerDirectory};
use crate::domain::ids::{CustomerId, SaleId};
use crate::infra::ClientError;

use super::SessionStore;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct SelectCustomerPayload {
    pub customer_id: Uuid,
}

pub async fn select_customer_endpoint(
    State(directory): State<CustomerDirectory>,
    State(sessions): State<SessionStore>,
    Path(sale_uuid): Path<Uuid>,
    Json(payload): Json<SelectCustomerPayload>,
) -> Result<Json<Customer>, ClientError> {
    let sale_id: SaleId = sale_uuid.try_into()?;
    let customer_id: CustomerId = payload.customer_id.try_into()?;

    let customer = directory
        .get(customer_id)
        .cloned()
        .ok_or_else(|| ClientError::NotFound(format!("Customer {customer_id} does not exist.")))?;

    let selected = customer.clone();
    sessions
        .update(sale_id, |session| Ok(session.select_customer(selected)?))
        .await?;

    Ok(Json(customer))
}

//-------------------------- Tests -------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn a_directory_customer_can_be_selected() {
        let directory = CustomerDirectory::seeded();
        let sessions = SessionStore::new();
        let sale_id = sessions.open().await;
        let customer_id = directory.all()[0].id;

        let Json(customer) = select_customer_endpoint(
            State(directory),
            State(sessions.clone()),
            Path(sale_id.into()),
            Json(SelectCustomerPayload {
                customer_id: customer_id.into(),
            }),
        )
        .await
        .expect("Selecting a seeded customer should succeed.");

        assert_eq!(customer.id, customer_id);
        let selected = sessions
            .read(sale_id, |session| session.customer().cloned())
            .await
            .expect("Session should exist.");
        assert_eq!(selected.map(|c| c.id), Some(customer_id));
    }

    #[tokio::test]
    async fn an_unknown_customer_is_not_found() {
        let sessions = SessionStore::new();
        let sale_id = sessions.open().await;

        let result = select_customer_endpoint(
            State(CustomerDirectory::seeded()),
            State(sessions),
            Path(sale_id.into()),
            Json(SelectCustomerPayload {
                customer_id: CustomerId::new().into(),
            }),
        )
        .await;

        assert!(matches!(result, Err(ClientError::NotFound(_))));
    }
}
