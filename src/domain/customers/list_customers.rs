//! List Customers slice.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::infra::ClientError;

use super::{Customer, CustomerDirectory};

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct CustomerFilter {
    pub search: Option<String>,
}

pub async fn list_customers_endpoint(
    State(directory): State<CustomerDirectory>,
    Query(filter): Query<CustomerFilter>,
) -> Result<Json<Vec<Customer>>, ClientError> {
    let customers = match filter.search.as_deref() {
        Some(term) => directory.search(term),
        None => directory.all().to_vec(),
    };
    Ok(Json(customers))
}
