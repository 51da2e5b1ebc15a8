//! List Products slice.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::infra::ClientError;

use super::{Catalog, CatalogItem};

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ProductFilter {
    pub search: Option<String>,
    pub category: Option<String>,
}

pub async fn list_products_endpoint(
    State(catalog): State<Catalog>,
    Query(filter): Query<ProductFilter>,
) -> Result<Json<Vec<CatalogItem>>, ClientError> {
    let items = catalog.search(filter.search.as_deref(), filter.category.as_deref());
    Ok(Json(items))
}

//-------------------------- Tests -------------------------------
