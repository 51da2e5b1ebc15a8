//! Get Product slice.

use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::{domain::ids::ProductId, infra::ClientError};

use super::{Catalog, CatalogItem};

pub async fn get_product_endpoint(
    State(catalog): State<Catalog>,
    Path(product_uuid): Path<Uuid>,
) -> Result<Json<CatalogItem>, ClientError> {
    let product_id: ProductId = product_uuid.try_into()?;
    catalog
        .get(product_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ClientError::NotFound(format!("Product {product_id} does not exist.")))
}
