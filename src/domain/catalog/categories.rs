//! Categories slice: per-category item counts for the storefront chips.

use axum::{Json, extract::State};

use crate::infra::ClientError;

use super::{Catalog, CategoryCount};

pub async fn categories_endpoint(
    State(catalog): State<Catalog>,
) -> Result<Json<Vec<CategoryCount>>, ClientError> {
    Ok(Json(catalog.categories()))
}
