//! Clear Cart slice. Empties the lines and resets the discount.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use crate::domain::checkout::SessionStore;
use crate::domain::ids::SaleId;
use crate::infra::ClientError;

use super::CartReadModel;

pub async fn clear_cart_endpoint(
    State(sessions): State<SessionStore>,
    Path(sale_uuid): Path<Uuid>,
) -> Result<Json<CartReadModel>, ClientError> {
    let sale_id: SaleId = sale_uuid.try_into()?;

    let cart = sessions
        .update(sale_id, |session| {
            session.guard_not_completed()?;
            session.cart.clear();
            Ok(CartReadModel::from(&session.cart))
        })
        .await?;

    Ok(Json(cart))
}

//-------------------------- Tests -------------------------------

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::domain::catalog::Catalog;

    use super::*;

    #[tokio::test]
    async fn clearing_resets_lines_and_totals() {
        let catalog = Catalog::seeded();
        let sessions = SessionStore::new();
        let sale_id = sessions.open().await;
        let product = catalog.all()[0].clone();

        sessions
            .update(sale_id, |session| {
                session.cart.add_item(&product);
                Ok(())
            })
            .await
            .expect("Session should exist.");

        let Json(cart) = clear_cart_endpoint(State(sessions), Path(sale_id.into()))
            .await
            .expect("Clearing should succeed.");

        assert!(cart.lines.is_empty());
        assert_eq!(cart.total, Decimal::ZERO);
        assert!(cart.discount.is_none());
    }
}
