use std::net::SocketAddr;

use async_trait::async_trait;
use axum::{
    Json,
    extract::State,
    routing::{get, post},
};
use futures::FutureExt;
use tokio::select;
use tokio_graceful_shutdown::{IntoSubsystem, SubsystemHandle};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::{AppState, infra::ClientError};

pub struct WebServer {
    state: AppState,
}

impl WebServer {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

#[async_trait]
impl IntoSubsystem<anyhow::Error> for WebServer {
    async fn run(self, subsys: SubsystemHandle) -> Result<(), anyhow::Error> {
        let address = self.state.settings.application.address();
        let socket_addr: SocketAddr = address.parse()
            .inspect_err(|e| error!("Could not parse server address {address}.\nCheck application host and port in configuration settings.\nFailed with {e}"))?;

        let router = axum::Router::new()
            .route("/catalog", get(crate::domain::catalog::list_products_endpoint))
            .route(
                "/catalog/categories",
                get(crate::domain::catalog::categories_endpoint),
            )
            .route(
                "/catalog/{product_id}",
                get(crate::domain::catalog::get_product_endpoint),
            )
            .route(
                "/customers",
                get(crate::domain::customers::list_customers_endpoint),
            )
            .route("/sales", post(crate::domain::checkout::open_sale_endpoint))
            .route(
                "/sales/{sale_id}",
                get(crate::domain::checkout::sale_status_endpoint),
            )
            .route(
                "/sales/{sale_id}/items",
                post(crate::domain::cart::add_item_endpoint),
            )
            .route(
                "/sales/{sale_id}/removeitem",
                post(crate::domain::cart::remove_item_endpoint),
            )
            .route(
                "/sales/{sale_id}/quantity",
                post(crate::domain::cart::set_quantity_endpoint),
            )
            .route(
                "/sales/{sale_id}/discount",
                post(crate::domain::cart::apply_discount_endpoint),
            )
            .route(
                "/sales/{sale_id}/clearcart",
                post(crate::domain::cart::clear_cart_endpoint),
            )
            .route(
                "/sales/{sale_id}/next",
                post(crate::domain::checkout::next_step_endpoint),
            )
            .route(
                "/sales/{sale_id}/prev",
                post(crate::domain::checkout::prev_step_endpoint),
            )
            .route(
                "/sales/{sale_id}/reset",
                post(crate::domain::checkout::reset_sale_endpoint),
            )
            .route(
                "/sales/{sale_id}/customer",
                post(crate::domain::checkout::select_customer_endpoint),
            )
            .route(
                "/sales/{sale_id}/payment",
                post(crate::domain::checkout::select_payment_endpoint),
            )
            .route(
                "/sales/{sale_id}/confirm",
                post(crate::domain::checkout::confirm_sale_endpoint),
            )
            .route(
                "/sales/{sale_id}/settlement",
                get(crate::domain::checkout::settlement_status_endpoint),
            )
            .route("/orders", get(crate::domain::orders::list_orders_endpoint))
            .route(
                "/orders/{order_id}",
                get(crate::domain::orders::get_order_endpoint),
            )
            .route(
                "/storefront/whatsapp/{product_id}",
                get(crate::domain::storefront::whatsapp_link_endpoint),
            )
            .route("/healthcheck", get(health_check_endpoint))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state);

        let listener = tokio::net::TcpListener::bind(socket_addr)
            .await
            .inspect_err(|e| {
                error!("Could not bind socket address {socket_addr}. Failed with {e}")
            })?;

        info!("Web server starting on http://{socket_addr}");
        select!(
            result = axum::serve(listener, router.into_make_service()).into_future().map(|result| result.map_err(anyhow::Error::new)) => {
                error!("Web server completed with {result:?}");
            }
            _ = subsys.on_shutdown_requested() => {
                info!("Web server shutdown");
            }
        );
        Ok(())
    }
}

pub async fn health_check_endpoint(
    State(_app_state): State<AppState>,
) -> Result<Json<String>, ClientError> {
    Ok(Json("Ok".to_owned()))
}
