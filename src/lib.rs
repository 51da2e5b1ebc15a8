pub mod domain;
pub mod infra;
pub mod subsystems;

use std::time::Duration;

use axum::extract::FromRef;
use domain::catalog::Catalog;
use domain::checkout::{SessionStore, SettlementLedger};
use domain::customers::CustomerDirectory;
use domain::orders::OrderLog;
use infra::Settings;
use subsystems::{SettlementWorker, WebServer};
use tokio_graceful_shutdown::{IntoSubsystem, SubsystemBuilder, Toplevel};
use tracing_appender::non_blocking::WorkerGuard;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub settings: Settings,
    pub catalog: Catalog,
    pub customers: CustomerDirectory,
    pub sessions: SessionStore,
    pub orders: OrderLog,
    pub settlements: SettlementLedger,
}

pub fn build_subsystems(state: AppState) -> Toplevel {
    let settlement_worker = SettlementWorker::new(state.clone());
    let webserver = WebServer::new(state);

    // Setup and execute subsystem tree
    Toplevel::new(async |s| {
        s.start(SubsystemBuilder::new(
            "SettlementWorker",
            settlement_worker.into_subsystem(),
        ));
        s.start(SubsystemBuilder::new(
            "Webserver",
            webserver.into_subsystem(),
        ));
    })
}

pub async fn start_server(state: AppState) -> anyhow::Result<()> {
    build_subsystems(state)
        .catch_signals()
        .handle_shutdown_requests(Duration::from_millis(2000))
        .await
        .map_err(Into::into)
}

pub fn configure_tracing(settings: &Settings) -> WorkerGuard {
    let file_appender = tracing_appender::rolling::daily(
        settings.application.logs_directory.clone(),
        "lojix_server.log",
    );
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(non_blocking)
        .init();
    _guard
}

pub fn construct_app_state(settings: Settings) -> AppState {
    AppState {
        settings,
        catalog: Catalog::seeded(),
        customers: CustomerDirectory::seeded(),
        sessions: SessionStore::new(),
        orders: OrderLog::new(),
        settlements: SettlementLedger::new(),
    }
}
