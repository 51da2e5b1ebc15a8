mod settlement_worker;
mod web_server;

pub use settlement_worker::SettlementWorker;
pub use web_server::WebServer;
