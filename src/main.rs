// --- Planificador de SKS - Archivo principal ---

use sks_planner::config::AppConfig;
use sks_planner::logging::init_tracing;
use sks_planner::run_server;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = AppConfig::from_env().map_err(std::io::Error::other)?;
    init_tracing();
    tracing::info!("=== Planificador de SKS (API) ===");
    run_server(config).await
}
