// --- Curriculum Advisor - API principal ---

use curriculum_advisor::logging::init_tracing;
use curriculum_advisor::storage::init_db;
use curriculum_advisor::{AdvisorConfig, run_server};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = AdvisorConfig::from_env().map_err(std::io::Error::other)?;
    init_tracing(&config.log_level);

    init_db(&config.db_path).map_err(std::io::Error::other)?;
    run_server(config).await
}
