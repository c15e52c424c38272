// --- Recomendador de minors - Archivo principal ---

use minorpick::config::{load_dotenv, AppConfig};
use minorpick::run_server;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    load_dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            log::error!("invalid configuration: {}", e);
            return Err(e.into());
        }
    };

    log::info!("=== Recomendador de minors (API) ===");
    run_server(config).await
}
