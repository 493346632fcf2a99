mod agent;
mod config;
mod config_manager;
mod error;
mod handlers;
mod render;
mod routes;
mod session;
mod state;
mod translate;

use anyhow::Result;
use std::net::SocketAddr;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; the real environment still applies
    let dotenv_path = config_manager::utils::load_env_file(None);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("translator_web=debug,tower_http=debug")),
        )
        .init();

    if let Some(path) = dotenv_path {
        info!("Loaded environment from: {}", path.display());
    }

    let config = load_config();

    // The API key is resolved here, once, and never re-read
    let app_state = AppState::new(config.clone())?;
    session::spawn_session_sweeper(app_state.clone())?;

    let app = routes::build_app(app_state);

    let host: std::net::IpAddr = config.system_config.host.parse()?;
    let addr = SocketAddr::from((host, config.system_config.port));
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn load_config() -> Config {
    let config_paths = Config::candidate_paths();

    for path in &config_paths {
        match Config::load(path) {
            Ok(cfg) => {
                info!("Loaded configuration from: {}", path);
                return cfg;
            }
            Err(e) => {
                debug!("Failed to load config from {}: {}", path, e);
            }
        }
    }

    warn!("No usable config file in {:?}, using defaults", config_paths);
    Config::default()
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
