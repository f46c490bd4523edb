use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use clubwifi_api::{MembershipClient, RouterClient};
use clubwifi_config::{Config, ConfigError};
use clubwifi_server::{AppState, build_router};

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] clubwifi_api::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(err) = run().await {
        error!("startup failed: {err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}

async fn run() -> Result<(), StartupError> {
    // Config file path from CLUBWIFI_CONFIG, else ./clubwifi.toml.
    let config_path = std::env::var_os("CLUBWIFI_CONFIG").map(PathBuf::from);
    let config = Config::load(config_path.as_deref())?;

    let router_url = config.router.base_url()?;
    let router_transport = config.router.transport();
    let membership_url = config.membership.base_url()?;
    let membership_transport = config.membership.transport();

    let router = RouterClient::new(
        router_url,
        config.router.username,
        config.router.password,
        &router_transport,
    )?;

    let membership = MembershipClient::new(membership_url, config.membership.token, &membership_transport)?;

    let state = AppState {
        router: Arc::new(router),
        membership: Arc::new(membership),
    };
    let app = build_router(state);

    let addr = format!("{}:{}", config.server.bind, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    // Ctrl-C failing to register is not worth crashing over; the server
    // just loses graceful shutdown.
    let _ = tokio::signal::ctrl_c().await;
    info!("shutting down");
}
