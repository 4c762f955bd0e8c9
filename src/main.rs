use std::env;

use payroll_core::api::{AppState, create_router};
use payroll_core::config::ConfigLoader;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_CONFIG: &str = "config/policy.yaml";

fn init_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("payroll_core=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();

    let config_path =
        env::var("PAYROLL_CORE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG.to_string());
    let addr = env::var("PAYROLL_CORE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

    let config = ConfigLoader::load(&config_path)?;
    tracing::info!(
        config = %config_path,
        cutoff_day = config.period().cutoff_day,
        max_retries = config.retry().max_retries,
        "Loaded policy"
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Listening");
    axum::serve(listener, create_router(AppState::new(config))).await?;

    Ok(())
}
