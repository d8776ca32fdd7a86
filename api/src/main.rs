use anyhow::Context;
use std::net::SocketAddr;
use util::{config, logging::init_logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration and initialize logging
    let _log_guard = init_logging(
        "logs",
        &config::log_file(),
        &config::log_level(),
        config::log_to_stdout(),
    )
    .context("Failed to initialize logging")?;

    let addr: SocketAddr = format!("{}:{}", config::host(), config::port())
        .parse()
        .context("Invalid HOST/PORT address")?;

    tracing::info!(
        env = %config::env(),
        "Starting {} on http://{}",
        config::project_name(),
        addr
    );

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    axum::serve(listener, api::app())
        .await
        .context("Server crashed")?;

    Ok(())
}
