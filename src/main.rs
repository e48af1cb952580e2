use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use latency_statz::config::Args;
use latency_statz::{server, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let state = Arc::new(AppState::new());
    let app = server::create_router(state);

    let listener = tokio::net::TcpListener::bind(&args.addr)
        .await
        .map_err(|e| {
            tracing::error!(addr = %args.addr, error = %e, "failed to bind");
            e
        })?;

    tracing::info!(addr = %listener.local_addr()?, "listening");
    tracing::info!("sample    → http://{}/", args.addr);
    tracing::info!("dashboard → http://{}/statz", args.addr);

    axum::serve(listener, app).await?;
    Ok(())
}
