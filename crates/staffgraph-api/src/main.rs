//! HTTP server entry point for the staffgraph API.

use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use staffgraph_core::config::AppConfig;
use staffgraph_graph::GraphClient;

#[derive(Parser)]
#[command(name = "staffgraph-api")]
#[command(about = "REST API over the employee/department graph")]
struct Cli {
    /// Config file prefix (default: staffgraph).
    #[arg(short, long, default_value = "staffgraph")]
    config: String,

    /// Override the listen address (e.g., 127.0.0.1:8080).
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).json().init();

    let cli = Cli::parse();

    let app_config = AppConfig::load(&cli.config)?;
    app_config.validate()?;

    let bind = cli.bind.unwrap_or_else(|| app_config.server.bind.clone());
    let bind_addr: SocketAddr = bind
        .parse()
        .with_context(|| format!("invalid bind address '{bind}'"))?;

    tracing::info!(
        uri = %app_config.neo4j.uri,
        user = %app_config.neo4j.user,
        max_connections = app_config.neo4j.max_connections,
        "Loaded configuration"
    );

    let graph = GraphClient::connect(&app_config.neo4j).await?;
    let app = staffgraph_api::app(graph);

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind listener on {bind_addr}"))?;
    tracing::info!(%bind_addr, "staffgraph API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server failed")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
