//! Server entry point: configuration, database pool, router, shutdown.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use sqlx::postgres::PgPoolOptions;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use padron_server::{
    infra::{app_state::AppState, config::Config},
    routes,
};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "padron-server")]
#[command(about = "HTTP API over the padron client registry")]
struct Cli {
    /// Listening port (overrides config)
    #[arg(short, long, env = "SERVER_PORT")]
    port: Option<u16>,

    /// Listening host (overrides config)
    #[arg(long, env = "SERVER_HOST")]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::from_env().context("failed to load configuration")?;
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(host) = cli.host {
        config.server.host = host;
    }

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect_with(config.database.connect_options())
        .await
        .context("failed to connect to PostgreSQL")?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(pool, Arc::new(config));
    let app = routes::app_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("listening on http://{addr}");

    // Interrupt exits right away; no request draining.
    tokio::select! {
        result = axum::serve(listener, app) => result.context("server error")?,
        _ = tokio::signal::ctrl_c() => info!("interrupt received, shutting down"),
    }

    Ok(())
}
