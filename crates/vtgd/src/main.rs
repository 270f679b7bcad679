//! vtgd - Vehicle Telemetry Gateway Daemon
//!
//! Serves the normalized vehicle REST API and dispatches each request to the
//! adapter of the vehicle's brand.
//!
//! Usage:
//!   vtgd [OPTIONS] [config.toml]
//!
//! If no config file is provided, the built-in defaults are used: port 8000,
//! a static directory with vehicles 1234 and 1235, and the public GM API.

mod config;
mod directory;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use vtg_api::{create_router, AppState};
use vtg_core::{BrandSource, StaticBrandSource, VehicleResolver};
use vtg_gateway::AdapterSelector;
use vtg_gm::GmAdapter;

use crate::config::Config;
use crate::directory::PgBrandSource;

const DEFAULT_LOG_FILTER: &str = "vtgd=info,vtg_api=info,vtg_gateway=info,vtg_gm=debug";

#[derive(Parser)]
#[command(name = "vtgd")]
#[command(author, version, about = "Vehicle telemetry gateway daemon")]
struct Args {
    /// Server config file (TOML)
    #[arg(env = "VTG_CONFIG")]
    config: Option<PathBuf>,

    /// Listen port (overrides the config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// PostgreSQL URL for the vehicle directory (overrides the config file)
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Log output format
    #[arg(long, value_enum, default_value = "text")]
    log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.log_format);

    tracing::info!("Starting vtgd (Vehicle Telemetry Gateway Daemon)");

    let mut config = match &args.config {
        Some(path) => {
            tracing::info!("Loading config from: {}", path.display());
            Config::load(path)?
        }
        None => {
            tracing::info!("No config file provided, using defaults");
            Config::default()
        }
    };
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(url) = args.database_url {
        config.directory.database_url = Some(url);
    }

    let selector = build_selector(&config)?;
    let resolver = build_resolver(&config, &selector).await?;

    let state = AppState::new(resolver, selector);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind((config.server.host.as_str(), config.server.port))
        .await
        .with_context(|| {
            format!(
                "failed to bind {}:{}",
                config.server.host, config.server.port
            )
        })?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Register every brand adapter
fn build_selector(config: &Config) -> anyhow::Result<AdapterSelector> {
    let mut selector = AdapterSelector::new();

    let gm = GmAdapter::from_config(&config.adapters.gm)
        .context("failed to create GM adapter")?;
    tracing::info!(base_url = %config.adapters.gm.base_url, "GM adapter configured");
    selector.register_adapter(Arc::new(gm));

    let brands: Vec<String> = selector.brands().iter().map(|b| b.to_string()).collect();
    tracing::info!(brands = ?brands, "Adapters registered");

    Ok(selector)
}

/// Pick the vehicle directory: PostgreSQL when configured, else the static table
async fn build_resolver(
    config: &Config,
    selector: &AdapterSelector,
) -> anyhow::Result<VehicleResolver> {
    if let Some(url) = &config.directory.database_url {
        let source = PgBrandSource::connect(url)
            .await
            .context("failed to connect to vehicle directory database")?;
        match source.count().await {
            Ok(count) => tracing::info!(vehicles = count, "Using PostgreSQL vehicle directory"),
            Err(e) => tracing::warn!(error = %e, "Could not count vehicle directory entries"),
        }
        return Ok(VehicleResolver::new(Arc::new(source) as Arc<dyn BrandSource>));
    }

    let source = config.directory.static_source();
    warn_unserved(&source, selector);
    tracing::info!(vehicles = source.len(), "Using static vehicle directory");
    Ok(VehicleResolver::from_static(source))
}

/// Static entries whose brand has no adapter would only ever answer 404
fn warn_unserved(source: &StaticBrandSource, selector: &AdapterSelector) {
    for (vehicle_id, brand) in source.entries() {
        if !selector.supports(brand) {
            tracing::warn!(
                vehicle_id = %vehicle_id,
                brand = %brand,
                "Directory entry points to a brand with no registered adapter"
            );
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
