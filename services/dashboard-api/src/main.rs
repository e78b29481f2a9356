//! Phenology Dashboard API Server
//!
//! Serves the controls and figures of the phenology library dashboard.

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use dashboard_api::build_router;
use dashboard_api::config::DashboardConfig;
use dashboard_api::state::AppState;

/// Phenology Dashboard API Server
#[derive(Parser, Debug)]
#[command(name = "dashboard-api")]
#[command(about = "Phenology library dashboard backend")]
struct Args {
    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0:8050", env = "PHENO_LISTEN_ADDR")]
    listen: String,

    /// Dataset file
    #[arg(long, default_value = "data/lcDF.csv", env = "PHENO_DATA_PATH")]
    data_path: PathBuf,

    /// Dashboard configuration file
    #[arg(long, default_value = "config/dashboard.yaml", env = "PHENO_CONFIG")]
    config: PathBuf,

    /// Layout variant (defaults to the config's default_variant)
    #[arg(long, env = "PHENO_LAYOUT")]
    layout: Option<String>,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Number of worker threads
    #[arg(long, env = "PHENO_WORKER_THREADS")]
    worker_threads: Option<usize>,
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Build runtime with configured threads
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(threads) = args.worker_threads {
        runtime_builder.worker_threads(threads);
    }

    let runtime = runtime_builder
        .build()
        .context("Failed to create Tokio runtime")?;

    runtime.block_on(run_server(args))
}

async fn run_server(args: Args) -> Result<()> {
    // Initialize tracing
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .json()
        .init();

    info!("Starting phenology dashboard API server");

    let prometheus_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install Prometheus recorder")?;

    // config -> dataset -> calendar and color scale -> credential
    let config = DashboardConfig::load(&args.config)?;
    let state = AppState::load(config, &args.data_path, args.layout.as_deref())?
        .with_prometheus(prometheus_handle);

    let app = build_router(Arc::new(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = args
        .listen
        .parse()
        .with_context(|| format!("Invalid listen address: {}", args.listen))?;

    info!("Dashboard API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server failed")?;

    Ok(())
}
