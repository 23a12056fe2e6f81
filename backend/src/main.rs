//! Backend entry-point: wires the REST endpoints, in-memory stores, and
//! OpenAPI docs.

use std::net::SocketAddr;

use actix_web::web;
#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetricsBuilder;
use clap::Parser;
use color_eyre::eyre::WrapErr as _;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;

mod server;

use server::ServerConfig;

/// Command-line and environment configuration.
#[derive(Debug, Parser)]
#[command(name = "backend", about = "Concert seat-reservation service")]
struct Cli {
    /// Socket address to bind the HTTP listener to.
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8080")]
    bind: SocketAddr,
    /// Actix worker count; defaults to the runtime's choice.
    #[arg(long, env = "WORKERS")]
    workers: Option<usize>,
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = Cli::parse();

    let config = ServerConfig::new(cli.bind).with_workers(cli.workers);
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(Some(make_metrics()?));

    let health_state = web::Data::new(HealthState::new());
    let server = server::create_server(health_state, config)
        .wrap_err("failed to start the HTTP server")?;
    server.await.wrap_err("HTTP server terminated abnormally")
}

#[cfg(feature = "metrics")]
fn make_metrics() -> color_eyre::Result<actix_web_prom::PrometheusMetrics> {
    PrometheusMetricsBuilder::new("reservations")
        .endpoint("/metrics")
        .build()
        .map_err(|e| color_eyre::eyre::eyre!("configure Prometheus metrics: {e}"))
}
