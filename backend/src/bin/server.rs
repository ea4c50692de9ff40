//! Sales dashboard HTTP server.
//!
//! Loads `dashboard.toml` and the environment, builds the configured order
//! source, loads the session table once and serves the dashboard.
//!
//! # Usage
//!
//! ```bash
//! # Serve a local JSON fixture (default source)
//! LOCAL_FIXTURE_PATH=backend/fixtures/orders.json \
//!   cargo run --bin sales-dashboard-server
//!
//! # Serve AdventureWorks from SQL Server
//! SOURCE_TYPE=mssql \
//! MSSQL_CONNECTION_STRING="server=tcp:localhost,1433;database=AdventureWorks;user=sa;password=...;TrustServerCertificate=true" \
//!   cargo run --bin sales-dashboard-server --features mssql-repo
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `SOURCE_TYPE`: `local` (default) or `mssql`
//! - `LOCAL_FIXTURE_PATH`: JSON order lines for the local source
//! - `MSSQL_CONNECTION_STRING`: ADO.NET connection string for SQL Server
//! - `RUST_LOG`: Log filter directives, e.g. `sales_dashboard=debug,tower_http=info` (default: info)

use std::net::SocketAddr;

use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use sales_dashboard::config::DashboardConfig;
use sales_dashboard::db::SourceFactory;
use sales_dashboard::http::{create_router, AppState};
use sales_dashboard::session::Session;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting sales dashboard server");

    let config = DashboardConfig::load()?;

    // A broken source still serves the page; report requests answer 503.
    let session = match SourceFactory::create(&config) {
        Ok(source) => Session::open(source.as_ref()).await,
        Err(e) => Session::failed(config.source.source_type.to_string(), &e),
    };
    if !session.is_ready() {
        warn!("Serving without data from {}", session.source());
    }

    let state = AppState::new(session, config.display.clone());
    let app = create_router(state);

    let addr: SocketAddr = config.server.bind_address().parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
