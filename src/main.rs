mod api;
mod app_state;
mod core;
mod domain;
mod errors;
mod routes;

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::core::client::connector::ClusterConnection;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let (writer, _guard) = tracing_appender::non_blocking(std::io::stdout());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(writer)
        .init();

    // One connection per process; failing both credential paths is fatal.
    let connection = ClusterConnection::connect().await?;
    let apiserver_override = std::env::var("KUBEPORTAL_API_SERVER_EXTERNAL").ok();
    let state = app_state::build_app_state(Arc::new(connection), apiserver_override);

    let addr =
        std::env::var("KUBEPORTAL_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, routes::app_router().with_state(state)).await?;
    Ok(())
}
