use anyhow::Context;

use catalog_api::app::{build_app, AppServices};
use catalog_api::shutdown::shutdown_signal;
use catalog_infra::{DbConfig, ServerConfig};

#[tokio::main]
async fn main() {
    // A missing .env file is fine; the real environment still applies.
    dotenvy::dotenv().ok();
    catalog_observability::init();

    if let Err(error) = run().await {
        tracing::error!(error = format!("{error:#}"), "product service failed to start");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let db = DbConfig::from_env().context("invalid database configuration")?;
    let server = ServerConfig::from_env().context("invalid server configuration")?;

    tracing::info!(host = %db.host, dbname = %db.dbname, "connecting to database");
    let services = AppServices::postgres(&db).await?;
    let app = build_app(services);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", server.port))
        .await
        .with_context(|| format!("failed to bind 0.0.0.0:{}", server.port))?;
    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}
