//! Database adapters: connection pool and schema setup.

mod schema;

pub use schema::{ensure_schema, SchemaError, PRODUCT_TABLE};

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::instrument;

use crate::config::{ConfigError, DbConfig};

const MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to connect to database: {0}")]
    Connect(#[from] sqlx::Error),
}

/// Open a connection pool and verify the store is reachable.
#[instrument(skip(config), fields(host = %config.host, dbname = %config.dbname), err)]
pub async fn connect(config: &DbConfig) -> Result<PgPool, ConnectError> {
    let options = config.connect_options()?;
    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(options)
        .await?;
    tracing::info!("connected to database");
    Ok(pool)
}
