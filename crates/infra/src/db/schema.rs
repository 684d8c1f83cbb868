//! Auto-migration for the product table.
//!
//! Creates the table when absent and adds any column a previous deployment
//! did not have. Columns are never dropped or retyped.

use sqlx::PgPool;
use thiserror::Error;
use tracing::instrument;

pub const PRODUCT_TABLE: &str = "product";

/// `(column, definition)` in table order. `id` is only set by `CREATE TABLE`.
const COLUMNS: &[(&str, &str)] = &[
    ("created_at", "TIMESTAMPTZ NOT NULL DEFAULT now()"),
    ("name", "VARCHAR(255) NOT NULL DEFAULT ''"),
    ("category", "INTEGER NOT NULL DEFAULT 0"),
    ("price", "DOUBLE PRECISION NOT NULL DEFAULT 0"),
    ("description", "VARCHAR(255) NOT NULL DEFAULT ''"),
    ("image_link", "VARCHAR(255) NOT NULL DEFAULT ''"),
];

#[derive(Debug, Error)]
#[error("failed to migrate database: {statement}: {source}")]
pub struct SchemaError {
    statement: String,
    #[source]
    source: sqlx::Error,
}

pub(crate) fn create_table_statement() -> String {
    let columns = COLUMNS
        .iter()
        .map(|(name, def)| format!("{name} {def}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("CREATE TABLE IF NOT EXISTS {PRODUCT_TABLE} (id BIGSERIAL PRIMARY KEY, {columns})")
}

pub(crate) fn add_column_statements() -> Vec<String> {
    COLUMNS
        .iter()
        .map(|(name, def)| format!("ALTER TABLE {PRODUCT_TABLE} ADD COLUMN IF NOT EXISTS {name} {def}"))
        .collect()
}

/// Bring the product table up to the current shape. Safe to run at every start.
#[instrument(skip(pool), err)]
pub async fn ensure_schema(pool: &PgPool) -> Result<(), SchemaError> {
    let statements = std::iter::once(create_table_statement()).chain(add_column_statements());
    for statement in statements {
        let result = sqlx::query(&statement).execute(pool).await;
        if let Err(source) = result {
            return Err(SchemaError { statement, source });
        }
    }
    tracing::info!(table = PRODUCT_TABLE, "schema ready");
    Ok(())
}
