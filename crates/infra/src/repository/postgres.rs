//! Postgres-backed product repository.
//!
//! Each trait method is a single statement against the `product` table; no
//! transactions span calls.
//!
//! ## Error Mapping
//!
//! | Condition | RepositoryError |
//! |-----------|-----------------|
//! | `UPDATE` affected zero rows | `NotFound(id)` |
//! | Database error (constraint, syntax, ...) | `Store` with SQLSTATE code |
//! | Pool closed / timed out | `Store` |
//! | Anything else (IO, TLS, decode) | `Store` |

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::{instrument, Span};

use catalog_core::ProductId;
use catalog_products::{Product, ProductRepository, RepositoryError, RepositoryResult};

/// Product repository over a shared SQLx pool.
///
/// `Send + Sync`; the pool handles connection checkout per call.
#[derive(Debug, Clone)]
pub struct PostgresProductRepository {
    pool: Arc<PgPool>,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool: Arc::new(pool) }
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    #[instrument(skip(self), fields(row_count), err)]
    async fn get(&self, category: i32) -> RepositoryResult<Vec<Product>> {
        let rows = sqlx::query(
            r#"
            SELECT
                id,
                created_at,
                name,
                category,
                price,
                description,
                image_link
            FROM product
            WHERE category = $1
            ORDER BY id ASC
            "#,
        )
        .bind(category)
        .fetch_all(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("get", e))?;

        let products = rows.iter().map(product_from_row).collect::<RepositoryResult<Vec<_>>>()?;
        Span::current().record("row_count", products.len());
        Ok(products)
    }

    #[instrument(skip(self, product), fields(product_id), err)]
    async fn add(&self, product: &mut Product) -> RepositoryResult<()> {
        let row = sqlx::query(
            r#"
            INSERT INTO product (
                name,
                category,
                price,
                description,
                image_link
            )
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, created_at
            "#,
        )
        .bind(&product.name)
        .bind(product.category)
        .bind(product.price)
        .bind(&product.description)
        .bind(&product.image_link)
        .fetch_one(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("add", e))?;

        let id: i64 = row.try_get("id").map_err(|e| map_sqlx_error("add", e))?;
        let created_at: DateTime<Utc> = row.try_get("created_at").map_err(|e| map_sqlx_error("add", e))?;

        product.id = ProductId::new(id);
        product.created_at = Some(created_at);
        Span::current().record("product_id", id);
        Ok(())
    }

    #[instrument(skip(self, product), fields(product_id = %product.id), err)]
    async fn update(&self, product: &Product) -> RepositoryResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE product SET
                name = $2,
                category = $3,
                price = $4,
                description = $5,
                image_link = $6
            WHERE id = $1
            "#,
        )
        .bind(product.id.value())
        .bind(&product.name)
        .bind(product.category)
        .bind(product.price)
        .bind(&product.description)
        .bind(&product.image_link)
        .execute(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("update", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(product.id));
        }
        Ok(())
    }

    #[instrument(skip(self), fields(product_id = %id), err)]
    async fn delete(&self, id: ProductId) -> RepositoryResult<()> {
        sqlx::query("DELETE FROM product WHERE id = $1")
            .bind(id.value())
            .execute(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete", e))?;
        Ok(())
    }
}

fn product_from_row(row: &PgRow) -> RepositoryResult<Product> {
    let decode = |e: sqlx::Error| map_sqlx_error("decode row", e);

    Ok(Product {
        id: ProductId::new(row.try_get::<i64, _>("id").map_err(decode)?),
        created_at: Some(row.try_get::<DateTime<Utc>, _>("created_at").map_err(decode)?),
        name: row.try_get("name").map_err(decode)?,
        category: row.try_get("category").map_err(decode)?,
        price: row.try_get("price").map_err(decode)?,
        description: row.try_get("description").map_err(decode)?,
        image_link: row.try_get("image_link").map_err(decode)?,
    })
}

fn map_sqlx_error(operation: &str, err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::Database(db_err) => {
            let code = db_err.code().map(|c| c.into_owned()).unwrap_or_default();
            RepositoryError::store(format!("{operation}: database error [{code}]: {}", db_err.message()))
        }
        sqlx::Error::PoolClosed | sqlx::Error::PoolTimedOut => {
            RepositoryError::store(format!("{operation}: connection pool unavailable"))
        }
        other => RepositoryError::store(format!("{operation}: {other}")),
    }
}
