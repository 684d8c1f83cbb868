//! Store abstraction for product records.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use catalog_core::ProductId;

use crate::product::Product;

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository operation error.
///
/// Every variant is a store-side failure from the caller's point of view; the
/// kind is kept so logs and error bodies can tell them apart.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// An update matched no row.
    #[error("product {0} not found")]
    NotFound(ProductId),

    /// Connectivity, constraint, or any other failure reported by the store.
    #[error("store error: {0}")]
    Store(String),
}

impl RepositoryError {
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }

    /// Stable machine-readable code for error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            RepositoryError::NotFound(_) => "not_found",
            RepositoryError::Store(_) => "store_error",
        }
    }
}

/// Domain-shaped access to the product table.
///
/// Each method maps to exactly one store statement.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products whose `category` equals the given code.
    async fn get(&self, category: i32) -> RepositoryResult<Vec<Product>>;

    /// Insert a product, writing the store-assigned `id` and `created_at`
    /// back into `product`.
    async fn add(&self, product: &mut Product) -> RepositoryResult<()>;

    /// Overwrite every caller-owned field of the row identified by `product.id`.
    ///
    /// Fails with `RepositoryError::NotFound` when no row has that id.
    async fn update(&self, product: &Product) -> RepositoryResult<()>;

    /// Remove the row with `id`. Removing a missing row is not an error.
    async fn delete(&self, id: ProductId) -> RepositoryResult<()>;
}

#[async_trait]
impl<R> ProductRepository for Arc<R>
where
    R: ProductRepository + ?Sized,
{
    async fn get(&self, category: i32) -> RepositoryResult<Vec<Product>> {
        (**self).get(category).await
    }

    async fn add(&self, product: &mut Product) -> RepositoryResult<()> {
        (**self).add(product).await
    }

    async fn update(&self, product: &Product) -> RepositoryResult<()> {
        (**self).update(product).await
    }

    async fn delete(&self, id: ProductId) -> RepositoryResult<()> {
        (**self).delete(id).await
    }
}
