//! Composition root: builds the layer stack once at startup.

use std::sync::Arc;

use anyhow::Context;

use catalog_infra::{connect, ensure_schema, DbConfig, InMemoryProductRepository, PostgresProductRepository};
use catalog_products::{ProductController, ProductControllerImpl, ProductRepository};

/// Shared handles injected into every handler.
#[derive(Clone)]
pub struct AppServices {
    controller: Arc<dyn ProductController>,
}

impl AppServices {
    pub fn new(controller: Arc<dyn ProductController>) -> Self {
        Self { controller }
    }

    /// Presenter + use cases + controller over the given repository.
    pub fn with_repository<R>(repository: Arc<R>) -> Self
    where
        R: ProductRepository + ?Sized + 'static,
    {
        Self::new(Arc::new(ProductControllerImpl::from_repository(repository)))
    }

    /// Dev/test wiring: no external store.
    pub fn in_memory() -> Self {
        Self::with_repository(Arc::new(InMemoryProductRepository::new()))
    }

    /// Production wiring: connect, migrate the product table, build the stack.
    ///
    /// Any failure here is fatal for the process.
    pub async fn postgres(config: &DbConfig) -> anyhow::Result<Self> {
        let pool = connect(config).await.context("failed to connect to database")?;
        ensure_schema(&pool).await.context("failed to set up database schema")?;
        Ok(Self::with_repository(Arc::new(PostgresProductRepository::new(pool))))
    }

    pub fn controller(&self) -> &dyn ProductController {
        self.controller.as_ref()
    }
}
