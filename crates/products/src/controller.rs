//! Application-facing entrypoint: DTOs in, DTOs out.
//!
//! The controller converts wire shapes into commands, runs the matching use
//! case, and (for reads) hands the entities to the presenter. It does not
//! validate fields and passes use-case errors through unchanged.

use std::sync::Arc;

use async_trait::async_trait;

use catalog_core::ProductId;

use crate::commands::{AddProductCommand, DeleteProductCommand, GetProductCommand, UpdateProductCommand};
use crate::dto::{AddProductRequest, ProductResponse, UpdateProductRequest};
use crate::presenter::{ProductPresenter, ProductPresenterImpl};
use crate::repository::{ProductRepository, RepositoryResult};
use crate::use_cases::{
    AddProductUseCase, AddProductUseCaseImpl, DeleteProductUseCase, DeleteProductUseCaseImpl,
    GetProductUseCase, GetProductUseCaseImpl, UpdateProductUseCase, UpdateProductUseCaseImpl,
};

#[async_trait]
pub trait ProductController: Send + Sync {
    async fn get(&self, category: i32) -> RepositoryResult<Vec<ProductResponse>>;
    async fn add(&self, request: AddProductRequest) -> RepositoryResult<()>;
    async fn update(&self, id: ProductId, request: UpdateProductRequest) -> RepositoryResult<()>;
    async fn delete(&self, id: ProductId) -> RepositoryResult<()>;
}

pub struct ProductControllerImpl {
    presenter: Arc<dyn ProductPresenter>,
    add_product: Arc<dyn AddProductUseCase>,
    get_product: Arc<dyn GetProductUseCase>,
    update_product: Arc<dyn UpdateProductUseCase>,
    delete_product: Arc<dyn DeleteProductUseCase>,
}

impl ProductControllerImpl {
    pub fn new(
        presenter: Arc<dyn ProductPresenter>,
        add_product: Arc<dyn AddProductUseCase>,
        get_product: Arc<dyn GetProductUseCase>,
        update_product: Arc<dyn UpdateProductUseCase>,
        delete_product: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            presenter,
            add_product,
            get_product,
            update_product,
            delete_product,
        }
    }

    /// Wire the default presenter and all four use cases over one repository.
    pub fn from_repository<R>(repository: Arc<R>) -> Self
    where
        R: ProductRepository + ?Sized + 'static,
    {
        Self::new(
            Arc::new(ProductPresenterImpl::new()),
            Arc::new(AddProductUseCaseImpl::new(repository.clone())),
            Arc::new(GetProductUseCaseImpl::new(repository.clone())),
            Arc::new(UpdateProductUseCaseImpl::new(repository.clone())),
            Arc::new(DeleteProductUseCaseImpl::new(repository)),
        )
    }
}

#[async_trait]
impl ProductController for ProductControllerImpl {
    async fn get(&self, category: i32) -> RepositoryResult<Vec<ProductResponse>> {
        let products = self.get_product.execute(GetProductCommand::new(category)).await?;
        Ok(self.presenter.present(products))
    }

    async fn add(&self, request: AddProductRequest) -> RepositoryResult<()> {
        let command = AddProductCommand::new(
            request.name,
            request.category,
            request.price,
            request.description,
            request.image_link,
        );
        let created = self.add_product.execute(command).await?;
        tracing::debug!(product_id = %created.id, "product created");
        Ok(())
    }

    async fn update(&self, id: ProductId, request: UpdateProductRequest) -> RepositoryResult<()> {
        let command = UpdateProductCommand::new(
            id,
            request.name,
            request.category,
            request.price,
            request.description,
            request.image_link,
        );
        self.update_product.execute(command).await
    }

    async fn delete(&self, id: ProductId) -> RepositoryResult<()> {
        self.delete_product.execute(DeleteProductCommand::new(id)).await
    }
}
