use async_trait::async_trait;

use crate::commands::UpdateProductCommand;
use crate::repository::{ProductRepository, RepositoryResult};

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    /// Full replace: every caller-owned field takes the command's value.
    async fn execute(&self, command: UpdateProductCommand) -> RepositoryResult<()>;
}

pub struct UpdateProductUseCaseImpl<R> {
    repository: R,
}

impl<R> UpdateProductUseCaseImpl<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateProductUseCase for UpdateProductUseCaseImpl<R>
where
    R: ProductRepository,
{
    async fn execute(&self, command: UpdateProductCommand) -> RepositoryResult<()> {
        let product = command.into_product();
        self.repository.update(&product).await
    }
}
