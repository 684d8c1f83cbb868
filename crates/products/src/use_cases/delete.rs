use async_trait::async_trait;

use crate::commands::DeleteProductCommand;
use crate::repository::{ProductRepository, RepositoryResult};

#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    /// Idempotent: deleting an id that does not exist succeeds.
    async fn execute(&self, command: DeleteProductCommand) -> RepositoryResult<()>;
}

pub struct DeleteProductUseCaseImpl<R> {
    repository: R,
}

impl<R> DeleteProductUseCaseImpl<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteProductUseCase for DeleteProductUseCaseImpl<R>
where
    R: ProductRepository,
{
    async fn execute(&self, command: DeleteProductCommand) -> RepositoryResult<()> {
        self.repository.delete(command.id).await
    }
}
