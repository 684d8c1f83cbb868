use async_trait::async_trait;

use crate::commands::GetProductCommand;
use crate::product::Product;
use crate::repository::{ProductRepository, RepositoryResult};

#[async_trait]
pub trait GetProductUseCase: Send + Sync {
    async fn execute(&self, command: GetProductCommand) -> RepositoryResult<Vec<Product>>;
}

pub struct GetProductUseCaseImpl<R> {
    repository: R,
}

impl<R> GetProductUseCaseImpl<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetProductUseCase for GetProductUseCaseImpl<R>
where
    R: ProductRepository,
{
    async fn execute(&self, command: GetProductCommand) -> RepositoryResult<Vec<Product>> {
        self.repository.get(command.category).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::repository::RepositoryError;
    use crate::testing::{stored, Call, FakeProductRepository};

    #[tokio::test]
    async fn get_returns_only_matching_category() {
        let repo = Arc::new(FakeProductRepository::with_rows(vec![
            stored(1, "Hamburguer", 1, 34.99),
            stored(2, "Cheeseburguer", 1, 39.99),
            stored(3, "Fries", 2, 12.0),
        ]));
        let use_case = GetProductUseCaseImpl::new(repo.clone());

        let products = use_case.execute(GetProductCommand::new(1)).await.unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "Hamburguer");
        assert_eq!(products[1].name, "Cheeseburguer");
        assert_eq!(repo.calls(), vec![Call::Get(1)]);
    }

    #[tokio::test]
    async fn get_with_no_matches_is_empty_not_error() {
        let repo = Arc::new(FakeProductRepository::with_rows(vec![stored(1, "Hamburguer", 1, 34.99)]));
        let use_case = GetProductUseCaseImpl::new(repo);

        let products = use_case.execute(GetProductCommand::new(4)).await.unwrap();
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn get_propagates_store_failure() {
        let err = RepositoryError::store("database connection error");
        let use_case = GetProductUseCaseImpl::new(Arc::new(FakeProductRepository::failing(err.clone())));

        assert_eq!(use_case.execute(GetProductCommand::new(1)).await.unwrap_err(), err);
    }
}
